/*============================================================
  Synavera Project: OpenShift-JVM Core
  Module: openshift_jvm_core::about
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Plain-text rendering of the About view: build version,
    commit id, and the bundled-package version table.

  Security / Safety Notes:
    Renders descriptor metadata only; no I/O performed.

  Dependencies:
    None beyond std.

  Operational Scope:
    Invoked by the entry point when the operator requests the
    About view; reads a descriptor snapshot.

  Revision History:
    2025-07-09 COD  Authored About renderer.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Deterministic ordering for reproducible output
    - Explicit placeholder for missing versions
============================================================*/

use std::fmt::Write as _;

use crate::descriptor::VersionDescriptor;

/// Render the About view for a descriptor snapshot.
///
/// Packages print in name order; a missing package version renders
/// as `--`, matching the console's table.
pub fn render_about(descriptor: &VersionDescriptor) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Version: {}", descriptor.version);
    let _ = writeln!(
        out,
        "Commit ID: {}",
        descriptor.commit_id.as_deref().unwrap_or("")
    );

    if descriptor.packages.is_empty() {
        return out;
    }

    let name_width = descriptor
        .packages
        .keys()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max("Name".len());
    let _ = writeln!(out, "\n{:<name_width$}  Version", "Name");
    for (name, info) in &descriptor.packages {
        let _ = writeln!(
            out,
            "{name:<name_width$}  {}",
            info.version.as_deref().unwrap_or("--")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PackageInfo;

    #[test]
    fn renders_version_and_commit() {
        let mut descriptor = VersionDescriptor::fallback();
        descriptor.version = "1.2.3".into();
        descriptor.commit_id = Some("abc123".into());
        let view = render_about(&descriptor);
        assert!(view.contains("Version: 1.2.3"));
        assert!(view.contains("Commit ID: abc123"));
        assert!(!view.contains("Name"));
    }

    #[test]
    fn missing_package_versions_render_as_dashes() {
        let mut descriptor = VersionDescriptor::fallback();
        descriptor
            .packages
            .insert("jolokia".into(), PackageInfo { version: None });
        descriptor.packages.insert(
            "hawtio-core".into(),
            PackageInfo {
                version: Some("2.0.1".into()),
            },
        );

        let view = render_about(&descriptor);
        let lines: Vec<&str> = view.lines().collect();
        // BTreeMap ordering: hawtio-core before jolokia.
        let hawtio = lines.iter().position(|l| l.starts_with("hawtio-core"));
        let jolokia = lines.iter().position(|l| l.starts_with("jolokia"));
        assert!(hawtio < jolokia);
        assert!(view.contains("jolokia"));
        assert!(view.lines().any(|l| l.starts_with("jolokia") && l.ends_with("--")));
    }

    #[test]
    fn fallback_descriptor_renders_empty_fields() {
        let view = render_about(&VersionDescriptor::fallback());
        assert!(view.contains("Version: \n") || view.starts_with("Version: "));
        assert!(view.contains("Commit ID: "));
    }
}
