/*============================================================
  Synavera Project: OpenShift-JVM Core
  Module: openshift_jvm_core::config
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Layered configuration for the console core: built-in
    defaults, optional TOML file, CLI overrides applied by the
    entry point.

  Security / Safety Notes:
    Configuration is read from operator-controlled paths only;
    values are never written back.

  Dependencies:
    serde + toml for file parsing, dirs for platform paths.

  Operational Scope:
    Supplies the loader's endpoint and timeout, the template
    root for the preferences tab, and the log directory.

  Revision History:
    2025-07-02 COD  Authored configuration layer.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Defaults that work with zero configuration
    - Explicit failure on malformed operator input
    - No hidden environment coupling
============================================================*/

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConsoleError, Result};

/// Top-level configuration document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    pub loader: LoaderConfig,
    /// Root under which plugin templates are served.
    pub template_path: String,
    /// Directory for session logs; platform state dir when unset.
    pub log_dir: Option<PathBuf>,
}

/// Settings for the version-descriptor fetch.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Origin the console is served from.
    pub base_url: String,
    /// Relative descriptor resource, fetched from `base_url`.
    pub resource: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            resource: "version.json".to_string(),
            timeout: 10,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            template_path: "plugins/openshift-jvm/html".to_string(),
            log_dir: None,
        }
    }
}

impl ConsoleConfig {
    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// An explicitly supplied path must exist and parse; the implicit
    /// platform path is allowed to be absent.
    pub fn load_from_optional_path(path: Option<&Path>) -> Result<Self> {
        let (file, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !file.exists() {
            if explicit {
                return Err(ConsoleError::Config(format!(
                    "Config file {} not found",
                    file.display()
                )));
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&file).map_err(|err| {
            ConsoleError::Filesystem(format!("Failed to read config {}: {err}", file.display()))
        })?;
        toml::from_str(&raw).map_err(|err| {
            ConsoleError::Config(format!("Failed to parse config {}: {err}", file.display()))
        })
    }

    /// Resolved log directory.
    pub fn log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("openshift-jvm")
            .join("logs")
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("openshift-jvm").join("core.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_cover_the_whole_document() {
        let config = ConsoleConfig::default();
        assert_eq!(config.loader.resource, "version.json");
        assert_eq!(config.loader.timeout, 10);
        assert_eq!(config.template_path, "plugins/openshift-jvm/html");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn file_values_override_defaults_per_field() {
        let mut file = NamedTempFile::new().expect("tempfile");
        writeln!(
            file,
            "template_path = \"plugins/custom/html\"\n\n\
             [loader]\nbase_url = \"https://console.example.test\"\ntimeout = 3"
        )
        .expect("write");

        let config =
            ConsoleConfig::load_from_optional_path(Some(file.path())).expect("load");
        assert_eq!(config.loader.base_url, "https://console.example.test");
        assert_eq!(config.loader.timeout, 3);
        // Unset fields keep their defaults.
        assert_eq!(config.loader.resource, "version.json");
        assert_eq!(config.template_path, "plugins/custom/html");
    }

    #[test]
    fn explicit_missing_path_is_a_config_error() {
        let err = ConsoleConfig::load_from_optional_path(Some(Path::new(
            "/nonexistent/openshift-jvm/core.toml",
        )))
        .expect_err("must fail");
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = NamedTempFile::new().expect("tempfile");
        writeln!(file, "loader = \"not a table\"").expect("write");
        let err = ConsoleConfig::load_from_optional_path(Some(file.path()))
            .expect_err("must fail");
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn log_dir_override_wins() {
        let config = ConsoleConfig {
            log_dir: Some(PathBuf::from("/tmp/ojvm-logs")),
            ..ConsoleConfig::default()
        };
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/ojvm-logs"));
    }
}
