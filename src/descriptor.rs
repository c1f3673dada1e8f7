/*============================================================
  Synavera Project: OpenShift-JVM Core
  Module: openshift_jvm_core::descriptor
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Shared structures describing the build metadata document
    (name, version, commit id, dependency versions) and the
    single-writer cell that holds it for the lifetime of the
    process.

  Security / Safety Notes:
    Pure data containers; no I/O performed in this module.

  Dependencies:
    serde for document (de)serialization.

  Operational Scope:
    Written once by the version loader, read by the About view
    and the plugin's startup bindings.

  Revision History:
    2025-07-02 COD  Introduced descriptor types and cell.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Clear data contracts between modules
    - Single-writer ownership over shared state
    - Deterministic ordering for reproducible rendering
============================================================*/

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Plugin identifier, also the descriptor name used when the
/// document omits one and the name carried by the fallback record.
pub const PLUGIN_NAME: &str = "openshift-jvm";

/// Build metadata document served as `version.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionDescriptor {
    #[serde(default = "default_descriptor_name")]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(rename = "commitId", default, skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub packages: BTreeMap<String, PackageInfo>,
}

/// Version record for one bundled dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    #[serde(default)]
    pub version: Option<String>,
}

fn default_descriptor_name() -> String {
    PLUGIN_NAME.to_string()
}

impl VersionDescriptor {
    /// Empty placeholder installed before the loader has run.
    pub fn placeholder() -> Self {
        Self {
            name: String::new(),
            version: String::new(),
            commit_id: None,
            packages: BTreeMap::new(),
        }
    }

    /// Fixed record installed when the fetched document cannot be parsed.
    pub fn fallback() -> Self {
        Self {
            name: PLUGIN_NAME.to_string(),
            version: String::new(),
            commit_id: None,
            packages: BTreeMap::new(),
        }
    }
}

impl Default for VersionDescriptor {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Owned holder for the process-wide descriptor.
///
/// Exactly one writer (the loader) replaces the value at most once per
/// process; readers take snapshots. The lock keeps the fully-formed
/// invariant intact even under a misbehaving host.
pub struct DescriptorCell {
    slot: RwLock<VersionDescriptor>,
}

impl DescriptorCell {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(VersionDescriptor::placeholder()),
        }
    }

    /// Replace the held descriptor wholesale.
    pub fn replace(&self, descriptor: VersionDescriptor) {
        match self.slot.write() {
            Ok(mut guard) => *guard = descriptor,
            Err(poisoned) => *poisoned.into_inner() = descriptor,
        }
    }

    /// Copy of the current descriptor.
    pub fn snapshot(&self) -> VersionDescriptor {
        match self.slot.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Default for DescriptorCell {
    fn default() -> Self {
        Self::new()
    }
}
