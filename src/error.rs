/*============================================================
  Synavera Project: OpenShift-JVM Core
  Module: openshift_jvm_core::error
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Centralise console-core error types to provide consistent
    diagnostics and exit semantics.

  Security / Safety Notes:
    Error contexts carry high-level paths and URLs only; no
    credentials or tokens are ever part of a message.

  Dependencies:
    thiserror for ergonomic error definitions.

  Operational Scope:
    Covers configuration, logging, and bootstrap plumbing.
    Version-descriptor fetch failures are recovered inside the
    loader and never surface through this taxonomy.

  Revision History:
    2025-07-02 COD  Established shared error definitions.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Explicit error taxonomy with actionable context
    - No silent failure paths
    - Stable exit codes for operational tooling
============================================================*/

use std::io;
use std::process::ExitCode;

use thiserror::Error;

/// Result alias for console-core operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Enumerates high-level error domains surfaced by the console core.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Configuration: {0}")]
    Config(String),
    #[error("Network: {0}")]
    Network(String),
    #[error("Filesystem: {0}")]
    Filesystem(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ConsoleError {
    /// Map error category to a deterministic exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ConsoleError::Config(_) => ExitCode::from(20),
            ConsoleError::Network(_) => ExitCode::from(30),
            ConsoleError::Filesystem(_) => ExitCode::from(40),
            ConsoleError::Io(_) => ExitCode::from(41),
        }
    }
}
