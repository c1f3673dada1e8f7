/*============================================================
  Synavera Project: OpenShift-JVM Core
  Module: openshift_jvm_core::logger
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Provide structured, append-only logging utilities for the
    console core. Debug entries carry the loader's transport
    diagnostics and the connection-context traces.

  Security / Safety Notes:
    Log lines contain URLs and descriptor metadata only; no
    secrets are ever written.

  Dependencies:
    std::fs::File, std::sync::Mutex, sha2 for integrity hashing.

  Operational Scope:
    Used by runtime components to emit RFC-3339 UTC stamped
    log entries and produce session hash digests.

  Revision History:
    2025-07-02 COD  Established logging module for the core.
    2025-07-15 COD  Debug lines gated behind the verbose flag.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Append-only logging with UTC timestamps
    - Deterministic formatting for auditability
    - Graceful error propagation on I/O failures
============================================================*/

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use sha2::{Digest, Sha256};

use crate::error::{ConsoleError, Result};

/// Structured log level for console-core events.
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Warnings and errors always reach stderr; the rest only when verbose.
    fn always_visible(self) -> bool {
        matches!(self, LogLevel::Warn | LogLevel::Error)
    }
}

/// Shared logger that emits append-only entries in Synavera format.
pub struct Logger {
    sink: Option<Mutex<BufWriter<File>>>,
    path: Option<PathBuf>,
    verbose: bool,
}

impl Logger {
    /// Build a logger that writes to stderr and optionally to a file.
    pub fn new(path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let sink = match path.as_deref() {
            Some(file_path) => Some(Mutex::new(BufWriter::new(open_log_file(file_path)?))),
            None => None,
        };
        Ok(Self {
            sink,
            path,
            verbose,
        })
    }

    /// Emit a log entry with the given level, code, and message.
    pub fn log<S: AsRef<str>>(&self, level: LogLevel, code: &str, message: S) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let payload = format!(
            "{timestamp} [{}] [{}] {}",
            level.as_str(),
            code,
            message.as_ref()
        );

        if self.verbose || level.always_visible() {
            eprintln!("{payload}");
        }

        if let Some(sink) = &self.sink {
            if let Ok(mut guard) = sink.lock() {
                if writeln!(guard, "{payload}").and_then(|_| guard.flush()).is_err() {
                    eprintln!("{timestamp} [ERROR] [LOGGER] Failed to persist log entry");
                }
            }
        }
    }

    /// Convenience wrapper for `INFO` level events.
    pub fn info<S: AsRef<str>>(&self, code: &str, message: S) {
        self.log(LogLevel::Info, code, message);
    }

    /// Convenience wrapper for `WARN` level events.
    pub fn warn<S: AsRef<str>>(&self, code: &str, message: S) {
        self.log(LogLevel::Warn, code, message);
    }

    /// Convenience wrapper for `ERROR` level events.
    #[allow(dead_code)]
    pub fn error<S: AsRef<str>>(&self, code: &str, message: S) {
        self.log(LogLevel::Error, code, message);
    }

    /// Convenience wrapper for `DEBUG` level events.
    pub fn debug<S: AsRef<str>>(&self, code: &str, message: S) {
        self.log(LogLevel::Debug, code, message);
    }

    /// Return the path backing this logger, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Compute and persist SHA-256 digest of the log file.
    pub fn finalize(&self) -> Result<()> {
        let Some(path) = self.path() else {
            return Ok(());
        };
        let data = std::fs::read(path).map_err(|err| {
            ConsoleError::Filesystem(format!(
                "Failed to read log for hashing {}: {err}",
                path.display()
            ))
        })?;
        let digest = Sha256::digest(&data);
        let mut hash_os = path.as_os_str().to_os_string();
        hash_os.push(".hash");
        let hash_path = PathBuf::from(hash_os);
        let mut file = File::create(&hash_path).map_err(|err| {
            ConsoleError::Filesystem(format!(
                "Failed to create hash file {}: {err}",
                hash_path.display()
            ))
        })?;
        writeln!(
            file,
            "{:x}  {}",
            digest,
            path.file_name().unwrap_or_default().to_string_lossy()
        )
        .map_err(|err| {
            ConsoleError::Filesystem(format!(
                "Failed to write hash file {}: {err}",
                hash_path.display()
            ))
        })?;
        Ok(())
    }
}

fn open_log_file(file_path: &Path) -> Result<File> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| {
            ConsoleError::Filesystem(format!(
                "Failed to create log directory {}: {err}",
                parent.display()
            ))
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)
        .map_err(|err| {
            ConsoleError::Filesystem(format!(
                "Failed to open log file {}: {err}",
                file_path.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_entries_to_backing_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("core.log");
        let logger = Logger::new(Some(path.clone()), false).expect("logger");
        logger.info("INIT", "console core starting");
        logger.debug("VERSION", "descriptor fetch issued");

        let contents = std::fs::read_to_string(&path).expect("log readable");
        assert!(contents.contains("[INFO] [INIT] console core starting"));
        assert!(contents.contains("[DEBUG] [VERSION] descriptor fetch issued"));
    }

    #[test]
    fn finalize_emits_hash_companion() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("session.log");
        let logger = Logger::new(Some(path.clone()), false).expect("logger");
        logger.info("INIT", "hello");
        logger.finalize().expect("finalize");

        let hash_path = dir.path().join("session.log.hash");
        let digest = std::fs::read_to_string(hash_path).expect("hash readable");
        assert!(digest.trim().ends_with("session.log"));
        assert_eq!(digest.split_whitespace().next().map(str::len), Some(64));
    }

    #[test]
    fn pathless_logger_finalizes_without_error() {
        let logger = Logger::new(None, true).expect("logger");
        logger.warn("NAV", "no items delivered");
        assert!(logger.path().is_none());
        logger.finalize().expect("finalize is a no-op");
    }
}
