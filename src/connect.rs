/*============================================================
  Synavera Project: OpenShift-JVM Core
  Module: openshift_jvm_core::connect
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Parse host-supplied connection options from a URL query
    string and expose the connection-context view (container
    name plus optional go-back action).

  Security / Safety Notes:
    The return URL is handed back to the host for navigation;
    it is logged at debug severity only and never followed by
    this core.

  Dependencies:
    urlencoding for percent-decoding.

  Operational Scope:
    Read-only input owned by the host; this module never
    mutates the options after parsing.

  Revision History:
    2025-07-09 COD  Added connection-context view.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Total parsing with no failure modes
    - Explicit defaults for absent display data
============================================================*/

use urlencoding::decode;

use crate::logger::Logger;

/// Shown when the host supplies no container name.
pub const UNTITLED_CONTAINER: &str = "Untitled Container";

/// Connection options supplied by the host via the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectOptions {
    pub name: Option<String>,
    pub return_to: Option<String>,
}

impl ConnectOptions {
    /// Parse `name` and `returnTo` out of a query string. Unknown keys
    /// are ignored; undecodable values are kept verbatim.
    pub fn from_query(query: &str) -> Self {
        let mut options = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode(raw)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            match key {
                "name" => options.name = Some(value),
                "returnTo" => options.return_to = Some(value),
                _ => {}
            }
        }
        options
    }
}

/// Display view over [`ConnectOptions`].
pub struct ConnectContext {
    options: ConnectOptions,
}

impl ConnectContext {
    pub fn new(options: ConnectOptions) -> Self {
        Self { options }
    }

    /// Container display name, defaulting when absent or empty.
    pub fn container_name(&self) -> &str {
        match self.options.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNTITLED_CONTAINER,
        }
    }

    /// Whether a go-back action exists for this connection.
    pub fn can_go_back(&self) -> bool {
        self.options.return_to.is_some()
    }

    /// Resolve the go-back target, tracing the connect options.
    /// Yields `None` when the host supplied no return URL.
    pub fn go_back(&self, logger: &Logger) -> Option<&str> {
        let target = self.options.return_to.as_deref()?;
        logger.debug("CONNECT", format!("Connect options: {:?}", self.options));
        Some(target)
    }
}
