/*============================================================
  Synavera Project: OpenShift-JVM Core
  Module: openshift_jvm_core::loader
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Fetch the version-descriptor document before the console
    becomes interactive and publish it (or a fallback) into the
    shared descriptor cell.

  Security / Safety Notes:
    Performs a single read-only HTTP GET; no credentials are
    transmitted and no retry traffic is generated.

  Dependencies:
    reqwest for HTTP, serde_json for document parsing, chrono
    for the cache-busting timestamp.

  Operational Scope:
    Runs exactly once per process as a pre-bootstrap task; the
    host's startup must proceed whatever the outcome.

  Revision History:
    2025-07-02 COD  Implemented asynchronous descriptor loader.
    2025-07-15 COD  Preserved parse/transport failure split.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Best-effort loading that never blocks startup
    - Structured parsing with explicit fallback path
    - Configurable timeouts
============================================================*/

use std::time::Duration;

use chrono::Utc;

use crate::config::LoaderConfig;
use crate::descriptor::{DescriptorCell, VersionDescriptor};
use crate::error::{ConsoleError, Result};
use crate::logger::Logger;

/// Outcome of a single load operation. The returned value doubles as
/// the exactly-once completion signal for the bootstrap sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Document fetched and parsed; cell replaced with the parsed value.
    Loaded,
    /// Document fetched but unparseable; cell replaced with the fallback.
    Fallback,
    /// Request failed or returned a non-success status; cell untouched.
    TransportFailed,
}

/// One-shot client for the `version.json` descriptor resource.
///
/// Parse failures install [`VersionDescriptor::fallback`]; transport
/// failures leave the cell at its previous value. The asymmetry is
/// deliberate and matches the shipped console behavior.
#[derive(Clone)]
pub struct VersionLoader {
    client: reqwest::Client,
    base_url: String,
    resource: String,
}

impl VersionLoader {
    /// Construct a loader from configuration.
    pub fn new(config: &LoaderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent("OpenShift-JVM-Core/0.4 (console)")
            .build()
            .map_err(|err| ConsoleError::Network(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            resource: config.resource.clone(),
        })
    }

    /// Descriptor URL with a cache-busting revision parameter so no
    /// intermediate cache can silently serve a stale document.
    fn compose_url(&self, rev: i64) -> String {
        format!("{}/{}?rev={rev}", self.base_url, self.resource)
    }

    /// Fetch the descriptor once and publish the result into `cell`.
    ///
    /// Completes normally under every outcome; callers sequence host
    /// startup on the returned future alone.
    pub async fn load(&self, cell: &DescriptorCell, logger: &Logger) -> LoadOutcome {
        let url = self.compose_url(Utc::now().timestamp_millis());

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                logger.debug("VERSION", format!("Failed to fetch version: {url}: {err}"));
                return LoadOutcome::TransportFailed;
            }
        };

        let status = response.status();
        if !status.is_success() {
            logger.debug(
                "VERSION",
                format!("Failed to fetch version: {url} returned status {status}"),
            );
            return LoadOutcome::TransportFailed;
        }

        // Declared content type is ignored; the body is read as opaque
        // text and parsed as JSON regardless.
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                logger.debug("VERSION", format!("Failed to read version body: {url}: {err}"));
                return LoadOutcome::TransportFailed;
            }
        };

        match serde_json::from_str::<VersionDescriptor>(&body) {
            Ok(parsed) => {
                cell.replace(parsed);
                LoadOutcome::Loaded
            }
            Err(_) => {
                cell.replace(VersionDescriptor::fallback());
                LoadOutcome::Fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use tempfile::tempdir;

    fn loader_for(server: &mockito::ServerGuard) -> VersionLoader {
        VersionLoader::new(&LoaderConfig {
            base_url: server.url(),
            resource: "version.json".into(),
            timeout: 5,
        })
        .expect("loader")
    }

    fn quiet_logger() -> Logger {
        Logger::new(None, false).expect("logger")
    }

    #[tokio::test]
    async fn well_formed_document_replaces_cell_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/version.json")
            .match_query(Matcher::Regex(r"rev=\d+".into()))
            .with_header("content-type", "text/html")
            .with_body(r#"{"name":"openshift-jvm","version":"1.2.3","commitId":"abc123"}"#)
            .create_async()
            .await;

        let cell = DescriptorCell::new();
        let outcome = loader_for(&server).load(&cell, &quiet_logger()).await;

        mock.assert_async().await;
        assert_eq!(outcome, LoadOutcome::Loaded);
        let snapshot = cell.snapshot();
        assert_eq!(snapshot.name, "openshift-jvm");
        assert_eq!(snapshot.version, "1.2.3");
        assert_eq!(snapshot.commit_id.as_deref(), Some("abc123"));
        assert!(snapshot.packages.is_empty());
    }

    #[tokio::test]
    async fn package_table_survives_the_round_trip() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/version.json")
            .match_query(Matcher::Regex(r"rev=\d+".into()))
            .with_body(
                r#"{"name":"openshift-jvm","version":"1.2.3",
                    "packages":{"hawtio-core":{"version":"2.0.1"}}}"#,
            )
            .create_async()
            .await;

        let cell = DescriptorCell::new();
        let outcome = loader_for(&server).load(&cell, &quiet_logger()).await;

        assert_eq!(outcome, LoadOutcome::Loaded);
        let snapshot = cell.snapshot();
        assert_eq!(
            snapshot.packages["hawtio-core"].version.as_deref(),
            Some("2.0.1")
        );
    }

    #[tokio::test]
    async fn malformed_body_installs_the_fixed_fallback() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/version.json")
            .match_query(Matcher::Regex(r"rev=\d+".into()))
            .with_body("not json")
            .create_async()
            .await;

        let cell = DescriptorCell::new();
        let outcome = loader_for(&server).load(&cell, &quiet_logger()).await;

        assert_eq!(outcome, LoadOutcome::Fallback);
        assert_eq!(cell.snapshot(), VersionDescriptor::fallback());
    }

    #[tokio::test]
    async fn wrong_shape_json_takes_the_fallback_path_too() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/version.json")
            .match_query(Matcher::Regex(r"rev=\d+".into()))
            .with_body(r#"["a","list","not","a","descriptor"]"#)
            .create_async()
            .await;

        let cell = DescriptorCell::new();
        let outcome = loader_for(&server).load(&cell, &quiet_logger()).await;

        assert_eq!(outcome, LoadOutcome::Fallback);
        assert_eq!(cell.snapshot(), VersionDescriptor::fallback());
    }

    #[tokio::test]
    async fn server_error_leaves_previous_value_and_records_one_diagnostic() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/version.json")
            .match_query(Matcher::Regex(r"rev=\d+".into()))
            .with_status(500)
            .create_async()
            .await;

        let dir = tempdir().expect("tempdir");
        let log_path = dir.path().join("core.log");
        let logger = Logger::new(Some(log_path.clone()), false).expect("logger");

        let cell = DescriptorCell::new();
        let outcome = loader_for(&server).load(&cell, &logger).await;

        assert_eq!(outcome, LoadOutcome::TransportFailed);
        assert_eq!(cell.snapshot(), VersionDescriptor::placeholder());

        let contents = std::fs::read_to_string(&log_path).expect("log readable");
        let diagnostics: Vec<&str> = contents
            .lines()
            .filter(|line| line.contains("[DEBUG] [VERSION] Failed to fetch version"))
            .collect();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].contains("status 500"));
    }

    #[tokio::test]
    async fn connection_refused_leaves_previous_value_untouched() {
        // Reserved port with no listener once the guard drops.
        let url = {
            let server = mockito::Server::new_async().await;
            server.url()
        };

        let loader = VersionLoader::new(&LoaderConfig {
            base_url: url,
            resource: "version.json".into(),
            timeout: 2,
        })
        .expect("loader");

        let cell = DescriptorCell::new();
        let mut preloaded = VersionDescriptor::fallback();
        preloaded.version = "0.0.1".into();
        cell.replace(preloaded.clone());

        let outcome = loader.load(&cell, &quiet_logger()).await;
        assert_eq!(outcome, LoadOutcome::TransportFailed);
        assert_eq!(cell.snapshot(), preloaded);
    }

    #[test]
    fn composed_url_trims_trailing_slash_and_carries_rev() {
        let loader = VersionLoader::new(&LoaderConfig {
            base_url: "http://example.test/console/".into(),
            resource: "version.json".into(),
            timeout: 5,
        })
        .expect("loader");
        assert_eq!(
            loader.compose_url(1700000000000),
            "http://example.test/console/version.json?rev=1700000000000"
        );
    }
}
