/*============================================================
  Synavera Project: OpenShift-JVM Core
  Module: openshift_jvm_core::main
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Entry point for the OpenShift JVM console core. Acts as the
    minimal host shell: registers the plugin, runs the
    pre-bootstrap descriptor load, applies navigation
    suppression, and reports the connection context.

  Security / Safety Notes:
    Operates within user privileges. Performs a single HTTP GET
    against the configured console origin; nothing else leaves
    the process.

  Dependencies:
    clap for CLI parsing, tokio for the async runtime.

  Operational Scope:
    Invoked standalone by operators to verify a deployed
    console's descriptor and navigation wiring.

  Revision History:
    2025-07-02 COD  Authored console-core runtime.
    2025-07-15 COD  Connection context reporting added.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Result-first error handling with deterministic exits
    - Structured logging following Synavera cadence
    - Configurable execution via CLI and config file
============================================================*/

mod about;
mod config;
mod connect;
mod descriptor;
mod error;
mod loader;
mod logger;
mod nav;
mod plugin;
mod shell;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::Utc;
use clap::{ArgAction, Parser};

use about::render_about;
use config::ConsoleConfig;
use connect::{ConnectContext, ConnectOptions};
use descriptor::DescriptorCell;
use error::Result;
use loader::VersionLoader;
use logger::Logger;
use nav::NavItem;
use plugin::Plugin;
use shell::ConsoleShell;

/// Command-line arguments for the console core.
#[derive(Debug, Parser)]
#[command(
    name = "OpenShift-JVM-Core",
    version,
    author = "Synavera Systems",
    about = "Version-descriptor loader and plugin core for the OpenShift JVM console"
)]
struct Cli {
    /// Override configuration file path.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Override the console origin the descriptor is fetched from.
    #[arg(long, value_name = "URL")]
    url: Option<String>,
    /// Override the descriptor request timeout in seconds.
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,
    /// Explicit log file path.
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
    /// Connection options as a query string (name, returnTo).
    #[arg(long, value_name = "QUERY")]
    connect: Option<String>,
    /// Print the About view after startup.
    #[arg(long, action = ArgAction::SetTrue)]
    about: bool,
    /// Enable verbose logging to stderr.
    #[arg(long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("[OpenShift-JVM-Core] {err}");
            err.exit_code()
        }
    }
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = ConsoleConfig::load_from_optional_path(cli.config.as_deref())?;
    if let Some(url) = cli.url {
        config.loader.base_url = url;
    }
    if let Some(timeout) = cli.timeout {
        config.loader.timeout = timeout;
    }

    let session_stamp = Utc::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let log_path = cli
        .log
        .clone()
        .or_else(|| Some(config.log_dir().join(format!("console_{session_stamp}.log"))));
    let logger = Arc::new(Logger::new(log_path, cli.verbose)?);
    logger.info("INIT", "OpenShift JVM console core starting.");

    let cell = Arc::new(DescriptorCell::new());
    let loader = VersionLoader::new(&config.loader)?;
    let plugin = Plugin::new(
        Arc::clone(&cell),
        loader,
        Arc::clone(&logger),
        config.template_path.clone(),
    );

    let mut shell = ConsoleShell::new();
    shell.set_nav_items(vec![
        NavItem::new("jvm"),
        NavItem::new("wiki"),
        NavItem::new("connect"),
    ]);

    plugin.register(&mut shell);
    logger.debug(
        "MODULES",
        format!(
            "Plugin {} registered; modules: {}",
            plugin.name(),
            shell.modules().join(", ")
        ),
    );

    shell.bootstrap().await;
    plugin.run(&mut shell);
    for (label, template) in shell.tabs() {
        logger.debug("PREFS", format!("Tab registered: {label} -> {template}"));
    }

    shell.fire_nav_changed();
    let visible = shell.visible_nav_ids();
    if visible.is_empty() {
        logger.warn("NAV", "No visible navigation items after suppression");
    } else {
        logger.info("NAV", format!("Visible navigation: {}", visible.join(", ")));
    }

    if let Some(query) = cli.connect.as_deref() {
        let context = ConnectContext::new(ConnectOptions::from_query(query));
        logger.info("CONNECT", format!("Container: {}", context.container_name()));
        if context.can_go_back() {
            if let Some(target) = context.go_back(&logger) {
                logger.info("CONNECT", format!("Return link targets {target}"));
            }
        } else {
            logger.debug("CONNECT", "No return link supplied");
        }
    }

    if cli.about {
        println!("{}", render_about(&cell.snapshot()));
    }

    logger.info("COMPLETE", "Console core startup sequence finished.");
    logger.finalize()?;
    Ok(ExitCode::SUCCESS)
}
