/*============================================================
  Synavera Project: OpenShift-JVM Core
  Module: openshift_jvm_core::plugin
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Host collaborator contracts and the plugin wiring: the
    pre-bootstrap descriptor load, module registration, the
    navigation-change subscription, and the About tab.

  Security / Safety Notes:
    The plugin only registers callbacks with the host; it
    performs no privileged operations of its own.

  Dependencies:
    None beyond std; collaborators are expressed as traits.

  Operational Scope:
    `register` runs before host bootstrap; `run` runs after
    every pre-bootstrap task has completed, so the descriptor
    snapshot it reads is final.

  Revision History:
    2025-07-02 COD  Defined host contracts and plugin wiring.
    2025-07-15 COD  About tab label derives from loaded name.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Traits at the host boundary, concrete core behind them
    - Startup ordering guarantees write-before-read on the cell
============================================================*/

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::descriptor::{DescriptorCell, PLUGIN_NAME};
use crate::loader::VersionLoader;
use crate::logger::Logger;
use crate::nav::{suppress_hidden_items, NavItem, HIDDEN_NAV_IDS};

/// Single-shot unit of asynchronous work the host defers startup for.
pub type BootstrapTask = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Handler invoked with the current ordered nav items on every change.
pub type NavHandler = Box<dyn Fn(&mut [NavItem]) + Send + Sync>;

/// Accepts tasks whose completion gates host startup.
pub trait PreBootstrapQueue {
    fn register_task(&mut self, task: BootstrapTask);
}

/// Module registry the plugin adds itself to by name.
pub trait ModuleRegistry {
    fn add_module(&mut self, name: &str);
}

/// Navigation-change notification stream.
pub trait NavRegistry {
    fn on_change(&mut self, subscriber: &str, handler: NavHandler);
}

/// Preferences-tab sink accepting a label and a template reference.
pub trait PreferencesRegistry {
    fn add_tab(&mut self, label: &str, template: &str);
}

/// The OpenShift JVM console plugin.
pub struct Plugin {
    cell: Arc<DescriptorCell>,
    loader: VersionLoader,
    logger: Arc<Logger>,
    template_path: String,
}

impl Plugin {
    pub fn new(
        cell: Arc<DescriptorCell>,
        loader: VersionLoader,
        logger: Arc<Logger>,
        template_path: impl Into<String>,
    ) -> Self {
        Self {
            cell,
            loader,
            logger,
            template_path: template_path.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    /// Pre-bootstrap registration: queue the descriptor load and add
    /// the module. The queued task completes under every load outcome,
    /// so host startup is never blocked.
    pub fn register<H>(&self, host: &mut H)
    where
        H: PreBootstrapQueue + ModuleRegistry,
    {
        let loader = self.loader.clone();
        let cell = Arc::clone(&self.cell);
        let logger = Arc::clone(&self.logger);
        host.register_task(Box::pin(async move {
            let outcome = loader.load(&cell, &logger).await;
            logger.debug("VERSION", format!("Descriptor load completed: {outcome:?}"));
        }));
        host.add_module(PLUGIN_NAME);
    }

    /// Post-bootstrap wiring: nav suppression, About tab, startup logs.
    pub fn run<H>(&self, host: &mut H)
    where
        H: NavRegistry + PreferencesRegistry,
    {
        host.on_change(
            PLUGIN_NAME,
            Box::new(|items| {
                let hidden: HashSet<&str> = HIDDEN_NAV_IDS.iter().copied().collect();
                suppress_hidden_items(items, &hidden);
            }),
        );

        let descriptor = self.cell.snapshot();
        host.add_tab(
            &format!("About {}", descriptor.name),
            &join_template_path(&self.template_path, "about.html"),
        );
        self.logger
            .info("STARTED", format!("started, version: {}", descriptor.version));
        self.logger.info(
            "COMMIT",
            format!("commit ID: {}", descriptor.commit_id.as_deref().unwrap_or("")),
        );
    }
}

/// Join a template root and a file name with exactly one separator.
pub fn join_template_path(base: &str, file: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        file.trim_start_matches('/')
    )
}
