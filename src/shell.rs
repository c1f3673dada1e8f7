/*============================================================
  Synavera Project: OpenShift-JVM Core
  Module: openshift_jvm_core::shell
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Minimal in-process host console: concrete registries and a
    bootstrap sequencer the plugin registers against when the
    core runs standalone.

  Security / Safety Notes:
    Holds in-memory registries only; all outbound traffic is
    issued by the tasks it sequences.

  Dependencies:
    None beyond std.

  Operational Scope:
    Runs registered pre-bootstrap tasks in registration order
    and delivers navigation-change notifications to
    subscribers.

  Revision History:
    2025-07-09 COD  Authored in-process host shell.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Startup deferred until every registered task completes
    - Ordered, replayable notification delivery
============================================================*/

use crate::nav::NavItem;
use crate::plugin::{
    BootstrapTask, ModuleRegistry, NavHandler, NavRegistry, PreBootstrapQueue,
    PreferencesRegistry,
};

/// In-process implementation of the host collaborator contracts.
#[derive(Default)]
pub struct ConsoleShell {
    tasks: Vec<BootstrapTask>,
    modules: Vec<String>,
    nav_items: Vec<NavItem>,
    subscribers: Vec<(String, NavHandler)>,
    tabs: Vec<(String, String)>,
}

impl ConsoleShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the host's current navigation set.
    pub fn set_nav_items(&mut self, items: Vec<NavItem>) {
        self.nav_items = items;
    }

    /// Run every registered pre-bootstrap task to completion, in
    /// registration order. Startup proceeds only once this returns.
    pub async fn bootstrap(&mut self) {
        for task in self.tasks.drain(..) {
            task.await;
        }
    }

    /// Deliver the current nav set to every subscriber.
    pub fn fire_nav_changed(&mut self) {
        for (_, handler) in &self.subscribers {
            handler(&mut self.nav_items);
        }
    }

    pub fn visible_nav_ids(&self) -> Vec<&str> {
        self.nav_items
            .iter()
            .filter(|item| item.is_valid())
            .map(NavItem::id)
            .collect()
    }

    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    pub fn tabs(&self) -> &[(String, String)] {
        &self.tabs
    }
}

impl PreBootstrapQueue for ConsoleShell {
    fn register_task(&mut self, task: BootstrapTask) {
        self.tasks.push(task);
    }
}

impl ModuleRegistry for ConsoleShell {
    fn add_module(&mut self, name: &str) {
        self.modules.push(name.to_string());
    }
}

impl NavRegistry for ConsoleShell {
    fn on_change(&mut self, subscriber: &str, handler: NavHandler) {
        self.subscribers.push((subscriber.to_string(), handler));
    }
}

impl PreferencesRegistry for ConsoleShell {
    fn add_tab(&mut self, label: &str, template: &str) {
        self.tabs.push((label.to_string(), template.to_string()));
    }
}
