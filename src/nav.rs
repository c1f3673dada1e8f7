/*============================================================
  Synavera Project: OpenShift-JVM Core
  Module: openshift_jvm_core::nav
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Navigation-item model and the suppression routine that
    hides menu entries the OpenShift console replaces with its
    own chrome.

  Security / Safety Notes:
    Pure in-memory mutation of the given collection; no I/O.

  Dependencies:
    None beyond std.

  Operational Scope:
    Subscribed to the host's navigation-change stream by the
    plugin; applied on every delivery.

  Revision History:
    2025-07-02 COD  Authored suppression routine.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Idempotent mutation with no failure modes
    - Side effects limited to the given collection
============================================================*/

use std::collections::HashSet;
use std::fmt;

/// Menu entries the console hides in favour of its own navigation.
pub const HIDDEN_NAV_IDS: [&str; 2] = ["jvm", "wiki"];

type ValidityFn = Box<dyn Fn() -> bool + Send + Sync>;

/// Host-framework menu entry: an identifier plus a replaceable
/// visibility predicate.
pub struct NavItem {
    id: String,
    validity: ValidityFn,
}

impl NavItem {
    /// Item that is visible until a predicate says otherwise.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_validity(id, || true)
    }

    pub fn with_validity(
        id: impl Into<String>,
        validity: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            validity: Box::new(validity),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_valid(&self) -> bool {
        (self.validity)()
    }

    /// Replace the predicate with one that always reports hidden.
    pub fn force_hidden(&mut self) {
        self.validity = Box::new(|| false);
    }
}

impl fmt::Debug for NavItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavItem")
            .field("id", &self.id)
            .field("valid", &self.is_valid())
            .finish()
    }
}

/// Hide every item whose id is in `ids`; leave the rest untouched.
/// Applying this any number of times yields the same visible set.
pub fn suppress_hidden_items(items: &mut [NavItem], ids: &HashSet<&str>) {
    for item in items.iter_mut() {
        if ids.contains(item.id()) {
            item.force_hidden();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<NavItem> {
        vec![
            NavItem::new("jvm"),
            NavItem::new("wiki"),
            NavItem::new("other"),
        ]
    }

    fn visible_ids(items: &[NavItem]) -> Vec<&str> {
        items
            .iter()
            .filter(|item| item.is_valid())
            .map(NavItem::id)
            .collect()
    }

    #[test]
    fn only_targeted_items_are_hidden() {
        let mut items = sample_items();
        let ids: HashSet<&str> = HIDDEN_NAV_IDS.iter().copied().collect();
        suppress_hidden_items(&mut items, &ids);
        assert_eq!(visible_ids(&items), vec!["other"]);
    }

    #[test]
    fn suppression_is_idempotent() {
        let mut items = sample_items();
        let ids: HashSet<&str> = HIDDEN_NAV_IDS.iter().copied().collect();
        for _ in 0..3 {
            suppress_hidden_items(&mut items, &ids);
        }
        assert_eq!(visible_ids(&items), vec!["other"]);
    }

    #[test]
    fn empty_target_set_touches_nothing() {
        let mut items = sample_items();
        suppress_hidden_items(&mut items, &HashSet::new());
        assert_eq!(visible_ids(&items), vec!["jvm", "wiki", "other"]);
    }

    #[test]
    fn custom_predicates_on_untargeted_items_survive() {
        let mut items = vec![
            NavItem::new("jvm"),
            NavItem::with_validity("flagged", || false),
        ];
        let ids: HashSet<&str> = HIDDEN_NAV_IDS.iter().copied().collect();
        suppress_hidden_items(&mut items, &ids);
        assert!(!items[0].is_valid());
        // Untargeted item keeps its own predicate rather than a forced one.
        assert!(!items[1].is_valid());
        assert_eq!(items[1].id(), "flagged");
    }
}
