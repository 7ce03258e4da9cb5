//! Per-element cascade store.

use std::collections::BTreeMap;

use super::{Priority, Specificity, StyleElement};
use crate::declaration::Declaration;

/// The winning declaration for each property of one cascade layer.
///
/// Entries are kept in property-name order so iteration is deterministic.
/// Cascade order is not tracked beyond the stored winner: callers apply
/// declarations in document order and the merge rule resolves ties in
/// favour of the later one.
#[derive(Debug, Clone, Default)]
pub struct CascadeStore {
    entries: BTreeMap<String, StyleElement>,
    next_order: u32,
}

impl CascadeStore {
    /// An empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [§ 6 Cascading](https://www.w3.org/TR/css-cascade-4/#cascading)
    ///
    /// Merge `incoming` into the layer. It replaces the stored entry for
    /// the same property only if it [supersedes](StyleElement::supersedes)
    /// it, so re-applying the same declarations leaves the layer unchanged.
    pub fn apply(&mut self, incoming: StyleElement) {
        self.next_order = self
            .next_order
            .max(incoming.source_order().saturating_add(1));
        let replace = self
            .entries
            .get(incoming.name())
            .is_none_or(|stored| incoming.supersedes(stored));
        if replace {
            let _ = self.entries.insert(incoming.name().to_string(), incoming);
        }
    }

    /// Merge a parsed declaration at `specificity`, stamping it with the
    /// next source position.
    pub fn apply_declaration(&mut self, declaration: &Declaration, specificity: Specificity) {
        let element = StyleElement::new(
            &declaration.name,
            &declaration.value,
            Priority::from_important(declaration.important),
            specificity,
            self.next_order,
        );
        self.apply(element);
    }

    /// Install a browser built-in default.
    ///
    /// Never overrides an existing entry, so defaults may be installed
    /// before or after real declarations.
    pub fn set_default(&mut self, name: &str, value: &str) {
        let element = StyleElement::default_value(name, value);
        let _ = self
            .entries
            .entry(element.name().to_string())
            .or_insert(element);
    }

    /// The current winner for `name` (lowercase).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StyleElement> {
        self.entries.get(name)
    }

    /// Drop the entry for `name`, returning it.
    pub fn remove(&mut self, name: &str) -> Option<StyleElement> {
        self.entries.remove(name)
    }

    /// Entries in property-name order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleElement> {
        self.entries.values()
    }

    /// Number of properties with a winner.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no property has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Combine the author (`style` attribute) and local (rules and defaults)
/// winners for one property.
///
/// The author entry wins unless the local entry is important and either
/// the author entry is not, or the local entry's specificity is at least
/// the author's.
#[must_use]
pub fn resolve_raw<'a>(
    author: Option<&'a StyleElement>,
    local: Option<&'a StyleElement>,
) -> Option<&'a StyleElement> {
    match (author, local) {
        (Some(a), Some(l)) => {
            if l.is_important() && (!a.is_important() || l.specificity() >= a.specificity()) {
                Some(l)
            } else {
                Some(a)
            }
        }
        (a, None) => a,
        (None, l) => l,
    }
}
