//! [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/)
//!
//! Selector matching happens elsewhere. This module receives the rules that
//! matched an element, already in document order, and merges their
//! declarations into the element's cascade layers.

mod element;
mod specificity;
mod store;

use std::collections::HashMap;

use koala_dom::{DomTree, NodeId};
use serde::{Deserialize, Serialize};

pub use element::{Priority, StyleElement};
pub use specificity::Specificity;
pub use store::{CascadeStore, resolve_raw};

use crate::declaration::Declaration;

/// A declaration block whose selector matched an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedRule {
    /// Specificity of the selector that matched.
    pub specificity: Specificity,
    /// Declarations of the rule, in source order.
    pub declarations: Vec<Declaration>,
}

impl MatchedRule {
    /// A matched rule with the given declarations.
    #[must_use]
    pub const fn new(specificity: Specificity, declarations: Vec<Declaration>) -> Self {
        Self {
            specificity,
            declarations,
        }
    }
}

/// The selector-matching collaborator.
pub trait RuleSource {
    /// Rules whose selectors match `node`, in document order.
    fn matched_rules(&self, tree: &DomTree, node: NodeId) -> Vec<MatchedRule>;
}

/// Pre-matched rules keyed by element.
#[derive(Debug, Clone, Default)]
pub struct MatchedRules {
    rules: HashMap<NodeId, Vec<MatchedRule>>,
}

impl MatchedRules {
    /// No rules for any element.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `rule` matched `node`, after any rule already recorded.
    pub fn push(&mut self, node: NodeId, rule: MatchedRule) {
        self.rules.entry(node).or_default().push(rule);
    }
}

impl RuleSource for MatchedRules {
    fn matched_rules(&self, _tree: &DomTree, node: NodeId) -> Vec<MatchedRule> {
        self.rules.get(&node).cloned().unwrap_or_default()
    }
}

/// A rule source for documents without stylesheets.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRules;

impl RuleSource for NoRules {
    fn matched_rules(&self, _tree: &DomTree, _node: NodeId) -> Vec<MatchedRule> {
        Vec::new()
    }
}

/// Merge matched rules into a local layer, dropping `z-index` when
/// `skip_z_index` is set.
pub fn apply_rules(store: &mut CascadeStore, rules: &[MatchedRule], skip_z_index: bool) {
    for rule in rules {
        for declaration in &rule.declarations {
            if skip_z_index && declaration.name.trim().eq_ignore_ascii_case("z-index") {
                continue;
            }
            store.apply_declaration(declaration, rule.specificity);
        }
    }
}

/// Build the author layer from the declarations of a `style` attribute.
#[must_use]
pub fn author_layer(declarations: &[Declaration]) -> CascadeStore {
    let mut store = CascadeStore::new();
    for declaration in declarations {
        store.apply_declaration(declaration, Specificity::INLINE);
    }
    store
}
