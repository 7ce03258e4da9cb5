//! One style query burst over a document.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use koala_dom::{DomTree, NodeId};

use crate::cascade::{CascadeStore, RuleSource, apply_rules, author_layer};
use crate::computed::{ComputedStyle, StyleState};
use crate::config::StyleConfig;
use crate::declaration::parse_declarations;
use crate::error::StyleError;
use crate::style::default_local_styles;

/// Shared state for resolving computed styles of one document.
///
/// Computed styles are created on first request and reused for the life
/// of the context, so the recursive width, height and offset queries that
/// visit parents and siblings hit the same memoized values. Mutating the
/// document requires a new context; nothing is invalidated in place.
pub struct StyleContext<'a> {
    tree: &'a DomTree,
    rules: &'a dyn RuleSource,
    config: StyleConfig,
    styles: RefCell<HashMap<NodeId, Rc<StyleState>>>,
}

impl<'a> StyleContext<'a> {
    /// A context over `tree`, with `rules` supplying matched rules.
    #[must_use]
    pub fn new(tree: &'a DomTree, rules: &'a dyn RuleSource, config: StyleConfig) -> Self {
        Self {
            tree,
            rules,
            config,
            styles: RefCell::new(HashMap::new()),
        }
    }

    /// The document being queried.
    #[must_use]
    pub const fn tree(&self) -> &'a DomTree {
        self.tree
    }

    /// Browser profile, metrics and viewport.
    #[must_use]
    pub const fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// The computed style of `node`, creating it on first use.
    ///
    /// # Errors
    /// Returns [`StyleError::NodeNotFound`] if `node` is not in the tree and
    /// [`StyleError::NotAnElement`] if it is not an element.
    pub fn computed_style(&self, node: NodeId) -> Result<ComputedStyle<'_>, StyleError> {
        if let Some(state) = self.styles.borrow().get(&node) {
            return Ok(ComputedStyle::new(self, Rc::clone(state)));
        }
        let state = Rc::new(self.build_state(node)?);
        let _ = self.styles.borrow_mut().insert(node, Rc::clone(&state));
        Ok(ComputedStyle::new(self, state))
    }

    /// Number of computed styles created so far.
    #[must_use]
    pub fn cached_styles(&self) -> usize {
        self.styles.borrow().len()
    }

    fn build_state(&self, node: NodeId) -> Result<StyleState, StyleError> {
        if self.tree.get(node).is_none() {
            return Err(StyleError::NodeNotFound(node));
        }
        let element = self
            .tree
            .as_element(node)
            .ok_or(StyleError::NotAnElement(node))?;
        let kind = element.kind();

        let mut local = CascadeStore::new();
        for (name, value) in default_local_styles(&kind, &self.config.metrics) {
            local.set_default(name, &value);
        }
        let matched = self.rules.matched_rules(self.tree, node);
        apply_rules(&mut local, &matched, self.config.quirks().no_z_index);

        let inline = element.attr("style").map(parse_declarations).unwrap_or_default();
        let author = author_layer(&inline);

        Ok(StyleState::new(
            node,
            kind,
            self.tree.is_attached(node),
            author,
            local,
        ))
    }
}
