//! Computed style of one element: cascade lookup, inheritance, defaults
//! and per-property normalization.
//!
//! [CSS Cascading Level 4 § 4 Value Processing](https://www.w3.org/TR/css-cascade-4/#value-stages)
//!
//! Geometry (widths, heights and offsets) lives in [`crate::geometry`] as
//! further methods on [`ComputedStyle`].

use std::fmt;
use std::rc::Rc;

use koala_dom::{DomTree, ElementKind, NodeId};

use crate::cascade::{CascadeStore, StyleElement, resolve_raw};
use crate::config::StyleConfig;
use crate::context::StyleContext;
use crate::geometry::{GeometryCache, PercentBasis};
use crate::style::properties::{self, PropertyKind};
use crate::style::{becomes_block_when_detached, default_display, pixel_string, pixel_value, to_rgb};

/// Everything owned by one element's computed style.
pub(crate) struct StyleState {
    pub(crate) node: NodeId,
    pub(crate) kind: ElementKind,
    pub(crate) attached: bool,
    author: CascadeStore,
    local: CascadeStore,
    pub(crate) cache: GeometryCache,
}

impl StyleState {
    pub(crate) fn new(
        node: NodeId,
        kind: ElementKind,
        attached: bool,
        author: CascadeStore,
        local: CascadeStore,
    ) -> Self {
        Self {
            node,
            kind,
            attached,
            author,
            local,
            cache: GeometryCache::default(),
        }
    }
}

/// [§ 6.7.1 getComputedStyle](https://drafts.csswg.org/cssom/#dom-window-getcomputedstyle)
///
/// A cheap handle to an element's computed style within a
/// [`StyleContext`]. Clones share the same cascade layers and memoized
/// geometry.
#[derive(Clone)]
pub struct ComputedStyle<'c> {
    ctx: &'c StyleContext<'c>,
    pub(crate) state: Rc<StyleState>,
}

impl fmt::Debug for ComputedStyle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputedStyle")
            .field("node", &self.state.node)
            .field("kind", &self.state.kind)
            .field("attached", &self.state.attached)
            .finish_non_exhaustive()
    }
}

impl<'c> ComputedStyle<'c> {
    pub(crate) const fn new(ctx: &'c StyleContext<'c>, state: Rc<StyleState>) -> Self {
        Self { ctx, state }
    }

    /// The element this style belongs to.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.state.node
    }

    /// The element's kind.
    #[must_use]
    pub fn kind(&self) -> &ElementKind {
        &self.state.kind
    }

    /// Whether the element was connected to the document when this style
    /// was created.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.state.attached
    }

    pub(crate) const fn tree(&self) -> &'c DomTree {
        self.ctx.tree()
    }

    pub(crate) const fn config(&self) -> &'c StyleConfig {
        self.ctx.config()
    }

    pub(crate) fn is_body(&self) -> bool {
        self.state.kind == ElementKind::Body
    }

    /// The computed style of the parent element, if there is one.
    #[must_use]
    pub fn parent_style(&self) -> Option<Self> {
        let parent = self.tree().parent_element(self.node())?;
        self.ctx.computed_style(parent).ok()
    }

    /// The computed style of another element in the same query.
    pub(crate) fn style_of(&self, node: NodeId) -> Option<Self> {
        self.ctx.computed_style(node).ok()
    }

    /// Detached, and the browser reports no computed values for detached
    /// elements.
    pub(crate) fn is_suppressed(&self) -> bool {
        !self.state.attached && self.config().quirks().no_style_when_detached
    }

    /// Number of characters of text inside the element.
    pub(crate) fn text_len(&self) -> usize {
        self.tree().text_content(self.node()).chars().count()
    }

    /// Number of characters of whitespace-collapsed text inside the element.
    pub(crate) fn rendered_text_len(&self) -> usize {
        self.tree().rendered_text(self.node()).chars().count()
    }

    /// The winning cascade entry for `name` across the author and local
    /// layers.
    #[must_use]
    pub fn style_element(&self, name: &str) -> Option<&StyleElement> {
        let name = name.trim().to_ascii_lowercase();
        resolve_raw(self.state.author.get(&name), self.state.local.get(&name))
    }

    fn cascaded(&self, name: &str) -> String {
        self.style_element(name)
            .map(|e| e.value().to_string())
            .unwrap_or_default()
    }

    /// [§ 4.2 Cascaded values](https://www.w3.org/TR/css-cascade-4/#cascaded)
    ///
    /// The cascaded value of `name`. When there is none, inherited
    /// properties take the parent element's value; otherwise the default is
    /// used if `use_default` is set. Detached elements resolve to empty
    /// under the no-style-when-detached quirk.
    #[must_use]
    pub fn style_attribute(&self, name: &str, use_default: bool) -> String {
        if self.is_suppressed() {
            return String::new();
        }
        let name = name.trim().to_ascii_lowercase();
        let value = self.cascaded(&name);
        if !value.is_empty() {
            return value;
        }
        let parent = if properties::is_inherited(&name) {
            self.parent_style()
        } else {
            None
        };
        if let Some(parent) = parent {
            return parent.style_attribute(&name, use_default);
        }
        if use_default {
            return self.default_value(&name);
        }
        String::new()
    }

    /// The default computed value of `name` in the emulated browser.
    #[must_use]
    pub fn default_value(&self, name: &str) -> String {
        self.config()
            .profile
            .default_value(name)
            .or_else(|| properties::lookup(name).map(|p| p.default))
            .unwrap_or_default()
            .to_string()
    }

    /// [CSS Display Level 3 § 2](https://www.w3.org/TR/css-display-3/#the-display-properties)
    ///
    /// The element's `display`, falling back to its kind's default.
    #[must_use]
    pub fn display(&self) -> String {
        self.resolve_display(false)
    }

    /// Like [`display`](Self::display), without the block-when-detached
    /// quirk.
    #[must_use]
    pub fn display_ignoring_detached(&self) -> String {
        self.resolve_display(true)
    }

    fn resolve_display(&self, ignore_block_if_detached: bool) -> String {
        let quirks = self.config().quirks();
        let mut force_block = false;
        if !self.state.attached {
            if quirks.no_style_when_detached {
                return String::new();
            }
            force_block = !ignore_block_if_detached && quirks.block_display_when_detached;
        }
        let value = self.cascaded("display");
        if !value.is_empty() {
            return value;
        }
        let default = default_display(&self.state.kind);
        if force_block && becomes_block_when_detached(default) {
            return "block".to_string();
        }
        default.to_string()
    }

    /// The computed value of any property, normalized the way the emulated
    /// browser reports it.
    #[must_use]
    pub fn property_value(&self, name: &str) -> String {
        let name = name.trim().to_ascii_lowercase();
        let kind = properties::lookup(&name).map_or(PropertyKind::Generic, |p| p.kind);
        match kind {
            PropertyKind::Generic => self.style_attribute(&name, true),
            PropertyKind::Length => pixel_string(&self.style_attribute(&name, true)),
            PropertyKind::Color => self.color_value(&name),
            PropertyKind::Display => self.display(),
            PropertyKind::Width => self.width(),
            PropertyKind::Height => self.height(),
            PropertyKind::Top => self.top_value(),
            PropertyKind::Left => self.left_value(),
            PropertyKind::MarginPercent => self.horizontal_margin(&name),
            PropertyKind::FontSize => self.font_size(),
        }
    }

    fn color_value(&self, name: &str) -> String {
        let value = self.style_attribute(name, true);
        if value.is_empty() {
            return value;
        }
        to_rgb(&value)
    }

    /// `color` as `rgb(r, g, b)`.
    #[must_use]
    pub fn color(&self) -> String {
        self.color_value("color")
    }

    /// `font-size` in whole pixels, or empty when unresolved.
    #[must_use]
    pub fn font_size(&self) -> String {
        let value = self.style_attribute("font-size", true);
        if value.is_empty() {
            return value;
        }
        format!("{}px", pixel_value(&value))
    }

    /// `margin-left`.
    #[must_use]
    pub fn margin_left(&self) -> String {
        self.horizontal_margin("margin-left")
    }

    /// `margin-right`.
    #[must_use]
    pub fn margin_right(&self) -> String {
        self.horizontal_margin("margin-right")
    }

    /// `margin-left` or `margin-right`. Percentages are taken of the
    /// ancestors' declared widths, then of the viewport.
    fn horizontal_margin(&self, name: &str) -> String {
        let declared = self.style_attribute(name, false);
        if !declared.ends_with('%') {
            if self.is_suppressed() {
                return String::new();
            }
            let value = if declared.is_empty() { "0px" } else { declared.as_str() };
            return pixel_string(value);
        }
        let me = self.node();
        let basis = PercentBasis::new(0, self.config().viewport.width, |s: &ComputedStyle<'c>| {
            if s.node() == me {
                s.style_attribute(name, true)
            } else {
                s.style_attribute("width", true)
            }
        });
        basis.pixel_string(self)
    }
}
