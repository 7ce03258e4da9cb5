//! Computed-style resolution for the Koala headless browser.
//!
//! # Scope
//!
//! This crate implements:
//! - **Cascade** ([CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/))
//!   - Per-element cascade layers for inline and matched-rule declarations
//!   - `!important`, specificity and source-order precedence
//!   - Property inheritance and per-browser defaults
//!
//! - **Inline styles** ([CSSOM § 6.6 CSSStyleDeclaration](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface))
//!   - Reading and editing the `style` attribute declaration by declaration
//!
//! - **Computed values** ([CSSOM § 6.7.1 getComputedStyle](https://drafts.csswg.org/cssom/#dom-window-getcomputedstyle))
//!   - A property table driving inheritance, defaults and normalization
//!   - Lengths as whole pixels, colors as `rgb()`
//!   - `display` with browser-specific handling of detached elements
//!
//! - **Approximate geometry** ([CSS 2.2 § 10 Visual formatting model details](https://www.w3.org/TR/CSS22/visudet.html))
//!   - Widths, heights and `left`/`top` offsets without a layout tree
//!   - Percentages resolved against ancestors up to the viewport
//!   - Memoized per element for the life of a [`StyleContext`]
//!
//! # Not Yet Implemented
//!
//! - Stylesheet parsing and selector matching (supplied through [`RuleSource`])
//! - Real text measurement and line breaking
//! - Writing modes other than horizontal left-to-right

/// Cascade layers and precedence per [CSS Cascading Level 4](https://www.w3.org/TR/css-cascade-4/).
pub mod cascade;
/// Computed style of one element.
pub mod computed;
/// Browser profiles, quirks, heuristic metrics and viewport.
pub mod config;
/// Per-query style cache.
pub mod context;
/// Declarations and inline `style` attribute editing.
pub mod declaration;
/// Error type.
pub mod error;
/// Approximate geometry per [CSS 2.2 § 10](https://www.w3.org/TR/CSS22/visudet.html).
pub mod geometry;
/// Property table and value normalization per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod style;

pub use cascade::{
    CascadeStore, MatchedRule, MatchedRules, NoRules, Priority, RuleSource, Specificity,
    StyleElement,
};
pub use computed::ComputedStyle;
pub use config::{BrowserKind, BrowserProfile, BrowserQuirks, LayoutMetrics, StyleConfig, Viewport};
pub use context::StyleContext;
pub use declaration::{Declaration, ElementStyle, parse_declarations};
pub use error::StyleError;
pub use geometry::{Axis, EdgeSizes, PercentBasis};
