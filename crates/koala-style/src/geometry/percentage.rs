//! Percentage resolution against ancestor geometry.
//!
//! [CSS Values Level 4 § 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
//!
//! Width, height, horizontal margins and offsets all resolve percentages
//! the same way: read a raw value from the element, and if it is a
//! percentage, take that share of the same kind of value resolved on the
//! parent, up to the viewport. They differ only in which raw value each
//! element contributes, so that is the one thing a [`PercentBasis`] is
//! parameterized by.

use koala_dom::ElementKind;

use crate::computed::ComputedStyle;
use crate::style::length::{percent_of, pixel_value, round_px};

/// A value to resolve, with its fallbacks and the per-element raw value.
pub struct PercentBasis<F> {
    default: i32,
    window_default: i32,
    raw: F,
}

impl<F> PercentBasis<F> {
    /// `default` is used for `auto` and unset values; `window_default` is
    /// what 100% means above the root element.
    #[must_use]
    pub const fn new(default: i32, window_default: i32, raw: F) -> Self {
        Self {
            default,
            window_default,
            raw,
        }
    }

    /// The basis above the root element.
    #[must_use]
    pub const fn window_default(&self) -> i32 {
        self.window_default
    }

    /// Resolve to whole pixels for `style`.
    ///
    /// A percentage (or an unset value on the root element, read as 100%)
    /// is taken of the parent's resolution, or of the window default when
    /// there is no parent element.
    #[must_use]
    pub fn pixel_value<'c>(&self, style: &ComputedStyle<'c>) -> i32
    where
        F: Fn(&ComputedStyle<'c>) -> String,
    {
        let value = (self.raw)(style);
        let is_root = *style.kind() == ElementKind::Html;
        if value.ends_with('%') || (value.is_empty() && is_root) {
            let percent = percent_of(&value).unwrap_or(100.0);
            let basis = style
                .parent_style()
                .map_or(self.window_default, |parent| self.pixel_value(&parent));
            return round_px(percent / 100.0 * f64::from(basis));
        }
        if value == "auto" {
            return self.default;
        }
        if value.is_empty() {
            if *style.kind() == ElementKind::Canvas {
                return self.window_default;
            }
            return self.default;
        }
        pixel_value(&value)
    }

    /// Resolve to a `<n>px` string. Raw values already in pixels are
    /// returned as they are.
    #[must_use]
    pub fn pixel_string<'c>(&self, style: &ComputedStyle<'c>) -> String
    where
        F: Fn(&ComputedStyle<'c>) -> String,
    {
        let value = (self.raw)(style);
        if value.ends_with("px") {
            return value;
        }
        format!("{}px", self.pixel_value(style))
    }
}
