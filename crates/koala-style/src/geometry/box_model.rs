//! Margin, border and padding edges.
//!
//! [CSS Box Model Module Level 3](https://www.w3.org/TR/css-box-3/)

use serde::Serialize;

use crate::computed::ComputedStyle;
use crate::style::pixel_value;

/// Edge sizes for padding, border, or margin, in whole pixels.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: i32,
    /// Right edge size.
    pub right: i32,
    /// Bottom edge size.
    pub bottom: i32,
    /// Left edge size.
    pub left: i32,
}

impl EdgeSizes {
    /// Left plus right.
    #[must_use]
    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Top plus bottom.
    #[must_use]
    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Pixel accessors for single box edges, read through
/// [`ComputedStyle::property_value`].
macro_rules! edge_px_accessors {
    ($($method:ident => $property:literal),* $(,)?) => {
        impl ComputedStyle<'_> {
            $(
                #[doc = concat!("`", $property, "` in whole pixels.")]
                #[must_use]
                pub fn $method(&self) -> i32 {
                    self.edge_px($property)
                }
            )*
        }
    };
}

edge_px_accessors! {
    margin_top_px => "margin-top",
    margin_bottom_px => "margin-bottom",
    border_top_px => "border-top-width",
    border_right_px => "border-right-width",
    border_bottom_px => "border-bottom-width",
    border_left_px => "border-left-width",
    padding_top_px => "padding-top",
    padding_right_px => "padding-right",
    padding_bottom_px => "padding-bottom",
    padding_left_px => "padding-left",
}

impl ComputedStyle<'_> {
    fn edge_px(&self, name: &str) -> i32 {
        pixel_value(&self.property_value(name))
    }

    /// `margin-left` in whole pixels, percentages resolved.
    #[must_use]
    pub fn margin_left_px(&self) -> i32 {
        pixel_value(&self.margin_left())
    }

    /// `margin-right` in whole pixels, percentages resolved.
    #[must_use]
    pub fn margin_right_px(&self) -> i32 {
        pixel_value(&self.margin_right())
    }

    /// [§ 3.1 Margins](https://www.w3.org/TR/css-box-3/#margins)
    #[must_use]
    pub fn margin(&self) -> EdgeSizes {
        EdgeSizes {
            top: self.margin_top_px(),
            right: self.margin_right_px(),
            bottom: self.margin_bottom_px(),
            left: self.margin_left_px(),
        }
    }

    /// [Borders § 4.3 border-width](https://www.w3.org/TR/css-backgrounds-3/#border-width)
    ///
    /// Widths are taken as declared, whatever the border style.
    #[must_use]
    pub fn border(&self) -> EdgeSizes {
        EdgeSizes {
            top: self.border_top_px(),
            right: self.border_right_px(),
            bottom: self.border_bottom_px(),
            left: self.border_left_px(),
        }
    }

    /// [§ 3.2 Padding](https://www.w3.org/TR/css-box-3/#paddings)
    #[must_use]
    pub fn padding(&self) -> EdgeSizes {
        EdgeSizes {
            top: self.padding_top_px(),
            right: self.padding_right_px(),
            bottom: self.padding_bottom_px(),
            left: self.padding_left_px(),
        }
    }

    fn displayed_or_zero(&self, total: impl FnOnce() -> i32) -> i32 {
        if self.display() == "none" { 0 } else { total() }
    }

    /// Left plus right border, zero when not displayed.
    pub(crate) fn border_horizontal(&self) -> i32 {
        let cache = &self.state.cache;
        self.memoized(&cache.border_horizontal, "border-horizontal", || {
            self.displayed_or_zero(|| self.border_left_px() + self.border_right_px())
        })
    }

    /// Top plus bottom border, zero when not displayed.
    pub(crate) fn border_vertical(&self) -> i32 {
        let cache = &self.state.cache;
        self.memoized(&cache.border_vertical, "border-vertical", || {
            self.displayed_or_zero(|| self.border_top_px() + self.border_bottom_px())
        })
    }

    /// Left plus right padding, zero when not displayed.
    pub(crate) fn padding_horizontal(&self) -> i32 {
        let cache = &self.state.cache;
        self.memoized(&cache.padding_horizontal, "padding-horizontal", || {
            self.displayed_or_zero(|| self.padding_left_px() + self.padding_right_px())
        })
    }

    /// Top plus bottom padding, zero when not displayed.
    pub(crate) fn padding_vertical(&self) -> i32 {
        let cache = &self.state.cache;
        self.memoized(&cache.padding_vertical, "padding-vertical", || {
            self.displayed_or_zero(|| self.padding_top_px() + self.padding_bottom_px())
        })
    }
}
