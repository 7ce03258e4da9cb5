//! Horizontal sizing.
//!
//! [CSS 2.2 § 10.3 Calculating widths and margins](https://www.w3.org/TR/CSS22/visudet.html#Computing_widths_and_margins)
//!
//! Nothing is laid out. Block boxes take their parent's width, inline
//! boxes the sum of their children, and text is measured at a fixed width
//! per character.

use koala_dom::{ElementKind, InputType};

use super::{Axis, PercentBasis};
use crate::computed::ComputedStyle;
use crate::style::pixel_value;

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) const fn chars_to_px(chars: usize, per_char: i32) -> i32 {
    chars as i32 * per_char
}

impl<'c> ComputedStyle<'c> {
    /// The element's width in pixels, optionally widened by its border and
    /// padding.
    ///
    /// Detached and undisplayed elements have no width. Under
    /// `box-sizing: border-box` the flags are ignored. Without the border, a
    /// scrollable box other than `<body>` loses the width of its scrollbar.
    #[must_use]
    pub fn calculated_width(&self, include_border: bool, include_padding: bool) -> i32 {
        if !self.is_attached() {
            return 0;
        }
        if self.display() == "none" {
            return 0;
        }
        let mut width = self.intrinsic_width();
        if self.style_attribute("box-sizing", true) != "border-box" {
            if include_border {
                width += self.border_horizontal();
            } else if self.scrollable(Axis::Horizontal, true) && !self.is_body() {
                width -= self.config().metrics.scrollbar_width;
            }
            if include_padding {
                width += self.padding_horizontal();
            }
        }
        width
    }

    /// Width of the content box, memoized.
    pub(crate) fn intrinsic_width(&self) -> i32 {
        let cache = &self.state.cache;
        self.memoized(&cache.width, "width", || self.compute_width())
    }

    fn compute_width(&self) -> i32 {
        let kind = self.kind();
        if !kind.may_be_displayed() {
            return 0;
        }
        let display = self.display();
        let sized_inline = matches!(
            kind,
            ElementKind::IFrame | ElementKind::Input(_) | ElementKind::TextArea
        );
        if display == "none" || (display == "inline" && !sized_inline) {
            return 0;
        }

        let viewport_width = self.config().viewport.width;
        let declared = self.style_attribute("width", false);
        let parent = self.tree().parent_element(self.node());

        if declared.is_empty() && parent.is_some() {
            return self.width_from_content(&display);
        }
        if declared == "auto" {
            return viewport_width;
        }
        PercentBasis::new(0, viewport_width, |s: &ComputedStyle<'c>| {
            s.style_attribute("width", true)
        })
        .pixel_value(self)
    }

    /// Width of an element with no declared width.
    fn width_from_content(&self, display: &str) -> i32 {
        let metrics = &self.config().metrics;
        let kind = self.kind();
        if *kind == ElementKind::Canvas {
            return metrics.canvas_width;
        }

        let float = self.style_attribute("float", true);
        if float == "left" || float == "right" {
            return chars_to_px(self.text_len(), metrics.pixels_per_char);
        }

        if display == "block" {
            if self.is_body() {
                return pixel_value(&self.width());
            }
            let basis = PercentBasis::new(0, self.config().viewport.width, |s: &ComputedStyle<'c>| {
                s.width()
            });
            let parent_width = self
                .parent_style()
                .map_or(basis.window_default(), |p| basis.pixel_value(&p));
            return parent_width - (self.border_horizontal() + self.padding_horizontal());
        }

        match kind {
            ElementKind::Button => {
                let label = self.rendered_text_len();
                metrics.button_padding + chars_to_px(label, metrics.pixels_per_char)
            }
            ElementKind::Input(input) if input.is_button_like() => {
                let label = self
                    .tree()
                    .as_element(self.node())
                    .and_then(|e| e.attr("value"))
                    .map_or(0, |v| v.chars().count());
                metrics.button_padding + chars_to_px(label, metrics.pixels_per_char)
            }
            ElementKind::Input(InputType::Text | InputType::Password | InputType::Other) => {
                metrics.text_input_width
            }
            ElementKind::Input(InputType::Radio | InputType::Checkbox) => metrics.check_input_width,
            ElementKind::TextArea => metrics.textarea_width,
            _ => self.content_width(),
        }
    }

    /// Total width of the element's children: elements at their full
    /// border-box width, text at a fixed width per character.
    #[must_use]
    pub fn content_width(&self) -> i32 {
        let tree = self.tree();
        let per_char = self.config().metrics.pixels_per_char;
        tree.children(self.node())
            .iter()
            .map(|&child| {
                if let Some(text) = tree.as_text(child) {
                    return chars_to_px(text.chars().count(), per_char);
                }
                self.style_of(child)
                    .map_or(0, |style| style.calculated_width(true, true))
            })
            .sum()
    }

    /// [CSS Overflow Level 3 § 3](https://www.w3.org/TR/css-overflow-3/#overflow-properties)
    ///
    /// Whether the element scrolls along `axis`: it is `<body>` or has
    /// `overflow: scroll | auto`, and its content overflows it.
    #[must_use]
    pub fn is_scrollable(&self, axis: Axis) -> bool {
        self.scrollable(axis, false)
    }

    pub(crate) fn scrollable(&self, axis: Axis, ignore_size: bool) -> bool {
        let overflow = self.style_attribute("overflow", true);
        let may_scroll = self.is_body() || overflow == "scroll" || overflow == "auto";
        if !may_scroll {
            return false;
        }
        ignore_size
            || match axis {
                Axis::Horizontal => self.content_width() > self.intrinsic_width(),
                Axis::Vertical => self.content_height() > self.empty_height(),
            }
    }

    /// `width` as reported by `getComputedStyle`.
    ///
    /// Unset and `auto` widths report the viewport width (less the body
    /// margins for `<body>`). Short absolutely positioned content is sized
    /// from its text.
    #[must_use]
    pub fn width(&self) -> String {
        if self.display() == "none" {
            return "auto".to_string();
        }
        if !self.is_attached() {
            if self.config().quirks().no_style_when_detached {
                return String::new();
            }
            if self.style_attribute("width", true).is_empty() {
                return "auto".to_string();
            }
        }

        let metrics = &self.config().metrics;
        let viewport_width = self.config().viewport.width;
        let absolute = self.style_attribute("position", true) == "absolute";
        let text_len = self.text_len();
        let full_width = if self.is_body() {
            viewport_width - 2 * metrics.body_margin
        } else {
            viewport_width
        };

        PercentBasis::new(0, viewport_width, |s: &ComputedStyle<'c>| {
            let value = s.style_attribute("width", true);
            if value.is_empty() && absolute && text_len < metrics.absolute_text_limit {
                return format!("{}px", chars_to_px(text_len, metrics.absolute_char_width));
            }
            if value.is_empty() || value == "auto" {
                return format!("{full_width}px");
            }
            value
        })
        .pixel_string(self)
    }
}
