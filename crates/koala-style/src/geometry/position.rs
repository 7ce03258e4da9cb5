//! Offsets from the parent's edges.
//!
//! [CSS Positioned Layout Level 3 § 3](https://www.w3.org/TR/css-position-3/#position-property)
//!
//! `left` and `top` follow the element's `position`. Boxes in normal flow
//! are pushed along by their previous siblings; absolutely positioned
//! boxes are placed by their own offsets.

use koala_dom::ElementKind;

use super::PercentBasis;
use super::width::chars_to_px;
use crate::computed::ComputedStyle;
use crate::style::pixel_value;

impl<'c> ComputedStyle<'c> {
    /// `position`, with `inherit` replaced by the parent's value.
    #[must_use]
    pub fn position_with_inheritance(&self) -> String {
        let position = self.style_attribute("position", true);
        if position != "inherit" {
            return position;
        }
        self.parent_style()
            .map_or_else(|| "static".to_string(), |p| p.position_with_inheritance())
    }

    /// Chase `inherit` for an offset property up the ancestor chain.
    fn offset_with_inheritance(&self, value: impl Fn(&Self) -> String) -> String {
        let mut current = self.clone();
        loop {
            let resolved = value(&current);
            if resolved != "inherit" {
                return resolved;
            }
            match current.parent_style() {
                Some(parent) => current = parent,
                None => return "auto".to_string(),
            }
        }
    }

    fn offset_or_auto(&self, name: &str) -> String {
        let value = self.style_attribute(name, false);
        if value.is_empty() { "auto".to_string() } else { value }
    }

    /// `left`, with `inherit` replaced by the parent's value.
    #[must_use]
    pub fn left_with_inheritance(&self) -> String {
        self.offset_with_inheritance(Self::left_value)
    }

    /// `right`, with `inherit` replaced by the parent's value.
    #[must_use]
    pub fn right_with_inheritance(&self) -> String {
        self.offset_with_inheritance(|s| s.offset_or_auto("right"))
    }

    /// `top`, with `inherit` replaced by the parent's value.
    #[must_use]
    pub fn top_with_inheritance(&self) -> String {
        self.offset_with_inheritance(Self::top_value)
    }

    /// `bottom`, with `inherit` replaced by the parent's value.
    #[must_use]
    pub fn bottom_with_inheritance(&self) -> String {
        self.offset_with_inheritance(|s| s.offset_or_auto("bottom"))
    }

    /// `left` as reported by `getComputedStyle`: `auto` when unset, and
    /// percentages taken of the ancestors' declared widths.
    #[must_use]
    pub fn left_value(&self) -> String {
        self.offset_value("left", "width")
    }

    /// `top` as reported by `getComputedStyle`: `auto` when unset, and
    /// percentages taken of the ancestors' declared heights.
    #[must_use]
    pub fn top_value(&self) -> String {
        self.offset_value("top", "height")
    }

    fn offset_value(&self, name: &str, basis: &str) -> String {
        if self.is_suppressed() {
            return String::new();
        }
        let declared = self.style_attribute(name, false);
        if !declared.ends_with('%') {
            return if declared.is_empty() { "auto".to_string() } else { declared };
        }
        let me = self.node();
        PercentBasis::new(0, 0, |s: &ComputedStyle<'c>| {
            if s.node() == me {
                s.style_attribute(name, true)
            } else {
                s.style_attribute(basis, true)
            }
        })
        .pixel_string(self)
    }

    /// Horizontal offset from the parent's left edge, in pixels.
    ///
    /// The flags add the element's own left margin, border and padding.
    #[must_use]
    pub fn left(&self, include_margin: bool, include_border: bool, include_padding: bool) -> i32 {
        let position = self.position_with_inheritance();
        let left = self.left_with_inheritance();
        let right = self.right_with_inheritance();

        let mut offset = match position.as_str() {
            "absolute" if left != "auto" => pixel_value(&left),
            "absolute" if right != "auto" => {
                let parent_width = self.parent_style().map_or(self.config().viewport.width, |p| {
                    p.calculated_width(false, false)
                });
                parent_width - pixel_value(&right)
            }
            "fixed" if right != "auto" => {
                let parent_width = self.parent_style().map_or(self.config().viewport.width, |p| {
                    pixel_value(&p.width())
                });
                parent_width - pixel_value(&self.width()) - pixel_value(&right)
            }
            "fixed" if left == "auto" => self
                .parent_style()
                .map_or(0, |p| pixel_value(&p.left_with_inheritance())),
            "static" => self.static_left(),
            _ => pixel_value(&left),
        };

        if include_margin {
            offset += self.margin_left_px();
        }
        if include_border {
            offset += self.border_left_px();
        }
        if include_padding {
            offset += self.padding_left_px();
        }
        offset
    }

    /// Displacement of a box in normal flow by the inline content before it
    /// on the same line. A block sibling or a table row ends the line.
    fn static_left(&self) -> i32 {
        let is_row = *self.kind() == ElementKind::TableRow;
        if is_row || self.display() == "block" {
            return 0;
        }
        let tree = self.tree();
        let per_char = self.config().metrics.pixels_per_char;
        let mut left = 0;
        for sibling in tree.preceding_siblings(self.node()) {
            if let Some(text) = tree.as_text(sibling) {
                left += chars_to_px(text.chars().count(), per_char);
                continue;
            }
            let Some(style) = self.style_of(sibling) else {
                continue;
            };
            let display = style.display();
            if display == "block" {
                break;
            }
            if display != "none" {
                left += style.calculated_width(true, true);
            }
            if *style.kind() == ElementKind::TableRow {
                break;
            }
        }
        left
    }

    /// Vertical offset from the parent's top edge, in pixels.
    ///
    /// The flags add the element's own top margin, border and padding.
    #[must_use]
    pub fn top(&self, include_margin: bool, include_border: bool, include_padding: bool) -> i32 {
        let cache = &self.state.cache;
        let mut offset = self.memoized(&cache.top, "top", || self.flow_top());

        if include_margin {
            offset += self.margin_top_px();
        }
        if include_border {
            offset += self.border_top_px();
        }
        if include_padding {
            offset += self.padding_top_px();
        }
        offset
    }

    /// Displacement by previous siblings, each contributing its own top,
    /// height and top margin. A sibling whose top is already known
    /// accounts for everything before it.
    fn flow_top(&self) -> i32 {
        let position = self.position_with_inheritance();
        if position == "absolute" {
            return self.top_for_absolute();
        }

        let tree = self.tree();
        let mut top = 0;
        for sibling in tree.preceding_siblings(self.node()) {
            let Some(style) = self.style_of(sibling) else {
                continue;
            };
            let known = style.state.cache.top.get();
            top += match known {
                Some(sibling_top) => sibling_top,
                None => match style.position_with_inheritance().as_str() {
                    "absolute" => style.top_for_absolute(),
                    "relative" => pixel_value(&style.top_with_inheritance()),
                    _ => 0,
                },
            };
            top += style.calculated_height(true, true) + style.margin_top_px();
            if known.is_some() {
                break;
            }
        }

        if position == "relative" {
            top += pixel_value(&self.top_with_inheritance());
        }
        top
    }

    /// Top of an absolutely positioned box.
    ///
    /// With only `bottom` set, this is a rough estimate: every displayable
    /// element in the parent is taken to be one fixed-height line.
    fn top_for_absolute(&self) -> i32 {
        let top = self.top_with_inheritance();
        if top != "auto" {
            return pixel_value(&top);
        }
        let bottom = self.bottom_with_inheritance();
        if bottom == "auto" {
            return 0;
        }
        let tree = self.tree();
        let lines = tree.parent(self.node()).map_or(0, |parent| {
            tree.children(parent)
                .iter()
                .filter(|&&child| {
                    tree.as_element(child)
                        .is_some_and(|e| e.kind().may_be_displayed())
                })
                .count()
        });
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let lines = lines as i32;
        lines * self.config().metrics.absolute_sibling_height - pixel_value(&bottom)
    }
}
