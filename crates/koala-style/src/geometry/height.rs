//! Vertical sizing.
//!
//! [CSS 2.2 § 10.6 Calculating heights and margins](https://www.w3.org/TR/CSS22/visudet.html#Computing_heights_and_margins)
//!
//! Height is found in two steps. The empty height is what the element
//! would be with no children: a declared height, or a guess from its kind
//! and font size. The content height is how far its children reach.

use koala_dom::{ElementKind, InputType};

use super::{Axis, PercentBasis};
use crate::computed::ComputedStyle;
use crate::style::pixel_value;

impl<'c> ComputedStyle<'c> {
    /// The element's height in pixels, optionally extended by its border and
    /// padding. Mirrors [`calculated_width`](Self::calculated_width).
    #[must_use]
    pub fn calculated_height(&self, include_border: bool, include_padding: bool) -> i32 {
        if !self.is_attached() {
            return 0;
        }
        if self.display() == "none" {
            return 0;
        }
        let mut height = self.intrinsic_height();
        if self.style_attribute("box-sizing", true) != "border-box" {
            if include_border {
                height += self.border_vertical();
            } else if self.scrollable(Axis::Vertical, true) && !self.is_body() {
                height -= self.config().metrics.scrollbar_width;
            }
            if include_padding {
                height += self.padding_vertical();
            }
        }
        height
    }

    fn has_declared_height(&self) -> bool {
        !self.style_attribute("height", false).is_empty()
    }

    /// Height of the content box: the content height when the element has
    /// children reaching down and no declared height, the empty height
    /// otherwise. Memoized.
    pub(crate) fn intrinsic_height(&self) -> i32 {
        let cache = &self.state.cache;
        self.memoized(&cache.height, "height", || {
            let empty = self.empty_height();
            if empty == 0 {
                return 0;
            }
            let content = self.content_height();
            if content > 0 && !self.has_declared_height() {
                content
            } else {
                empty
            }
        })
    }

    /// Height ignoring children, memoized.
    pub(crate) fn empty_height(&self) -> i32 {
        let cache = &self.state.cache;
        self.memoized(&cache.empty_height, "empty-height", || self.compute_empty_height())
    }

    fn compute_empty_height(&self) -> i32 {
        if !self.kind().may_be_displayed() || self.display() == "none" {
            return 0;
        }
        let viewport_height = self.config().viewport.height;
        if self.is_body() {
            return viewport_height;
        }

        let default_height = self.default_height();
        let window_default = if *self.kind() == ElementKind::Canvas {
            self.config().metrics.canvas_height
        } else {
            viewport_height
        };

        let height = PercentBasis::new(default_height, window_default, |s: &ComputedStyle<'c>| {
            if s.is_body() {
                return s.config().viewport.height.to_string();
            }
            s.style_attribute("height", true)
        })
        .pixel_value(self);

        if height == 0 && !self.has_declared_height() {
            default_height
        } else {
            height
        }
    }

    /// Height of an element of this kind with nothing declared.
    fn default_height(&self) -> i32 {
        let metrics = &self.config().metrics;
        let tree = self.tree();
        let kind = self.kind();
        let is_div = *kind == ElementKind::Div;

        if is_div && tree.text_content(self.node()).trim().is_empty() {
            return 0;
        }
        if tree.first_child(self.node()).is_none() {
            return match kind {
                ElementKind::Button => metrics.input_height,
                ElementKind::Input(input) if *input != InputType::Hidden => metrics.input_height,
                ElementKind::Select => metrics.select_height,
                ElementKind::TextArea => metrics.textarea_height,
                ElementKind::IFrame => metrics.iframe_height,
                _ => 0,
            };
        }

        let line = metrics.font_height(pixel_value(&self.font_size()));
        if is_div {
            let lines = tree.rendered_text(self.node()).matches('\n').count();
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let lines = lines as i32 + 1;
            return line * lines;
        }
        line
    }

    /// How far the element's children reach down.
    ///
    /// Children in normal flow (`static` and `relative`) stack, so only the
    /// last one counts. Each `absolute` child is placed on its own. The
    /// result is the furthest child bottom edge, margin included.
    #[must_use]
    pub fn content_height(&self) -> i32 {
        if !self.kind().may_be_displayed() {
            return 0;
        }
        let tree = self.tree();
        let mut last_flowing = None;
        let mut reaching = Vec::new();
        for &child in tree.children(self.node()) {
            let Some(style) = self.style_of(child) else {
                continue;
            };
            if !style.kind().may_be_displayed() {
                continue;
            }
            match style.position_with_inheritance().as_str() {
                "static" | "relative" => last_flowing = Some(style),
                "absolute" => reaching.push(style),
                _ => {}
            }
        }
        reaching.extend(last_flowing);

        reaching
            .iter()
            .map(|style| style.top(true, false, false) + style.calculated_height(true, true))
            .fold(0, i32::max)
    }

    /// `height` as reported by `getComputedStyle`.
    ///
    /// Unset and `auto` heights report the element's rendered height.
    #[must_use]
    pub fn height(&self) -> String {
        if !self.is_attached() {
            if self.config().quirks().no_style_when_detached {
                return String::new();
            }
            if self.style_attribute("height", true).is_empty() {
                return "auto".to_string();
            }
        }

        let viewport_height = self.config().viewport.height;
        let rendered = format!("{}px", self.calculated_height(true, true));
        PercentBasis::new(0, viewport_height, |s: &ComputedStyle<'c>| {
            let value = s.style_attribute("height", true);
            if value.is_empty() || value == "auto" {
                return rendered.clone();
            }
            value
        })
        .pixel_string(self)
    }
}
