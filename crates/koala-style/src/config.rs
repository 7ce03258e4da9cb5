//! Configuration passed to a [`StyleContext`](crate::StyleContext).
//!
//! Nothing here is global: every knob the resolver consults is a field of
//! [`StyleConfig`], so two documents emulating different browsers can be
//! resolved side by side.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::StyleError;

/// Named behavioural deviations of the emulated browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserQuirks {
    /// Detached elements have no computed value at all: every property
    /// resolves to the empty string.
    pub no_style_when_detached: bool,
    /// Detached elements whose default display is inline-level, a table
    /// part, `list-item` or `ruby` report `block` instead.
    pub block_display_when_detached: bool,
    /// `z-index` declarations from matched rules are dropped.
    pub no_z_index: bool,
}

/// Heuristic constants used in place of real text layout.
///
/// These have no derivation beyond matching what the emulated browsers
/// report for simple pages. Keep them as they are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Width of one character of text.
    pub pixels_per_char: i32,
    /// Width of a scrollbar, removed from scrollable boxes.
    pub scrollbar_width: i32,
    /// Intrinsic canvas width.
    pub canvas_width: i32,
    /// Intrinsic canvas height, used as its percentage basis.
    pub canvas_height: i32,
    /// Horizontal padding added to a push button's label width.
    pub button_padding: i32,
    /// Width of text and password inputs.
    pub text_input_width: i32,
    /// Width of radio buttons and checkboxes.
    pub check_input_width: i32,
    /// Width of an empty textarea.
    pub textarea_width: i32,
    /// Height of an empty button or non-hidden input.
    pub input_height: i32,
    /// Height of an empty select.
    pub select_height: i32,
    /// Height of an empty textarea.
    pub textarea_height: i32,
    /// Height of an empty iframe.
    pub iframe_height: i32,
    /// Per-sibling displacement when estimating the top of a box that is
    /// positioned only by `bottom`.
    pub absolute_sibling_height: i32,
    /// Default margin of `<body>` on each side.
    pub body_margin: i32,
    /// Character width used to size short absolutely positioned content.
    pub absolute_char_width: i32,
    /// Absolutely positioned content shorter than this many characters is
    /// sized from its text.
    pub absolute_text_limit: usize,
    /// Line height as a multiple of the font size.
    pub font_height_ratio: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            pixels_per_char: 10,
            scrollbar_width: 17,
            canvas_width: 300,
            canvas_height: 150,
            button_padding: 10,
            text_input_width: 50,
            check_input_width: 20,
            textarea_width: 100,
            input_height: 20,
            select_height: 20,
            textarea_height: 49,
            iframe_height: 154,
            absolute_sibling_height: 20,
            body_margin: 8,
            absolute_char_width: 7,
            absolute_text_limit: 13,
            font_height_ratio: 1.125,
        }
    }
}

impl LayoutMetrics {
    /// Height of one line of text at `font_size` pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn font_height(&self, font_size: i32) -> i32 {
        (f64::from(font_size) * self.font_height_ratio).round() as i32
    }
}

/// Inner size of the window hosting the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Inner width in pixels.
    pub width: i32,
    /// Inner height in pixels.
    pub height: i32,
}

impl Viewport {
    /// A viewport of the given inner size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1256, 605)
    }
}

/// The browsers with a built-in profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum BrowserKind {
    /// Chromium-based browsers.
    Chrome,
    /// Gecko-based browsers.
    Firefox,
    /// Trident-era Internet Explorer.
    LegacyIe,
}

/// Quirk flags plus per-property default overrides for one browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserProfile {
    /// Profile name, used in diagnostics.
    pub name: String,
    /// Behavioural flags.
    pub quirks: BrowserQuirks,
    /// Default computed values that differ from the generic table.
    pub defaults: BTreeMap<String, String>,
}

impl BrowserProfile {
    /// The built-in profile for `kind`.
    #[must_use]
    pub fn builtin(kind: BrowserKind) -> Self {
        let (quirks, font_family) = match kind {
            BrowserKind::Chrome => (
                BrowserQuirks {
                    block_display_when_detached: true,
                    ..BrowserQuirks::default()
                },
                "\"Times New Roman\"",
            ),
            BrowserKind::Firefox => (BrowserQuirks::default(), "serif"),
            BrowserKind::LegacyIe => (
                BrowserQuirks {
                    no_style_when_detached: true,
                    no_z_index: true,
                    ..BrowserQuirks::default()
                },
                "Times New Roman",
            ),
        };
        let mut defaults = BTreeMap::new();
        let _ = defaults.insert("font-family".to_string(), font_family.to_string());
        Self {
            name: kind.to_string(),
            quirks,
            defaults,
        }
    }

    /// Look up a built-in profile by name (`chrome`, `firefox`, `legacy-ie`).
    ///
    /// # Errors
    /// Returns [`StyleError::UnknownProfile`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, StyleError> {
        BrowserKind::from_str(name.trim())
            .map(Self::builtin)
            .map_err(|_| StyleError::UnknownProfile(name.to_string()))
    }

    /// The profile's override of a property default, if any.
    #[must_use]
    pub fn default_value(&self, property: &str) -> Option<&str> {
        self.defaults.get(property).map(String::as_str)
    }
}

impl Default for BrowserProfile {
    fn default() -> Self {
        Self::builtin(BrowserKind::Chrome)
    }
}

/// Everything a style query needs besides the document and its rules.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Emulated browser.
    pub profile: BrowserProfile,
    /// Layout heuristics.
    pub metrics: LayoutMetrics,
    /// Window size.
    pub viewport: Viewport,
}

impl StyleConfig {
    /// Default metrics for the given profile and viewport.
    #[must_use]
    pub fn new(profile: BrowserProfile, viewport: Viewport) -> Self {
        Self {
            profile,
            metrics: LayoutMetrics::default(),
            viewport,
        }
    }

    /// Shorthand for the profile's quirk flags.
    #[must_use]
    pub const fn quirks(&self) -> &BrowserQuirks {
        &self.profile.quirks
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_every_builtin_round_trips_by_name() {
        for kind in BrowserKind::iter() {
            let profile = BrowserProfile::from_name(&kind.to_string()).unwrap();
            assert_eq!(profile, BrowserProfile::builtin(kind));
        }
    }

    #[test]
    fn test_unknown_profile_is_an_error() {
        assert_eq!(
            BrowserProfile::from_name("netscape"),
            Err(StyleError::UnknownProfile("netscape".to_string()))
        );
    }

    #[test]
    fn test_font_height() {
        let metrics = LayoutMetrics::default();
        assert_eq!(metrics.font_height(16), 18);
        assert_eq!(metrics.font_height(0), 0);
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: StyleConfig =
            serde_json::from_str(r#"{"viewport": {"width": 800, "height": 600}}"#).unwrap();
        assert_eq!(config.viewport, Viewport::new(800, 600));
        assert_eq!(config.metrics, LayoutMetrics::default());
        assert!(config.quirks().block_display_when_detached);
    }

    #[test]
    fn test_legacy_ie_quirks() {
        let profile = BrowserProfile::from_name("Legacy-IE").unwrap();
        assert!(profile.quirks.no_style_when_detached);
        assert!(profile.quirks.no_z_index);
        assert_eq!(profile.default_value("font-family"), Some("Times New Roman"));
    }
}
