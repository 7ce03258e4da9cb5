//! Per-property metadata.
//!
//! One table row per property the resolver knows about: whether it is
//! inherited, its default computed value, and which resolution path
//! [`ComputedStyle::property_value`](crate::ComputedStyle::property_value)
//! takes for it. The rows are sorted by name.

/// How a property's computed value is produced from its cascaded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Cascaded value, inherited value or default, unchanged.
    Generic,
    /// Normalized to `<n>px`.
    Length,
    /// Normalized to `rgb(r, g, b)`.
    Color,
    /// See [`ComputedStyle::display`](crate::ComputedStyle::display).
    Display,
    /// See [`ComputedStyle::width`](crate::ComputedStyle::width).
    Width,
    /// See [`ComputedStyle::height`](crate::ComputedStyle::height).
    Height,
    /// `top`, with percentages taken of ancestor heights.
    Top,
    /// `left`, with percentages taken of ancestor widths.
    Left,
    /// `margin-left` / `margin-right`, with percentages taken of ancestor widths.
    MarginPercent,
    /// Normalized to whole pixels when set.
    FontSize,
}

/// [§ 3.1 Property definitions](https://www.w3.org/TR/css-cascade-4/#defaulting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
    /// Lowercase property name.
    pub name: &'static str,
    /// "Inherited: yes"
    pub inherited: bool,
    /// Default computed value.
    pub default: &'static str,
    /// Resolution path.
    pub kind: PropertyKind,
}

const fn prop(
    name: &'static str,
    inherited: bool,
    default: &'static str,
    kind: PropertyKind,
) -> PropertyInfo {
    PropertyInfo {
        name,
        inherited,
        default,
        kind,
    }
}

use PropertyKind::{
    Color, Display, FontSize, Generic, Height, Left, Length, MarginPercent, Top, Width,
};

/// Every known property, sorted by name.
pub static PROPERTIES: &[PropertyInfo] = &[
    prop("azimuth", true, "center", Generic),
    prop("background-color", false, "rgba(0, 0, 0, 0)", Generic),
    prop("border-bottom-color", false, "rgb(0, 0, 0)", Color),
    prop("border-bottom-style", false, "none", Generic),
    prop("border-bottom-width", false, "0px", Length),
    prop("border-collapse", true, "separate", Generic),
    prop("border-left-color", false, "rgb(0, 0, 0)", Color),
    prop("border-left-style", false, "none", Generic),
    prop("border-left-width", false, "0px", Length),
    prop("border-right-color", false, "rgb(0, 0, 0)", Color),
    prop("border-right-style", false, "none", Generic),
    prop("border-right-width", false, "0px", Length),
    prop("border-spacing", true, "0px 0px", Generic),
    prop("border-top-color", false, "rgb(0, 0, 0)", Color),
    prop("border-top-style", false, "none", Generic),
    prop("border-top-width", false, "0px", Length),
    prop("bottom", false, "auto", Generic),
    prop("box-sizing", false, "content-box", Generic),
    prop("caption-side", true, "top", Generic),
    prop("clear", false, "none", Generic),
    prop("color", true, "rgb(0, 0, 0)", Color),
    prop("cursor", true, "auto", Generic),
    prop("direction", true, "ltr", Generic),
    prop("display", false, "", Display),
    prop("elevation", true, "level", Generic),
    prop("empty-cells", true, "show", Generic),
    prop("float", false, "none", Generic),
    prop("font", true, "", Generic),
    prop("font-family", true, "serif", Generic),
    prop("font-size", true, "16px", FontSize),
    prop("font-style", true, "normal", Generic),
    prop("font-variant", true, "normal", Generic),
    prop("font-weight", true, "400", Generic),
    prop("height", false, "", Height),
    prop("left", false, "auto", Left),
    prop("letter-spacing", true, "normal", Generic),
    prop("line-height", true, "normal", Generic),
    prop("list-style", true, "", Generic),
    prop("list-style-image", true, "none", Generic),
    prop("list-style-position", true, "outside", Generic),
    prop("list-style-type", true, "disc", Generic),
    prop("margin-bottom", false, "0px", Length),
    prop("margin-left", false, "0px", MarginPercent),
    prop("margin-right", false, "0px", MarginPercent),
    prop("margin-top", false, "0px", Length),
    prop("opacity", false, "1", Generic),
    prop("orphans", true, "2", Generic),
    prop("overflow", false, "visible", Generic),
    prop("padding-bottom", false, "0px", Length),
    prop("padding-left", false, "0px", Length),
    prop("padding-right", false, "0px", Length),
    prop("padding-top", false, "0px", Length),
    prop("pitch", true, "medium", Generic),
    prop("pitch-range", true, "50", Generic),
    prop("position", false, "static", Generic),
    prop("quotes", true, "", Generic),
    prop("richness", true, "50", Generic),
    prop("right", false, "auto", Generic),
    prop("speak", true, "normal", Generic),
    prop("speak-header", true, "once", Generic),
    prop("speak-numeral", true, "continuous", Generic),
    prop("speak-punctuation", true, "none", Generic),
    prop("speech-rate", true, "medium", Generic),
    prop("stress", true, "50", Generic),
    prop("text-align", true, "start", Generic),
    prop("text-indent", true, "0px", Generic),
    prop("text-transform", true, "none", Generic),
    prop("top", false, "auto", Top),
    prop("vertical-align", false, "baseline", Generic),
    prop("visibility", true, "visible", Generic),
    prop("voice-family", true, "", Generic),
    prop("volume", true, "medium", Generic),
    prop("white-space", true, "normal", Generic),
    prop("widows", true, "2", Generic),
    prop("width", false, "", Width),
    prop("word-spacing", true, "0px", Generic),
    prop("z-index", false, "auto", Generic),
];

/// Metadata for a lowercase property name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static PropertyInfo> {
    PROPERTIES
        .binary_search_by(|p| p.name.cmp(name))
        .ok()
        .map(|i| &PROPERTIES[i])
}

/// [§ 7.2 Inheritance](https://www.w3.org/TR/css-cascade-4/#inheriting)
///
/// Whether a property with no cascaded value takes its parent's value.
#[must_use]
pub fn is_inherited(name: &str) -> bool {
    lookup(name).is_some_and(|p| p.inherited)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in PROPERTIES.windows(2) {
            assert!(pair[0].name < pair[1].name, "{} >= {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn test_inheritable_set() {
        let inherited: Vec<_> = PROPERTIES
            .iter()
            .filter(|p| p.inherited)
            .map(|p| p.name)
            .collect();
        assert_eq!(inherited.len(), 41);
        for name in ["color", "font-size", "visibility", "white-space", "voice-family"] {
            assert!(is_inherited(name), "{name}");
        }
        for name in ["width", "display", "margin-left", "position", "unknown"] {
            assert!(!is_inherited(name), "{name}");
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("width").map(|p| p.kind), Some(Width));
        assert_eq!(lookup("top").map(|p| p.default), Some("auto"));
        assert!(lookup("Width").is_none());
    }
}
