//! Length parsing and pixel conversion.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! Conversions use the fixed factors of the emulated browsers rather than
//! real font metrics or screen resolution.

use koala_common::warning::warn_once;

/// Font size assumed for font-relative units.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthValue {
    /// A number without a unit.
    Number(f64),
    /// `px`
    Px(f64),
    /// `em`, relative to [`DEFAULT_FONT_SIZE_PX`].
    Em(f64),
    /// `ex`
    Ex(f64),
    /// `in`
    In(f64),
    /// `cm`
    Cm(f64),
    /// `mm`
    Mm(f64),
    /// `pt`
    Pt(f64),
    /// `pc`
    Pc(f64),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    ///
    /// Without a basis, a percentage is taken of the default font size.
    Percent(f64),
}

impl LengthValue {
    /// Parse a length, including the border-width keywords.
    ///
    /// Returns `None` when the value does not start with a number. An
    /// unknown unit is reported and its number taken as pixels.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        // [§ 4.3 border-width](https://www.w3.org/TR/css-backgrounds-3/#border-width)
        match value.to_ascii_lowercase().as_str() {
            "thin" => return Some(Self::Px(1.0)),
            "medium" => return Some(Self::Px(3.0)),
            "thick" => return Some(Self::Px(5.0)),
            _ => {}
        }

        let (number, unit) = split_number(value)?;
        let length = match unit.to_ascii_lowercase().as_str() {
            "" => Self::Number(number),
            "px" => Self::Px(number),
            "em" => Self::Em(number),
            "ex" => Self::Ex(number),
            "in" => Self::In(number),
            "cm" => Self::Cm(number),
            "mm" => Self::Mm(number),
            "pt" => Self::Pt(number),
            "pc" => Self::Pc(number),
            "%" => Self::Percent(number),
            other => {
                warn_once("Style", &format!("unknown length unit '{other}' in '{value}'"));
                Self::Px(number)
            }
        };
        Some(length)
    }

    /// The length in (unrounded) pixels.
    #[must_use]
    pub fn to_px(self) -> f64 {
        match self {
            Self::Number(n) | Self::Px(n) => n,
            Self::Em(n) => n * DEFAULT_FONT_SIZE_PX,
            Self::Percent(n) => n * DEFAULT_FONT_SIZE_PX / 100.0,
            Self::Ex(n) => n * 10.0,
            Self::In(n) => n * 150.0,
            Self::Cm(n) => n * 50.0,
            Self::Mm(n) => n * 5.0,
            Self::Pt(n) => n * 2.0,
            Self::Pc(n) => n * 24.0,
        }
    }
}

/// Split a leading signed decimal number from its unit.
fn split_number(value: &str) -> Option<(f64, &str)> {
    let bytes = value.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let digits_start = end;
    while end < bytes.len() && (bytes[end].is_ascii_digit() || bytes[end] == b'.') {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    let number = value[..end].parse::<f64>().ok()?;
    Some((number, value[end..].trim()))
}

/// Round half up to whole pixels.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_px(px: f64) -> i32 {
    (px + 0.5).floor() as i32
}

/// Resolve a length to whole pixels. Anything that is not a length
/// (`auto`, empty, keywords) is 0.
#[must_use]
pub fn pixel_value(value: &str) -> i32 {
    LengthValue::parse(value).map_or(0, |length| round_px(length.to_px()))
}

/// Normalize a length to `<n>px`. Empty values and values already in
/// pixels are returned unchanged.
#[must_use]
pub fn pixel_string(value: &str) -> String {
    if value.is_empty() || value.ends_with("px") {
        return value.to_string();
    }
    format!("{}px", pixel_value(value))
}

/// The number in a percentage such as `50%`, if it has one.
#[must_use]
pub fn percent_of(value: &str) -> Option<f64> {
    match LengthValue::parse(value)? {
        LengthValue::Percent(n) => Some(n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_value_units() {
        assert_eq!(pixel_value("12px"), 12);
        assert_eq!(pixel_value("12.5px"), 13);
        assert_eq!(pixel_value("2em"), 32);
        assert_eq!(pixel_value("50%"), 8);
        assert_eq!(pixel_value("1in"), 150);
        assert_eq!(pixel_value("2cm"), 100);
        assert_eq!(pixel_value("3mm"), 15);
        assert_eq!(pixel_value("10pt"), 20);
        assert_eq!(pixel_value("1pc"), 24);
        assert_eq!(pixel_value("1ex"), 10);
        assert_eq!(pixel_value("605"), 605);
        assert_eq!(pixel_value("-4px"), -4);
    }

    #[test]
    fn test_non_lengths_are_zero() {
        assert_eq!(pixel_value("auto"), 0);
        assert_eq!(pixel_value(""), 0);
        assert_eq!(pixel_value("-"), 0);
        assert_eq!(pixel_value("inherit"), 0);
    }

    #[test]
    fn test_border_keywords() {
        assert_eq!(pixel_value("thin"), 1);
        assert_eq!(pixel_value("medium"), 3);
        assert_eq!(pixel_value("THICK"), 5);
    }

    #[test]
    fn test_unknown_unit_uses_number() {
        assert_eq!(pixel_value("7vmax"), 7);
    }

    #[test]
    fn test_pixel_string() {
        assert_eq!(pixel_string("4px"), "4px");
        assert_eq!(pixel_string("1em"), "16px");
        assert_eq!(pixel_string("0"), "0px");
        assert_eq!(pixel_string(""), "");
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of("25%"), Some(25.0));
        assert_eq!(percent_of("25px"), None);
        assert_eq!(percent_of("%"), None);
    }
}
