//! Color normalization for computed values.
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//!
//! Computed colors are reported in `rgb(r, g, b)` notation. Values this
//! module does not understand pass through unchanged.

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// [§ 5.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    ///
    /// Accepts `#rgb` and `#rrggbb`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            // "converted into six-digit form (#RRGGBB) by replicating digits"
            3 => Some(Self::new(
                channel(&hex[0..1].repeat(2))?,
                channel(&hex[1..2].repeat(2))?,
                channel(&hex[2..3].repeat(2))?,
            )),
            6 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// The sixteen basic HTML colors plus their common aliases.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        let rgb = match name.to_ascii_lowercase().as_str() {
            "black" => Self::new(0, 0, 0),
            "silver" => Self::new(192, 192, 192),
            "gray" | "grey" => Self::new(128, 128, 128),
            "white" => Self::new(255, 255, 255),
            "maroon" => Self::new(128, 0, 0),
            "red" => Self::new(255, 0, 0),
            "purple" => Self::new(128, 0, 128),
            "fuchsia" | "magenta" => Self::new(255, 0, 255),
            "green" => Self::new(0, 128, 0),
            "lime" => Self::new(0, 255, 0),
            "olive" => Self::new(128, 128, 0),
            "yellow" => Self::new(255, 255, 0),
            "navy" => Self::new(0, 0, 128),
            "blue" => Self::new(0, 0, 255),
            "teal" => Self::new(0, 128, 128),
            "aqua" | "cyan" => Self::new(0, 255, 255),
            "orange" => Self::new(255, 165, 0),
            _ => return None,
        };
        Some(rgb)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Convert a hex or named color to `rgb(r, g, b)`.
#[must_use]
pub fn to_rgb(value: &str) -> String {
    let trimmed = value.trim();
    Rgb::from_hex(trimmed)
        .or_else(|| Rgb::from_named(trimmed))
        .map_or_else(|| value.to_string(), |rgb| rgb.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgb() {
        assert_eq!(to_rgb("#fff"), "rgb(255, 255, 255)");
        assert_eq!(to_rgb("#0080ff"), "rgb(0, 128, 255)");
        assert_eq!(to_rgb("Red"), "rgb(255, 0, 0)");
        assert_eq!(to_rgb("rgb(1, 2, 3)"), "rgb(1, 2, 3)");
        assert_eq!(to_rgb("currentcolor"), "currentcolor");
        assert_eq!(to_rgb("#12"), "#12");
    }
}
