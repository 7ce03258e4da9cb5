//! Element-kind identity.
//!
//! The style engine only distinguishes a handful of element kinds when it
//! guesses intrinsic sizes or default display values. Everything else is
//! carried as [`ElementKind::Other`] with its lowercased tag name.

use std::str::FromStr;

use strum_macros::EnumString;

/// [§ 4.10.5 The input element](https://html.spec.whatwg.org/multipage/input.html#attr-input-type)
///
/// "The type attribute controls the data type (and associated control) of
/// the element." Missing and unknown values fall back to the Text state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InputType {
    /// `type=text`, and the invalid value default.
    Text,
    /// `type=password`
    Password,
    /// `type=submit`
    Submit,
    /// `type=reset`
    Reset,
    /// `type=button`
    Button,
    /// `type=file`
    File,
    /// `type=radio`
    Radio,
    /// `type=checkbox`
    Checkbox,
    /// `type=hidden`
    Hidden,
    /// `type=image`
    Image,
    /// Any other recognized state (email, number, ...) sized like text.
    #[strum(disabled)]
    Other,
}

impl InputType {
    /// Parse the `type` attribute, treating absent values as text.
    #[must_use]
    pub fn from_attr(value: Option<&str>) -> Self {
        value.map_or(Self::Text, |v| Self::from_str(v.trim()).unwrap_or(Self::Other))
    }

    /// True for the push-button states whose width follows the label.
    #[must_use]
    pub const fn is_button_like(self) -> bool {
        matches!(self, Self::Submit | Self::Reset | Self::Button | Self::File)
    }
}

/// The kinds of element the geometry engine treats specially.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `<html>`
    Html,
    /// `<body>`
    Body,
    /// `<div>`
    Div,
    /// `<canvas>`
    Canvas,
    /// `<iframe>`
    IFrame,
    /// `<button>`
    Button,
    /// `<input>` with its resolved type state.
    Input(InputType),
    /// `<select>`
    Select,
    /// `<textarea>`
    TextArea,
    /// `<tr>`
    TableRow,
    /// Elements that never generate boxes: `head`, `script`, `style`,
    /// `title`, `template`, `meta`, `link`, `base`.
    NotRendered(String),
    /// Everything else, by lowercased tag name.
    Other(String),
}

impl ElementKind {
    /// Classify a tag name, consulting the `type` attribute for inputs.
    #[must_use]
    pub fn classify(tag_name: &str, type_attr: Option<&str>) -> Self {
        let tag = tag_name.to_ascii_lowercase();
        match tag.as_str() {
            "html" => Self::Html,
            "body" => Self::Body,
            "div" => Self::Div,
            "canvas" => Self::Canvas,
            "iframe" => Self::IFrame,
            "button" => Self::Button,
            "input" => Self::Input(InputType::from_attr(type_attr)),
            "select" => Self::Select,
            "textarea" => Self::TextArea,
            "tr" => Self::TableRow,
            "head" | "script" | "style" | "title" | "template" | "meta" | "link" | "base" => {
                Self::NotRendered(tag)
            }
            _ => Self::Other(tag),
        }
    }

    /// Whether an element of this kind can ever be displayed.
    #[must_use]
    pub const fn may_be_displayed(&self) -> bool {
        !matches!(self, Self::NotRendered(_))
    }

    /// The lowercased tag name this kind was classified from.
    #[must_use]
    pub fn tag_name(&self) -> &str {
        match self {
            Self::Html => "html",
            Self::Body => "body",
            Self::Div => "div",
            Self::Canvas => "canvas",
            Self::IFrame => "iframe",
            Self::Button => "button",
            Self::Input(_) => "input",
            Self::Select => "select",
            Self::TextArea => "textarea",
            Self::TableRow => "tr",
            Self::NotRendered(tag) | Self::Other(tag) => tag,
        }
    }
}
