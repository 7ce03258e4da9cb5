//! Declarations and the inline `style` attribute.
//!
//! [CSS Style Attributes](https://www.w3.org/TR/css-style-attr/)

use koala_common::warning::warn_once;
use koala_dom::{DomTree, NodeId};
use serde::{Deserialize, Serialize};

use crate::cascade::{Priority, StyleElement};
use crate::error::StyleError;

/// [§ 5.4.4 Declarations](https://www.w3.org/TR/css-syntax-3/#declaration)
///
/// "Conceptually, declarations are a particular instance of associating a
/// property or descriptor name with a value."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Property name, lowercase.
    pub name: String,
    /// Value text without the `!important` annotation.
    pub value: String,
    /// Whether the declaration was marked `!important`.
    #[serde(default)]
    pub important: bool,
}

impl Declaration {
    /// A normal declaration.
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.trim().to_ascii_lowercase(),
            value: value.trim().to_string(),
            important: false,
        }
    }

    /// An `!important` declaration.
    #[must_use]
    pub fn important(name: &str, value: &str) -> Self {
        Self {
            important: true,
            ..Self::new(name, value)
        }
    }

    /// The declaration's priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        Priority::from_important(self.important)
    }
}

/// Parse the body of a `style` attribute into declarations.
///
/// Declarations are separated by `;` outside of parentheses and quotes.
/// Entries without a `:` are reported and skipped.
#[must_use]
pub fn parse_declarations(text: &str) -> Vec<Declaration> {
    split_top_level(text)
        .into_iter()
        .filter(|chunk| !chunk.trim().is_empty())
        .filter_map(|chunk| {
            let Some((name, value)) = chunk.split_once(':') else {
                warn_once("Style", &format!("ignoring declaration without ':': '{}'", chunk.trim()));
                return None;
            };
            if name.trim().is_empty() {
                return None;
            }
            let (value, important) = strip_important(value);
            Some(Declaration {
                important,
                ..Declaration::new(name, value)
            })
        })
        .collect()
}

/// Serialize declarations as a `style` attribute value.
#[must_use]
pub fn serialize_declarations(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|d| {
            if d.important {
                format!("{}: {} !important;", d.name, d.value)
            } else {
                format!("{}: {};", d.name, d.value)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

fn strip_important(value: &str) -> (&str, bool) {
    let trimmed = value.trim_end();
    match trimmed.rsplit_once('!') {
        Some((value, flag)) if flag.trim().eq_ignore_ascii_case("important") => {
            (value.trim_end(), true)
        }
        _ => (trimmed, false),
    }
}

/// [§ 6.7.1 CSSStyleDeclaration](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface)
///
/// The specified (not computed) style of one element, read from and
/// written back to its `style` attribute.
pub struct ElementStyle<'a> {
    tree: &'a mut DomTree,
    node: NodeId,
}

impl<'a> ElementStyle<'a> {
    /// Bind to the inline style of `node`.
    ///
    /// # Errors
    /// Fails if `node` is not an element of `tree`.
    pub fn new(tree: &'a mut DomTree, node: NodeId) -> Result<Self, StyleError> {
        if tree.get(node).is_none() {
            return Err(StyleError::NodeNotFound(node));
        }
        if tree.as_element(node).is_none() {
            return Err(StyleError::NotAnElement(node));
        }
        Ok(Self { tree, node })
    }

    fn declarations(&self) -> Vec<Declaration> {
        self.tree
            .as_element(self.node)
            .and_then(|e| e.attr("style"))
            .map(parse_declarations)
            .unwrap_or_default()
    }

    fn store(&mut self, declarations: &[Declaration]) {
        let text = serialize_declarations(declarations);
        self.tree.set_attribute(self.node, "style", &text);
    }

    /// The effective inline entry for `name`, ranked as inline.
    #[must_use]
    pub fn style_element(&self, name: &str) -> Option<StyleElement> {
        let name = name.trim().to_ascii_lowercase();
        crate::cascade::author_layer(&self.declarations()).remove(&name)
    }

    /// The inline value of `name`, or empty.
    #[must_use]
    pub fn style_attribute(&self, name: &str) -> String {
        self.style_element(name)
            .map(|e| e.value().to_string())
            .unwrap_or_default()
    }

    /// Set `name` to `value`, replacing any previous inline declaration of
    /// it. A value of `"null"` is stored as empty.
    pub fn set_style_attribute(&mut self, name: &str, value: &str, priority: Priority) {
        let value = if value == "null" { "" } else { value };
        let name = name.trim().to_ascii_lowercase();
        let mut declarations = self.declarations();
        declarations.retain(|d| d.name != name);
        declarations.push(Declaration {
            important: priority == Priority::Important,
            ..Declaration::new(&name, value)
        });
        self.store(&declarations);
    }

    /// Remove every inline declaration of `name`, returning the value that
    /// was in effect (empty if none).
    pub fn remove_style_attribute(&mut self, name: &str) -> String {
        let previous = self.style_attribute(name);
        let name = name.trim().to_ascii_lowercase();
        let mut declarations = self.declarations();
        let before = declarations.len();
        declarations.retain(|d| d.name != name);
        if declarations.len() != before {
            self.store(&declarations);
        }
        previous
    }

    /// The serialized declaration block.
    #[must_use]
    pub fn css_text(&self) -> String {
        serialize_declarations(&self.declarations())
    }
}
