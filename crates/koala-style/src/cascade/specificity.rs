//! Selector specificity.

use std::iter::Peekable;
use std::str::Chars;

use serde::{Deserialize, Serialize};

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
///
/// "Specificities are compared by comparing the three components in order."
///
/// A leading `inline` component ranks declarations from a `style` attribute
/// above every selector. Field order matters: the derived `Ord` is the
/// lexicographic comparison used for every override decision.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Specificity {
    /// 1 for `style` attribute declarations, 0 otherwise.
    pub inline: u32,
    /// "the number of ID selectors in the selector (= A)"
    pub ids: u32,
    /// "the number of class selectors, attributes selectors, and
    /// pseudo-classes in the selector (= B)"
    pub classes: u32,
    /// "the number of type selectors and pseudo-elements in the selector (= C)"
    pub types: u32,
}

/// Pseudo-elements that may be written with a single colon.
const LEGACY_PSEUDO_ELEMENTS: &[&str] = &["before", "after", "first-line", "first-letter"];

impl Specificity {
    /// Lowest rank, used for browser built-in defaults.
    pub const DEFAULT: Self = Self::new(0, 0, 0);

    /// Rank of declarations in an element's `style` attribute.
    pub const INLINE: Self = Self {
        inline: 1,
        ids: 0,
        classes: 0,
        types: 0,
    };

    /// A selector specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self {
            inline: 0,
            ids,
            classes,
            types,
        }
    }

    /// Count the components of a selector written as text.
    ///
    /// Only the counting rules are implemented; the selector is not
    /// validated. Arguments of functional pseudo-classes are ignored.
    #[must_use]
    pub fn of_selector(selector: &str) -> Self {
        let mut spec = Self::DEFAULT;
        let mut chars = selector.chars().peekable();
        let mut compound_start = true;

        while let Some(c) = chars.next() {
            match c {
                '#' => {
                    spec.ids += 1;
                    let _ = take_ident(&mut chars);
                }
                '.' => {
                    spec.classes += 1;
                    let _ = take_ident(&mut chars);
                }
                '[' => {
                    spec.classes += 1;
                    skip_past(&mut chars, ']');
                }
                ':' => {
                    let double = chars.next_if_eq(&':').is_some();
                    let name = take_ident(&mut chars);
                    if double || LEGACY_PSEUDO_ELEMENTS.contains(&name.to_ascii_lowercase().as_str())
                    {
                        spec.types += 1;
                    } else {
                        spec.classes += 1;
                    }
                    if chars.next_if_eq(&'(').is_some() {
                        skip_past(&mut chars, ')');
                    }
                }
                // "ignore the universal selector"
                '*' => {}
                '>' | '+' | '~' | ',' => {
                    compound_start = true;
                    continue;
                }
                c if c.is_whitespace() => {
                    compound_start = true;
                    continue;
                }
                c if is_ident_char(c) => {
                    if compound_start {
                        spec.types += 1;
                    }
                    let _ = take_ident(&mut chars);
                }
                _ => {}
            }
            compound_start = false;
        }
        spec
    }
}

const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn take_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut ident = String::new();
    while let Some(c) = chars.next_if(|&c| is_ident_char(c)) {
        ident.push(c);
    }
    ident
}

/// Consume up to and including `close`, respecting nesting of the same
/// bracket pair.
fn skip_past(chars: &mut Peekable<Chars<'_>>, close: char) {
    let open = if close == ')' { '(' } else { '[' };
    let mut depth = 1;
    for c in chars.by_ref() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_beats_any_selector() {
        assert!(Specificity::INLINE > Specificity::new(100, 0, 0));
        assert!(Specificity::new(1, 0, 0) > Specificity::new(0, 20, 20));
        assert!(Specificity::new(0, 1, 0) > Specificity::new(0, 0, 9));
        assert_eq!(Specificity::DEFAULT, Specificity::default());
    }

    #[test]
    fn test_of_selector_counts() {
        assert_eq!(Specificity::of_selector("div"), Specificity::new(0, 0, 1));
        assert_eq!(Specificity::of_selector("#main"), Specificity::new(1, 0, 0));
        assert_eq!(
            Specificity::of_selector("ul#nav li.active a"),
            Specificity::new(1, 1, 3)
        );
        assert_eq!(
            Specificity::of_selector("a[href]:hover::before"),
            Specificity::new(0, 2, 2)
        );
        assert_eq!(Specificity::of_selector("p:first-line"), Specificity::new(0, 0, 2));
        assert_eq!(Specificity::of_selector("* > *"), Specificity::DEFAULT);
        assert_eq!(
            Specificity::of_selector("div:not(.a, .b) > span"),
            Specificity::new(0, 1, 2)
        );
    }
}
