//! One cascade entry.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::Specificity;

/// [§ 6.4 Important Declarations](https://www.w3.org/TR/css-cascade-4/#importance)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// A declaration without `!important`.
    #[default]
    Normal,
    /// "A declaration is important if it has a !important annotation"
    Important,
}

impl Priority {
    /// `Important` when `important` is set.
    #[must_use]
    pub const fn from_important(important: bool) -> Self {
        if important {
            Self::Important
        } else {
            Self::Normal
        }
    }

    /// The CSSOM priority string: `"important"` or empty.
    #[must_use]
    pub const fn as_css_str(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Important => "important",
        }
    }
}

/// A declared value together with the rank it was declared at.
///
/// Entries are never mutated; a winning declaration replaces the stored
/// entry wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    name: String,
    value: String,
    priority: Priority,
    specificity: Specificity,
    source_order: u32,
}

impl StyleElement {
    /// A cascade entry. The property name is lowercased.
    #[must_use]
    pub fn new(
        name: &str,
        value: &str,
        priority: Priority,
        specificity: Specificity,
        source_order: u32,
    ) -> Self {
        Self {
            name: name.trim().to_ascii_lowercase(),
            value: value.trim().to_string(),
            priority,
            specificity,
            source_order,
        }
    }

    /// A built-in default at the lowest rank.
    #[must_use]
    pub fn default_value(name: &str, value: &str) -> Self {
        Self::new(name, value, Priority::Normal, Specificity::DEFAULT, 0)
    }

    /// Lowercased property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared value, as written.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Normal or important.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Rank of the selector (or `style` attribute) that declared it.
    #[must_use]
    pub const fn specificity(&self) -> Specificity {
        self.specificity
    }

    /// Position in application order.
    #[must_use]
    pub const fn source_order(&self) -> u32 {
        self.source_order
    }

    /// Whether the entry carries `!important`.
    #[must_use]
    pub fn is_important(&self) -> bool {
        self.priority == Priority::Important
    }

    /// Whether this entry, applied after `stored`, takes its place.
    ///
    /// Important beats normal regardless of specificity. Within one
    /// priority tier the higher specificity wins, and at equal specificity
    /// the later application wins.
    #[must_use]
    pub fn supersedes(&self, stored: &Self) -> bool {
        match (self.priority, stored.priority) {
            (Priority::Normal, Priority::Important) => false,
            (Priority::Important, Priority::Normal) => true,
            _ => self.specificity >= stored.specificity,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn entry(value: &str, priority: Priority, spec: Specificity) -> StyleElement {
        StyleElement::new("Color", value, priority, spec, 0)
    }

    #[test]
    fn test_name_is_normalized() {
        let e = entry(" red ", Priority::Normal, Specificity::DEFAULT);
        assert_eq!(e.name(), "color");
        assert_eq!(e.value(), "red");
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!(Priority::from_str("IMPORTANT"), Ok(Priority::Important));
        assert_eq!(Priority::Important.as_css_str(), "important");
        assert_eq!(Priority::Normal.as_css_str(), "");
        assert_eq!(Priority::from_important(false), Priority::Normal);
    }

    #[test]
    fn test_supersedes() {
        let low = Specificity::new(0, 0, 1);
        let high = Specificity::new(1, 0, 0);
        let normal_high = entry("a", Priority::Normal, high);
        let important_low = entry("b", Priority::Important, low);

        assert!(important_low.supersedes(&normal_high));
        assert!(!normal_high.supersedes(&important_low));
        assert!(entry("c", Priority::Normal, low).supersedes(&entry("d", Priority::Normal, low)));
        assert!(!entry("c", Priority::Normal, low).supersedes(&normal_high));
        assert!(
            !entry("e", Priority::Important, low)
                .supersedes(&entry("f", Priority::Important, high))
        );
    }
}
