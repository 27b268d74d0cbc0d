// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Name/value properties, the unit every container is made of.

use std::fmt::{self, Display};

use crate::grammar::{DELIMITERS, has_delimiter, strip_delimiter};

/// A single `NAME<delim><value>` property.
///
/// The value is opaque. Values read from a file keep their leading `:` or `;` delimiter, so
/// that parameters such as `;TZID=Europe/Berlin:20250101T000000` survive unchanged; values
/// assembled by hand may omit it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    /// Property name, e.g. `SUMMARY`
    pub name: String,

    /// Raw value, possibly starting with the delimiter
    pub value: String,
}

impl Property {
    /// Create a property from its name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Split a content line into name and value at the first `:` or `;`.
    ///
    /// The delimiter stays at the front of the value. Returns `None` if the line has no
    /// delimiter.
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        let at = line.find(DELIMITERS)?;
        let (name, value) = line.split_at(at);
        Some(Self::new(name, value))
    }

    /// Whether the property has the given name, ignoring ASCII case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// The value without its leading delimiter.
    #[must_use]
    pub fn text(&self) -> &str {
        strip_delimiter(&self.value)
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if has_delimiter(&self.value) {
            write!(f, "{}{}", self.name, self.value)
        } else {
            write!(f, "{}:{}", self.name, self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_delimiter() {
        let prop = Property::from_line("DTSTART;TZID=Europe/Berlin:20250101T000000").unwrap();
        assert_eq!(prop.name, "DTSTART");
        assert_eq!(prop.value, ";TZID=Europe/Berlin:20250101T000000");
        assert_eq!(prop.text(), "TZID=Europe/Berlin:20250101T000000");

        let prop = Property::from_line("SUMMARY:").unwrap();
        assert_eq!(prop.value, ":");
        assert_eq!(prop.text(), "");

        assert!(Property::from_line("SUMMARY").is_none());
    }

    #[test]
    fn display_restores_the_line() {
        let line = "X-FOO;BAR=1:baz";
        assert_eq!(Property::from_line(line).unwrap().to_string(), line);
        assert_eq!(Property::new("SUMMARY", "Lunch").to_string(), "SUMMARY:Lunch");
    }

    #[test]
    fn names_compare_case_insensitively() {
        let prop = Property::new("uid", ":1");
        assert!(prop.is_named("UID"));
        assert!(!prop.is_named("UIDX"));
    }
}
