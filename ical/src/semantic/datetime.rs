// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};

use crate::error::ErrorCode;
use crate::grammar::{is_date_time_field, strip_delimiter};

/// A `DATE-TIME` stamp such as `20171029T101010Z`, kept as its textual parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTimeStamp {
    /// `YYYYMMDD`
    pub date: String,

    /// `HHMMSS`
    pub time: String,

    /// Whether the stamp carried the trailing `Z`
    pub is_utc: bool,
}

impl DateTimeStamp {
    /// Create a stamp from its parts.
    pub fn new(date: impl Into<String>, time: impl Into<String>, is_utc: bool) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            is_utc,
        }
    }

    /// Parse a raw stamp value, with or without its leading delimiter.
    ///
    /// ## Errors
    ///
    /// [`ErrorCode::InvalidCreationDateTime`] if the value is not an 8-digit date, a `T`,
    /// a 6-digit time and an optional `Z`.
    pub fn parse(raw: &str) -> Result<Self, ErrorCode> {
        if !is_date_time_field(raw) {
            return Err(ErrorCode::InvalidCreationDateTime);
        }

        let stamp = strip_delimiter(raw);
        let (stamp, is_utc) = match stamp.strip_suffix('Z') {
            Some(local) => (local, true),
            None => (stamp, false),
        };

        match stamp.split_once('T') {
            Some((date, time)) if !date.is_empty() && !time.is_empty() => {
                Ok(Self::new(date, time, is_utc))
            }
            _ => Err(ErrorCode::InvalidCreationDateTime),
        }
    }
}

impl Display for DateTimeStamp {
    /// Wire form, e.g. `20171029T101010Z`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)?;
        if self.is_utc {
            write!(f, "Z")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_local_and_utc_stamps() {
        assert_eq!(
            DateTimeStamp::parse(":20171029T101010").unwrap(),
            DateTimeStamp::new("20171029", "101010", false)
        );
        assert_eq!(
            DateTimeStamp::parse(";20171029T101010Z").unwrap(),
            DateTimeStamp::new("20171029", "101010", true)
        );
        assert_eq!(
            DateTimeStamp::parse("20250101T000000Z").unwrap(),
            DateTimeStamp::new("20250101", "000000", true)
        );
    }

    #[test]
    fn rejects_wrong_digit_counts() {
        for raw in [
            ":2017102T101010",
            ":201710290T101010",
            ":20171029T10101",
            ":20171029T1010100",
            ":20171029",
            ":",
            "",
            ":20171029T101010ZZ",
        ] {
            assert_eq!(
                DateTimeStamp::parse(raw),
                Err(ErrorCode::InvalidCreationDateTime),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn displays_wire_form() {
        assert_eq!(
            DateTimeStamp::new("20171029", "101010", true).to_string(),
            "20171029T101010Z"
        );
        assert_eq!(
            DateTimeStamp::new("20171029", "101010", false).to_string(),
            "20171029T101010"
        );
    }
}
