// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The closed set of outcome codes reported by the parser and the validator.

/// Outcome of a parse, validation or write operation.
///
/// Every fallible operation in this crate reports exactly one code: the first cause it
/// detected. Codes are never wrapped or chained. The `Display` implementation yields the
/// fixed human-readable description, while [`ErrorCode::name`] yields the stable short name.
///
/// `Ok` is part of the enumeration so that callers displaying an outcome can treat success
/// and failure uniformly; use [`ErrorCode::from`] on a `Result` to obtain it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    thiserror::Error,
    strum::IntoStaticStr,
    strum::EnumIter,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    /// No error
    #[error("OK")]
    #[strum(serialize = "OK")]
    Ok,

    /// File name, extension or readability problem
    #[error("Invalid File")]
    #[strum(serialize = "INV_FILE")]
    InvalidFile,

    /// Structural problem with the calendar itself
    #[error("Invalid Calendar")]
    #[strum(serialize = "INV_CAL")]
    InvalidCalendar,

    /// `VERSION` is malformed or unset
    #[error("Malformed Version")]
    #[strum(serialize = "INV_VER")]
    InvalidVersion,

    /// `VERSION` appears more than once
    #[error("Duplicate Version")]
    #[strum(serialize = "DUP_VER")]
    DuplicateVersion,

    /// `PRODID` is malformed
    #[error("Malformed Product ID")]
    #[strum(serialize = "INV_PRODID")]
    InvalidProductId,

    /// `PRODID` appears more than once
    #[error("Duplicate Product ID")]
    #[strum(serialize = "DUP_PRODID")]
    DuplicateProductId,

    /// Structural problem with an event
    #[error("Invalid Event")]
    #[strum(serialize = "INV_EVENT")]
    InvalidEvent,

    /// Structural problem with an alarm
    #[error("Invalid Alarm")]
    #[strum(serialize = "INV_ALARM")]
    InvalidAlarm,

    /// `DTSTAMP` is malformed
    #[error("Malformed Date")]
    #[strum(serialize = "INV_CREATEDT")]
    InvalidCreationDateTime,

    /// Anything else, including low-severity defects in top-level custom properties
    #[error("Generic Error")]
    #[strum(serialize = "OTHER_ERROR")]
    Other,
}

impl ErrorCode {
    /// Stable short name of the code, e.g. `INV_CAL`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Whether this code reports success.
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl<T> From<Result<T, ErrorCode>> for ErrorCode {
    fn from(result: Result<T, ErrorCode>) -> Self {
        match result {
            Ok(_) => ErrorCode::Ok,
            Err(code) => code,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn descriptions_are_fixed() {
        assert_eq!(ErrorCode::Ok.to_string(), "OK");
        assert_eq!(ErrorCode::InvalidFile.to_string(), "Invalid File");
        assert_eq!(ErrorCode::InvalidVersion.to_string(), "Malformed Version");
        assert_eq!(ErrorCode::InvalidProductId.to_string(), "Malformed Product ID");
        assert_eq!(ErrorCode::InvalidCreationDateTime.to_string(), "Malformed Date");
        assert_eq!(ErrorCode::Other.to_string(), "Generic Error");
    }

    #[test]
    fn short_names_parse_back() {
        for code in ErrorCode::iter() {
            assert_eq!(ErrorCode::from_str(code.name()).unwrap(), code);
        }
        assert!(ErrorCode::from_str("NOT_A_CODE").is_err());
    }

    #[test]
    fn enumeration_is_closed() {
        assert_eq!(ErrorCode::iter().count(), 11);
        assert_eq!(ErrorCode::iter().filter(|c| c.is_ok()).count(), 1);
    }

    #[test]
    fn converts_from_result() {
        let ok: Result<u8, ErrorCode> = Ok(1);
        let err: Result<u8, ErrorCode> = Err(ErrorCode::DuplicateVersion);
        assert_eq!(ErrorCode::from(ok), ErrorCode::Ok);
        assert_eq!(ErrorCode::from(err), ErrorCode::DuplicateVersion);
    }
}
