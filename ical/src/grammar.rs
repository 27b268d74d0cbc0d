// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Field grammar shared by the parser and the structural validator.
//!
//! Every predicate here is pure. The parser applies them to raw values that still carry the
//! leading `:` or `;` delimiter (see [`strip_delimiter`]), while the validator applies them
//! to stored values where the delimiter is already gone.

use std::sync::OnceLock;

use regex::Regex;

/// Characters that separate a property name from its value.
pub const DELIMITERS: [char; 2] = [':', ';'];

/// Remove exactly one leading `:` or `;`, if present.
#[must_use]
pub fn strip_delimiter(raw: &str) -> &str {
    raw.strip_prefix(DELIMITERS).unwrap_or(raw)
}

/// Whether `raw` starts with a value delimiter.
#[must_use]
pub fn has_delimiter(raw: &str) -> bool {
    raw.starts_with(DELIMITERS)
}

/// Content line: a name of letters and hyphens followed by `:` or `;`.
///
/// `line` must already have its CRLF or LF terminator removed; anything may follow the
/// delimiter.
#[must_use]
pub fn is_content_line(line: &str) -> bool {
    const RE: &str = r"^[A-Za-z-]+[:;]";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    regex(&REGEX, RE).is_match(line)
}

/// TEXT field: non-empty, printable, and free of `"`, `\`, `,`, `:` and `;`.
#[must_use]
pub fn is_text_field(s: &str) -> bool {
    const RE: &str = r#"^[^\p{Cc}"\\,:;]+$"#;
    static REGEX: OnceLock<Regex> = OnceLock::new();
    regex(&REGEX, RE).is_match(s)
}

/// VERSION field: digit groups separated by single periods, e.g. `2.0` or `1.0.3`.
#[must_use]
pub fn is_version_field(s: &str) -> bool {
    const RE: &str = r"^[0-9]+(\.[0-9]+)*$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    regex(&REGEX, RE).is_match(s)
}

/// DATE-TIME stamp: optional delimiter, 8 digits, `T`, 6 digits, optional `Z`.
#[must_use]
pub fn is_date_time_field(s: &str) -> bool {
    const RE: &str = r"^[:;]?[0-9]{8}T[0-9]{6}Z?$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    regex(&REGEX, RE).is_match(s)
}

/// Alarm action: one of `AUDIO`, `DISPLAY` or `EMAIL`, case-insensitive.
#[must_use]
pub fn is_alarm_action(s: &str) -> bool {
    const RE: &str = r"(?i)^(AUDIO|DISPLAY|EMAIL)$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    regex(&REGEX, RE).is_match(s)
}

/// Date part of a stamp: exactly 8 ASCII digits.
#[must_use]
pub fn is_date_part(s: &str) -> bool {
    s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Time part of a stamp: exactly 6 ASCII digits.
#[must_use]
pub fn is_time_part(s: &str) -> bool {
    s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit())
}

/// All-digit value, as required by `REPEAT`.
#[must_use]
pub fn is_integer_field(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Duration in the RFC 5545 form, e.g. `PT15M`, `-P1D`, `P2W` or `P1DT2H`.
#[must_use]
pub fn is_duration_field(s: &str) -> bool {
    // case-sensitive
    const RE: &str = r"^[+-]?P([0-9]+W|([0-9]+D)?(T([0-9]+H)?([0-9]+M)?([0-9]+S)?)?)$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // The pattern alone accepts the bare designators `P` and `PT`
    regex(&REGEX, RE).is_match(s) && !s.ends_with('P') && !s.ends_with('T')
}

fn regex<'a>(cell: &'a OnceLock<Regex>, pattern: &str) -> &'a Regex {
    cell.get_or_init(|| Regex::new(pattern).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_line_needs_name_and_delimiter() {
        assert!(is_content_line("BEGIN:VCALENDAR"));
        assert!(is_content_line("X-WR-CALNAME;VALUE=TEXT:Work"));
        assert!(is_content_line("DESCRIPTION:"));
        assert!(!is_content_line("DESCRIPTION"));
        assert!(!is_content_line(":no name"));
        assert!(!is_content_line("X_UNDERSCORE:1"));
        assert!(!is_content_line("NAME2:1"));
        assert!(!is_content_line(""));
    }

    #[test]
    fn text_field_rejects_reserved_characters() {
        assert!(is_text_field("-//hacksw/handcal//NONSGML v1.0//EN"));
        assert!(is_text_field("valid"));
        assert!(is_text_field("café"));
        assert!(!is_text_field(""));
        let bad_inputs = [
            "a,b", "a:b", "a;b", "a\"b", "a\\b", "a\tb", "a\nb", "a\u{7f}b", "a\u{85}b",
        ];
        for bad in bad_inputs {
            assert!(!is_text_field(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn version_field_needs_single_period_groups() {
        assert!(is_version_field("2.0"));
        assert!(is_version_field("1.0.3"));
        assert!(is_version_field("2"));
        assert!(!is_version_field(""));
        assert!(!is_version_field("2..0"));
        assert!(!is_version_field(".2"));
        assert!(!is_version_field("2.0."));
        assert!(!is_version_field("v2"));
    }

    #[test]
    fn date_time_field_accepts_optional_delimiter_and_utc() {
        assert!(is_date_time_field("20171029T101010"));
        assert!(is_date_time_field(":20171029T101010Z"));
        assert!(is_date_time_field(";20171029T101010"));
        assert!(!is_date_time_field("::20171029T101010"));
        assert!(!is_date_time_field("2017102T101010"));
        assert!(!is_date_time_field("20171029T1010"));
        assert!(!is_date_time_field("20171029 101010"));
        assert!(!is_date_time_field(":"));
    }

    #[test]
    fn alarm_action_is_case_insensitive() {
        assert!(is_alarm_action("AUDIO"));
        assert!(is_alarm_action("display"));
        assert!(is_alarm_action("Email"));
        assert!(!is_alarm_action("PROCEDURE"));
        assert!(!is_alarm_action(""));
        assert!(!is_alarm_action(" AUDIO"));
    }

    #[test]
    fn stamp_parts_count_digits() {
        assert!(is_date_part("20171029"));
        assert!(!is_date_part("2017102"));
        assert!(!is_date_part("2017102a"));
        assert!(is_time_part("101010"));
        assert!(!is_time_part("1010100"));
        assert!(!is_time_part(""));
    }

    #[test]
    fn duration_field() {
        assert!(is_duration_field("PT15M"));
        assert!(is_duration_field("-PT15M"));
        assert!(is_duration_field("P1D"));
        assert!(is_duration_field("P2W"));
        assert!(is_duration_field("P1DT2H30M"));
        assert!(!is_duration_field("P"));
        assert!(!is_duration_field("PT"));
        assert!(!is_duration_field("15M"));
        assert!(!is_duration_field("pt15m"));
    }

    #[test]
    fn strips_one_delimiter() {
        assert_eq!(strip_delimiter(":2.0"), "2.0");
        assert_eq!(strip_delimiter(";VALUE"), "VALUE");
        assert_eq!(strip_delimiter("::x"), ":x");
        assert_eq!(strip_delimiter("plain"), "plain");
        assert!(has_delimiter(";x"));
        assert!(!has_delimiter("x"));
    }
}
