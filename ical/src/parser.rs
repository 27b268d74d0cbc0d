// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use crate::error::ErrorCode;
use crate::semantic::Calendar;
use crate::syntax::{unfold_file, unfold_reader};

/// Parse a calendar from source text.
///
/// ## Errors
///
/// The code of the first problem found. No partial calendar is returned.
///
/// ## Examples
///
/// Parsing valid source returns the calendar
///
/// ```
/// # use calparse_ical::parse;
/// let src = "\
/// BEGIN:VCALENDAR\r\n\
/// VERSION:2.0\r\n\
/// PRODID:-//example//calendar//EN\r\n\
/// BEGIN:VEVENT\r\n\
/// UID:evt-1\r\n\
/// DTSTAMP:20171029T101010Z\r\n\
/// SUMMARY:Test Event\r\n\
/// END:VEVENT\r\n\
/// END:VCALENDAR\r\n\
/// ";
/// let calendar = parse(src).unwrap();
/// assert_eq!(calendar.events[0].uid, "evt-1");
/// ```
///
/// Invalid source reports the first problem
///
/// ```
/// # use calparse_ical::{ErrorCode, parse};
/// let src = "\
/// BEGIN:VCALENDAR\r\n\
/// VERSION:2.0\r\n\
/// VERSION:2.0\r\n\
/// END:VCALENDAR\r\n\
/// ";
/// assert_eq!(parse(src), Err(ErrorCode::InvalidCalendar)); // no events
/// ```
pub fn parse(src: &str) -> Result<Calendar, ErrorCode> {
    let props = unfold_reader(src.as_bytes())?;
    Calendar::try_from(props)
}

/// Parse a calendar from a `.ics` file.
///
/// ## Errors
///
/// [`ErrorCode::InvalidFile`] if the file name or the file itself is unusable, otherwise the
/// code of the first problem found in its contents.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Calendar, ErrorCode> {
    let path = path.as_ref();
    let props = unfold_file(path)?;
    let calendar = Calendar::try_from(props).inspect_err(|code| {
        tracing::debug!(path = %path.display(), code = code.name(), "failed to parse calendar");
    })?;
    tracing::debug!(path = %path.display(), events = calendar.events.len(), "parsed calendar");
    Ok(calendar)
}
