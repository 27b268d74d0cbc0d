// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Line unfolding: physical lines in, logical properties out.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ErrorCode;
use crate::grammar::is_content_line;
use crate::keyword::ICS_EXTENSION;
use crate::property::Property;

/// Read a calendar file into its logical properties.
///
/// ## Errors
///
/// - [`ErrorCode::InvalidFile`] if the name does not end in `.ics`, or the file cannot be
///   opened or read.
/// - [`ErrorCode::InvalidCalendar`] if any line is malformed or the file holds no properties.
pub fn unfold_file(path: impl AsRef<Path>) -> Result<Vec<Property>, ErrorCode> {
    let path = path.as_ref();
    let has_ics_extension = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ICS_EXTENSION));
    if !has_ics_extension {
        tracing::debug!(path = %path.display(), "rejecting file without .ics extension");
        return Err(ErrorCode::InvalidFile);
    }

    let file = File::open(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "failed to open calendar file");
        ErrorCode::InvalidFile
    })?;

    tracing::debug!(path = %path.display(), "unfolding calendar file");
    unfold_reader(BufReader::new(file))
}

/// Unfold lines from any buffered reader.
///
/// - Lines starting with `;` are comments and are dropped.
/// - Lines starting with a space or tab continue the previous property: the first
///   whitespace character is removed and the rest is appended to its value.
/// - Every other line must be a content line (see [`is_content_line`]).
///
/// Trailing CRLF or LF is removed from every line. Bytes that are not valid UTF-8 are
/// replaced rather than rejected.
///
/// ## Errors
///
/// - [`ErrorCode::InvalidFile`] if reading fails.
/// - [`ErrorCode::InvalidCalendar`] if a continuation has nothing to continue, a line is
///   malformed, or no property was read.
pub fn unfold_reader<R: BufRead>(mut reader: R) -> Result<Vec<Property>, ErrorCode> {
    let mut properties: Vec<Property> = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(|e| {
            tracing::debug!(error = %e, "failed to read calendar source");
            ErrorCode::InvalidFile
        })?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let raw = String::from_utf8_lossy(&buf);
        let line = trim_line_ending(&raw);

        if line.starts_with(';') {
            tracing::trace!(line_no, "skipping comment");
            continue;
        }

        if let Some(rest) = line.strip_prefix([' ', '\t']) {
            let Some(last) = properties.last_mut() else {
                tracing::debug!(line_no, "continuation line without a property to continue");
                return Err(ErrorCode::InvalidCalendar);
            };
            last.value.push_str(rest);
            continue;
        }

        match Property::from_line(line) {
            Some(prop) if is_content_line(line) => properties.push(prop),
            _ => {
                tracing::debug!(line_no, line, "malformed content line");
                return Err(ErrorCode::InvalidCalendar);
            }
        }
    }

    if properties.is_empty() {
        tracing::debug!("calendar source holds no properties");
        return Err(ErrorCode::InvalidCalendar);
    }

    tracing::debug!(lines = line_no, properties = properties.len(), "unfolded");
    Ok(properties)
}

fn trim_line_ending(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}
