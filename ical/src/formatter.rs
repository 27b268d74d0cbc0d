// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar writer.
//!
//! This module turns a [`Calendar`] back into the wire format, writing to any
//! `std::io::Write` implementer. Graphs that fail validation are refused.
//!
//! # Example
//!
//! ```
//! use calparse_ical::formatter::format;
//! use calparse_ical::{Calendar, DateTimeStamp, Event};
//!
//! let mut calendar = Calendar::new(2.0, "example");
//! calendar.events.push(Event::new(
//!     "evt-1",
//!     DateTimeStamp::new("20171029", "101010", true),
//! ));
//!
//! let ics = format(&calendar)?;
//! assert!(ics.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:example\r\n"));
//! # Ok::<(), calparse_ical::formatter::FormatError>(())
//! ```

mod component;

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::ErrorCode;
use crate::formatter::component::write_calendar;
use crate::grammar::{DELIMITERS, is_version_field};
use crate::keyword::ICS_EXTENSION;
use crate::semantic::Calendar;
use crate::validate::Validate;

/// Errors that can occur while writing a calendar.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The calendar, or the destination name, was rejected before anything was written
    #[error("{0}")]
    Rejected(#[from] ErrorCode),

    /// Writing to the destination failed
    #[error("failed to write calendar: {0}")]
    Io(#[from] io::Error),
}

impl FormatError {
    /// The outcome code for this error. I/O failures are reported as
    /// [`ErrorCode::InvalidFile`].
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Rejected(code) => *code,
            Self::Io(_) => ErrorCode::InvalidFile,
        }
    }
}

/// Convenience function to format a `Calendar` to a `String` (uses default options).
///
/// # Errors
///
/// Returns an error if the calendar fails validation or writing to the internal buffer fails.
pub fn format(calendar: &Calendar) -> Result<String, FormatError> {
    FormatOptions::default().write_to_string(calendar)
}

/// Write a calendar to a new `.ics` file, replacing any existing file.
///
/// # Errors
///
/// - [`ErrorCode::InvalidFile`] if the name does not end in `.ics`;
/// - the validator's code if the calendar is invalid;
/// - an I/O error if the file cannot be created or written.
pub fn write_calendar_file(
    path: impl AsRef<Path>,
    calendar: &Calendar,
    options: FormatOptions,
) -> Result<(), FormatError> {
    let path = path.as_ref();
    let has_ics_extension = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ICS_EXTENSION));
    if !has_ics_extension {
        return Err(ErrorCode::InvalidFile.into());
    }

    // validate before touching the file system
    calendar.validate()?;

    tracing::debug!(path = %path.display(), "writing calendar file");
    let mut writer = BufWriter::new(File::create(path)?);
    options.write(calendar, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Whole versions keep one decimal place, so `2.0` is not shortened to `2`.
pub(crate) fn format_version(version: f64) -> String {
    if version.fract() == 0.0 {
        format!("{version:.1}")
    } else {
        format!("{version}")
    }
}

/// Formatting options for the calendar writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)`.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }

    /// Validate a `Calendar` and write it to any `Write` implementer.
    ///
    /// # Errors
    /// Returns an error if the calendar fails validation, its version has no wire form (for
    /// example a negative number), or writing fails.
    pub fn write(&self, calendar: &Calendar, w: &mut impl Write) -> Result<(), FormatError> {
        calendar.validate()?;
        // negative versions pass validation but cannot be read back
        if !is_version_field(&format_version(calendar.version)) {
            return Err(ErrorCode::InvalidVersion.into());
        }
        let mut formatter = Formatter::new(w, *self);
        write_calendar(&mut formatter, calendar)?;
        formatter.flush()?;
        Ok(())
    }

    /// Validate a `Calendar` and write it to a `String`.
    ///
    /// # Errors
    /// Returns an error if the calendar fails validation or writing fails.
    pub fn write_to_string(&self, calendar: &Calendar) -> Result<String, FormatError> {
        let mut buffer = Vec::new();
        self.write(calendar, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }
}

/// Line folding style.
///
/// Folded lines start with CRLF followed by a whitespace character (SPACE or TAB), which the
/// unfolder removes again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FoldingStyle {
    /// CRLF + SPACE
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    /// Get the folding sequence for this style.
    #[must_use]
    pub(crate) const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Space => b"\r\n ",
            Self::Tab => b"\r\n\t",
        }
    }

    /// Get the length of the continuation character after CRLF.
    #[must_use]
    pub(crate) const fn continuation_len() -> usize {
        1 // Both SPACE and TAB are 1 byte
    }
}

/// Line-folding writer used by the calendar writer.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    /// The underlying writer.
    writer: W,
    /// Formatting options.
    options: FormatOptions,
    /// Current line length in bytes (excluding the pending CRLF).
    line_length: usize,
    /// Whether the first `:` or `;` of the current line is still to come. No fold is
    /// inserted before it, since a continuation cannot start inside a property name.
    in_name: bool,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line_length: 0,
            in_name: true,
        }
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a `Calendar` without validating it first.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_unchecked(&mut self, calendar: &Calendar) -> io::Result<()> {
        write_calendar(self, calendar)
    }

    /// Write a CRLF line ending.
    pub(crate) fn writeln(&mut self) -> io::Result<()> {
        write!(self.writer, "\r\n")?;
        self.line_length = 0;
        self.in_name = true;
        Ok(())
    }

    /// Insert line folding: CRLF + whitespace.
    fn insert_fold(&mut self) -> io::Result<()> {
        self.writer
            .write_all(self.options.folding_style.as_bytes())?;
        self.line_length = FoldingStyle::continuation_len();
        Ok(())
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(max_len) = self
            .options
            .folding
            .filter(|&n| n > FoldingStyle::continuation_len())
        else {
            // Folding disabled, write directly
            return self.writer.write(buf);
        };

        let mut remaining = buf;
        if self.in_name {
            let name_len = remaining
                .iter()
                .position(|&b| is_delimiter(b))
                .map_or(remaining.len(), |at| at + 1);
            let (name, rest) = remaining.split_at(name_len);
            self.writer.write_all(name)?;
            self.line_length += name.len();
            self.in_name = !name.last().copied().is_some_and(is_delimiter);
            remaining = rest;
        }

        #[expect(clippy::indexing_slicing)]
        while !remaining.is_empty() {
            if self.line_length >= max_len {
                self.insert_fold()?;
            }

            let available = max_len - self.line_length;
            let mut len = find_safe_write_length(remaining, available);
            if len == 0 {
                // The next character does not fit on this line
                if self.line_length > FoldingStyle::continuation_len() {
                    self.insert_fold()?;
                    continue;
                }
                len = first_char_length(remaining);
            }

            self.writer.write_all(&remaining[..len])?;
            self.line_length += len;
            remaining = &remaining[len..];
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Find the maximum number of bytes we can write without breaking a UTF-8 sequence.
fn find_safe_write_length(buf: &[u8], max_bytes: usize) -> usize {
    if max_bytes >= buf.len() {
        return buf.len();
    }

    let mut pos = max_bytes;
    while pos > 0 && buf.get(pos).is_some_and(|&b| is_continuation_byte(b)) {
        pos -= 1;
    }
    pos
}

/// Length of the UTF-8 sequence at the start of `buf`.
fn first_char_length(buf: &[u8]) -> usize {
    1 + buf
        .iter()
        .skip(1)
        .take_while(|&&b| is_continuation_byte(b))
        .count()
}

const fn is_continuation_byte(byte: u8) -> bool {
    (byte & 0xC0) == 0x80
}

fn is_delimiter(byte: u8) -> bool {
    DELIMITERS.contains(&char::from(byte))
}
