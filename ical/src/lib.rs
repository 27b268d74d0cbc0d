// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parse, validate and render iCalendar-like calendars.
//!
//! Parsing runs in two layers. The [`syntax`] layer unfolds physical lines into properties
//! and extracts `BEGIN`/`END` containers; the [`semantic`] layer builds calendars, events and
//! alarms from them. The [`validate`] module re-checks a finished graph independently of how
//! it was built, and [`formatter`] and [`printer`] render it again.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::float_cmp, clippy::single_match_else)]

mod error;
pub mod formatter;
pub mod grammar;
pub mod keyword;
mod parser;
pub mod printer;
pub mod property;
pub mod semantic;
pub mod syntax;
pub mod validate;

pub use crate::error::ErrorCode;
pub use crate::formatter::{FoldingStyle, FormatError, FormatOptions, format, write_calendar_file};
pub use crate::parser::{parse, parse_file};
pub use crate::printer::print_calendar;
pub use crate::property::Property;
pub use crate::semantic::{Alarm, Calendar, DateTimeStamp, Event};
pub use crate::validate::{Validate, validate};
