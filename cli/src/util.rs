// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use calparse_ical::ErrorCode;
use clap::{Arg, ArgMatches, arg, value_parser};

/// The output format for a parsed calendar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented, human-readable text
    #[default]
    Pretty,
    /// The calendar wire format
    Ics,
    /// The object graph as JSON
    Json,
}

impl OutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format, overrides the configuration")
            .value_parser(value_parser!(OutputFormat))
    }

    pub fn from(matches: &ArgMatches) -> Option<Self> {
        matches.get_one("output-format").copied()
    }
}

/// `INV_CAL (Invalid Calendar)`
pub fn describe(code: ErrorCode) -> String {
    format!("{} ({code})", code.name())
}
