// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for parsing, validating and creating calendar files.

mod cli;
mod cmd_generate_completion;
mod cmd_new;
mod cmd_parse;
mod cmd_validate;
mod config;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;
