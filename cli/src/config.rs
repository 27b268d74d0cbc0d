// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use calparse_ical::{FoldingStyle, FormatOptions};

use crate::util::OutputFormat;

const APP_NAME: &str = "calparse";
const CALPARSE_CONFIG_ENV: &str = "CALPARSE_CONFIG";

/// Load the configuration.
///
/// The file is looked up in order: `path`, the `CALPARSE_CONFIG` environment variable, then
/// `calparse/config.toml` in the user configuration directory. An explicitly named file must
/// exist; a missing default file yields the built-in defaults.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CALPARSE_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let Some(config_dir) = get_config_dir() else {
            tracing::debug!("no user configuration directory, using defaults");
            return Ok(Config::default());
        };
        let config = config_dir.join(APP_NAME).join("config.toml");
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(Config::default());
        }
        config
    };

    std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
}

/// Configuration for the calparse application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// How parsed calendars are printed and written
    pub output: OutputConfig,
}

impl Config {
    /// Writer options derived from the output settings.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::default()
            .folding(self.output.folding.filter(|&n| n > 0))
            .folding_style(self.output.folding_style)
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// The `[output]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default format of `calparse parse`
    pub format: OutputFormat,

    /// Fold written lines longer than this many octets; `0` disables folding
    pub folding: Option<usize>,

    /// Continuation character of folded lines
    pub folding_style: FoldingStyle,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let options = FormatOptions::default();
        Self {
            format: OutputFormat::default(),
            folding: options.folding,
            folding_style: options.folding_style,
        }
    }
}

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir
}
