// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use calparse_ical::{Calendar, parse_file, print_calendar};
use clap::{ArgMatches, Command, ValueHint, arg, value_parser};

use crate::config::Config;
use crate::util::{OutputFormat, describe};

#[derive(Debug, Clone)]
pub struct CmdParse {
    pub file: PathBuf,
    pub output_format: Option<OutputFormat>,
}

impl CmdParse {
    pub const NAME: &str = "parse";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("show")
            .about("Parse a calendar file and print it")
            .arg(
                arg!(file: <FILE> "Path to the .ics file")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let Some(file) = matches.get_one::<PathBuf>("file") else {
            unreachable!("file is a required argument");
        };
        Self {
            file: file.clone(),
            output_format: OutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "parsing calendar...");
        let calendar = parse_file(&self.file)
            .map_err(|code| format!("{}: {}", self.file.display(), describe(code)))?;

        let format = self.output_format.unwrap_or(config.output.format);
        let text = render(&calendar, format, config)?;
        print!("{text}");
        Ok(())
    }
}

/// Render a parsed calendar in the requested format, ending with a newline.
fn render(
    calendar: &Calendar,
    format: OutputFormat,
    config: &Config,
) -> Result<String, Box<dyn Error>> {
    let text = match format {
        OutputFormat::Pretty => print_calendar(calendar)?,
        OutputFormat::Ics => config.format_options().write_to_string(calendar)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(calendar)?;
            json.push('\n');
            json
        }
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calparse_ical::{Alarm, DateTimeStamp, Event, FoldingStyle};

    fn calendar() -> Calendar {
        let mut event = Event::new("evt-1", DateTimeStamp::new("20171029", "101010", true));
        event.alarms.push(Alarm::new("DISPLAY", "-PT15M"));
        let mut calendar = Calendar::new(2.0, "calparse");
        calendar.events.push(event);
        calendar
    }

    #[test]
    fn parses_file_and_format_flag() {
        let cmd = Command::new("test").subcommand(CmdParse::command());
        let matches = cmd
            .try_get_matches_from(["test", "parse", "a.ics", "--output-format", "json"])
            .unwrap();
        let sub_matches = matches.subcommand_matches(CmdParse::NAME).unwrap();
        let parsed = CmdParse::from(sub_matches);
        assert_eq!(parsed.file, PathBuf::from("a.ics"));
        assert_eq!(parsed.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn requires_a_file() {
        let cmd = Command::new("test").subcommand(CmdParse::command());
        assert!(cmd.try_get_matches_from(["test", "parse"]).is_err());
    }

    #[test]
    fn renders_pretty_text() {
        let text = render(&calendar(), OutputFormat::Pretty, &Config::default()).unwrap();
        assert!(text.contains(" PRODUCT ID: calparse"));
        assert!(text.contains("    ACTION: DISPLAY"));
    }

    #[test]
    fn renders_ics_with_configured_folding() {
        let mut config = Config::default();
        config.output.folding = Some(10);
        config.output.folding_style = FoldingStyle::Tab;

        let text = render(&calendar(), OutputFormat::Ics, &config).unwrap();
        assert!(text.starts_with("BEGIN:VCAL\r\n\tENDAR\r\n"));
    }

    #[test]
    fn renders_json_graph() {
        let text = render(&calendar(), OutputFormat::Json, &Config::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["product_id"], "calparse");
        assert_eq!(value["events"][0]["uid"], "evt-1");
        assert_eq!(value["events"][0]["alarms"][0]["trigger"], "-PT15M");
    }

    #[test]
    fn invalid_graph_is_not_rendered() {
        let invalid = Calendar::new(2.0, "calparse");
        assert!(render(&invalid, OutputFormat::Pretty, &Config::default()).is_err());
        assert!(render(&invalid, OutputFormat::Ics, &Config::default()).is_err());
    }
}
