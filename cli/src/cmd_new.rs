// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use calparse_ical::grammar::{is_alarm_action, is_duration_field, is_text_field};
use calparse_ical::keyword::{KW_ACTION_AUDIO, KW_ACTION_DISPLAY, KW_ACTION_EMAIL};
use calparse_ical::{Alarm, Calendar, DateTimeStamp, Event, Validate, write_calendar_file};
use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;

use crate::config::Config;
use crate::util::describe;

#[derive(Debug, Clone)]
pub struct CmdNew {
    pub product_id: String,
    pub version: f64,
    pub uid: String,
    pub creation_timestamp: DateTimeStamp,
    /// Action and trigger of the single alarm, if any
    pub alarm: Option<(String, String)>,
    pub output: PathBuf,
    pub force: bool,
}

impl CmdNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create a calendar file holding one event")
            .arg(
                arg!(--prodid <PRODID> "Product identifier")
                    .required(true)
                    .value_parser(parse_text),
            )
            .arg(
                arg!(cal_version: --version <VERSION> "Calendar version, e.g. 2.0")
                    .required(true)
                    .value_parser(parse_version),
            )
            .arg(
                arg!(--uid <UID> "Unique identifier of the event")
                    .required(true)
                    .value_parser(parse_text),
            )
            .arg(
                arg!(--dtstamp <DTSTAMP> "Creation timestamp, e.g. 20171029T101010Z")
                    .required(true)
                    .value_parser(parse_timestamp),
            )
            .arg(
                arg!(--action <ACTION> "Alarm action")
                    .long_help(format!(
                        "Alarm action, one of {KW_ACTION_AUDIO}, {KW_ACTION_DISPLAY} or \
{KW_ACTION_EMAIL}. Requires --trigger."
                    ))
                    .required(false)
                    .requires("trigger")
                    .value_parser(parse_action),
            )
            .arg(
                arg!(--trigger <TRIGGER> "Alarm trigger as a duration, e.g. -PT15M")
                    .required(false)
                    .requires("action")
                    .allow_hyphen_values(true)
                    .value_parser(parse_trigger),
            )
            .arg(
                arg!(-o --output <FILE> "Path of the .ics file to write")
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(arg!(-f --force "Overwrite the output file if it exists"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> T {
            match matches.get_one::<T>(id) {
                Some(value) => value.clone(),
                None => unreachable!("{id} is a required argument"),
            }
        }

        let action = matches.get_one::<String>("action").cloned();
        let trigger = matches.get_one::<String>("trigger").cloned();
        Self {
            product_id: required(matches, "prodid"),
            version: required(matches, "cal_version"),
            uid: required(matches, "uid"),
            creation_timestamp: required(matches, "dtstamp"),
            alarm: action.zip(trigger),
            output: required(matches, "output"),
            force: matches.get_flag("force"),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "creating calendar...");
        if self.output.exists() && !self.force {
            return Err(format!(
                "{} already exists, pass --force to overwrite it",
                self.output.display()
            )
            .into());
        }

        let calendar = self.build();
        calendar
            .validate()
            .map_err(|code| format!("refusing to write: {}", describe(code)))?;
        write_calendar_file(&self.output, &calendar, config.format_options())?;

        let message = format!("Wrote {} successfully!", self.output.display());
        println!("{}", message.green());
        Ok(())
    }

    /// Assemble the calendar graph described by the arguments.
    pub fn build(&self) -> Calendar {
        let mut event = Event::new(self.uid.clone(), self.creation_timestamp.clone());
        if let Some((action, trigger)) = &self.alarm {
            event.alarms.push(Alarm::new(action.clone(), trigger.clone()));
        }

        let mut calendar = Calendar::new(self.version, self.product_id.clone());
        calendar.events.push(event);
        calendar
    }
}

fn parse_text(value: &str) -> Result<String, String> {
    if is_text_field(value) {
        Ok(value.to_owned())
    } else {
        Err("expected printable text without quotes, backslashes, commas, colons or semicolons"
            .to_owned())
    }
}

fn parse_version(value: &str) -> Result<f64, String> {
    Calendar::parse_version(value).map_err(describe)
}

fn parse_timestamp(value: &str) -> Result<DateTimeStamp, String> {
    DateTimeStamp::parse(value).map_err(describe)
}

fn parse_action(value: &str) -> Result<String, String> {
    if is_alarm_action(value) {
        Ok(value.to_ascii_uppercase())
    } else {
        Err(format!(
            "expected {KW_ACTION_AUDIO}, {KW_ACTION_DISPLAY} or {KW_ACTION_EMAIL}"
        ))
    }
}

fn parse_trigger(value: &str) -> Result<String, String> {
    if is_duration_field(value) {
        Ok(value.to_owned())
    } else {
        Err("expected a duration such as PT15M or -P1D".to_owned())
    }
}
