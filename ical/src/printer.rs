// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Human-readable rendering of a calendar.

use crate::error::ErrorCode;
use crate::formatter::format_version;
use crate::property::Property;
use crate::semantic::{Alarm, Calendar, DateTimeStamp, Event};
use crate::validate::Validate;

/// Render a calendar as indented text framed by dash rules as wide as its longest line.
///
/// ## Errors
///
/// The validator's code if the calendar is invalid; nothing is rendered in that case.
///
/// ## Examples
///
/// ```
/// # use calparse_ical::{Calendar, DateTimeStamp, Event, printer::print_calendar};
/// let mut calendar = Calendar::new(2.0, "example");
/// calendar.events.push(Event::new("evt-1", DateTimeStamp::new("20171029", "101010", false)));
///
/// let text = print_calendar(&calendar).unwrap();
/// assert!(text.contains(" PRODUCT ID: example\n"));
/// assert!(text.contains("  UID: evt-1\n"));
/// ```
pub fn print_calendar(calendar: &Calendar) -> Result<String, ErrorCode> {
    calendar.validate()?;

    let mut lines = vec![
        format!(" PRODUCT ID: {}", calendar.product_id),
        format!(" VERSION: {}", format_version(calendar.version)),
    ];

    for event in &calendar.events {
        lines.push(String::new());
        push_event(&mut lines, event);
    }

    if !calendar.properties.is_empty() {
        lines.push(String::new());
        lines.push(" CALENDAR PROPERTIES:".to_owned());
        push_properties(&mut lines, "  ", &calendar.properties);
    }

    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let rule = "-".repeat(width);

    let mut out = String::with_capacity((width + 1) * (lines.len() + 2));
    out.push_str(&rule);
    out.push('\n');
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    Ok(out)
}

fn push_event(lines: &mut Vec<String>, event: &Event) {
    lines.push(" CALENDAR EVENT:".to_owned());
    lines.push(format!("  UID: {}", event.uid));
    lines.push(format!(
        "  CREATION TIMESTAMP: {}",
        pretty_stamp(&event.creation_timestamp)
    ));

    for alarm in &event.alarms {
        push_alarm(lines, alarm);
    }

    if !event.properties.is_empty() {
        lines.push("  EVENT PROPERTIES:".to_owned());
        push_properties(lines, "    ", &event.properties);
    }
}

fn push_alarm(lines: &mut Vec<String>, alarm: &Alarm) {
    lines.push("  ALARM:".to_owned());
    lines.push(format!("    ACTION: {}", alarm.action));
    lines.push(format!("    TRIGGER: {}", alarm.trigger));

    if !alarm.properties.is_empty() {
        lines.push("    ALARM PROPERTIES:".to_owned());
        push_properties(lines, "      ", &alarm.properties);
    }
}

fn push_properties(lines: &mut Vec<String>, indent: &str, properties: &[Property]) {
    lines.extend(properties.iter().map(|prop| format!("{indent}{prop}")));
}

fn pretty_stamp(stamp: &DateTimeStamp) -> String {
    let zone = if stamp.is_utc { "Z" } else { "" };
    format!("{} {}{zone}", stamp.date, stamp.time)
}
