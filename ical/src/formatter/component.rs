// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Component formatting for calendars, events and alarms.

use std::io::{self, Write};

use crate::formatter::{Formatter, format_version};
use crate::keyword::{
    KW_ACTION, KW_BEGIN, KW_DTSTAMP, KW_END, KW_PRODID, KW_TRIGGER, KW_UID, KW_VALARM,
    KW_VCALENDAR, KW_VERSION, KW_VEVENT,
};
use crate::property::Property;
use crate::semantic::{Alarm, Calendar, Event};

/// Format a `Calendar` component.
pub fn write_calendar<W: Write>(f: &mut Formatter<W>, calendar: &Calendar) -> io::Result<()> {
    with_block(f, KW_VCALENDAR, |f| {
        // Required properties
        write_line(f, KW_VERSION, &format_version(calendar.version))?;
        write_line(f, KW_PRODID, &calendar.product_id)?;

        for prop in &calendar.properties {
            write_property(f, prop)?;
        }

        for event in &calendar.events {
            write_event(f, event)?;
        }

        Ok(())
    })
}

fn write_event<W: Write>(f: &mut Formatter<W>, event: &Event) -> io::Result<()> {
    with_block(f, KW_VEVENT, |f| {
        write_line(f, KW_UID, &event.uid)?;
        write_line(f, KW_DTSTAMP, &event.creation_timestamp)?;

        for prop in &event.properties {
            write_property(f, prop)?;
        }

        for alarm in &event.alarms {
            write_alarm(f, alarm)?;
        }

        Ok(())
    })
}

fn write_alarm<W: Write>(f: &mut Formatter<W>, alarm: &Alarm) -> io::Result<()> {
    with_block(f, KW_VALARM, |f| {
        write_line(f, KW_ACTION, &alarm.action)?;
        write_line(f, KW_TRIGGER, &alarm.trigger)?;

        for prop in &alarm.properties {
            write_property(f, prop)?;
        }

        Ok(())
    })
}

/// Write a block with BEGIN and END.
fn with_block<W: Write, F: FnOnce(&mut Formatter<W>) -> io::Result<()>>(
    f: &mut Formatter<W>,
    name: &str,
    write_content: F,
) -> io::Result<()> {
    write!(f, "{KW_BEGIN}:{name}")?;
    f.writeln()?;

    write_content(f)?;

    write!(f, "{KW_END}:{name}")?;
    f.writeln()
}

fn write_line<W: Write>(
    f: &mut Formatter<W>,
    name: &str,
    value: &impl std::fmt::Display,
) -> io::Result<()> {
    write!(f, "{name}:{value}")?;
    f.writeln()
}

/// Stored values that still carry their delimiter are written as they are.
fn write_property<W: Write>(f: &mut Formatter<W>, prop: &Property) -> io::Result<()> {
    write!(f, "{prop}")?;
    f.writeln()
}
