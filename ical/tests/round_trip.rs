// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Round-trip tests: parse -> write -> parse, and build -> write -> parse.

use std::path::{Path, PathBuf};

use calparse_ical::{
    Alarm, Calendar, DateTimeStamp, Event, FormatOptions, Property, format, parse, parse_file,
    write_calendar_file,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn round_trip_hand_built_calendar() {
    let mut event = Event::new("evt-1", DateTimeStamp::new("20171029", "101010", false));
    event.alarms.push(Alarm::new("AUDIO", "PT15M"));
    let mut calendar = Calendar::new(2.0, "valid");
    calendar.events.push(event);

    let ics = format(&calendar).unwrap();
    assert_eq!(parse(&ics).unwrap(), calendar);
}

#[test]
fn round_trip_fixtures() {
    for name in [
        "valid_one_alarm.ics",
        "multiple_events.ics",
        "folded_and_comments.ics",
    ] {
        let parsed = parse_file(fixture(name)).unwrap();
        let ics = format(&parsed).unwrap();
        assert_eq!(parse(&ics).unwrap(), parsed, "{name}");
    }
}

#[test]
fn round_trip_folded_values() {
    let mut event = Event::new("evt-long", DateTimeStamp::new("20250101", "000000", true));
    event
        .properties
        .push(Property::new("DESCRIPTION", format!(":{}", "word ".repeat(60))));
    let mut calendar = Calendar::new(2.0, "folding");
    calendar.events.push(event);

    let ics = FormatOptions::default()
        .folding(Some(40))
        .write_to_string(&calendar)
        .unwrap();
    assert!(ics.lines().count() > 12);
    assert_eq!(parse(&ics).unwrap(), calendar);
}

#[test]
fn round_trip_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.ics");

    let parsed = parse_file(fixture("multiple_events.ics")).unwrap();
    write_calendar_file(&path, &parsed, FormatOptions::default()).unwrap();
    assert_eq!(parse_file(&path).unwrap(), parsed);
}

#[test]
fn double_format_is_stable() {
    let parsed = parse_file(fixture("valid_one_alarm.ics")).unwrap();
    let once = format(&parsed).unwrap();
    let twice = format(&parse(&once).unwrap()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn round_trip_long_property_name() {
    let name = format!("X-{}", "A".repeat(80));
    let mut event = Event::new("evt-1", DateTimeStamp::new("20171029", "101010", false));
    event.properties.push(Property::new(name.clone(), ":v"));
    let mut calendar = Calendar::new(2.0, "long-name");
    calendar.events.push(event);

    let ics = format(&calendar).unwrap();
    assert!(ics.contains(&format!("\r\n{name}:")));
    assert_eq!(parse(&ics).unwrap(), calendar);
}

#[test]
fn round_trip_narrow_folding() {
    let mut event = Event::new("evt-1", DateTimeStamp::new("20171029", "101010", true));
    event.alarms.push(Alarm::new("DISPLAY", "-PT15M"));
    event
        .properties
        .push(Property::new("SUMMARY", ";LANGUAGE=en:Team sync"));
    let mut calendar = Calendar::new(2.0, "narrow");
    calendar.events.push(event);

    let ics = FormatOptions::default()
        .folding(Some(4))
        .write_to_string(&calendar)
        .unwrap();
    assert!(ics.starts_with("BEGIN:\r\n VCA\r\n LEN\r\n DAR\r\n"));
    assert_eq!(parse(&ics).unwrap(), calendar);
}
