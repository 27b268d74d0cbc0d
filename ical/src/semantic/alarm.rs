// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Alarm component (VALARM).

use std::convert::TryFrom;

use crate::error::ErrorCode;
use crate::grammar::{is_alarm_action, is_integer_field};
use crate::keyword::{KW_ACTION, KW_REPEAT, KW_TRIGGER};
use crate::property::Property;

/// Alarm component (VALARM)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alarm {
    /// `AUDIO`, `DISPLAY` or `EMAIL`
    pub action: String,

    /// When to trigger the alarm, kept verbatim
    pub trigger: String,

    /// Every other property, in source order
    pub properties: Vec<Property>,
}

impl Alarm {
    /// Create an alarm without extra properties.
    pub fn new(action: impl Into<String>, trigger: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            trigger: trigger.into(),
            properties: Vec::new(),
        }
    }
}

/// Build an alarm from the properties found between `BEGIN:VALARM` and `END:VALARM`.
///
/// `ACTION` and `TRIGGER` must each appear exactly once. `REPEAT`, when present, must be an
/// integer and is kept with the other properties.
impl TryFrom<Vec<Property>> for Alarm {
    type Error = ErrorCode;

    fn try_from(props: Vec<Property>) -> Result<Self, Self::Error> {
        let mut action = None;
        let mut trigger = None;
        let mut properties = Vec::with_capacity(props.len());

        for prop in props {
            if prop.is_named(KW_ACTION) {
                if action.is_some() {
                    tracing::debug!("duplicate alarm ACTION");
                    return Err(ErrorCode::InvalidAlarm);
                }
                let value = prop.text();
                if !is_alarm_action(value) {
                    tracing::debug!(action = value, "unsupported alarm ACTION");
                    return Err(ErrorCode::InvalidAlarm);
                }
                action = Some(value.to_owned());
            } else if prop.is_named(KW_TRIGGER) {
                if trigger.is_some() {
                    tracing::debug!("duplicate alarm TRIGGER");
                    return Err(ErrorCode::InvalidAlarm);
                }
                let value = prop.text();
                if value.is_empty() {
                    tracing::debug!("empty alarm TRIGGER");
                    return Err(ErrorCode::InvalidAlarm);
                }
                trigger = Some(value.to_owned());
            } else if prop.is_named(KW_REPEAT) && !is_integer_field(prop.text()) {
                tracing::debug!(repeat = prop.text(), "alarm REPEAT is not an integer");
                return Err(ErrorCode::InvalidAlarm);
            } else {
                properties.push(prop);
            }
        }

        match (action, trigger) {
            (Some(action), Some(trigger)) => Ok(Self {
                action,
                trigger,
                properties,
            }),
            (action, trigger) => {
                tracing::debug!(
                    has_action = action.is_some(),
                    has_trigger = trigger.is_some(),
                    "alarm is missing a required property"
                );
                Err(ErrorCode::InvalidAlarm)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(lines: &[&str]) -> Vec<Property> {
        lines
            .iter()
            .map(|line| Property::from_line(line).unwrap())
            .collect()
    }

    #[test]
    fn builds_alarm_with_extra_properties() {
        let alarm = Alarm::try_from(props(&[
            "TRIGGER;RELATED=END:-PT15M",
            "ACTION:DISPLAY",
            "REPEAT:4",
            "DESCRIPTION:Wake up",
        ]))
        .unwrap();
        assert_eq!(alarm.action, "DISPLAY");
        assert_eq!(alarm.trigger, "RELATED=END:-PT15M");
        assert_eq!(alarm.properties, props(&["REPEAT:4", "DESCRIPTION:Wake up"]));
    }

    #[test]
    fn action_is_matched_case_insensitively() {
        let alarm = Alarm::try_from(props(&["action:audio", "trigger:PT0S"])).unwrap();
        assert_eq!(alarm.action, "audio");
    }

    #[test]
    fn requires_action_and_trigger() {
        assert_eq!(
            Alarm::try_from(props(&["ACTION:AUDIO"])),
            Err(ErrorCode::InvalidAlarm)
        );
        assert_eq!(
            Alarm::try_from(props(&["TRIGGER:-PT15M"])),
            Err(ErrorCode::InvalidAlarm)
        );
        assert_eq!(Alarm::try_from(Vec::new()), Err(ErrorCode::InvalidAlarm));
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            Alarm::try_from(props(&["ACTION:AUDIO", "ACTION:EMAIL", "TRIGGER:-PT15M"])),
            Err(ErrorCode::InvalidAlarm)
        );
        assert_eq!(
            Alarm::try_from(props(&["ACTION:AUDIO", "TRIGGER:-PT15M", "TRIGGER:-PT5M"])),
            Err(ErrorCode::InvalidAlarm)
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            Alarm::try_from(props(&["ACTION:PROCEDURE", "TRIGGER:-PT15M"])),
            Err(ErrorCode::InvalidAlarm)
        );
        assert_eq!(
            Alarm::try_from(props(&["ACTION:AUDIO", "TRIGGER:"])),
            Err(ErrorCode::InvalidAlarm)
        );
        assert_eq!(
            Alarm::try_from(props(&["ACTION:AUDIO", "TRIGGER:-PT15M", "REPEAT:twice"])),
            Err(ErrorCode::InvalidAlarm)
        );
    }
}
