// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Structural validation of a calendar graph, however it was built.
//!
//! Checks run top-down and stop at the first violation:
//!
//! 1. calendar version, then product id, then the event list;
//! 2. each event in order, followed by each of its alarms;
//! 3. the top-level calendar properties.

use crate::error::ErrorCode;
use crate::grammar::{is_alarm_action, is_date_part, is_text_field, is_time_part};
use crate::property::Property;
use crate::semantic::{Alarm, Calendar, Event};

/// Re-check the rules a builder enforces on an already constructed value.
pub trait Validate {
    /// Return the first rule this value breaks.
    ///
    /// ## Errors
    ///
    /// The [`ErrorCode`] of the first violation found.
    fn validate(&self) -> Result<(), ErrorCode>;
}

/// Validate a calendar that may be missing altogether.
///
/// ## Errors
///
/// [`ErrorCode::Other`] when there is no calendar, otherwise the first violation reported by
/// [`Validate::validate`].
pub fn validate(calendar: Option<&Calendar>) -> Result<(), ErrorCode> {
    match calendar {
        Some(calendar) => calendar.validate(),
        None => Err(ErrorCode::Other),
    }
}

impl Validate for Calendar {
    fn validate(&self) -> Result<(), ErrorCode> {
        if self.version == 0.0 || !self.version.is_finite() {
            return Err(ErrorCode::InvalidVersion);
        }
        if self.product_id.is_empty() {
            return Err(ErrorCode::InvalidCalendar);
        }
        if !is_text_field(&self.product_id) {
            return Err(ErrorCode::InvalidProductId);
        }
        if self.events.is_empty() {
            return Err(ErrorCode::InvalidCalendar);
        }

        for event in &self.events {
            event.validate()?;
        }

        // an unnamed top-level property is not a calendar structure error
        if has_unnamed(&self.properties) {
            return Err(ErrorCode::Other);
        }

        Ok(())
    }
}

impl Validate for Event {
    fn validate(&self) -> Result<(), ErrorCode> {
        if self.uid.is_empty() {
            return Err(ErrorCode::InvalidEvent);
        }

        let stamp = &self.creation_timestamp;
        if !is_date_part(&stamp.date) || !is_time_part(&stamp.time) {
            return Err(ErrorCode::InvalidCreationDateTime);
        }

        if has_unnamed(&self.properties) {
            return Err(ErrorCode::InvalidEvent);
        }

        self.alarms.iter().try_for_each(Validate::validate)
    }
}

impl Validate for Alarm {
    fn validate(&self) -> Result<(), ErrorCode> {
        if !is_alarm_action(&self.action) || self.trigger.is_empty() || has_unnamed(&self.properties)
        {
            return Err(ErrorCode::InvalidAlarm);
        }
        Ok(())
    }
}

fn has_unnamed(properties: &[Property]) -> bool {
    properties.iter().any(|prop| prop.name.is_empty())
}
