// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::convert::TryFrom;

use crate::error::ErrorCode;
use crate::keyword::{KW_DTSTAMP, KW_UID, KW_VALARM};
use crate::property::Property;
use crate::semantic::{Alarm, DateTimeStamp};
use crate::syntax::{BlockScan, find_block};

/// Event component (VEVENT)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Unique identifier
    pub uid: String,

    /// Date and time the event was created (DTSTAMP)
    pub creation_timestamp: DateTimeStamp,

    /// Alarms, in source order
    pub alarms: Vec<Alarm>,

    /// Every other property, in source order
    pub properties: Vec<Property>,
}

impl Event {
    /// Create an event without alarms or extra properties.
    pub fn new(uid: impl Into<String>, creation_timestamp: DateTimeStamp) -> Self {
        Self {
            uid: uid.into(),
            creation_timestamp,
            alarms: Vec::new(),
            properties: Vec::new(),
        }
    }
}

/// Build an event from the properties found between `BEGIN:VEVENT` and `END:VEVENT`.
impl TryFrom<Vec<Property>> for Event {
    type Error = ErrorCode;

    fn try_from(mut props: Vec<Property>) -> Result<Self, Self::Error> {
        let mut alarms = Vec::new();
        loop {
            match find_block(&props, KW_VALARM) {
                BlockScan::Found(block) => {
                    alarms.push(Alarm::try_from(block.contents)?);
                    props.drain(block.span);
                }
                BlockScan::Absent => break,
                BlockScan::Malformed => return Err(ErrorCode::InvalidAlarm),
            }
        }

        let mut uid = None;
        let mut creation_timestamp = None;
        let mut properties = Vec::with_capacity(props.len());
        for prop in props {
            if prop.is_named(KW_UID) {
                if uid.is_some() {
                    tracing::debug!("duplicate event UID");
                    return Err(ErrorCode::InvalidEvent);
                }
                let value = prop.text();
                if value.is_empty() {
                    tracing::debug!("empty event UID");
                    return Err(ErrorCode::InvalidEvent);
                }
                uid = Some(value.to_owned());
            } else if prop.is_named(KW_DTSTAMP) {
                if creation_timestamp.is_some() {
                    tracing::debug!("duplicate event DTSTAMP");
                    return Err(ErrorCode::InvalidEvent);
                }
                creation_timestamp = Some(DateTimeStamp::parse(&prop.value)?);
            } else {
                properties.push(prop);
            }
        }

        let (Some(uid), Some(creation_timestamp)) = (uid, creation_timestamp) else {
            tracing::debug!("event is missing UID or DTSTAMP");
            return Err(ErrorCode::InvalidEvent);
        };

        tracing::trace!(uid, alarms = alarms.len(), "built event");
        Ok(Self {
            uid,
            creation_timestamp,
            alarms,
            properties,
        })
    }
}
