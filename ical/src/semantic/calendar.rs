// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::convert::TryFrom;
use std::str::FromStr;

use crate::error::ErrorCode;
use crate::grammar::{is_text_field, is_version_field};
use crate::keyword::{KW_PRODID, KW_VCALENDAR, KW_VERSION, KW_VEVENT};
use crate::property::Property;
use crate::semantic::Event;
use crate::syntax::{BlockScan, extract_between, find_block, unfold_reader};

/// Top-level calendar object (VCALENDAR)
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calendar {
    /// Specification version, read from `VERSION`
    pub version: f64,

    /// Product identifier, read from `PRODID`
    pub product_id: String,

    /// Events, in source order
    pub events: Vec<Event>,

    /// Top-level properties other than `VERSION` and `PRODID`
    pub properties: Vec<Property>,
}

impl Calendar {
    /// Create a calendar without events or extra properties.
    pub fn new(version: f64, product_id: impl Into<String>) -> Self {
        Self {
            version,
            product_id: product_id.into(),
            events: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Read a `VERSION` value from its first two digit groups, so `1.0.3` becomes `1.0`.
    ///
    /// ## Errors
    ///
    /// [`ErrorCode::InvalidVersion`] if the value is not digit groups separated by periods, or
    /// if it reads as zero.
    pub fn parse_version(value: &str) -> Result<f64, ErrorCode> {
        if !is_version_field(value) {
            tracing::debug!(version = value, "malformed VERSION");
            return Err(ErrorCode::InvalidVersion);
        }

        let mut groups = value.split('.');
        let major = groups.next().unwrap_or("0");
        let number = match groups.next() {
            Some(minor) => format!("{major}.{minor}"),
            None => major.to_owned(),
        };

        match number.parse::<f64>() {
            Ok(version) if version.is_finite() && version != 0.0 => Ok(version),
            _ => {
                tracing::debug!(version = value, "VERSION is not a usable number");
                Err(ErrorCode::InvalidVersion)
            }
        }
    }
}

/// Build a calendar from every unfolded property of a source, `BEGIN:VCALENDAR` included.
impl TryFrom<Vec<Property>> for Calendar {
    type Error = ErrorCode;

    fn try_from(props: Vec<Property>) -> Result<Self, Self::Error> {
        let mut rest = extract_between(&props, KW_VCALENDAR, ErrorCode::InvalidCalendar)?.contents;
        drop(props);

        let mut events = Vec::new();
        loop {
            match find_block(&rest, KW_VEVENT) {
                BlockScan::Found(block) => {
                    events.push(Event::try_from(block.contents)?);
                    rest.drain(block.span);
                }
                BlockScan::Absent if events.is_empty() => {
                    tracing::debug!("calendar holds no events");
                    return Err(ErrorCode::InvalidCalendar);
                }
                BlockScan::Absent => break,
                BlockScan::Malformed => return Err(ErrorCode::InvalidEvent),
            }
        }

        let mut version = None;
        let mut product_id = None;
        let mut properties = Vec::with_capacity(rest.len());
        for prop in rest {
            if prop.is_named(KW_VERSION) {
                if version.is_some() {
                    return Err(ErrorCode::DuplicateVersion);
                }
                version = Some(Self::parse_version(prop.text())?);
            } else if prop.is_named(KW_PRODID) {
                if product_id.is_some() {
                    return Err(ErrorCode::DuplicateProductId);
                }
                let value = prop.text();
                if !is_text_field(value) {
                    tracing::debug!(prodid = value, "malformed PRODID");
                    return Err(ErrorCode::InvalidProductId);
                }
                product_id = Some(value.to_owned());
            } else {
                properties.push(prop);
            }
        }

        let (Some(version), Some(product_id)) = (version, product_id) else {
            tracing::debug!("calendar is missing VERSION or PRODID");
            return Err(ErrorCode::InvalidCalendar);
        };

        tracing::debug!(version, events = events.len(), "built calendar");
        Ok(Self {
            version,
            product_id,
            events,
            properties,
        })
    }
}

impl FromStr for Calendar {
    type Err = ErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(unfold_reader(s.as_bytes())?)
    }
}
