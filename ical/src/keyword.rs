// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords recognized by the calendar parser.

pub const KW_BEGIN: &str = "BEGIN";
pub const KW_END: &str = "END";

// Containers
pub const KW_VCALENDAR: &str = "VCALENDAR";
pub const KW_VEVENT: &str = "VEVENT";
pub const KW_VALARM: &str = "VALARM";

// Calendar properties
pub const KW_VERSION: &str = "VERSION";
pub const KW_PRODID: &str = "PRODID";

// Event properties
pub const KW_UID: &str = "UID";
pub const KW_DTSTAMP: &str = "DTSTAMP";

// Alarm properties
pub const KW_ACTION: &str = "ACTION";
pub const KW_TRIGGER: &str = "TRIGGER";
pub const KW_REPEAT: &str = "REPEAT";

// Alarm actions
pub const KW_ACTION_AUDIO: &str = "AUDIO";
pub const KW_ACTION_DISPLAY: &str = "DISPLAY";
pub const KW_ACTION_EMAIL: &str = "EMAIL";

/// File extension every calendar file must carry.
pub const ICS_EXTENSION: &str = "ics";
