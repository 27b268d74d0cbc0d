// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! This module provides the calendar object graph and the builders that construct it from
//! the property sequences produced by the syntax layer. A builder either returns an entity
//! that satisfies every rule for itself and its children, or fails with the first
//! [`ErrorCode`](crate::ErrorCode) it detected and drops everything it had built.

mod alarm;
mod calendar;
mod datetime;
mod event;

pub use alarm::Alarm;
pub use calendar::Calendar;
pub use datetime::DateTimeStamp;
pub use event::Event;
