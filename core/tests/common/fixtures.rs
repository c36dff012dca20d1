// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! This module provides helper functions to create dates, drafts, series and
//! pre-populated calendar registries.

#![allow(dead_code)]

use jiff::civil::{Date, DateTime, date, datetime};
use shiftcal_core::{CalendarManagement, EventDraft, RepeatDays, SeriesDraft, SeriesEnd};

/// Creates a local date-time at minute precision.
///
/// # Example
///
/// ```ignore
/// let start = at(2025, 6, 2, 9, 0);
/// ```
#[must_use]
pub fn at(year: i16, month: i8, d: i8, hour: i8, minute: i8) -> DateTime {
    datetime(year, month, d, hour, minute, 0, 0)
}

/// Creates a date.
#[must_use]
pub fn day(year: i16, month: i8, d: i8) -> Date {
    date(year, month, d)
}

/// Creates an event draft with subject, start and end set.
#[must_use]
pub fn timed_draft(subject: &str, start: DateTime, end: DateTime) -> EventDraft {
    EventDraft::new(subject, start).with_end(end)
}

/// Creates the `Standup` series: Mondays and Wednesdays from 2025-06-02,
/// 09:00 to 09:15, with the given termination rule.
#[must_use]
pub fn standup_series(until: SeriesEnd) -> SeriesDraft {
    let days: RepeatDays = "MW".parse().unwrap();
    SeriesDraft::new("Standup", at(2025, 6, 2, 9, 0), days, until).with_end(at(2025, 6, 2, 9, 15))
}

/// Creates a registry with one calendar per `(name, timezone)` pair, and
/// selects the first one.
///
/// # Panics
///
/// Panics if a name is duplicated or a timezone is unknown.
#[must_use]
pub fn management_with(calendars: &[(&str, &str)]) -> CalendarManagement {
    let mut management = CalendarManagement::new();
    for (name, tz) in calendars {
        management.create_calendar(name, tz).unwrap();
    }
    if let Some((first, _)) = calendars.first() {
        management.select_calendar(first).unwrap();
    }
    management
}
