// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, DateTime, Time, time};
use jiff::tz::TimeZone;

use crate::CalendarError;

/// First minute of a day in a copy window.
pub const DAY_START: Time = time(0, 0, 0, 0);

/// Last instant of a day in a copy window.
pub const DAY_END: Time = Time::MAX;

/// Looks up an IANA timezone by id.
///
/// # Errors
///
/// Fails if the id is not in the timezone database.
pub fn parse_timezone(name: &str) -> Result<TimeZone, CalendarError> {
    TimeZone::get(name.trim()).map_err(|source| CalendarError::InvalidTimezone {
        name: name.to_string(),
        source,
    })
}

/// Converts a wall-clock time in `from` to the wall-clock time of the same
/// instant in `to`.
///
/// Gaps and folds in `from` resolve the way jiff's compatible disambiguation
/// does: a time inside a gap moves forward, an ambiguous time takes the
/// earlier offset.
///
/// # Errors
///
/// Fails if the result falls outside the supported range.
pub fn translate(dt: DateTime, from: &TimeZone, to: &TimeZone) -> Result<DateTime, CalendarError> {
    let zoned = dt.to_zoned(from.clone())?;
    Ok(zoned.with_time_zone(to.clone()).datetime())
}

/// The inclusive window spanning the whole days `from..=to`.
#[must_use]
pub fn day_window(from: Date, to: Date) -> (DateTime, DateTime) {
    (from.to_datetime(DAY_START), to.to_datetime(DAY_END))
}

/// The name of the system timezone, falling back to `UTC` when it cannot be
/// determined.
#[must_use]
pub fn system_timezone() -> String {
    match iana_time_zone::get_timezone() {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!(err = %e, "failed to detect system timezone, using UTC");
            "UTC".to_string()
        }
    }
}
