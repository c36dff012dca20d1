// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use jiff::SignedDuration;
use jiff::civil::{DateTime, Time, time};

use crate::event::{validate_range, validate_subject};
use crate::{CalendarError, Event, EventDraft, SeriesDraft, SeriesEnd};

/// Start of the all-day window.
pub const ALL_DAY_START: Time = time(8, 0, 0, 0);

/// End of the all-day window.
pub const ALL_DAY_END: Time = time(17, 0, 0, 0);

const ALL_DAY_DURATION: SignedDuration = SignedDuration::from_hours(9);
const DEFAULT_DURATION: SignedDuration = SignedDuration::from_hours(1);

/// The duration of each instance of a series starting at `start`.
///
/// An explicit end of the first occurrence wins. Without one, a series anchored
/// at the all-day start spans the all-day window, anything else lasts an hour.
///
/// # Errors
///
/// Fails if `end` is not strictly after `start`.
pub fn instance_duration(
    start: DateTime,
    end: Option<DateTime>,
) -> Result<SignedDuration, CalendarError> {
    match end {
        Some(end) => {
            validate_range(start, end)?;
            Ok(start.duration_until(end))
        }
        None if start.time() == ALL_DAY_START => Ok(ALL_DAY_DURATION),
        None => Ok(DEFAULT_DURATION),
    }
}

/// Expands a series draft into its ordered instances.
///
/// Walks day by day from the anchor date. Each day whose weekday is in the
/// repeat set yields one instance at the anchor's time of day; other days are
/// skipped without consuming an occurrence.
///
/// # Errors
///
/// Fails on an empty subject or weekday set, a malformed termination rule, an
/// end not after the start, or a rule that yields no instance at all.
#[tracing::instrument(level = "debug", skip_all, fields(subject = %draft.subject, until = %draft.until))]
pub fn expand(draft: &SeriesDraft) -> Result<Vec<Event>, CalendarError> {
    validate_subject(&draft.subject)?;
    if draft.repeat_days.is_empty() {
        return Err(CalendarError::EmptyRepeatDays);
    }
    let until = draft.until.validate()?;
    let duration = instance_duration(draft.start, draft.end)?;

    let time_of_day = draft.start.time();
    let mut day = draft.start.date();
    let mut instances = Vec::new();
    loop {
        match until {
            SeriesEnd::Count(n) if instances.len() >= n as usize => break,
            SeriesEnd::Until(last) if day > last => break,
            _ => {}
        }

        if draft.repeat_days.contains(day.weekday()) {
            let start = day.to_datetime(time_of_day);
            let end = start.checked_add(duration)?;
            instances.push(Event::new(EventDraft {
                subject: draft.subject.clone(),
                start: Some(start),
                end: Some(end),
                description: draft.description.clone(),
                location: draft.location,
                status: draft.status,
            })?);
        }

        day = day.tomorrow()?;
    }

    if let (SeriesEnd::Until(last), true) = (until, instances.is_empty()) {
        return Err(CalendarError::EmptySeries {
            subject: draft.subject.clone(),
            start: draft.start,
            until: last,
        });
    }

    tracing::debug!(count = instances.len(), "expanded series");
    Ok(instances)
}
