// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::Arc;

use jiff::civil::{Date, DateTime, Weekday};

use crate::{CalendarError, Event, EventLocation, EventStatus};

/// A recurrence rule together with the events it materialized.
///
/// The series owns the ordered instance list. The same `Arc<Event>` handles are
/// indexed by date in the owning [`crate::Calendar`].
#[derive(Debug, Clone)]
pub struct EventSeries {
    subject: String,
    anchor_start: DateTime,
    repeat_days: RepeatDays,
    until: SeriesEnd,
    instances: Vec<Arc<Event>>,
}

impl EventSeries {
    pub(crate) fn new(
        subject: String,
        anchor_start: DateTime,
        repeat_days: RepeatDays,
        until: SeriesEnd,
        instances: Vec<Arc<Event>>,
    ) -> Self {
        Self {
            subject,
            anchor_start,
            repeat_days,
            until,
            instances,
        }
    }

    /// The subject the series was created with. Renaming instances does not
    /// change it.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The start of the first requested occurrence.
    #[must_use]
    pub fn anchor_start(&self) -> DateTime {
        self.anchor_start
    }

    /// The weekdays the series repeats on.
    #[must_use]
    pub fn repeat_days(&self) -> &RepeatDays {
        &self.repeat_days
    }

    /// The termination rule of the series.
    #[must_use]
    pub fn until(&self) -> SeriesEnd {
        self.until
    }

    /// The instances in generation order.
    #[must_use]
    pub fn instances(&self) -> &[Arc<Event>] {
        &self.instances
    }

    /// Whether this exact event handle belongs to the series.
    pub(crate) fn contains(&self, event: &Arc<Event>) -> bool {
        self.position(event).is_some()
    }

    pub(crate) fn position(&self, event: &Arc<Event>) -> Option<usize> {
        self.instances.iter().position(|e| Arc::ptr_eq(e, event))
    }

    pub(crate) fn replace_at(&mut self, index: usize, event: Arc<Event>) {
        if let Some(slot) = self.instances.get_mut(index) {
            *slot = event;
        }
    }
}

/// Named fields for creating an event series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesDraft {
    /// The subject of every instance.
    pub subject: String,

    /// The start of the first requested occurrence.
    pub start: DateTime,

    /// The end of the first occurrence, defining the per-instance duration.
    pub end: Option<DateTime>,

    /// The weekdays to repeat on.
    pub repeat_days: RepeatDays,

    /// When to stop generating instances.
    pub until: SeriesEnd,

    /// The description of every instance.
    pub description: Option<String>,

    /// The location of every instance.
    pub location: Option<EventLocation>,

    /// The status of every instance.
    pub status: Option<EventStatus>,
}

impl SeriesDraft {
    /// Creates a draft with the mandatory fields, everything else unset.
    pub fn new(
        subject: impl Into<String>,
        start: DateTime,
        repeat_days: RepeatDays,
        until: SeriesEnd,
    ) -> Self {
        Self {
            subject: subject.into(),
            start,
            end: None,
            repeat_days,
            until,
            description: None,
            location: None,
            status: None,
        }
    }

    /// Sets the end of the first occurrence.
    #[must_use]
    pub fn with_end(mut self, end: DateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the description of every instance.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the location of every instance.
    #[must_use]
    pub fn with_location(mut self, location: EventLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the status of every instance.
    #[must_use]
    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Termination rule of a series: a number of occurrences or a last date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesEnd {
    /// Stop after this many instances.
    Count(u32),

    /// Stop after the last matching day on or before this date.
    Until(Date),
}

/// Largest occurrence count a series accepts.
pub const MAX_OCCURRENCES: u32 = 10_000;

impl SeriesEnd {
    pub(crate) fn validate(self) -> Result<Self, CalendarError> {
        match self {
            SeriesEnd::Count(0) => Err(CalendarError::InvalidRecurrence(
                "occurrence count must be positive".to_string(),
            )),
            SeriesEnd::Count(n) if n > MAX_OCCURRENCES => Err(CalendarError::InvalidRecurrence(
                format!("occurrence count {n} exceeds the limit of {MAX_OCCURRENCES}"),
            )),
            _ => Ok(self),
        }
    }
}

impl Display for SeriesEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesEnd::Count(n) => write!(f, "for {n} times"),
            SeriesEnd::Until(date) => write!(f, "until {date}"),
        }
    }
}

/// A set of weekdays, written as the letters `MTWRFSU`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatDays(BTreeSet<i8>);

impl RepeatDays {
    /// Builds the set from weekdays.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self(days.into_iter().map(Weekday::to_monday_zero_offset).collect())
    }

    /// Whether the weekday is part of the set.
    #[must_use]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0.contains(&day.to_monday_zero_offset())
    }

    /// Whether the set has no weekday.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The weekdays in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.0
            .iter()
            .filter_map(|&d| Weekday::from_monday_zero_offset(d).ok())
    }
}

const WEEKDAY_CODES: [(char, Weekday); 7] = [
    ('M', Weekday::Monday),
    ('T', Weekday::Tuesday),
    ('W', Weekday::Wednesday),
    ('R', Weekday::Thursday),
    ('F', Weekday::Friday),
    ('S', Weekday::Saturday),
    ('U', Weekday::Sunday),
];

fn weekday_code(day: Weekday) -> char {
    WEEKDAY_CODES
        .iter()
        .find(|(_, d)| *d == day)
        .map_or('?', |(c, _)| *c)
}

impl FromStr for RepeatDays {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut days = Vec::new();
        for c in s.trim().chars() {
            let upper = c.to_ascii_uppercase();
            let (_, day) = WEEKDAY_CODES
                .iter()
                .find(|(code, _)| *code == upper)
                .ok_or(CalendarError::InvalidWeekday(c))?;
            days.push(*day);
        }

        match days.is_empty() {
            true => Err(CalendarError::EmptyRepeatDays),
            false => Ok(Self::new(days)),
        }
    }
}

impl Display for RepeatDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.iter() {
            write!(f, "{}", weekday_code(day))?;
        }
        Ok(())
    }
}
