// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, DateTime};

/// Errors raised by calendar operations.
///
/// Every operation validates all of its preconditions before mutating any
/// state, so receiving an error means nothing was changed.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// The subject is empty.
    #[error("Subject must contain a string")]
    EmptySubject,

    /// No start time was supplied.
    #[error("Start time is required")]
    MissingStart,

    /// No end time was supplied where one is required.
    #[error("End time is required")]
    MissingEnd,

    /// The end is not strictly after the start.
    #[error("End time {end} must be after start time {start}")]
    InvalidTimeRange {
        /// The requested start.
        start: DateTime,
        /// The requested end.
        end: DateTime,
    },

    /// A series was requested without any weekday to repeat on.
    #[error("Repeat days cannot be empty")]
    EmptyRepeatDays,

    /// A weekday code outside of `MTWRFSU`.
    #[error("Invalid weekday code '{0}', expected one of MTWRFSU")]
    InvalidWeekday(char),

    /// The termination rule of a series is malformed.
    #[error("Invalid recurrence: {0}")]
    InvalidRecurrence(String),

    /// The recurrence rule does not produce a single occurrence.
    #[error("Series \"{subject}\" has no occurrence between {start} and {until}")]
    EmptySeries {
        /// Subject of the series.
        subject: String,
        /// Anchor start of the series.
        start: DateTime,
        /// The until date that cut the series off.
        until: Date,
    },

    /// A value could not be parsed for the given field.
    #[error("Invalid {field} '{value}'")]
    InvalidValue {
        /// The field being parsed.
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// An event with the same subject, start and end already exists.
    #[error("An event \"{subject}\" from {start} to {end} already exists")]
    DuplicateEvent {
        /// Subject of the conflicting event.
        subject: String,
        /// Start of the conflicting event.
        start: DateTime,
        /// End of the conflicting event.
        end: DateTime,
    },

    /// A series with the same subject or the same anchor start already exists.
    #[error("A series with subject \"{subject}\" or start {start} already exists")]
    DuplicateSeries {
        /// Subject of the rejected series.
        subject: String,
        /// Anchor start of the rejected series.
        start: DateTime,
    },

    /// No event matches the subject and start.
    #[error("Event \"{subject}\" at {start} not found")]
    EventNotFound {
        /// Requested subject.
        subject: String,
        /// Requested start.
        start: DateTime,
    },

    /// More than one stored event matches a lookup that must be unique.
    #[error("Multiple events \"{subject}\" start at {start}")]
    AmbiguousEvent {
        /// Requested subject.
        subject: String,
        /// Requested start.
        start: DateTime,
    },

    /// An edit mode outside of `single`, `future` and `all`.
    #[error("Unsupported edit mode '{0}'")]
    UnsupportedEditMode(String),

    /// No calendar is registered under this name.
    #[error("There does not exist a calendar with the name \"{0}\"")]
    CalendarNotFound(String),

    /// A calendar with this name is already registered.
    #[error("There already exists a calendar with the name \"{0}\"")]
    DuplicateCalendar(String),

    /// The calendar name is empty.
    #[error("Calendar name must not be empty")]
    EmptyCalendarName,

    /// An operation needs a selected calendar but none is selected.
    #[error("No calendar selected, use a calendar first")]
    NoCalendarSelected,

    /// The timezone id is not a known IANA zone.
    #[error("Invalid timezone '{name}': {source}")]
    InvalidTimezone {
        /// The rejected zone id.
        name: String,
        /// The underlying lookup error.
        #[source]
        source: jiff::Error,
    },

    /// A calendar property other than `name` or `timezone`.
    #[error("Invalid calendar property '{0}'")]
    InvalidProperty(String),

    /// Date/time arithmetic or zone conversion went out of range.
    #[error("Date/time error: {0}")]
    DateTime(#[from] jiff::Error),
}

/// The broad class of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input violates an invariant of the data model.
    Validation,

    /// The input collides with existing data.
    Conflict,

    /// The target of the operation does not exist or is not unique.
    Lookup,

    /// The calendar registry or a timezone is misconfigured.
    Configuration,
}

impl CalendarError {
    /// The class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySubject
            | Self::MissingStart
            | Self::MissingEnd
            | Self::InvalidTimeRange { .. }
            | Self::EmptyRepeatDays
            | Self::InvalidWeekday(_)
            | Self::InvalidRecurrence(_)
            | Self::EmptySeries { .. }
            | Self::InvalidValue { .. }
            | Self::UnsupportedEditMode(_)
            | Self::DateTime(_) => ErrorKind::Validation,

            Self::DuplicateEvent { .. } | Self::DuplicateSeries { .. } => ErrorKind::Conflict,

            Self::EventNotFound { .. } | Self::AmbiguousEvent { .. } => ErrorKind::Lookup,

            Self::CalendarNotFound(_)
            | Self::DuplicateCalendar(_)
            | Self::EmptyCalendarName
            | Self::NoCalendarSelected
            | Self::InvalidTimezone { .. }
            | Self::InvalidProperty(_) => ErrorKind::Configuration,
        }
    }
}
