// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use jiff::SignedDuration;
use jiff::civil::{Date, DateTime};

use crate::CalendarError;

/// A single calendar event.
///
/// Events are immutable once built. Editing an event means building a new one
/// and swapping it in for the old one, see [`crate::Calendar::edit_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    subject: String,
    start: DateTime,
    end: DateTime,
    description: Option<String>,
    location: Option<EventLocation>,
    status: Option<EventStatus>,
}

impl Event {
    /// Builds an event from a draft.
    ///
    /// # Errors
    ///
    /// Fails if the subject is empty, start or end is missing, or the end is
    /// not strictly after the start.
    pub fn new(draft: EventDraft) -> Result<Self, CalendarError> {
        let start = draft.start.ok_or(CalendarError::MissingStart)?;
        let end = draft.end.ok_or(CalendarError::MissingEnd)?;
        validate_subject(&draft.subject)?;
        validate_range(start, end)?;

        Ok(Self {
            subject: draft.subject,
            start,
            end,
            description: draft.description,
            location: draft.location,
            status: draft.status,
        })
    }

    /// The subject of the event.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The local start of the event.
    #[must_use]
    pub fn start(&self) -> DateTime {
        self.start
    }

    /// The local end of the event, always after the start.
    #[must_use]
    pub fn end(&self) -> DateTime {
        self.end
    }

    /// The description of the event, if available.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The location of the event, if available.
    #[must_use]
    pub fn location(&self) -> Option<EventLocation> {
        self.location
    }

    /// The status of the event, if available.
    #[must_use]
    pub fn status(&self) -> Option<EventStatus> {
        self.status
    }

    /// The date the event is indexed under.
    #[must_use]
    pub fn date(&self) -> Date {
        self.start.date()
    }

    /// The time between start and end.
    #[must_use]
    pub fn duration(&self) -> SignedDuration {
        self.start.duration_until(self.end)
    }

    /// Whether this event carries the identity triple `(subject, start, end)`.
    #[must_use]
    pub fn matches(&self, subject: &str, start: DateTime, end: DateTime) -> bool {
        self.subject == subject && self.start == start && self.end == end
    }

    /// Whether both events carry the same identity triple.
    #[must_use]
    pub fn same_key(&self, other: &Event) -> bool {
        self.matches(&other.subject, other.start, other.end)
    }

    /// A draft carrying every field of this event, for building a modified copy.
    #[must_use]
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            subject: self.subject.clone(),
            start: Some(self.start),
            end: Some(self.end),
            description: self.description.clone(),
            location: self.location,
            status: self.status,
        }
    }
}

/// Named fields for creating an event.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// The subject of the event.
    pub subject: String,

    /// The local start of the event.
    pub start: Option<DateTime>,

    /// The local end of the event.
    pub end: Option<DateTime>,

    /// The description of the event.
    pub description: Option<String>,

    /// The location of the event.
    pub location: Option<EventLocation>,

    /// The status of the event.
    pub status: Option<EventStatus>,
}

impl EventDraft {
    /// Creates a draft with a subject and a start, everything else unset.
    pub fn new(subject: impl Into<String>, start: DateTime) -> Self {
        Self {
            subject: subject.into(),
            start: Some(start),
            ..Default::default()
        }
    }

    /// Sets the end of the draft.
    #[must_use]
    pub fn with_end(mut self, end: DateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the description of the draft.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the location of the draft.
    #[must_use]
    pub fn with_location(mut self, location: EventLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the status of the draft.
    #[must_use]
    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }
}

pub(crate) fn validate_subject(subject: &str) -> Result<(), CalendarError> {
    match subject.trim().is_empty() {
        true => Err(CalendarError::EmptySubject),
        false => Ok(()),
    }
}

pub(crate) fn validate_range(start: DateTime, end: DateTime) -> Result<(), CalendarError> {
    match end > start {
        true => Ok(()),
        false => Err(CalendarError::InvalidTimeRange { start, end }),
    }
}

/// Where an event takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum EventLocation {
    /// The event happens in person.
    Physical,

    /// The event happens online.
    Online,
}

const LOCATION_PHYSICAL: &str = "physical";
const LOCATION_ONLINE: &str = "online";

impl AsRef<str> for EventLocation {
    fn as_ref(&self) -> &str {
        match self {
            EventLocation::Physical => LOCATION_PHYSICAL,
            EventLocation::Online => LOCATION_ONLINE,
        }
    }
}

impl Display for EventLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EventLocation {
    type Err = CalendarError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            LOCATION_PHYSICAL => Ok(EventLocation::Physical),
            LOCATION_ONLINE => Ok(EventLocation::Online),
            _ => Err(CalendarError::InvalidValue {
                field: "location",
                value: value.to_string(),
            }),
        }
    }
}

/// The visibility of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum EventStatus {
    /// Visible to everyone sharing the calendar.
    Public,

    /// Visible to the owner only.
    Private,
}

const STATUS_PUBLIC: &str = "public";
const STATUS_PRIVATE: &str = "private";

impl AsRef<str> for EventStatus {
    fn as_ref(&self) -> &str {
        match self {
            EventStatus::Public => STATUS_PUBLIC,
            EventStatus::Private => STATUS_PRIVATE,
        }
    }
}

impl Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EventStatus {
    type Err = CalendarError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            STATUS_PUBLIC => Ok(EventStatus::Public),
            STATUS_PRIVATE => Ok(EventStatus::Private),
            _ => Err(CalendarError::InvalidValue {
                field: "status",
                value: value.to_string(),
            }),
        }
    }
}
