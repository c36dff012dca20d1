// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;

use crate::datetime::{day_window, parse_timezone, translate};
use crate::{Calendar, CalendarError, Config, Event};

/// A named calendar bound to an IANA timezone.
#[derive(Debug)]
pub struct CalendarModel {
    name: String,
    timezone_name: String,
    timezone: TimeZone,
    calendar: Calendar,
}

impl CalendarModel {
    /// The unique name of the calendar.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The IANA id of the calendar's timezone.
    #[must_use]
    pub fn timezone_name(&self) -> &str {
        &self.timezone_name
    }

    /// The calendar's timezone.
    #[must_use]
    pub fn timezone(&self) -> &TimeZone {
        &self.timezone
    }

    /// The events of the calendar.
    #[must_use]
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// The events of the calendar, mutably.
    pub fn calendar_mut(&mut self) -> &mut Calendar {
        &mut self.calendar
    }
}

/// Registry of calendars with one optionally selected.
///
/// The registry is a plain owned value; share it across threads by wrapping it
/// in a mutex.
#[derive(Debug, Default)]
pub struct CalendarManagement {
    calendars: BTreeMap<String, CalendarModel>,
    selected: Option<String>,
}

impl CalendarManagement {
    /// Creates an empty registry with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates every configured calendar and selects the default one.
    ///
    /// # Errors
    ///
    /// Fails on a duplicate name, an unknown timezone, or a default calendar
    /// that is not configured.
    pub fn from_config(config: &Config) -> Result<Self, CalendarError> {
        let mut management = Self::new();
        for cal in &config.calendars {
            let timezone = cal.timezone.as_deref().unwrap_or("UTC");
            management.create_calendar(&cal.name, timezone)?;
        }

        if let Some(name) = &config.default_calendar {
            management.select_calendar(name)?;
        }
        Ok(management)
    }

    /// Registers an empty calendar.
    ///
    /// # Errors
    ///
    /// Fails on an empty or taken name, or an unknown timezone.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn create_calendar(&mut self, name: &str, timezone: &str) -> Result<(), CalendarError> {
        let name = validate_name(name)?;
        if self.calendars.contains_key(name) {
            return Err(CalendarError::DuplicateCalendar(name.to_string()));
        }

        let tz = parse_timezone(timezone)?;
        self.calendars.insert(
            name.to_string(),
            CalendarModel {
                name: name.to_string(),
                timezone_name: timezone.trim().to_string(),
                timezone: tz,
                calendar: Calendar::new(),
            },
        );
        Ok(())
    }

    /// Makes `name` the calendar event operations act on.
    ///
    /// # Errors
    ///
    /// Fails if no calendar has this name.
    pub fn select_calendar(&mut self, name: &str) -> Result<(), CalendarError> {
        if !self.calendars.contains_key(name) {
            return Err(CalendarError::CalendarNotFound(name.to_string()));
        }
        self.selected = Some(name.to_string());
        Ok(())
    }

    /// Renames a calendar or changes its timezone.
    ///
    /// Changing the timezone keeps the stored wall-clock times as they are.
    /// Renaming the selected calendar keeps it selected.
    ///
    /// # Errors
    ///
    /// Fails if the calendar does not exist, the new name is empty or taken, or
    /// the timezone is unknown.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn edit_calendar(
        &mut self,
        name: &str,
        property: CalendarProperty,
        value: &str,
    ) -> Result<(), CalendarError> {
        if !self.calendars.contains_key(name) {
            return Err(CalendarError::CalendarNotFound(name.to_string()));
        }

        match property {
            CalendarProperty::Name => {
                let new_name = validate_name(value)?;
                if new_name == name {
                    return Ok(());
                }
                if self.calendars.contains_key(new_name) {
                    return Err(CalendarError::DuplicateCalendar(new_name.to_string()));
                }

                if let Some(mut model) = self.calendars.remove(name) {
                    model.name = new_name.to_string();
                    self.calendars.insert(new_name.to_string(), model);
                }
                if self.selected.as_deref() == Some(name) {
                    self.selected = Some(new_name.to_string());
                }
            }
            CalendarProperty::Timezone => {
                let tz = parse_timezone(value)?;
                if let Some(model) = self.calendars.get_mut(name) {
                    model.timezone = tz;
                    model.timezone_name = value.trim().to_string();
                }
            }
        }
        Ok(())
    }

    /// The timezone of the named calendar, or of the selected one for `None`.
    ///
    /// # Errors
    ///
    /// Fails if the calendar does not exist or nothing is selected.
    pub fn calendar_timezone(&self, name: Option<&str>) -> Result<&TimeZone, CalendarError> {
        let model = match name {
            Some(name) => self.model(name)?,
            None => self.selected_model()?,
        };
        Ok(model.timezone())
    }

    /// The named calendar with its metadata.
    ///
    /// # Errors
    ///
    /// Fails if no calendar has this name.
    pub fn model(&self, name: &str) -> Result<&CalendarModel, CalendarError> {
        self.calendars
            .get(name)
            .ok_or_else(|| CalendarError::CalendarNotFound(name.to_string()))
    }

    /// The events of the named calendar.
    ///
    /// # Errors
    ///
    /// Fails if no calendar has this name.
    pub fn calendar(&self, name: &str) -> Result<&Calendar, CalendarError> {
        self.model(name).map(CalendarModel::calendar)
    }

    /// The events of the named calendar, mutably.
    ///
    /// # Errors
    ///
    /// Fails if no calendar has this name.
    pub fn calendar_mut(&mut self, name: &str) -> Result<&mut Calendar, CalendarError> {
        self.calendars
            .get_mut(name)
            .map(CalendarModel::calendar_mut)
            .ok_or_else(|| CalendarError::CalendarNotFound(name.to_string()))
    }

    /// The selected calendar.
    ///
    /// # Errors
    ///
    /// Fails if nothing is selected.
    pub fn selected_calendar(&self) -> Result<&Calendar, CalendarError> {
        self.selected_model().map(CalendarModel::calendar)
    }

    /// The selected calendar, mutably.
    ///
    /// # Errors
    ///
    /// Fails if nothing is selected.
    pub fn selected_calendar_mut(&mut self) -> Result<&mut Calendar, CalendarError> {
        let name = self.selected.clone().ok_or(CalendarError::NoCalendarSelected)?;
        self.calendar_mut(&name)
    }

    /// The name of the selected calendar.
    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The names of all calendars in sorted order.
    pub fn calendar_names(&self) -> impl Iterator<Item = &str> {
        self.calendars.keys().map(String::as_str)
    }

    /// Copies the event `subject` starting at `start` from the selected
    /// calendar into `target_name`.
    ///
    /// `target_start` is a wall-clock time in the selected calendar's zone; the
    /// copy lands at the same instant in the target calendar's zone and keeps the
    /// original duration.
    ///
    /// # Errors
    ///
    /// Fails if nothing is selected, the target or the event does not exist,
    /// or the copy duplicates an event in the target.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn copy_event(
        &mut self,
        subject: &str,
        start: DateTime,
        target_name: &str,
        target_start: DateTime,
    ) -> Result<Arc<Event>, CalendarError> {
        let source = self.selected_model()?;
        let event = source.calendar().get_event(subject, start, None)?;
        let copy = self.build_copy(&event, target_start, target_name)?;
        let mut copied = self.insert_all(target_name, vec![copy])?;
        copied.pop().ok_or_else(|| CalendarError::EventNotFound {
            subject: subject.to_string(),
            start,
        })
    }

    /// Copies every event of the selected calendar touching `date` onto
    /// `target_date` in `target_name`, keeping each event's time of day.
    ///
    /// # Errors
    ///
    /// Fails if nothing is selected, the target does not exist, or any copy
    /// duplicates an event in the target. Nothing is copied on failure.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn copy_events_on(
        &mut self,
        date: Date,
        target_name: &str,
        target_date: Date,
    ) -> Result<Vec<Arc<Event>>, CalendarError> {
        let events = self.selected_calendar()?.get_events_on(date);
        self.copy_events(&events, target_name, target_date)
    }

    /// Copies every event of the selected calendar overlapping the days
    /// `from..=to` into `target_name`. The first day of the window maps onto
    /// `target_date` and every event keeps its day offset from it.
    ///
    /// # Errors
    ///
    /// Fails if nothing is selected, the target does not exist, or any copy
    /// duplicates an event in the target. Nothing is copied on failure.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn copy_events_between(
        &mut self,
        from: Date,
        to: Date,
        target_name: &str,
        target_date: Date,
    ) -> Result<Vec<Arc<Event>>, CalendarError> {
        let (start, end) = day_window(from, to);
        let events = self.selected_calendar()?.get_events_between(start, end);

        let mut copies = Vec::with_capacity(events.len());
        for event in &events {
            let offset = from.until(event.date())?;
            let day = target_date.checked_add(offset)?;
            copies.push(self.build_copy(event, day.to_datetime(event.start().time()), target_name)?);
        }
        self.insert_all(target_name, copies)
    }

    /// Copies `events` from the selected calendar onto `target_date` in
    /// `target`. Each event's time of day on `target_date` is read in the
    /// selected calendar's zone and converted to the target calendar's zone.
    ///
    /// # Errors
    ///
    /// Fails if nothing is selected, the target does not exist, or any copy
    /// duplicates an event in the target. Nothing is copied on failure.
    pub fn copy_events(
        &mut self,
        events: &[Arc<Event>],
        target_name: &str,
        target_date: Date,
    ) -> Result<Vec<Arc<Event>>, CalendarError> {
        let mut copies = Vec::with_capacity(events.len());
        for event in events {
            let start = target_date.to_datetime(event.start().time());
            copies.push(self.build_copy(event, start, target_name)?);
        }
        self.insert_all(target_name, copies)
    }

    /// Builds a standalone copy of `event` starting at `start` in the selected
    /// calendar's zone, converted to the zone of `target_name`.
    fn build_copy(
        &self,
        event: &Event,
        start: DateTime,
        target_name: &str,
    ) -> Result<Event, CalendarError> {
        let from = self.selected_model()?.timezone();
        let to = self.model(target_name)?.timezone();

        let end = start.checked_add(event.duration())?;
        let mut draft = event.to_draft();
        draft.start = Some(translate(start, from, to)?);
        draft.end = Some(translate(end, from, to)?);
        Event::new(draft)
    }

    fn insert_all(
        &mut self,
        target_name: &str,
        copies: Vec<Event>,
    ) -> Result<Vec<Arc<Event>>, CalendarError> {
        let calendar = self.calendar_mut(target_name)?;
        for (i, copy) in copies.iter().enumerate() {
            calendar.ensure_unique(copy, &[])?;
            if copies.iter().take(i).any(|c| c.same_key(copy)) {
                return Err(CalendarError::DuplicateEvent {
                    subject: copy.subject().to_string(),
                    start: copy.start(),
                    end: copy.end(),
                });
            }
        }

        let copied: Vec<_> = copies.into_iter().map(Arc::new).collect();
        for event in &copied {
            calendar.insert(Arc::clone(event));
        }
        tracing::debug!(calendar = target_name, count = copied.len(), "copied events");
        Ok(copied)
    }

    fn selected_model(&self) -> Result<&CalendarModel, CalendarError> {
        let name = self
            .selected
            .as_deref()
            .ok_or(CalendarError::NoCalendarSelected)?;
        self.model(name)
    }
}

fn validate_name(name: &str) -> Result<&str, CalendarError> {
    let name = name.trim();
    match name.is_empty() {
        true => Err(CalendarError::EmptyCalendarName),
        false => Ok(name),
    }
}

/// A property of a calendar that can be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CalendarProperty {
    /// The unique name.
    Name,

    /// The IANA timezone.
    Timezone,
}

const PROPERTY_NAME: &str = "name";
const PROPERTY_TIMEZONE: &str = "timezone";

impl AsRef<str> for CalendarProperty {
    fn as_ref(&self) -> &str {
        match self {
            CalendarProperty::Name => PROPERTY_NAME,
            CalendarProperty::Timezone => PROPERTY_TIMEZONE,
        }
    }
}

impl Display for CalendarProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for CalendarProperty {
    type Err = CalendarError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            PROPERTY_NAME => Ok(CalendarProperty::Name),
            PROPERTY_TIMEZONE => Ok(CalendarProperty::Timezone),
            _ => Err(CalendarError::InvalidProperty(value.to_string())),
        }
    }
}
