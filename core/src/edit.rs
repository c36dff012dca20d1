// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr, sync::Arc};

use jiff::civil::DateTime;

use crate::{Calendar, CalendarError, Event, EventDraft};

/// How far an edit of a series instance reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum EditMode {
    /// Only the targeted instance.
    Single,

    /// The targeted instance and every later one.
    Future,

    /// Every instance of the series.
    All,
}

const MODE_SINGLE: &str = "single";
const MODE_FUTURE: &str = "future";
const MODE_ALL: &str = "all";

impl AsRef<str> for EditMode {
    fn as_ref(&self) -> &str {
        match self {
            EditMode::Single => MODE_SINGLE,
            EditMode::Future => MODE_FUTURE,
            EditMode::All => MODE_ALL,
        }
    }
}

impl Display for EditMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EditMode {
    type Err = CalendarError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            MODE_SINGLE => Ok(EditMode::Single),
            MODE_FUTURE => Ok(EditMode::Future),
            MODE_ALL => Ok(EditMode::All),
            _ => Err(CalendarError::UnsupportedEditMode(value.to_string())),
        }
    }
}

impl Calendar {
    /// Replaces the event `subject` starting at `start` using `template` as the
    /// source of the new field values, and returns the new events.
    ///
    /// A standalone event, or a series instance edited with
    /// [`EditMode::Single`], is swapped for the template as a whole. With
    /// [`EditMode::Future`] or [`EditMode::All`] each affected instance keeps
    /// its own start and takes subject, description, location, status and
    /// duration from the template.
    ///
    /// # Errors
    ///
    /// Fails if the target does not exist or is ambiguous, or if a replacement
    /// would duplicate an event outside the edited set. Nothing is changed on
    /// failure.
    #[tracing::instrument(level = "debug", skip(self, template))]
    pub fn edit_event(
        &mut self,
        subject: &str,
        start: DateTime,
        template: &Event,
        mode: EditMode,
    ) -> Result<Vec<Arc<Event>>, CalendarError> {
        let target = self.find_target(subject, start)?;
        self.edit_event_at(&target, template, mode)
    }

    /// Same as [`Calendar::edit_event`] for a target already looked up, for
    /// instance with [`Calendar::get_event`] narrowed by its end.
    ///
    /// # Errors
    ///
    /// Fails if `target` is not an event of this calendar, or if a replacement
    /// would duplicate an event outside the edited set. Nothing is changed on
    /// failure.
    #[tracing::instrument(level = "debug", skip_all, fields(subject = %target.subject(), start = %target.start()))]
    pub fn edit_event_at(
        &mut self,
        target: &Arc<Event>,
        template: &Event,
        mode: EditMode,
    ) -> Result<Vec<Arc<Event>>, CalendarError> {
        if !self.bucket(target.date()).iter().any(|e| Arc::ptr_eq(e, target)) {
            return Err(CalendarError::EventNotFound {
                subject: target.subject().to_string(),
                start: target.start(),
            });
        }

        let plan = match self.series_key_of(target) {
            None => vec![(Arc::clone(target), template.clone())],
            Some(key) => self.plan_series_edit(&key, target, template, mode)?,
        };

        let replaced: Vec<_> = plan.iter().map(|(old, _)| Arc::clone(old)).collect();
        let mut seen: Vec<&Event> = Vec::with_capacity(plan.len());
        for (_, new) in &plan {
            self.ensure_unique(new, &replaced)?;
            if seen.iter().any(|e| e.same_key(new)) {
                return Err(CalendarError::DuplicateEvent {
                    subject: new.subject().to_string(),
                    start: new.start(),
                    end: new.end(),
                });
            }
            seen.push(new);
        }

        let mut updated = Vec::with_capacity(plan.len());
        for (old, new) in plan {
            let new = Arc::new(new);
            self.replace(&old, Arc::clone(&new));
            updated.push(new);
        }

        tracing::debug!(count = updated.len(), "edited events");
        Ok(updated)
    }

    /// Looks in the series created under `subject` first, then in the date
    /// index.
    fn find_target(&self, subject: &str, start: DateTime) -> Result<Arc<Event>, CalendarError> {
        let in_series = self.series_entry(subject).and_then(|s| {
            s.instances()
                .iter()
                .find(|e| e.subject() == subject && e.start() == start)
        });

        match in_series {
            Some(event) => Ok(Arc::clone(event)),
            None => self.get_event(subject, start, None),
        }
    }

    fn plan_series_edit(
        &self,
        key: &str,
        target: &Arc<Event>,
        template: &Event,
        mode: EditMode,
    ) -> Result<Vec<(Arc<Event>, Event)>, CalendarError> {
        let Some(series) = self.series_entry(key) else {
            return Ok(vec![(Arc::clone(target), template.clone())]);
        };

        match mode {
            EditMode::Single => Ok(vec![(Arc::clone(target), template.clone())]),
            EditMode::Future => series
                .instances()
                .iter()
                .filter(|e| e.start() >= target.start())
                .map(|e| rebuild_from(e, template).map(|new| (Arc::clone(e), new)))
                .collect(),
            EditMode::All => series
                .instances()
                .iter()
                .map(|e| rebuild_from(e, template).map(|new| (Arc::clone(e), new)))
                .collect(),
        }
    }
}

/// Builds the replacement of one series instance: its own start, the template's
/// fields, and the template's duration unless that one is degenerate.
fn rebuild_from(instance: &Event, template: &Event) -> Result<Event, CalendarError> {
    let duration = match template.duration().is_positive() {
        true => template.duration(),
        false => instance.duration(),
    };

    Event::new(EventDraft {
        subject: template.subject().to_string(),
        start: Some(instance.start()),
        end: Some(instance.start().checked_add(duration)?),
        description: template.description().map(ToString::to_string),
        location: template.location(),
        status: template.status(),
    })
}
