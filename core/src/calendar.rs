// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::sync::Arc;

use jiff::civil::{Date, DateTime};

use crate::event::validate_subject;
use crate::recurrence::{self, ALL_DAY_END, ALL_DAY_START};
use crate::{CalendarError, Event, EventDraft, EventSeries, SeriesDraft};

/// A single calendar holding standalone events and event series.
///
/// Every event is indexed once under its start date. Series instances are the
/// same `Arc<Event>` handles as the ones in the date index, and both indices are
/// only ever changed together.
#[derive(Debug, Default)]
pub struct Calendar {
    events_by_date: BTreeMap<Date, Vec<Arc<Event>>>,
    series: BTreeMap<String, EventSeries>,
}

impl Calendar {
    /// Creates an empty calendar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a standalone event.
    ///
    /// Without an end the event covers the all-day window, 08:00 to 17:00 on
    /// the start date.
    ///
    /// # Errors
    ///
    /// Fails on an invalid draft or if an event with the same subject, start
    /// and end already exists.
    #[tracing::instrument(level = "debug", skip_all, fields(subject = %draft.subject))]
    pub fn create_event(&mut self, mut draft: EventDraft) -> Result<Arc<Event>, CalendarError> {
        validate_subject(&draft.subject)?;
        let start = draft.start.ok_or(CalendarError::MissingStart)?;
        if draft.end.is_none() {
            draft.start = Some(start.date().to_datetime(ALL_DAY_START));
            draft.end = Some(start.date().to_datetime(ALL_DAY_END));
        }

        let event = Event::new(draft)?;
        self.ensure_unique(&event, &[])?;

        let event = Arc::new(event);
        self.insert(Arc::clone(&event));
        tracing::debug!(start = %event.start(), end = %event.end(), "created event");
        Ok(event)
    }

    /// Creates a series and indexes every instance it expands to.
    ///
    /// A series stays registered under the subject it was created with, even
    /// after an [`EditMode::All`](crate::EditMode::All) edit renames every
    /// instance, so that subject cannot be reused for another series.
    ///
    /// # Errors
    ///
    /// Fails if the rule is invalid, a series with the same subject or anchor
    /// start exists, or any instance duplicates an existing event.
    #[tracing::instrument(level = "debug", skip_all, fields(subject = %draft.subject))]
    pub fn create_event_series(
        &mut self,
        draft: SeriesDraft,
    ) -> Result<&EventSeries, CalendarError> {
        validate_subject(&draft.subject)?;
        let clash = self
            .series
            .values()
            .any(|s| s.subject() == draft.subject || s.anchor_start() == draft.start);
        if clash {
            return Err(CalendarError::DuplicateSeries {
                subject: draft.subject,
                start: draft.start,
            });
        }

        let instances = recurrence::expand(&draft)?;
        for event in &instances {
            self.ensure_unique(event, &[])?;
        }

        let instances: Vec<_> = instances.into_iter().map(Arc::new).collect();
        for event in &instances {
            self.insert(Arc::clone(event));
        }

        tracing::debug!(count = instances.len(), "created series");
        let key = draft.subject.clone();
        let series = EventSeries::new(
            draft.subject,
            draft.start,
            draft.repeat_days,
            draft.until,
            instances,
        );
        Ok(self.series.entry(key).or_insert(series))
    }

    /// Finds the unique event with this subject and start, and with this end
    /// when one is given.
    ///
    /// # Errors
    ///
    /// Fails if no event matches, or if several do.
    pub fn get_event(
        &self,
        subject: &str,
        start: DateTime,
        end: Option<DateTime>,
    ) -> Result<Arc<Event>, CalendarError> {
        let mut found = self.bucket(start.date()).iter().filter(|e| {
            e.subject() == subject && e.start() == start && end.is_none_or(|end| e.end() == end)
        });

        match (found.next(), found.next()) {
            (Some(event), None) => Ok(Arc::clone(event)),
            (None, _) => Err(CalendarError::EventNotFound {
                subject: subject.to_string(),
                start,
            }),
            (Some(_), Some(_)) => Err(CalendarError::AmbiguousEvent {
                subject: subject.to_string(),
                start,
            }),
        }
    }

    /// Every event whose span touches `date`, ordered by start.
    #[must_use]
    pub fn get_events_on(&self, date: Date) -> Vec<Arc<Event>> {
        self.collect_until(date, |e| e.date() <= date && date <= e.end().date())
    }

    /// Every event overlapping `[from, to]`, boundaries included, ordered by
    /// start.
    #[must_use]
    pub fn get_events_between(&self, from: DateTime, to: DateTime) -> Vec<Arc<Event>> {
        self.collect_until(to.date(), |e| e.start() <= to && e.end() >= from)
    }

    /// Whether any event covers the instant `at`.
    #[must_use]
    pub fn is_busy(&self, at: DateTime) -> bool {
        !self.get_events_between(at, at).is_empty()
    }

    /// Every event in the calendar, ordered by date.
    pub fn events(&self) -> impl Iterator<Item = &Arc<Event>> {
        self.events_by_date.values().flatten()
    }

    /// Every series in the calendar.
    pub fn series(&self) -> impl Iterator<Item = &EventSeries> {
        self.series.values()
    }

    /// The series created under this subject.
    #[must_use]
    pub fn get_series(&self, subject: &str) -> Option<&EventSeries> {
        self.series.get(subject)
    }

    /// The series the event handle belongs to, if any.
    #[must_use]
    pub fn series_of(&self, event: &Arc<Event>) -> Option<&EventSeries> {
        self.series.values().find(|s| s.contains(event))
    }

    /// Number of events, series instances included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events_by_date.values().map(Vec::len).sum()
    }

    /// Whether the calendar holds no event.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events_by_date.values().all(Vec::is_empty)
    }

    pub(crate) fn bucket(&self, date: Date) -> &[Arc<Event>] {
        self.events_by_date.get(&date).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn series_key_of(&self, event: &Arc<Event>) -> Option<String> {
        self.series
            .iter()
            .find(|(_, s)| s.contains(event))
            .map(|(k, _)| k.clone())
    }

    pub(crate) fn series_entry(&self, key: &str) -> Option<&EventSeries> {
        self.series.get(key)
    }

    /// Rejects `event` if its identity triple is already taken by an event
    /// other than the `replaced` handles.
    pub(crate) fn ensure_unique(
        &self,
        event: &Event,
        replaced: &[Arc<Event>],
    ) -> Result<(), CalendarError> {
        let taken = self
            .bucket(event.date())
            .iter()
            .filter(|e| !replaced.iter().any(|r| Arc::ptr_eq(r, e)))
            .any(|e| e.same_key(event));

        match taken {
            true => Err(CalendarError::DuplicateEvent {
                subject: event.subject().to_string(),
                start: event.start(),
                end: event.end(),
            }),
            false => Ok(()),
        }
    }

    pub(crate) fn insert(&mut self, event: Arc<Event>) {
        self.events_by_date
            .entry(event.date())
            .or_default()
            .push(event);
    }

    /// Swaps `old` for `new` in the date index and in the owning series, if any.
    pub(crate) fn replace(&mut self, old: &Arc<Event>, new: Arc<Event>) {
        let date = old.date();
        if let Some(bucket) = self.events_by_date.get_mut(&date) {
            bucket.retain(|e| !Arc::ptr_eq(e, old));
            if bucket.is_empty() {
                self.events_by_date.remove(&date);
            }
        }

        for series in self.series.values_mut() {
            if let Some(index) = series.position(old) {
                series.replace_at(index, Arc::clone(&new));
            }
        }

        self.insert(new);
    }

    fn collect_until(&self, last: Date, keep: impl Fn(&Event) -> bool) -> Vec<Arc<Event>> {
        let mut events: Vec<_> = self
            .events_by_date
            .range(..=last)
            .flat_map(|(_, bucket)| bucket)
            .filter(|e| keep(e))
            .cloned()
            .collect();
        events.sort_by_key(|e| (e.start(), e.end()));
        events
    }
}
