// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::datetime;
use shiftcal_core::{CalendarError, CalendarManagement, SeriesEnd};

use crate::common::{assert_dates, at, day, management_with, standup_series, timed_draft};

fn with_meeting(calendars: &[(&str, &str)]) -> CalendarManagement {
    let mut management = management_with(calendars);
    management
        .selected_calendar_mut()
        .unwrap()
        .create_event(timed_draft(
            "Meeting",
            at(2025, 1, 15, 9, 0),
            at(2025, 1, 15, 9, 30),
        ))
        .unwrap();
    management
}

#[test]
fn copy_event_converts_between_zones() {
    // Arrange
    let mut management =
        with_meeting(&[("ny", "America/New_York"), ("paris", "Europe/Paris")]);

    // Act
    let copy = management
        .copy_event("Meeting", at(2025, 1, 15, 9, 0), "paris", at(2025, 1, 20, 9, 0))
        .unwrap();

    // Assert
    assert_eq!(copy.start(), at(2025, 1, 20, 15, 0));
    assert_eq!(copy.end(), at(2025, 1, 20, 15, 30));
    let paris = management.calendar("paris").unwrap();
    assert_eq!(paris.get_events_on(day(2025, 1, 20)).len(), 1);
    assert_eq!(management.calendar("ny").unwrap().len(), 1);
}

#[test]
fn copy_round_trip_restores_local_times() {
    // Arrange
    let mut management = with_meeting(&[
        ("ny", "America/New_York"),
        ("paris", "Europe/Paris"),
        ("ny-archive", "America/New_York"),
    ]);

    // Act
    management
        .copy_event("Meeting", at(2025, 1, 15, 9, 0), "paris", at(2025, 1, 15, 9, 0))
        .unwrap();
    management.select_calendar("paris").unwrap();
    let back = management
        .copy_event(
            "Meeting",
            at(2025, 1, 15, 15, 0),
            "ny-archive",
            at(2025, 1, 15, 15, 0),
        )
        .unwrap();

    // Assert
    assert_eq!(back.start(), at(2025, 1, 15, 9, 0));
    assert_eq!(back.end(), at(2025, 1, 15, 9, 30));
}

#[test]
fn batch_copy_uses_offsets_of_target_date() {
    // Arrange: New York switches to DST on 2025-03-09, Paris on 2025-03-30
    let mut management = management_with(&[("ny", "America/New_York"), ("paris", "Europe/Paris")]);
    management
        .selected_calendar_mut()
        .unwrap()
        .create_event(timed_draft("Sync", at(2025, 3, 5, 9, 0), at(2025, 3, 5, 10, 0)))
        .unwrap();

    // Act
    let before_dst = management
        .copy_events_on(day(2025, 3, 5), "paris", day(2025, 3, 5))
        .unwrap();
    let after_dst = management
        .copy_events_on(day(2025, 3, 5), "paris", day(2025, 3, 12))
        .unwrap();

    // Assert
    assert_eq!(before_dst[0].start(), at(2025, 3, 5, 15, 0));
    assert_eq!(after_dst[0].start(), at(2025, 3, 12, 14, 0));
    assert_eq!(after_dst[0].end(), at(2025, 3, 12, 15, 0));
}

#[test]
fn window_copy_keeps_day_offsets() {
    // Arrange
    let mut management = management_with(&[("work", "UTC"), ("backup", "UTC")]);
    management
        .selected_calendar_mut()
        .unwrap()
        .create_event_series(standup_series(SeriesEnd::Count(4)))
        .unwrap();

    // Act
    let copies = management
        .copy_events_between(day(2025, 6, 2), day(2025, 6, 4), "backup", day(2025, 7, 7))
        .unwrap();

    // Assert
    assert_dates(&copies, &[day(2025, 7, 7), day(2025, 7, 9)]);
    let backup = management.calendar("backup").unwrap();
    assert_eq!(backup.len(), 2);
    assert_eq!(backup.series().count(), 0);
}

#[test]
fn window_copy_includes_last_seconds_of_the_day() {
    // Arrange
    let mut management = management_with(&[("a", "UTC"), ("b", "UTC")]);
    let late_start = datetime(2025, 6, 4, 23, 59, 30, 0);
    management
        .selected_calendar_mut()
        .unwrap()
        .create_event(timed_draft("Late", late_start, at(2025, 6, 5, 0, 30)))
        .unwrap();

    // Act
    let copies = management
        .copy_events_between(day(2025, 6, 2), day(2025, 6, 4), "b", day(2025, 7, 7))
        .unwrap();

    // Assert
    assert_eq!(copies.len(), 1);
    assert_eq!(copies[0].start(), datetime(2025, 7, 9, 23, 59, 30, 0));
    assert_eq!(copies[0].end(), at(2025, 7, 10, 0, 30));
}

#[test]
fn duplicate_copy_is_rejected_without_partial_writes() {
    // Arrange
    let mut management = management_with(&[("work", "UTC"), ("backup", "UTC")]);
    let cal = management.selected_calendar_mut().unwrap();
    cal.create_event(timed_draft("A", at(2025, 6, 2, 9, 0), at(2025, 6, 2, 10, 0)))
        .unwrap();
    cal.create_event(timed_draft("B", at(2025, 6, 2, 11, 0), at(2025, 6, 2, 12, 0)))
        .unwrap();
    management
        .copy_event("B", at(2025, 6, 2, 11, 0), "backup", at(2025, 6, 9, 11, 0))
        .unwrap();

    // Act
    let err = management
        .copy_events_on(day(2025, 6, 2), "backup", day(2025, 6, 9))
        .unwrap_err();

    // Assert
    assert!(matches!(err, CalendarError::DuplicateEvent { .. }));
    assert_eq!(management.calendar("backup").unwrap().len(), 1);
}

#[test]
fn copy_requires_selection_and_target() {
    let mut management = CalendarManagement::new();
    management.create_calendar("work", "UTC").unwrap();
    assert!(matches!(
        management.copy_events_on(day(2025, 6, 2), "work", day(2025, 6, 3)),
        Err(CalendarError::NoCalendarSelected)
    ));

    let mut management = with_meeting(&[("ny", "America/New_York")]);
    assert!(matches!(
        management.copy_event("Meeting", at(2025, 1, 15, 9, 0), "paris", at(2025, 1, 16, 9, 0)),
        Err(CalendarError::CalendarNotFound(_))
    ));
    assert!(matches!(
        management.copy_event("Lunch", at(2025, 1, 15, 9, 0), "ny", at(2025, 1, 16, 9, 0)),
        Err(CalendarError::EventNotFound { .. })
    ));
}
