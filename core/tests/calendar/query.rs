// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use shiftcal_core::{Calendar, ErrorKind, SeriesEnd};

use crate::common::{assert_subjects, at, day, standup_series, timed_draft};

fn setup() -> Calendar {
    let mut cal = Calendar::new();
    cal.create_event_series(standup_series(SeriesEnd::Count(4)))
        .unwrap();
    cal.create_event(timed_draft(
        "Lunch",
        at(2025, 6, 2, 12, 0),
        at(2025, 6, 2, 13, 0),
    ))
    .unwrap();
    cal.create_event(timed_draft(
        "Conference",
        at(2025, 6, 3, 9, 0),
        at(2025, 6, 5, 17, 0),
    ))
    .unwrap();
    cal
}

#[test]
fn single_day_includes_spanning_events() {
    let cal = setup();

    assert_subjects(&cal.get_events_on(day(2025, 6, 2)), &["Standup", "Lunch"]);
    assert_subjects(&cal.get_events_on(day(2025, 6, 4)), &["Conference", "Standup"]);
    assert_subjects(&cal.get_events_on(day(2025, 6, 5)), &["Conference"]);
    assert!(cal.get_events_on(day(2025, 6, 6)).is_empty());
}

#[test]
fn window_is_inclusive_at_both_ends() {
    let cal = setup();

    let events = cal.get_events_between(at(2025, 6, 2, 9, 15), at(2025, 6, 2, 12, 0));
    assert_subjects(&events, &["Standup", "Lunch"]);

    let events = cal.get_events_between(at(2025, 6, 4, 0, 0), at(2025, 6, 4, 23, 59));
    assert_subjects(&events, &["Conference", "Standup"]);
}

#[test]
fn busy_status_follows_point_window() {
    let cal = setup();

    assert!(cal.is_busy(at(2025, 6, 2, 12, 30)));
    assert!(cal.is_busy(at(2025, 6, 4, 3, 0)));
    assert!(!cal.is_busy(at(2025, 6, 2, 14, 0)));
}

#[test]
fn get_event_by_subject_and_start() {
    let cal = setup();

    let lunch = cal.get_event("Lunch", at(2025, 6, 2, 12, 0), None).unwrap();
    assert_eq!(lunch.end(), at(2025, 6, 2, 13, 0));

    let err = cal
        .get_event("Lunch", at(2025, 6, 2, 12, 0), Some(at(2025, 6, 2, 14, 0)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
}
