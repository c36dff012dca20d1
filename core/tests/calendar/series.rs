// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use jiff::SignedDuration;
use jiff::civil::Weekday;
use shiftcal_core::{Calendar, CalendarError, ErrorKind, SeriesDraft, SeriesEnd};

use crate::common::{assert_dates, at, day, standup_series};

#[test]
fn count_mode_yields_exact_instances_on_repeat_days() {
    // Arrange
    let mut cal = Calendar::new();

    // Act
    let series = cal
        .create_event_series(standup_series(SeriesEnd::Count(6)))
        .unwrap();

    // Assert
    assert_dates(
        series.instances(),
        &[
            day(2025, 6, 2),
            day(2025, 6, 4),
            day(2025, 6, 9),
            day(2025, 6, 11),
            day(2025, 6, 16),
            day(2025, 6, 18),
        ],
    );
    for instance in series.instances() {
        assert!(matches!(
            instance.start().weekday(),
            Weekday::Monday | Weekday::Wednesday
        ));
        assert_eq!(instance.start().time(), at(2025, 6, 2, 9, 0).time());
        assert_eq!(instance.end().time(), at(2025, 6, 2, 9, 15).time());
    }
    assert!(
        series
            .instances()
            .windows(2)
            .all(|w| w[0].start() <= w[1].start())
    );
}

#[test]
fn until_mode_stops_at_last_matching_day() {
    // Arrange
    let mut cal = Calendar::new();
    let draft = SeriesDraft::new(
        "Sync",
        at(2025, 6, 2, 14, 0),
        "MW".parse().unwrap(),
        SeriesEnd::Until(day(2025, 7, 1)),
    );

    // Act
    let series = cal.create_event_series(draft).unwrap();

    // Assert
    let last = series.instances().last().unwrap();
    assert_eq!(last.date(), day(2025, 6, 30));
    assert!(series.instances().iter().all(|e| e.date() <= day(2025, 7, 1)));
    assert_eq!(cal.len(), 9);
}

#[test]
fn default_duration_depends_on_anchor_time() {
    let mut cal = Calendar::new();

    let all_day = cal
        .create_event_series(SeriesDraft::new(
            "Shift",
            at(2025, 6, 2, 8, 0),
            "R".parse().unwrap(),
            SeriesEnd::Count(1),
        ))
        .unwrap();
    assert_eq!(
        all_day.instances()[0].duration(),
        SignedDuration::from_hours(9)
    );

    let hourly = cal
        .create_event_series(SeriesDraft::new(
            "Review",
            at(2025, 6, 2, 15, 0),
            "F".parse().unwrap(),
            SeriesEnd::Count(1),
        ))
        .unwrap();
    assert_eq!(
        hourly.instances()[0].duration(),
        SignedDuration::from_hours(1)
    );
}

#[test]
fn invalid_rules_are_validation_errors() {
    let mut cal = Calendar::new();

    let err = cal
        .create_event_series(standup_series(SeriesEnd::Count(0)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = cal
        .create_event_series(standup_series(SeriesEnd::Until(day(2025, 6, 1))))
        .unwrap_err();
    assert!(matches!(err, CalendarError::EmptySeries { .. }));

    assert!(cal.is_empty());
    assert_eq!(cal.series().count(), 0);
}

#[test]
fn duplicate_series_is_a_conflict() {
    let mut cal = Calendar::new();
    cal.create_event_series(standup_series(SeriesEnd::Count(2)))
        .unwrap();

    let err = cal
        .create_event_series(standup_series(SeriesEnd::Count(3)))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(cal.len(), 2);
}
