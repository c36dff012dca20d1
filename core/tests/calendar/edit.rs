// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use shiftcal_core::{Calendar, EditMode, ErrorKind, Event, EventLocation, EventStatus, SeriesEnd};

use crate::common::{assert_same_instances, assert_subjects, standup_series};

fn setup() -> (Calendar, Vec<Arc<Event>>) {
    let mut cal = Calendar::new();
    let instances = cal
        .create_event_series(standup_series(SeriesEnd::Count(6)))
        .unwrap()
        .instances()
        .to_vec();
    (cal, instances)
}

fn template_from(event: &Event, subject: &str) -> Event {
    let mut draft = event.to_draft();
    draft.subject = subject.to_string();
    draft.description = Some("moved to the big room".to_string());
    draft.location = Some(EventLocation::Physical);
    draft.status = Some(EventStatus::Public);
    Event::new(draft).unwrap()
}

#[test]
fn single_edit_leaves_other_instances_untouched() {
    // Arrange
    let (mut cal, before) = setup();
    let target = &before[2];

    // Act
    cal.edit_event(
        "Standup",
        target.start(),
        &template_from(target, "Planning"),
        EditMode::Single,
    )
    .unwrap();

    // Assert
    let after = cal.get_series("Standup").unwrap().instances().to_vec();
    assert_subjects(
        &after,
        &["Standup", "Standup", "Planning", "Standup", "Standup", "Standup"],
    );
    assert_same_instances(&after[..2], &before[..2]);
    assert_same_instances(&after[3..], &before[3..]);
}

#[test]
fn future_edit_changes_only_from_target_on() {
    // Arrange
    let (mut cal, before) = setup();
    let k = 3;
    let target = &before[k];

    // Act
    let updated = cal
        .edit_event(
            "Standup",
            target.start(),
            &template_from(target, "Planning"),
            EditMode::Future,
        )
        .unwrap();

    // Assert
    assert_eq!(updated.len(), before.len() - k);
    let after = cal.get_series("Standup").unwrap().instances().to_vec();
    assert_same_instances(&after[..k], &before[..k]);
    for (new, old) in after.iter().zip(&before).skip(k) {
        assert_eq!(new.subject(), "Planning");
        assert_eq!(new.description(), Some("moved to the big room"));
        assert_eq!(new.start(), old.start());
        assert_eq!(new.end(), old.end());
    }
}

#[test]
fn all_edit_changes_every_instance_and_keeps_dates() {
    // Arrange
    let (mut cal, before) = setup();
    let target = &before[4];

    // Act
    cal.edit_event(
        "Standup",
        target.start(),
        &template_from(target, "Planning"),
        EditMode::All,
    )
    .unwrap();

    // Assert
    let after = cal.get_series("Standup").unwrap().instances().to_vec();
    for (new, old) in after.iter().zip(&before) {
        assert_eq!(new.subject(), "Planning");
        assert_eq!(new.location(), Some(EventLocation::Physical));
        assert_eq!(new.status(), Some(EventStatus::Public));
        assert_eq!(new.date(), old.date());
    }
    for event in &after {
        let on_day = cal.get_events_on(event.date());
        assert!(on_day.iter().any(|e| Arc::ptr_eq(e, event)));
    }
    assert_eq!(cal.len(), before.len());
}

#[test]
fn edit_of_unknown_event_is_a_lookup_error() {
    let (mut cal, before) = setup();
    let template = template_from(&before[0], "Planning");

    let err = cal
        .edit_event("Retro", before[0].start(), &template, EditMode::All)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
    assert_same_instances(cal.get_series("Standup").unwrap().instances(), &before);
}
