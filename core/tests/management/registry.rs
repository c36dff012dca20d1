// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use shiftcal_core::{
    CalendarConfig, CalendarError, CalendarManagement, CalendarProperty, Config, ErrorKind,
};

use crate::common::{at, management_with, timed_draft};

#[test]
fn duplicate_calendar_name_is_rejected() {
    let mut management = management_with(&[("work", "America/New_York")]);

    let err = management.create_calendar("work", "UTC").unwrap_err();
    assert!(matches!(err, CalendarError::DuplicateCalendar(_)));
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn unknown_timezone_is_rejected() {
    let mut management = CalendarManagement::new();

    let err = management
        .create_calendar("work", "Atlantis/Lost_City")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(management.calendar_names().count(), 0);
}

#[test]
fn rename_keeps_selection_and_events() {
    // Arrange
    let mut management = management_with(&[("work", "UTC"), ("home", "UTC")]);
    management
        .selected_calendar_mut()
        .unwrap()
        .create_event(timed_draft("Review", at(2025, 6, 2, 10, 0), at(2025, 6, 2, 11, 0)))
        .unwrap();

    // Act
    management
        .edit_calendar("work", CalendarProperty::Name, "office")
        .unwrap();

    // Assert
    assert_eq!(management.selected_name(), Some("office"));
    assert_eq!(management.selected_calendar().unwrap().len(), 1);
    assert_eq!(
        management.calendar_names().collect::<Vec<_>>(),
        vec!["home", "office"]
    );
    assert!(matches!(
        management.calendar("work"),
        Err(CalendarError::CalendarNotFound(_))
    ));
}

#[test]
fn rename_to_taken_name_is_rejected() {
    let mut management = management_with(&[("work", "UTC"), ("home", "UTC")]);

    let err = management
        .edit_calendar("work", CalendarProperty::Name, "home")
        .unwrap_err();
    assert!(matches!(err, CalendarError::DuplicateCalendar(_)));
    assert_eq!(management.selected_name(), Some("work"));
}

#[test]
fn timezone_edit_keeps_wall_clock_times() {
    let mut management = management_with(&[("work", "UTC")]);
    let event = management
        .selected_calendar_mut()
        .unwrap()
        .create_event(timed_draft("Review", at(2025, 6, 2, 10, 0), at(2025, 6, 2, 11, 0)))
        .unwrap();

    management
        .edit_calendar("work", CalendarProperty::Timezone, "Asia/Tokyo")
        .unwrap();

    let model = management.model("work").unwrap();
    assert_eq!(model.timezone_name(), "Asia/Tokyo");
    assert_eq!(
        management.calendar_timezone(None).unwrap().iana_name(),
        Some("Asia/Tokyo")
    );
    let stored = model
        .calendar()
        .get_event("Review", event.start(), None)
        .unwrap();
    assert_eq!(stored.start(), at(2025, 6, 2, 10, 0));
}

#[test]
fn timezone_of_selected_requires_selection() {
    let management = CalendarManagement::new();
    assert!(matches!(
        management.calendar_timezone(None),
        Err(CalendarError::NoCalendarSelected)
    ));
}

#[test]
fn builds_registry_from_config() {
    // Arrange
    let mut config = Config {
        calendars: vec![
            CalendarConfig {
                name: "work".to_string(),
                timezone: Some("Europe/Paris".to_string()),
            },
            CalendarConfig {
                name: "home".to_string(),
                timezone: Some("America/New_York".to_string()),
            },
        ],
        default_calendar: Some("home".to_string()),
    };
    config.normalize().unwrap();

    // Act
    let management = CalendarManagement::from_config(&config).unwrap();

    // Assert
    assert_eq!(management.selected_name(), Some("home"));
    assert_eq!(
        management.model("work").unwrap().timezone_name(),
        "Europe/Paris"
    );
}
