// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Timezone-aware personal calendars with recurring event series, cascading
//! edits and cross-zone copies.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::option_option,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool
)]

mod calendar;
mod config;
mod datetime;
mod edit;
mod error;
mod event;
mod management;
mod recurrence;
mod series;

pub use crate::calendar::Calendar;
pub use crate::config::{APP_NAME, CalendarConfig, Config};
pub use crate::datetime::{DAY_END, DAY_START, day_window, parse_timezone, translate};
pub use crate::edit::EditMode;
pub use crate::error::{CalendarError, ErrorKind};
pub use crate::event::{Event, EventDraft, EventLocation, EventStatus};
pub use crate::management::{CalendarManagement, CalendarModel, CalendarProperty};
pub use crate::recurrence::{ALL_DAY_END, ALL_DAY_START, expand, instance_duration};
pub use crate::series::{EventSeries, MAX_OCCURRENCES, RepeatDays, SeriesDraft, SeriesEnd};
