// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt, sync::Arc};

use shiftcal_core::Event;

use crate::parser::format_datetime;
use crate::table::{PaddingDirection, Table, TableColumn};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
}

impl EventFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                EventColumn::Subject,
                EventColumn::Start,
                EventColumn::End,
                EventColumn::Location,
                EventColumn::Status,
            ],
        }
    }

    pub fn format<'a>(&'a self, events: &'a [Arc<Event>]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

impl Default for EventFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [Arc<Event>],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.events.is_empty() {
            return writeln!(f, "No events");
        }
        write!(f, "{}", Table::new(&self.formatter.columns, self.events))
    }
}

#[derive(Debug, Clone, Copy)]
pub enum EventColumn {
    Subject,
    Start,
    End,
    Location,
    Status,
}

impl TableColumn<Arc<Event>> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Subject => "Subject",
            EventColumn::Start => "Start",
            EventColumn::End => "End",
            EventColumn::Location => "Location",
            EventColumn::Status => "Status",
        }
        .into()
    }

    fn format<'a>(&self, event: &'a Arc<Event>) -> Cow<'a, str> {
        match self {
            EventColumn::Subject => event.subject().into(),
            EventColumn::Start => format_datetime(event.start()).into(),
            EventColumn::End => format_datetime(event.end()).into(),
            EventColumn::Location => event
                .location()
                .map_or(Cow::Borrowed(""), |a| a.to_string().into()),
            EventColumn::Status => event
                .status()
                .map_or(Cow::Borrowed(""), |a| a.to_string().into()),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }
}
