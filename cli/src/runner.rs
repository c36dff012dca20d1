// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use colored::Colorize;
use shiftcal_core::{
    ALL_DAY_START, CalendarManagement, EditMode, Event, EventDraft, SeriesDraft,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::{Command, EventProperty, EventTime, Repeat};
use crate::event_formatter::EventFormatter;
use crate::parser::{parse_datetime, unquote};

const PROMPT: &str = "> ";

/// Whether the loop should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Executes commands against a calendar registry and writes their output.
#[derive(Debug, Default)]
pub struct Session {
    management: CalendarManagement,
}

impl Session {
    pub fn new(management: CalendarManagement) -> Self {
        Self { management }
    }

    pub fn management(&self) -> &CalendarManagement {
        &self.management
    }

    /// Runs a headless script, which must end with `exit`.
    ///
    /// Failing commands are reported and skipped. Lines after `exit` are not
    /// read.
    pub fn run_script(&mut self, script: &str, out: &mut impl io::Write) -> Result<(), Box<dyn Error>> {
        for line in script.lines() {
            if self.execute_line(line, out)? == Flow::Exit {
                return Ok(());
            }
        }
        Err("Script ended without an `exit` command".into())
    }

    /// Reads commands from `input` until `exit` or end of input.
    pub async fn run_interactive<R>(
        &mut self,
        input: R,
        out: &mut impl io::Write,
    ) -> Result<(), Box<dyn Error>>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                return Ok(());
            };
            if self.execute_line(&line, out)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Parses and executes one line, reporting any failure to `out`.
    pub fn execute_line(&mut self, line: &str, out: &mut impl io::Write) -> io::Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        match line
            .parse::<Command>()
            .and_then(|command| self.execute(command, out))
        {
            Ok(flow) => Ok(flow),
            Err(e) => {
                tracing::debug!(line, error = %e, "command failed");
                writeln!(out, "{} {}", "Error:".red(), e)?;
                Ok(Flow::Continue)
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self, out))]
    pub fn execute(
        &mut self,
        command: Command,
        out: &mut impl io::Write,
    ) -> Result<Flow, Box<dyn Error>> {
        match command {
            Command::CreateCalendar { name, timezone } => {
                self.management.create_calendar(&name, &timezone)?;
            }
            Command::EditCalendar {
                name,
                property,
                value,
            } => self.management.edit_calendar(&name, property, &value)?,
            Command::UseCalendar { name } => self.management.select_calendar(&name)?,
            Command::CreateEvent {
                subject,
                time,
                repeat,
            } => self.create_event(subject, time, repeat)?,
            Command::EditEvent {
                mode,
                property,
                subject,
                start,
                end,
                value,
            } => {
                let calendar = self.management.selected_calendar_mut()?;
                let target = calendar.get_event(&subject, start, end)?;
                let template = build_template(&target, property, &value)?;
                calendar.edit_event_at(&target, &template, mode)?;
            }
            Command::PrintEventsOn { date } => {
                let events = self.management.selected_calendar()?.get_events_on(date);
                write!(out, "{}", EventFormatter::new().format(&events))?;
            }
            Command::PrintEventsBetween { start, end } => {
                if end < start {
                    return Err(format!("End {end} must not be before start {start}").into());
                }
                let events = self
                    .management
                    .selected_calendar()?
                    .get_events_between(start, end);
                write!(out, "{}", EventFormatter::new().format(&events))?;
            }
            Command::ShowStatus { at } => {
                let status = match self.management.selected_calendar()?.is_busy(at) {
                    true => "Busy",
                    false => "Available",
                };
                writeln!(out, "{status}")?;
            }
            Command::CopyEvent {
                subject,
                start,
                target,
                target_start,
            } => {
                self.management
                    .copy_event(&subject, start, &target, target_start)?;
            }
            Command::CopyEventsOn {
                date,
                target,
                target_date,
            } => {
                self.management.copy_events_on(date, &target, target_date)?;
            }
            Command::CopyEventsBetween {
                from,
                to,
                target,
                target_date,
            } => {
                if to < from {
                    return Err(format!("End date {to} must not be before start date {from}").into());
                }
                self.management
                    .copy_events_between(from, to, &target, target_date)?;
            }
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn create_event(
        &mut self,
        subject: String,
        time: EventTime,
        repeat: Option<Repeat>,
    ) -> Result<(), Box<dyn Error>> {
        let calendar = self.management.selected_calendar_mut()?;
        match (time, repeat) {
            (EventTime::Timed { start, end }, None) => {
                calendar.create_event(EventDraft::new(subject, start).with_end(end))?;
            }
            (EventTime::AllDay(date), None) => {
                calendar.create_event(EventDraft::new(subject, date.to_datetime(ALL_DAY_START)))?;
            }
            (EventTime::Timed { start, end }, Some(Repeat { days, until })) => {
                let draft = SeriesDraft::new(subject, start, days, until).with_end(end);
                calendar.create_event_series(draft)?;
            }
            (EventTime::AllDay(date), Some(Repeat { days, until })) => {
                let start = date.to_datetime(ALL_DAY_START);
                calendar.create_event_series(SeriesDraft::new(subject, start, days, until))?;
            }
        }
        Ok(())
    }
}

/// The target event with one property replaced.
fn build_template(
    target: &Event,
    property: EventProperty,
    value: &str,
) -> Result<Event, Box<dyn Error>> {
    let value = unquote(value.trim());
    let mut draft = target.to_draft();
    match property {
        EventProperty::Subject => draft.subject = value.to_string(),
        EventProperty::Start => draft.start = Some(parse_datetime(value)?),
        EventProperty::End => draft.end = Some(parse_datetime(value)?),
        EventProperty::Description => draft.description = Some(value.to_string()),
        EventProperty::Location => draft.location = Some(value.parse()?),
        EventProperty::Status => draft.status = Some(value.parse()?),
    }
    Ok(Event::new(draft)?)
}
