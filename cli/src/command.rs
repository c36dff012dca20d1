// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! The line-oriented command language read by both the interactive prompt and
//! headless scripts.

use std::{error::Error, fmt, str::FromStr, sync::OnceLock};

use jiff::civil::{Date, DateTime};
use regex::{Captures, Regex};
use shiftcal_core::{CalendarProperty, EditMode, RepeatDays, SeriesEnd};

use crate::parser::{parse_date, parse_datetime, unquote};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create calendar --name <name> --timezone <area/location>`
    CreateCalendar { name: String, timezone: String },

    /// `edit calendar --name <name> --property <property> <value>`
    EditCalendar {
        name: String,
        property: CalendarProperty,
        value: String,
    },

    /// `use calendar --name <name>`
    UseCalendar { name: String },

    /// `create event <subject> (from <dt> to <dt> | on <date>) [repeats ...]`
    CreateEvent {
        subject: String,
        time: EventTime,
        repeat: Option<Repeat>,
    },

    /// `edit event|events|series <property> <subject> from <dt> [to <dt>] with <value>`
    EditEvent {
        mode: EditMode,
        property: EventProperty,
        subject: String,
        start: DateTime,
        end: Option<DateTime>,
        value: String,
    },

    /// `print events on <date>`
    PrintEventsOn { date: Date },

    /// `print events from <dt> to <dt>`
    PrintEventsBetween { start: DateTime, end: DateTime },

    /// `show status on <dt>`
    ShowStatus { at: DateTime },

    /// `copy event <subject> on <dt> --target <calendar> to <dt>`
    CopyEvent {
        subject: String,
        start: DateTime,
        target: String,
        target_start: DateTime,
    },

    /// `copy events on <date> --target <calendar> to <date>`
    CopyEventsOn {
        date: Date,
        target: String,
        target_date: Date,
    },

    /// `copy events between <date> and <date> --target <calendar> to <date>`
    CopyEventsBetween {
        from: Date,
        to: Date,
        target: String,
        target_date: Date,
    },

    /// `exit`
    Exit,
}

/// When a created event takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    /// An explicit start and end.
    Timed { start: DateTime, end: DateTime },

    /// The all-day window of the given date.
    AllDay(Date),
}

/// The recurrence part of a `create event` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat {
    pub days: RepeatDays,
    pub until: SeriesEnd,
}

/// The event property changed by an `edit` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventProperty {
    Subject,
    Start,
    End,
    Description,
    Location,
    Status,
}

const PROPERTY_SUBJECT: &str = "subject";
const PROPERTY_START: &str = "start";
const PROPERTY_END: &str = "end";
const PROPERTY_DESCRIPTION: &str = "description";
const PROPERTY_LOCATION: &str = "location";
const PROPERTY_STATUS: &str = "status";

impl AsRef<str> for EventProperty {
    fn as_ref(&self) -> &str {
        match self {
            EventProperty::Subject => PROPERTY_SUBJECT,
            EventProperty::Start => PROPERTY_START,
            EventProperty::End => PROPERTY_END,
            EventProperty::Description => PROPERTY_DESCRIPTION,
            EventProperty::Location => PROPERTY_LOCATION,
            EventProperty::Status => PROPERTY_STATUS,
        }
    }
}

impl fmt::Display for EventProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EventProperty {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            PROPERTY_SUBJECT => Ok(EventProperty::Subject),
            PROPERTY_START => Ok(EventProperty::Start),
            PROPERTY_END => Ok(EventProperty::End),
            PROPERTY_DESCRIPTION => Ok(EventProperty::Description),
            PROPERTY_LOCATION => Ok(EventProperty::Location),
            PROPERTY_STATUS => Ok(EventProperty::Status),
            _ => Err(format!("Unknown event property '{s}'").into()),
        }
    }
}

impl FromStr for Command {
    type Err = Box<dyn Error>;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line == "exit" {
            return Ok(Command::Exit);
        }

        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (Some("create"), Some("calendar")) => parse_create_calendar(line),
            (Some("edit"), Some("calendar")) => parse_edit_calendar(line),
            (Some("use"), Some("calendar")) => parse_use_calendar(line),
            (Some("create"), Some("event")) => parse_create_event(line),
            (Some("edit"), Some("event")) => parse_edit_event(line),
            (Some("edit"), Some("events" | "series")) => parse_edit_events(line),
            (Some("print"), Some("events")) => parse_print(line),
            (Some("show"), Some("status")) => parse_show_status(line),
            (Some("copy"), Some("event")) => parse_copy_event(line),
            (Some("copy"), Some("events")) => parse_copy_events(line),
            _ => Err(format!("Unknown command: {line}").into()),
        }
    }
}

fn parse_create_calendar(line: &str) -> Result<Command, Box<dyn Error>> {
    const RE: &str = r#"^create\s+calendar\s+--name\s+(?P<name>"[^"]+"|\S+)\s+--timezone\s+(?P<timezone>\S+)$"#;
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let caps = capture(&REGEX, RE, line, "create calendar --name <name> --timezone <area/location>")?;
    Ok(Command::CreateCalendar {
        name: group(&caps, "name").to_string(),
        timezone: group(&caps, "timezone").to_string(),
    })
}

fn parse_edit_calendar(line: &str) -> Result<Command, Box<dyn Error>> {
    const RE: &str = r#"^edit\s+calendar\s+--name\s+(?P<name>"[^"]+"|\S+)\s+--property\s+(?P<property>\S+)\s+(?P<value>"[^"]+"|\S+)$"#;
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let caps = capture(&REGEX, RE, line, "edit calendar --name <name> --property <name|timezone> <value>")?;
    Ok(Command::EditCalendar {
        name: group(&caps, "name").to_string(),
        property: group(&caps, "property").parse()?,
        value: group(&caps, "value").to_string(),
    })
}

fn parse_use_calendar(line: &str) -> Result<Command, Box<dyn Error>> {
    const RE: &str = r#"^use\s+calendar\s+--name\s+(?P<name>"[^"]+"|\S+)$"#;
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let caps = capture(&REGEX, RE, line, "use calendar --name <name>")?;
    Ok(Command::UseCalendar {
        name: group(&caps, "name").to_string(),
    })
}

fn parse_create_event(line: &str) -> Result<Command, Box<dyn Error>> {
    const RE: &str = r#"^create\s+event\s+(?P<subject>"[^"]+"|[^\s"]+)\s+(?:from\s+(?P<start>\S+)\s+to\s+(?P<end>\S+)|on\s+(?P<on>\S+))(?:\s+repeats\s+(?P<days>\S+)\s+(?:for\s+(?P<count>\d+)\s+times|until\s+(?P<until>\S+)))?$"#;
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let caps = capture(
        &REGEX,
        RE,
        line,
        "create event <subject> (from <dt> to <dt> | on <date>) [repeats <days> (for <N> times | until <date>)]",
    )?;

    let time = match (caps.name("start"), caps.name("end"), caps.name("on")) {
        (Some(start), Some(end), _) => EventTime::Timed {
            start: parse_datetime(start.as_str())?,
            end: parse_datetime(end.as_str())?,
        },
        (_, _, Some(on)) => EventTime::AllDay(parse_date(on.as_str())?),
        _ => return Err(format!("Missing event time: {line}").into()),
    };

    let repeat = match caps.name("days") {
        Some(days) => {
            let until = match (caps.name("count"), caps.name("until")) {
                (Some(count), _) => SeriesEnd::Count(count.as_str().parse()?),
                (_, Some(until)) => SeriesEnd::Until(parse_date(until.as_str())?),
                _ => return Err(format!("Missing repeat termination: {line}").into()),
            };
            Some(Repeat {
                days: days.as_str().parse()?,
                until,
            })
        }
        None => None,
    };

    Ok(Command::CreateEvent {
        subject: group(&caps, "subject").to_string(),
        time,
        repeat,
    })
}

fn parse_edit_event(line: &str) -> Result<Command, Box<dyn Error>> {
    const RE: &str = r#"^edit\s+event\s+(?P<property>\S+)\s+(?P<subject>"[^"]+"|[^\s"]+)\s+from\s+(?P<start>\S+)\s+to\s+(?P<end>\S+)\s+with\s+(?P<value>.+)$"#;
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let caps = capture(
        &REGEX,
        RE,
        line,
        "edit event <property> <subject> from <dt> to <dt> with <value>",
    )?;
    Ok(Command::EditEvent {
        mode: EditMode::Single,
        property: group(&caps, "property").parse()?,
        subject: group(&caps, "subject").to_string(),
        start: parse_datetime(group(&caps, "start"))?,
        end: Some(parse_datetime(group(&caps, "end"))?),
        value: group(&caps, "value").to_string(),
    })
}

fn parse_edit_events(line: &str) -> Result<Command, Box<dyn Error>> {
    const RE: &str = r#"^edit\s+(?P<scope>events|series)\s+(?P<property>\S+)\s+(?P<subject>"[^"]+"|[^\s"]+)\s+from\s+(?P<start>\S+)\s+with\s+(?P<value>.+)$"#;
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let caps = capture(
        &REGEX,
        RE,
        line,
        "edit events|series <property> <subject> from <dt> with <value>",
    )?;
    let mode = match group(&caps, "scope") {
        "events" => EditMode::Future,
        _ => EditMode::All,
    };
    Ok(Command::EditEvent {
        mode,
        property: group(&caps, "property").parse()?,
        subject: group(&caps, "subject").to_string(),
        start: parse_datetime(group(&caps, "start"))?,
        end: None,
        value: group(&caps, "value").to_string(),
    })
}

fn parse_print(line: &str) -> Result<Command, Box<dyn Error>> {
    const RE: &str =
        r"^print\s+events\s+(?:on\s+(?P<on>\S+)|from\s+(?P<start>\S+)\s+to\s+(?P<end>\S+))$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let caps = capture(
        &REGEX,
        RE,
        line,
        "print events on <date> | print events from <dt> to <dt>",
    )?;
    match (caps.name("on"), caps.name("start"), caps.name("end")) {
        (Some(on), _, _) => Ok(Command::PrintEventsOn {
            date: parse_date(on.as_str())?,
        }),
        (_, Some(start), Some(end)) => Ok(Command::PrintEventsBetween {
            start: parse_datetime(start.as_str())?,
            end: parse_datetime(end.as_str())?,
        }),
        _ => Err(format!("Invalid print command: {line}").into()),
    }
}

fn parse_show_status(line: &str) -> Result<Command, Box<dyn Error>> {
    const RE: &str = r"^show\s+status\s+on\s+(?P<at>\S+)$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let caps = capture(&REGEX, RE, line, "show status on <dt>")?;
    Ok(Command::ShowStatus {
        at: parse_datetime(group(&caps, "at"))?,
    })
}

fn parse_copy_event(line: &str) -> Result<Command, Box<dyn Error>> {
    const RE: &str = r#"^copy\s+event\s+(?P<subject>"[^"]+"|[^\s"]+)\s+on\s+(?P<start>\S+)\s+--target\s+(?P<target>"[^"]+"|\S+)\s+to\s+(?P<to>\S+)$"#;
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let caps = capture(
        &REGEX,
        RE,
        line,
        "copy event <subject> on <dt> --target <calendar> to <dt>",
    )?;
    Ok(Command::CopyEvent {
        subject: group(&caps, "subject").to_string(),
        start: parse_datetime(group(&caps, "start"))?,
        target: group(&caps, "target").to_string(),
        target_start: parse_datetime(group(&caps, "to"))?,
    })
}

fn parse_copy_events(line: &str) -> Result<Command, Box<dyn Error>> {
    const RE: &str = r#"^copy\s+events\s+(?:on\s+(?P<on>\S+)|between\s+(?P<from>\S+)\s+and\s+(?P<until>\S+))\s+--target\s+(?P<target>"[^"]+"|\S+)\s+to\s+(?P<to>\S+)$"#;
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let caps = capture(
        &REGEX,
        RE,
        line,
        "copy events (on <date> | between <date> and <date>) --target <calendar> to <date>",
    )?;

    let target = group(&caps, "target").to_string();
    let target_date = parse_date(group(&caps, "to"))?;
    match (caps.name("on"), caps.name("from"), caps.name("until")) {
        (Some(on), _, _) => Ok(Command::CopyEventsOn {
            date: parse_date(on.as_str())?,
            target,
            target_date,
        }),
        (_, Some(from), Some(until)) => Ok(Command::CopyEventsBetween {
            from: parse_date(from.as_str())?,
            to: parse_date(until.as_str())?,
            target,
            target_date,
        }),
        _ => Err(format!("Invalid copy command: {line}").into()),
    }
}

fn capture<'a>(
    regex: &'static OnceLock<Regex>,
    pattern: &str,
    line: &'a str,
    usage: &str,
) -> Result<Captures<'a>, Box<dyn Error>> {
    let re = regex.get_or_init(|| Regex::new(pattern).unwrap());
    re.captures(line)
        .ok_or_else(|| format!("Invalid command: {line}\nUsage: {usage}").into())
}

/// Returns a matched group with its quotes stripped, or an empty string.
fn group<'a>(caps: &Captures<'a>, name: &str) -> &'a str {
    caps.name(name).map_or("", |m| unquote(m.as_str()))
}
