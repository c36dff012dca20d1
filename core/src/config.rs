// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use crate::CalendarError;
use crate::datetime::{parse_timezone, system_timezone};

/// The name of the Shiftcal application.
pub const APP_NAME: &str = "shiftcal";

/// Configuration for the calendar registry.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Calendars to create at startup.
    #[serde(default)]
    pub calendars: Vec<CalendarConfig>,

    /// Calendar to select at startup.
    #[serde(default)]
    pub default_calendar: Option<String>,
}

/// One calendar to create at startup.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CalendarConfig {
    /// Unique name of the calendar.
    pub name: String,

    /// IANA timezone of the calendar, the system zone if unset.
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Config {
    /// Normalize the configuration.
    ///
    /// # Errors
    ///
    /// Fails on an unknown timezone or a default calendar that is not listed.
    pub fn normalize(&mut self) -> Result<(), CalendarError> {
        // Fill missing timezones with the system zone
        let mut system = None;
        for cal in &mut self.calendars {
            if let Some(tz) = &cal.timezone {
                parse_timezone(tz)?;
                continue;
            }

            let tz = system.get_or_insert_with(system_timezone).clone();
            tracing::debug!(calendar = %cal.name, timezone = %tz, "using system timezone");
            cal.timezone = Some(tz);
        }

        // The default calendar must be one of the configured ones
        if let Some(name) = &self.default_calendar
            && !self.calendars.iter().any(|c| &c.name == name)
        {
            return Err(CalendarError::CalendarNotFound(name.clone()));
        }

        Ok(())
    }
}
