// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::civil::{Date, DateTime};

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DDTHH:MM` datetime.
pub fn parse_datetime(s: &str) -> Result<DateTime, Box<dyn Error>> {
    DateTime::strptime(DATETIME_FORMAT, s)
        .map_err(|e| format!("Invalid datetime '{s}', expected YYYY-MM-DDTHH:MM: {e}").into())
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<Date, Box<dyn Error>> {
    Date::strptime(DATE_FORMAT, s)
        .map_err(|e| format!("Invalid date '{s}', expected YYYY-MM-DD: {e}").into())
}

pub fn format_datetime(dt: DateTime) -> String {
    dt.strftime(DATETIME_FORMAT).to_string()
}

/// Strips one pair of surrounding double quotes, if any.
pub fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|a| a.strip_suffix('"'))
        .unwrap_or(s)
}
