// ABOUTME: Display formatting for dates, durations, and identifiers in CLI output
// ABOUTME: Pure functions with fixed placeholders for missing or unparsable input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Display formatters
//!
//! Dates are rendered in the local time zone. Absent dates render as `Never`,
//! values that cannot be formatted as an em dash.

use crate::constants::display;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Local date and time, `Never` when absent, the input itself when unparsable
#[must_use]
pub fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date.filter(|d| !d.trim().is_empty()) else {
        return display::NEVER.to_owned();
    };

    match parse_local(raw) {
        Some(ParsedDate::DateTime(dt)) => dt.format(DATE_TIME_FORMAT).to_string(),
        Some(ParsedDate::Date(d)) => d.format(DATE_FORMAT).to_string(),
        None => raw.to_owned(),
    }
}

/// Local date only, `Never` when absent, the input itself when unparsable
#[must_use]
pub fn format_date_only(date: Option<&str>) -> String {
    let Some(raw) = date.filter(|d| !d.trim().is_empty()) else {
        return display::NEVER.to_owned();
    };

    match parse_local(raw) {
        Some(ParsedDate::DateTime(dt)) => dt.format(DATE_FORMAT).to_string(),
        Some(ParsedDate::Date(d)) => d.format(DATE_FORMAT).to_string(),
        None => raw.to_owned(),
    }
}

/// Duration from a string of seconds such as `"1800.000"`
///
/// Only the leading integer is used; anything else yields the placeholder.
#[must_use]
pub fn format_duration_str(seconds: &str) -> String {
    leading_integer(seconds).map_or_else(|| display::PLACEHOLDER.to_owned(), format_duration_secs)
}

/// `45m`, `1h 30m`, `2h 0m`
#[must_use]
pub fn format_duration_secs(seconds: i64) -> String {
    let hours = seconds.div_euclid(3600);
    let minutes = (seconds % 3600).div_euclid(60);

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// First `len` characters followed by `...`, placeholder when empty
#[must_use]
pub fn truncate_id(id: &str, len: usize) -> String {
    if id.is_empty() {
        return display::PLACEHOLDER.to_owned();
    }
    let prefix: String = id.chars().take(len).collect();
    format!("{prefix}...")
}

/// [`truncate_id`] with the default length
#[must_use]
pub fn short_id(id: &str) -> String {
    truncate_id(id, display::TRUNCATED_ID_LEN)
}

enum ParsedDate {
    DateTime(DateTime<Local>),
    Date(NaiveDate),
}

fn parse_local(raw: &str) -> Option<ParsedDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(ParsedDate::DateTime(dt.with_timezone(&Local)));
    }
    // Offset-less timestamps are wall-clock local time
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Local
            .from_local_datetime(&naive)
            .earliest()
            .map(ParsedDate::DateTime);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .map(ParsedDate::Date)
}

/// Optional sign followed by digits, after leading whitespace
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..digits_end].parse().ok()?;

    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("1800.000"), Some(1800));
        assert_eq!(leading_integer("  42s"), Some(42));
        assert_eq!(leading_integer("-90"), Some(-90));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("-"), None);
    }

    #[test]
    fn test_negative_durations_floor_like_hours() {
        assert_eq!(format_duration_secs(-30), "-1m");
    }
}
