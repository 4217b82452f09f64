// ABOUTME: Tests for display formatters used in CLI output
// ABOUTME: Dates, durations, and identifier truncation, including placeholder cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Local};
use wearable_link::formatters::{
    format_date, format_date_only, format_duration_secs, format_duration_str, short_id,
    truncate_id,
};

#[test]
fn test_absent_dates_render_never() {
    assert_eq!(format_date(None), "Never");
    assert_eq!(format_date(Some("")), "Never");
    assert_eq!(format_date_only(None), "Never");
}

#[test]
fn test_rfc3339_dates_render_in_local_time() {
    let raw = "2025-03-01T07:30:00Z";
    let local = DateTime::parse_from_rfc3339(raw)
        .unwrap()
        .with_timezone(&Local);

    assert_eq!(
        format_date(Some(raw)),
        local.format("%Y-%m-%d %H:%M:%S").to_string()
    );
    assert_eq!(
        format_date_only(Some(raw)),
        local.format("%Y-%m-%d").to_string()
    );
}

#[test]
fn test_plain_dates_are_kept_as_dates() {
    assert_eq!(format_date_only(Some("2025-03-01")), "2025-03-01");
}

#[test]
fn test_unparsable_dates_are_echoed() {
    assert_eq!(format_date(Some("yesterday")), "yesterday");
}

#[test]
fn test_durations() {
    assert_eq!(format_duration_secs(2700), "45m");
    assert_eq!(format_duration_secs(5400), "1h 30m");
    assert_eq!(format_duration_secs(7200), "2h 0m");
    assert_eq!(format_duration_secs(59), "0m");
    assert_eq!(format_duration_str("1800.000"), "30m");
    assert_eq!(format_duration_str("5400"), "1h 30m");
}

#[test]
fn test_non_numeric_duration_is_placeholder() {
    assert_eq!(format_duration_str("abc"), "\u{2014}");
    assert_eq!(format_duration_str(""), "\u{2014}");
}

#[test]
fn test_truncate_id() {
    assert_eq!(
        truncate_id("3f2a9c1e-7b44-4e0a-9d1f-2c6b8e0a1d55", 8),
        "3f2a9c1e..."
    );
    assert_eq!(truncate_id("abc", 8), "abc...");
    assert_eq!(truncate_id("", 8), "\u{2014}");
    assert_eq!(short_id("0123456789"), "01234567...");
}
