// ABOUTME: Helpers for reading error messages out of backend error bodies
// ABOUTME: Tries an ordered list of conventional field names, first non-empty string wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::fields::ERROR_MESSAGE_FIELDS;
use serde_json::Value;

/// Extract a human-readable message from a JSON error body
///
/// Each of [`ERROR_MESSAGE_FIELDS`] is tried in order and the first one holding
/// a non-blank string wins. Returns `None` when the body is not JSON, is not an
/// object, or none of the fields qualify (e.g. `detail` is a validation list).
#[must_use]
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ERROR_MESSAGE_FIELDS.iter().find_map(|field| {
        value
            .get(field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_owned)
    })
}

/// Like [`extract_error_message`], with a fixed fallback
#[must_use]
pub fn error_message_or(body: &str, fallback: &str) -> String {
    extract_error_message(body).unwrap_or_else(|| fallback.to_owned())
}
