// ABOUTME: Lenient numeric decoding for backend fields that may be numbers or numeric strings
// ABOUTME: Anything that is not a finite number is treated as absent rather than an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Interpret a JSON value as a finite number
///
/// Numeric decimals are serialized by the backend as strings (`"72.500"`), so
/// both forms are accepted. Booleans, objects, non-numeric strings, `NaN`
/// and infinities yield `None`.
#[must_use]
pub fn lenient_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Serde adapter for `Option<f64>` fields using [`lenient_number`]
///
/// Use with `#[serde(default, deserialize_with = "...")]` so missing fields
/// are also absent.
///
/// # Errors
///
/// Only fails when the underlying deserializer cannot produce any value at all.
pub fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(lenient_number(&value))
}
