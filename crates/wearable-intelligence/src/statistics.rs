// ABOUTME: Category-filtered summary statistics over labeled numeric samples
// ABOUTME: Single-pass min/max fold plus rounded mean of reported averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use wearable_core::constants::categories;
use wearable_core::models::{AggregateResult, StatisticSample};

/// Canonical form of a category label
///
/// Lower-cases and drops separators so that `HeartRate`, `heart_rate`,
/// `heart-rate`, `heart rate` and `heartrate` all compare equal.
#[must_use]
pub fn normalize_category(category: &str) -> String {
    category
        .chars()
        .filter(|c| !categories::SEPARATORS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether `category` names the same thing as an already-normalized filter
fn matches_normalized(category: &str, normalized_filter: &str) -> bool {
    normalize_category(category) == normalized_filter
}

/// Summarize the samples whose category matches `category_filter`
///
/// Absent input is treated as empty. For each matching sample a non-null
/// `avg` is appended to `values`, and non-null `min`/`max` are folded into the
/// running extremes; the first qualifying value becomes the running extreme.
/// `count` only tracks `values`, so a sample reporting only `min`/`max`
/// contributes to the extremes but not to `avg` or `count`.
#[must_use]
pub fn aggregate(samples: Option<&[StatisticSample]>, category_filter: &str) -> AggregateResult {
    let Some(samples) = samples else {
        return AggregateResult::default();
    };

    let filter = normalize_category(category_filter);
    let mut result = AggregateResult::default();

    for sample in samples
        .iter()
        .filter(|s| matches_normalized(&s.category, &filter))
    {
        if let Some(avg) = finite(sample.avg) {
            result.values.push(avg);
        }
        if let Some(min) = finite(sample.min) {
            result.min = Some(result.min.map_or(min, |current| current.min(min)));
        }
        if let Some(max) = finite(sample.max) {
            result.max = Some(result.max.map_or(max, |current| current.max(max)));
        }
    }

    result.count = result.values.len();
    result.avg = rounded_mean(&result.values);
    result
}

/// Heart-rate summary, the most common use of [`aggregate`]
#[must_use]
pub fn heart_rate_stats(samples: Option<&[StatisticSample]>) -> AggregateResult {
    aggregate(samples, categories::HEART_RATE)
}

/// Mean rounded half-up to the nearest integer, `None` for an empty slice
fn rounded_mean(values: &[f64]) -> Option<i64> {
    if values.is_empty() {
        return None;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Some((mean + 0.5).floor() as i64)
}

// Fields are public, so a caller may have built a sample with NaN directly
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
