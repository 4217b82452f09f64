// ABOUTME: Statistic sample and aggregate result models
// ABOUTME: Inputs and outputs of the statistics aggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::numeric::deserialize_lenient_f64;
use serde::{Deserialize, Serialize};

/// A single reported numeric observation
///
/// `min`, `max` and `avg` are independently optional: absence means the value
/// was not reported for this sample, never zero. The backend names the
/// category field `type` on workout statistics, which is accepted as an alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticSample {
    /// Semantic label such as `heart_rate` or `steps`
    #[serde(alias = "type")]
    pub category: String,
    /// Lowest value in the sample window
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub min: Option<f64>,
    /// Highest value in the sample window
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub max: Option<f64>,
    /// Mean value over the sample window
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub avg: Option<f64>,
}

impl StatisticSample {
    /// Create a sample; non-finite readings are stored as absent
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        min: Option<f64>,
        max: Option<f64>,
        avg: Option<f64>,
    ) -> Self {
        Self {
            category: category.into(),
            min: min.filter(|v| v.is_finite()),
            max: max.filter(|v| v.is_finite()),
            avg: avg.filter(|v| v.is_finite()),
        }
    }

    /// Sample carrying a single reading as its min, max and mean
    #[must_use]
    pub fn point(category: impl Into<String>, value: f64) -> Self {
        Self::new(category, Some(value), Some(value), Some(value))
    }
}

/// Summary of the samples that matched a category
///
/// `min <= max` is not guaranteed: inputs are not validated, so a violation is
/// a data-quality anomaly in the source rather than an aggregation bug.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Every non-null `avg` of a matched sample, in input order
    pub values: Vec<f64>,
    /// Smallest reported `min`, if any sample reported one
    pub min: Option<f64>,
    /// Largest reported `max`, if any sample reported one
    pub max: Option<f64>,
    /// Mean of `values` rounded to the nearest integer, `None` when `values` is empty
    pub avg: Option<i64>,
    /// Number of entries in `values`
    pub count: usize,
}

impl AggregateResult {
    /// True when no matched sample reported anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.min.is_none() && self.max.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_with_type_alias_and_string_numbers() {
        let sample: StatisticSample = serde_json::from_value(json!({
            "type": "HeartRate",
            "min": "48.000",
            "max": 171,
            "avg": null
        }))
        .unwrap();

        assert_eq!(sample.category, "HeartRate");
        assert_eq!(sample.min, Some(48.0));
        assert_eq!(sample.max, Some(171.0));
        assert_eq!(sample.avg, None);
    }

    #[test]
    fn test_missing_and_malformed_fields_are_absent() {
        let sample: StatisticSample = serde_json::from_value(json!({
            "category": "steps",
            "max": "lots"
        }))
        .unwrap();

        assert_eq!(sample.min, None);
        assert_eq!(sample.max, None);
        assert_eq!(sample.avg, None);
    }

    #[test]
    fn test_new_drops_non_finite_values() {
        let sample = StatisticSample::new("heart_rate", Some(f64::NAN), Some(120.0), None);
        assert_eq!(sample.min, None);
        assert_eq!(sample.max, Some(120.0));
    }
}
