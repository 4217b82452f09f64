// ABOUTME: Conversions from backend health payloads into statistic samples
// ABOUTME: Lets the aggregator run over workouts and raw heart-rate readings alike
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use wearable_core::constants::categories;
use wearable_core::models::{HealthRecordResponse, HeartRateSampleResponse, StatisticSample};

/// Two samples per record: one `heart_rate`, one `steps`
#[must_use]
pub fn samples_from_health_records(records: &[HealthRecordResponse]) -> Vec<StatisticSample> {
    records
        .iter()
        .flat_map(|record| {
            [
                StatisticSample::new(
                    categories::HEART_RATE,
                    record.heart_rate_min,
                    record.heart_rate_max,
                    record.heart_rate_avg,
                ),
                StatisticSample::new(
                    categories::STEPS,
                    record.steps_min,
                    record.steps_max,
                    record.steps_avg,
                ),
            ]
        })
        .collect()
}

/// One `heart_rate` point sample per reading; readings without a value are skipped
#[must_use]
pub fn samples_from_heart_rate(samples: &[HeartRateSampleResponse]) -> Vec<StatisticSample> {
    samples
        .iter()
        .filter_map(|sample| sample.value)
        .map(|value| StatisticSample::point(categories::HEART_RATE, value))
        .collect()
}
