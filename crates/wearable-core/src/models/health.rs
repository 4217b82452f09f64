// ABOUTME: Health data wire models returned by the backend per user
// ABOUTME: Health records (workouts), raw heart-rate samples, and query parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::numeric::deserialize_lenient_f64;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// A unified health record, e.g. a workout, with per-record summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecordResponse {
    /// Record id
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Provider-side record id
    #[serde(default)]
    pub provider_id: Option<String>,
    /// Record category, `workout` for workouts
    pub category: String,
    /// Sub-type such as `running`
    #[serde(default, rename = "type")]
    pub record_type: Option<String>,
    /// Name of the app or device that produced the record
    pub source_name: String,
    /// Device id, when known
    #[serde(default)]
    pub device_id: Option<String>,
    /// Duration as a decimal string of seconds
    #[serde(default)]
    pub duration_seconds: Option<String>,
    /// Record start
    pub start_datetime: DateTime<Utc>,
    /// Record end
    pub end_datetime: DateTime<Utc>,
    /// Lowest heart rate during the record
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub heart_rate_min: Option<f64>,
    /// Highest heart rate during the record
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub heart_rate_max: Option<f64>,
    /// Mean heart rate during the record
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub heart_rate_avg: Option<f64>,
    /// Lowest step rate during the record
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub steps_min: Option<f64>,
    /// Highest step rate during the record
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub steps_max: Option<f64>,
    /// Mean step rate during the record
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub steps_avg: Option<f64>,
}

/// A raw heart-rate reading as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateSampleResponse {
    /// Sample id
    pub id: String,
    /// Device that recorded the sample
    #[serde(default)]
    pub device_id: Option<String>,
    /// Reading time
    pub recorded_at: DateTime<Utc>,
    /// Beats per minute; `None` when the backend sent something non-numeric
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub value: Option<f64>,
}

/// A heart-rate reading attributed to a user and a source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartRateData {
    /// Sample id
    pub id: String,
    /// User the reading belongs to
    pub user_id: String,
    /// Reading time
    pub timestamp: DateTime<Utc>,
    /// Beats per minute
    pub value: f64,
    /// Device id or `unknown`
    pub source: String,
}

/// Query parameters accepted by the per-user health endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HealthDataParams {
    /// Window start (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_datetime: Option<DateTime<Utc>>,
    /// Window end (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_datetime: Option<DateTime<Utc>>,
    /// Restrict to one device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Page offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl HealthDataParams {
    /// Parameters covering `[end - days, end]`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `days` is not positive or the window start
    /// falls outside the representable date range
    pub fn last_days(end: DateTime<Utc>, days: i64) -> AppResult<Self> {
        let days = checked_window_days(days)?;
        let start = TimeDelta::try_days(days)
            .and_then(|window| end.checked_sub_signed(window))
            .ok_or_else(|| {
                AppError::invalid_input(format!("A {days}-day window is out of range"))
            })?;

        Ok(Self {
            start_datetime: Some(start),
            end_datetime: Some(end),
            ..Self::default()
        })
    }

    /// Restrict to one device
    #[must_use]
    pub fn with_device(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }
}

/// Validate a look-back window length in days
///
/// # Errors
///
/// Returns `InvalidInput` when `days` is zero or negative
pub fn checked_window_days(days: i64) -> AppResult<i64> {
    if days <= 0 {
        return Err(AppError::invalid_input(format!(
            "days must be positive, got {days}"
        )));
    }
    Ok(days)
}

/// Quality bucket the backend assigns to a night of sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    /// Efficient, long sleep
    Excellent,
    /// Above average
    Good,
    /// Below average
    Fair,
    /// Short or fragmented sleep
    Poor,
}

/// One night of sleep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepData {
    /// Record id
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Calendar date the night is attributed to
    pub date: String,
    /// Fell asleep
    pub start_time: DateTime<Utc>,
    /// Woke up
    pub end_time: DateTime<Utc>,
    /// Total time asleep
    pub total_minutes: u32,
    /// Deep sleep
    #[serde(default)]
    pub deep_minutes: u32,
    /// Light sleep
    #[serde(default)]
    pub light_minutes: u32,
    /// REM sleep
    #[serde(default)]
    pub rem_minutes: u32,
    /// Awake while in bed
    #[serde(default)]
    pub awake_minutes: u32,
    /// Percentage of time in bed spent asleep
    #[serde(default)]
    pub efficiency: f64,
    /// Quality bucket
    pub quality: SleepQuality,
    /// Device or app that recorded the night
    pub source: String,
}

/// Daily activity totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityData {
    /// Record id
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Calendar date
    pub date: String,
    /// Step count
    pub steps: u64,
    /// Minutes of moderate or vigorous activity
    #[serde(default)]
    pub active_minutes: u32,
    /// Energy burned in kcal
    #[serde(default)]
    pub calories: f64,
    /// Distance in km
    #[serde(default)]
    pub distance: f64,
    /// Floors climbed
    #[serde(default)]
    pub floors: u32,
    /// Device or app that recorded the day
    pub source: String,
}

/// Heart-rate part of a [`HealthDataSummary`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartRateSummary {
    /// Mean beats per minute
    pub average: f64,
    /// Lowest reading
    pub min: f64,
    /// Highest reading
    pub max: f64,
    /// Readings in the period
    #[serde(default)]
    pub data: Vec<HeartRateData>,
}

/// Sleep part of a [`HealthDataSummary`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSummary {
    /// Mean minutes asleep per night
    pub average_minutes: f64,
    /// Mean sleep efficiency
    pub average_efficiency: f64,
    /// Nights in the period
    #[serde(default)]
    pub data: Vec<SleepData>,
}

/// Activity part of a [`HealthDataSummary`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    /// Mean steps per day
    pub average_steps: f64,
    /// Active minutes summed over the period
    pub total_active_minutes: u64,
    /// Days in the period
    #[serde(default)]
    pub data: Vec<ActivityData>,
}

/// Backend-computed overview of a user's health data for a period such as `7d`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDataSummary {
    /// User the summary describes
    pub user_id: String,
    /// Period label echoed back by the backend
    pub period: String,
    /// Heart-rate figures
    pub heart_rate: HeartRateSummary,
    /// Sleep figures
    pub sleep: SleepSummary,
    /// Activity figures
    pub activity: ActivitySummary,
    /// When the backend last refreshed the summary
    pub last_updated: DateTime<Utc>,
}
