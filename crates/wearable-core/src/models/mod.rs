// ABOUTME: Wire models exchanged with the wearable backend
// ABOUTME: Re-exports statistics, health, and provider types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Numeric fields coming from the backend are decoded leniently: decimals may
//! arrive as numbers or numeric strings, and anything else is treated as absent.

mod health;
mod numeric;
mod provider;
mod statistics;

pub use health::{
    checked_window_days, ActivityData, ActivitySummary, HealthDataParams, HealthDataSummary,
    HealthRecordResponse, HeartRateData, HeartRateSampleResponse, HeartRateSummary, SleepData,
    SleepQuality, SleepSummary,
};
pub use numeric::{deserialize_lenient_f64, lenient_number};
pub use provider::{
    AuthType, ConnectionLink, ConnectionStatus, Provider, SyncJob, SyncStatus, UserConnection,
};
pub use statistics::{AggregateResult, StatisticSample};
