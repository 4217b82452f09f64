// ABOUTME: Health statistics aggregation for the wearable pairing client
// ABOUTME: Pure functions with no I/O, safe to call from any number of call sites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! Summaries over labeled numeric samples.
//!
//! The aggregator holds no state between calls and never fails: malformed
//! numeric fields are treated as absent.

/// Conversions from backend payloads into statistic samples
pub mod adapters;
/// Category filtering and min/max/mean aggregation
pub mod statistics;

pub use adapters::{samples_from_health_records, samples_from_heart_rate};
pub use statistics::{aggregate, heart_rate_stats, normalize_category};
pub use wearable_core::models::{AggregateResult, StatisticSample};
