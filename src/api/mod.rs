// ABOUTME: REST client wrappers for the wearable backend
// ABOUTME: Provider catalogue, user connections, and per-user health data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Health API client
pub mod health;

pub use health::HealthApiClient;
