// ABOUTME: Health data commands for wearable-cli
// ABOUTME: Workout statistics, provider catalogue, and user connection listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;
use wearable_link::api::HealthApiClient;
use wearable_link::config::ClientConfig;
use wearable_link::intelligence::{aggregate, samples_from_health_records};
use wearable_link::models::HealthDataParams;

use crate::helpers::display::{display_connections, display_providers};

/// Print the aggregate for `category` over the user's workouts in the last `days` days
pub async fn stats(config: &ClientConfig, user: &str, category: &str, days: i64) -> Result<()> {
    let client = HealthApiClient::from_config(config);
    let params =
        HealthDataParams::last_days(Utc::now(), days).context("Invalid history window")?;

    let workouts = client
        .workouts(user, &params)
        .await
        .context("Failed to fetch workouts")?;
    info!(user_id = %user, records = workouts.len(), days, "Fetched workouts");

    let samples = samples_from_health_records(&workouts);
    let result = aggregate(Some(samples.as_slice()), category);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// List providers offered by the backend
pub async fn providers(config: &ClientConfig) -> Result<()> {
    let providers = HealthApiClient::from_config(config)
        .list_providers()
        .await
        .context("Failed to fetch providers")?;

    display_providers(&providers);
    Ok(())
}

/// List the user's provider connections
pub async fn connections(config: &ClientConfig, user: &str) -> Result<()> {
    let connections = HealthApiClient::from_config(config)
        .user_connections(user)
        .await
        .context("Failed to fetch connections")?;

    display_connections(&connections);
    Ok(())
}
