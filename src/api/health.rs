// ABOUTME: Typed client for the backend health and connection endpoints
// ABOUTME: Maps non-success responses to AppError using the backend's error body fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::ClientConfig;
use crate::constants::{api, defaults, query};
use crate::errors::{AppError, AppResult, GatewayError};
use crate::models::{
    checked_window_days, ActivityData, ConnectionLink, HealthDataParams, HealthDataSummary,
    HealthRecordResponse, HeartRateData, HeartRateSampleResponse, Provider, SleepData, SyncJob,
    UserConnection,
};
use crate::utils::errors::error_message_or;
use crate::utils::http_client::client_from_config;
use chrono::Utc;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;

/// Client for the `/api/v1` provider, connection, and health data routes
#[derive(Clone)]
pub struct HealthApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HealthApiClient {
    /// Create a client for the given backend base URL
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: None,
        }
    }

    /// Create a client from configuration, including the API key
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(client_from_config(config), &config.api_base_url)
            .with_api_key(config.api_key.clone())
    }

    /// Send `X-API-Key` with every request
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// Providers offered by the backend
    pub async fn list_providers(&self) -> AppResult<Vec<Provider>> {
        let url = format!("{}{}", self.base_url, api::PROVIDERS);
        self.fetch_json(self.client.get(url)).await
    }

    /// Connections the user has established
    pub async fn user_connections(&self, user_id: &str) -> AppResult<Vec<UserConnection>> {
        let url = self.user_url(user_id, "connections");
        self.fetch_json(self.client.get(url)).await
    }

    /// Mint a shareable link that starts a connection to `provider_id`
    pub async fn generate_connection_link(
        &self,
        user_id: &str,
        provider_id: &str,
    ) -> AppResult<ConnectionLink> {
        if provider_id.is_empty() {
            return Err(AppError::invalid_input("Provider id is required"));
        }

        let url = format!("{}/generate-link", self.user_url(user_id, "connections"));
        let body = json!({ "providerId": provider_id });
        self.fetch_json(self.client.post(url).json(&body)).await
    }

    /// Remove a provider connection
    pub async fn disconnect_provider(&self, user_id: &str, connection_id: &str) -> AppResult<()> {
        let url = format!(
            "{}/{}",
            self.user_url(user_id, "connections"),
            urlencoding::encode(connection_id)
        );
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    /// Raw heart-rate readings
    pub async fn heart_rate_samples(
        &self,
        user_id: &str,
        params: &HealthDataParams,
    ) -> AppResult<Vec<HeartRateSampleResponse>> {
        let url = self.user_url(user_id, "heart-rate");
        self.fetch_json(self.client.get(url).query(params)).await
    }

    /// Heart-rate readings for the last `days` days, attributed to their source
    ///
    /// Readings whose value is not numeric are dropped. A window that is not
    /// positive or does not fit the calendar is rejected before any request.
    pub async fn heart_rate_window(
        &self,
        user_id: &str,
        device_id: Option<&str>,
        days: i64,
    ) -> AppResult<Vec<HeartRateData>> {
        let mut params = HealthDataParams::last_days(Utc::now(), days)?;
        if let Some(device_id) = device_id {
            params = params.with_device(device_id);
        }

        let samples = self.heart_rate_samples(user_id, &params).await?;
        let total = samples.len();
        let readings: Vec<HeartRateData> = samples
            .into_iter()
            .filter_map(|sample| {
                Some(HeartRateData {
                    value: sample.value?,
                    id: sample.id,
                    user_id: user_id.to_owned(),
                    timestamp: sample.recorded_at,
                    source: sample
                        .device_id
                        .unwrap_or_else(|| defaults::UNKNOWN_SOURCE.to_owned()),
                })
            })
            .collect();

        if readings.len() < total {
            debug!(
                user_id = %user_id,
                dropped = total - readings.len(),
                "Dropped heart-rate samples without a numeric value"
            );
        }

        Ok(readings)
    }

    /// Nightly sleep records for the last `days` days
    pub async fn sleep_data(&self, user_id: &str, days: i64) -> AppResult<Vec<SleepData>> {
        let days = checked_window_days(days)?;
        let url = self.user_url(user_id, "sleep");
        self.fetch_json(self.client.get(url).query(&[(query::DAYS, days)])).await
    }

    /// Daily activity totals for the last `days` days
    pub async fn activity_data(&self, user_id: &str, days: i64) -> AppResult<Vec<ActivityData>> {
        let days = checked_window_days(days)?;
        let url = self.user_url(user_id, "activity");
        self.fetch_json(self.client.get(url).query(&[(query::DAYS, days)])).await
    }

    /// Backend-computed summary for `period`, defaulting to the last week
    pub async fn health_summary(
        &self,
        user_id: &str,
        period: Option<&str>,
    ) -> AppResult<HealthDataSummary> {
        let period = period
            .filter(|p| !p.is_empty())
            .unwrap_or(defaults::SUMMARY_PERIOD);
        let url = self.user_url(user_id, "health-summary");
        self.fetch_json(self.client.get(url).query(&[(query::PERIOD, period)])).await
    }

    /// Workout records
    pub async fn workouts(
        &self,
        user_id: &str,
        params: &HealthDataParams,
    ) -> AppResult<Vec<HealthRecordResponse>> {
        let url = self.user_url(user_id, "workouts");
        self.fetch_json(self.client.get(url).query(params)).await
    }

    /// Queue a sync of all the user's connections
    pub async fn sync_user_data(&self, user_id: &str) -> AppResult<SyncJob> {
        let url = self.user_url(user_id, "sync");
        self.fetch_json(self.client.post(url)).await
    }

    fn user_url(&self, user_id: &str, resource: &str) -> String {
        format!(
            "{}{}/{}/{}",
            self.base_url,
            api::USERS,
            urlencoding::encode(user_id),
            resource
        )
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let response = self.send(request).await?;
        let body = response.text().await.map_err(GatewayError::from)?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::invalid_response(format!("Failed to parse backend response: {e}"))
                .with_source(e)
        })
    }

    async fn send(&self, request: RequestBuilder) -> AppResult<Response> {
        let mut request = request.header(api::REQUEST_ID_HEADER, Uuid::new_v4().to_string());
        if let Some(key) = &self.api_key {
            request = request.header(api::API_KEY_HEADER, key);
        }

        let response = request.send().await.map_err(GatewayError::from)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let fallback = format!("Request failed with status {}", status.as_u16());
        let message = error_message_or(&body, &fallback);
        warn!(status = status.as_u16(), "Backend request failed: {}", message);

        Err(AppError::backend_status(status.as_u16(), message))
    }
}
