// ABOUTME: Provider catalogue and per-user connection models
// ABOUTME: Describes which wearable providers exist and which ones a user has linked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a provider authenticates users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthType {
    /// Browser-based `OAuth2` authorization-code flow
    Oauth2,
    /// Static API key
    ApiKey,
}

/// A wearable data provider offered by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Identifier used in authorization paths, e.g. `garmin`
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Logo location
    #[serde(default)]
    pub logo_url: String,
    /// Whether new connections are accepted
    pub is_available: bool,
    /// Data kinds the provider supplies
    #[serde(default)]
    pub features: Vec<String>,
    /// Authentication mechanism
    pub auth_type: AuthType,
}

/// Lifecycle status of a user's provider connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// Tokens valid, syncing
    Active,
    /// Last sync or refresh failed
    Error,
    /// Authorization started but not completed
    Pending,
    /// User revoked the connection
    Disconnected,
}

/// Status of the most recent sync for a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    /// Sync completed
    Success,
    /// Sync failed
    Failed,
    /// Sync queued
    Pending,
    /// Sync running
    Syncing,
}

/// A user's link to one provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConnection {
    /// Connection id
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Provider identifier
    pub provider_id: String,
    /// Provider display name
    pub provider_name: String,
    /// Connection status
    pub status: ConnectionStatus,
    /// When the connection was established
    pub connected_at: DateTime<Utc>,
    /// Last successful sync
    #[serde(default)]
    pub last_sync_at: Option<DateTime<Utc>>,
    /// Status of the last sync
    pub sync_status: SyncStatus,
    /// Error from the last sync
    #[serde(default)]
    pub sync_error: Option<String>,
    /// Number of data points stored for this connection
    #[serde(default)]
    pub data_points: u64,
}

/// Acknowledgement of a queued sync job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncJob {
    /// Backend message
    pub message: String,
    /// Job identifier
    pub job_id: String,
}

/// A shareable link that starts a provider connection on another device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionLink {
    /// Link to hand to the user
    pub url: String,
    /// When the link stops working
    pub expires_at: DateTime<Utc>,
}
