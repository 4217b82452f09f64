// ABOUTME: Constants module with domain-separated organization
// ABOUTME: API paths, user-facing fallback messages, categories, and env var names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single flat list.

/// Backend API paths
pub mod api {
    /// Versioned API prefix
    pub const API_V1: &str = "/api/v1";
    /// OAuth routes live under this prefix, followed by `/{provider}/authorize`
    pub const OAUTH_PREFIX: &str = "/api/v1/oauth";
    /// Final path segment of the authorization endpoint
    pub const AUTHORIZE_SEGMENT: &str = "authorize";
    /// Provider catalogue
    pub const PROVIDERS: &str = "/api/v1/providers";
    /// Per-user resources live under this prefix
    pub const USERS: &str = "/api/v1/users";
    /// Header carrying the backend API key
    pub const API_KEY_HEADER: &str = "X-API-Key";
    /// Header carrying the per-request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

/// Query parameter names sent to the authorization gateway
pub mod query {
    /// User being linked
    pub const USER_ID: &str = "user_id";
    /// Where the provider sends the browser after consent
    pub const REDIRECT_URI: &str = "redirect_uri";
    /// Provider marker on the default redirect target
    pub const PROVIDER: &str = "provider";
    /// Window start for health data queries
    pub const START_DATETIME: &str = "start_datetime";
    /// Window end for health data queries
    pub const END_DATETIME: &str = "end_datetime";
    /// Device filter for health data queries
    pub const DEVICE_ID: &str = "device_id";
    /// Page size for health data queries
    pub const LIMIT: &str = "limit";
    /// Page offset for health data queries
    pub const OFFSET: &str = "offset";
    /// Look-back length for sleep and activity queries
    pub const DAYS: &str = "days";
    /// Period label for the health summary, e.g. `7d`
    pub const PERIOD: &str = "period";
}

/// Field names read from gateway response bodies
pub mod fields {
    /// Success body field holding the provider consent URL
    pub const AUTHORIZATION_URL: &str = "authorization_url";
    /// Error body fields, tried in order; the first non-empty string wins
    pub const ERROR_MESSAGE_FIELDS: [&str; 2] = ["detail", "message"];
}

/// User-facing messages surfaced through the connection error state
pub mod messages {
    /// Non-success status with no usable message in the body
    pub const AUTHORIZATION_URL_FAILED: &str = "Failed to get authorization URL";
    /// Transport failure with no runtime-provided message
    pub const CONNECTION_FAILED: &str = "Connection failed";
    /// Success status but no `authorization_url` field
    pub const MISSING_AUTHORIZATION_URL: &str =
        "Authorization response did not include an authorization URL";
    /// Success status but `authorization_url` is not an absolute URL
    pub const INVALID_AUTHORIZATION_URL: &str =
        "Authorization response contained an invalid authorization URL";
    /// Success status but the body is not JSON
    pub const UNREADABLE_AUTHORIZATION_RESPONSE: &str =
        "Authorization response could not be read";
}

/// Statistic categories and their normalisation
pub mod categories {
    /// Heart rate samples (beats per minute)
    pub const HEART_RATE: &str = "heart_rate";
    /// Step count samples
    pub const STEPS: &str = "steps";
    /// Characters ignored when comparing categories
    pub const SEPARATORS: [char; 3] = ['_', '-', ' '];
}

/// Redirect target construction
pub mod redirect {
    /// Path under `/users/{user_id}/` the provider returns to after consent
    pub const PAIR_SUCCESS_PATH: &str = "pair/success";
}

/// Environment variable names
pub mod env_config {
    /// Backend base URL
    pub const API_BASE_URL: &str = "WEARABLE_API_BASE_URL";
    /// Origin of the web app, used for default redirect targets
    pub const APP_ORIGIN: &str = "WEARABLE_APP_ORIGIN";
    /// Optional backend API key
    pub const API_KEY: &str = "WEARABLE_API_KEY";
    /// HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "WEARABLE_HTTP_TIMEOUT_SECS";
    /// HTTP connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "WEARABLE_HTTP_CONNECT_TIMEOUT_SECS";
}

/// Default configuration values
pub mod defaults {
    /// Backend base URL for local development
    pub const API_BASE_URL: &str = "http://localhost:8000";
    /// Web app origin for local development
    pub const APP_ORIGIN: &str = "http://localhost:3000";
    /// HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// HTTP connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default history window for health queries
    pub const HISTORY_DAYS: i64 = 7;
    /// Default period for the health summary
    pub const SUMMARY_PERIOD: &str = "7d";
    /// Source label for samples without a device id
    pub const UNKNOWN_SOURCE: &str = "unknown";
}

/// Display placeholders used by the formatters
pub mod display {
    /// Shown for absent dates
    pub const NEVER: &str = "Never";
    /// Shown for values that cannot be formatted
    pub const PLACEHOLDER: &str = "\u{2014}";
    /// Default length of truncated identifiers
    pub const TRUNCATED_ID_LEN: usize = 8;
}
