// ABOUTME: Environment-based configuration for the backend client and OAuth redirect targets
// ABOUTME: Parses and validates base URLs, app origin, API key, and HTTP timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Client configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,
    /// Web app origin used to build default redirect targets, without trailing slash
    pub app_origin: String,
    /// Optional API key sent as `X-API-Key`
    pub api_key: Option<String>,
    /// Total request timeout
    pub http_timeout: Duration,
    /// TCP connect timeout
    pub http_connect_timeout: Duration,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_base_url", &self.api_base_url)
            .field("app_origin", &self.app_origin)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("http_timeout", &self.http_timeout)
            .field("http_connect_timeout", &self.http_connect_timeout)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: defaults::API_BASE_URL.to_owned(),
            app_origin: defaults::APP_ORIGIN.to_owned(),
            api_key: None,
            http_timeout: Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
            http_connect_timeout: Duration::from_secs(defaults::HTTP_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Unset and blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let config = Self {
            api_base_url: parse_base_url(
                env_config::API_BASE_URL,
                var(env_config::API_BASE_URL).as_deref(),
                defaults::API_BASE_URL,
            )?,
            app_origin: parse_base_url(
                env_config::APP_ORIGIN,
                var(env_config::APP_ORIGIN).as_deref(),
                defaults::APP_ORIGIN,
            )?,
            api_key: var(env_config::API_KEY),
            http_timeout: parse_timeout(
                env_config::HTTP_TIMEOUT_SECS,
                var(env_config::HTTP_TIMEOUT_SECS).as_deref(),
                defaults::HTTP_TIMEOUT_SECS,
            )?,
            http_connect_timeout: parse_timeout(
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                var(env_config::HTTP_CONNECT_TIMEOUT_SECS).as_deref(),
                defaults::HTTP_CONNECT_TIMEOUT_SECS,
            )?,
        };

        debug!(?config, "Client configuration loaded");
        Ok(config)
    }

    /// Override the backend base URL, e.g. from a CLI flag
    pub fn with_api_base_url(mut self, url: &str) -> AppResult<Self> {
        self.api_base_url = parse_base_url(env_config::API_BASE_URL, Some(url), url)?;
        Ok(self)
    }

    /// Get configuration summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Wearable Link Configuration:\n\
             - API Base URL: {}\n\
             - App Origin: {}\n\
             - API Key: {}\n\
             - HTTP Timeout: {}s (connect {}s)",
            self.api_base_url,
            self.app_origin,
            if self.api_key.is_some() {
                "Configured"
            } else {
                "Not set"
            },
            self.http_timeout.as_secs(),
            self.http_connect_timeout.as_secs(),
        )
    }
}

/// Validate an absolute http(s) URL and strip trailing slashes
fn parse_base_url(key: &str, value: Option<&str>, default: &str) -> AppResult<String> {
    let raw = value.unwrap_or(default);
    let parsed = Url::parse(raw)
        .map_err(|e| AppError::config_invalid(format!("{key} is not a valid URL ({raw}): {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::config_invalid(format!(
            "{key} must use http or https, got {}",
            parsed.scheme()
        )));
    }

    Ok(raw.trim_end_matches('/').to_owned())
}

/// Parse a positive number of seconds
fn parse_timeout(key: &str, value: Option<&str>, default_secs: u64) -> AppResult<Duration> {
    let Some(raw) = value else {
        return Ok(Duration::from_secs(default_secs));
    };

    match raw.parse::<u64>() {
        Ok(0) => Err(AppError::config_invalid(format!(
            "{key} must be greater than zero"
        ))),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(AppError::config_invalid(format!(
            "{key} must be a whole number of seconds ({raw}): {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("WEARABLE_API_BASE_URL", "https://api.example.com//"),
            ("WEARABLE_APP_ORIGIN", "https://app.example.com/"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.app_origin, "https://app.example.com");
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[("WEARABLE_APP_ORIGIN", "/pair")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
        assert!(err.message.contains("WEARABLE_APP_ORIGIN"));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[(
            "WEARABLE_API_BASE_URL",
            "ftp://files.example.com",
        )]))
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = ClientConfig::from_lookup(lookup(&[("WEARABLE_HTTP_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config =
            ClientConfig::from_lookup(lookup(&[("WEARABLE_API_KEY", "secret-key")])).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("REDACTED"));
    }
}
