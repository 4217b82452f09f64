// ABOUTME: HTTP client construction with timeouts taken from configuration
// ABOUTME: One pooled reqwest client is built per process and shared by all API wrappers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::ClientConfig;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create a new HTTP client with custom timeout settings
///
/// Falls back to a default client if the builder fails (e.g. TLS backend
/// initialisation), so callers never have to handle a construction error.
#[must_use]
pub fn create_client_with_timeout(timeout: Duration, connect_timeout: Duration) -> Client {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(concat!("wearable-link/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Create the HTTP client described by the client configuration
#[must_use]
pub fn client_from_config(config: &ClientConfig) -> Client {
    create_client_with_timeout(config.http_timeout, config.http_connect_timeout)
}
