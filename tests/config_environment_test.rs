// ABOUTME: Tests for environment-driven client configuration
// ABOUTME: Mutates process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use std::time::Duration;
use wearable_link::config::ClientConfig;
use wearable_link::errors::ErrorCode;

const VARS: [&str; 5] = [
    "WEARABLE_API_BASE_URL",
    "WEARABLE_APP_ORIGIN",
    "WEARABLE_API_KEY",
    "WEARABLE_HTTP_TIMEOUT_SECS",
    "WEARABLE_HTTP_CONNECT_TIMEOUT_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();

    let config = ClientConfig::from_env().unwrap();

    assert_eq!(config.api_base_url, "http://localhost:8000");
    assert_eq!(config.app_origin, "http://localhost:3000");
    assert_eq!(config.api_key, None);
    assert_eq!(config.http_timeout, Duration::from_secs(30));
    assert_eq!(config.http_connect_timeout, Duration::from_secs(10));
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("WEARABLE_API_BASE_URL", "https://api.wearables.example/");
    env::set_var("WEARABLE_APP_ORIGIN", "https://app.wearables.example");
    env::set_var("WEARABLE_API_KEY", "sk-live");
    env::set_var("WEARABLE_HTTP_TIMEOUT_SECS", "5");
    env::set_var("WEARABLE_HTTP_CONNECT_TIMEOUT_SECS", "2");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_base_url, "https://api.wearables.example");
    assert_eq!(config.app_origin, "https://app.wearables.example");
    assert_eq!(config.api_key.as_deref(), Some("sk-live"));
    assert_eq!(config.http_timeout, Duration::from_secs(5));
    assert_eq!(config.http_connect_timeout, Duration::from_secs(2));
    assert!(config.summary().contains("API Key: Configured"));
}

#[test]
#[serial]
fn test_blank_values_fall_back_to_defaults() {
    clear_env();
    env::set_var("WEARABLE_APP_ORIGIN", "   ");
    env::set_var("WEARABLE_API_KEY", "");

    let config = ClientConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.app_origin, "http://localhost:3000");
    assert_eq!(config.api_key, None);
}

#[test]
#[serial]
fn test_invalid_values_are_config_errors() {
    for (var, value) in [
        ("WEARABLE_API_BASE_URL", "localhost:8000/api"),
        ("WEARABLE_APP_ORIGIN", "not a url"),
        ("WEARABLE_HTTP_TIMEOUT_SECS", "thirty"),
        ("WEARABLE_HTTP_CONNECT_TIMEOUT_SECS", "0"),
    ] {
        clear_env();
        env::set_var(var, value);

        let error = ClientConfig::from_env().unwrap_err();
        clear_env();

        assert_eq!(error.code, ErrorCode::ConfigInvalid, "{var}={value}");
        assert!(error.message.contains(var), "{}", error.message);
    }
}

#[test]
fn test_api_url_override_is_validated() {
    let config = ClientConfig::default()
        .with_api_base_url("https://staging.example/")
        .unwrap();
    assert_eq!(config.api_base_url, "https://staging.example");

    let error = ClientConfig::default()
        .with_api_base_url("staging.example")
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
