// ABOUTME: Main library entry point for the wearable provider pairing client
// ABOUTME: OAuth connection orchestration, health API access, and statistics re-exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wearable Link
//!
//! Client-side orchestration for linking a user's account to a wearable data
//! provider through the backend-minted `OAuth2` authorization-code flow, plus
//! summary statistics over the health data those providers sync.
//!
//! ## Architecture
//!
//! - **`oauth2_client`**: connection state machine, authorization gateway, navigators
//! - **`api`**: typed client for provider, connection, and health data routes
//! - **`intelligence`**: pure aggregation over labeled numeric samples
//! - **Config / logging**: environment-driven setup shared by the binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wearable_link::config::ClientConfig;
//! use wearable_link::oauth2_client::{
//!     ConnectCallbacks, ConnectRequest, HttpAuthorizationGateway, OAuthConnector, PrintNavigator,
//! };
//!
//! # async fn run() -> wearable_link::errors::AppResult<()> {
//! let config = ClientConfig::from_env()?;
//! let connector = OAuthConnector::new(
//!     Arc::new(HttpAuthorizationGateway::from_config(&config)),
//!     Arc::new(PrintNavigator),
//!     &config.app_origin,
//! );
//!
//! let outcome = connector
//!     .connect(ConnectRequest::new("garmin", "user-123"), ConnectCallbacks::none())
//!     .await;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```

/// REST client wrappers for the backend
pub mod api;

/// Configuration management
pub mod config;

/// Display formatting for dates, durations, and identifiers
pub mod formatters;

/// Logging configuration and structured logging setup
pub mod logging;

/// Provider connection orchestration
pub mod oauth2_client;

/// Shared helpers
pub mod utils;

/// Error types, re-exported from `wearable-core`
pub use wearable_core::errors;

/// Constants, re-exported from `wearable-core`
pub use wearable_core::constants;

/// Wire models, re-exported from `wearable-core`
pub use wearable_core::models;

/// Statistics aggregation, re-exported from `wearable-intelligence`
pub use wearable_intelligence as intelligence;
