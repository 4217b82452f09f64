// ABOUTME: Configuration management for the wearable pairing client
// ABOUTME: Backend endpoints, redirect origin, credentials, and HTTP timeouts from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables (optionally seeded from a
//! `.env` file). See [`environment::ClientConfig`] for the variables read.

/// Client configuration from environment variables
pub mod environment;

pub use environment::ClientConfig;
