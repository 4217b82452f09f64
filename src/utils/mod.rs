// ABOUTME: Utility modules shared by the gateway, the health API client, and the CLI
// ABOUTME: Error body parsing and HTTP client construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Error body parsing helpers
pub mod errors;
/// HTTP client configuration and helpers
pub mod http_client;
