// ABOUTME: Observable state of the current provider connection attempt
// ABOUTME: Lifecycle enum plus the snapshot handed to UI or CLI consumers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use std::fmt;

/// Lifecycle of a connection attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    /// No attempt in progress
    #[default]
    Idle,
    /// Waiting on the authorization gateway
    Connecting,
    /// Authorization URL obtained and handed to the navigator
    Success,
    /// The attempt failed; see `error_message`
    Error,
}

impl ConnectionState {
    /// Lowercase name used in logs and CLI output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Connecting => "connecting",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time view of the connector
///
/// `provider_id` is set only while `Connecting`; `error_message` only in `Error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConnectionAttempt {
    /// Current lifecycle state
    pub state: ConnectionState,
    /// Provider being connected
    pub provider_id: Option<String>,
    /// User-facing failure message
    pub error_message: Option<String>,
}

impl ConnectionAttempt {
    /// Whether an attempt is in flight for the given provider
    #[must_use]
    pub fn is_connecting_to(&self, provider_id: &str) -> bool {
        self.state == ConnectionState::Connecting
            && self.provider_id.as_deref() == Some(provider_id)
    }
}
