// ABOUTME: Interpretation of authorization gateway responses
// ABOUTME: Turns status and body into an authorization URL or a user-facing connect error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::gateway::GatewayResponse;
use crate::constants::{fields, messages};
use crate::errors::GatewayError;
use crate::utils::errors::error_message_or;
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Why a connection attempt failed
///
/// `Display` is the user-facing message stored in the connection error state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectError {
    /// Provider or user id missing
    #[error("{message}")]
    InvalidRequest {
        /// What was missing
        message: String,
    },

    /// No HTTP response was obtained
    #[error("{message}")]
    Transport {
        /// Runtime message, or the generic fallback
        message: String,
    },

    /// The gateway answered with a non-success status
    #[error("{message}")]
    GatewayRejected {
        /// HTTP status code
        status: u16,
        /// Message from the error body, or the generic fallback
        message: String,
    },

    /// Success status but no usable authorization URL
    #[error("{reason}")]
    MalformedResponse {
        /// User-facing reason
        reason: String,
    },
}

impl ConnectError {
    /// Message shown to the user
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// HTTP status for gateway rejections
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::GatewayRejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn malformed(reason: &str) -> Self {
        Self::MalformedResponse {
            reason: reason.to_owned(),
        }
    }
}

impl From<GatewayError> for ConnectError {
    fn from(error: GatewayError) -> Self {
        Self::Transport {
            message: error
                .runtime_message()
                .unwrap_or_else(|| messages::CONNECTION_FAILED.to_owned()),
        }
    }
}

/// Extract the authorization URL from a gateway response
///
/// The URL is returned exactly as the gateway sent it. It must parse as an
/// absolute `http`/`https` URL.
pub fn interpret_response(response: &GatewayResponse) -> Result<String, ConnectError> {
    if !response.is_success() {
        return Err(ConnectError::GatewayRejected {
            status: response.status,
            message: error_message_or(&response.body, messages::AUTHORIZATION_URL_FAILED),
        });
    }

    let body: Value = serde_json::from_str(&response.body)
        .map_err(|_| ConnectError::malformed(messages::UNREADABLE_AUTHORIZATION_RESPONSE))?;

    let url = body
        .get(fields::AUTHORIZATION_URL)
        .and_then(Value::as_str)
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ConnectError::malformed(messages::MISSING_AUTHORIZATION_URL))?;

    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(url.to_owned()),
        _ => Err(ConnectError::malformed(messages::INVALID_AUTHORIZATION_URL)),
    }
}
