// ABOUTME: Transport-level errors for a single round trip to the authorization gateway
// ABOUTME: Converts reqwest failures into a small, cloneable error vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failure to obtain any HTTP response from the gateway
///
/// A response with a non-success status is not a `GatewayError`; the caller
/// receives it as a normal response and interprets the body itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Network unreachable, connection refused, TLS failure, or similar
    #[error("{message}")]
    Transport {
        /// Runtime-provided description, may be empty
        message: String,
    },

    /// The request did not complete within the configured timeout
    #[error("Request to authorization gateway timed out")]
    Timeout,

    /// The request URL could not be constructed
    #[error("Invalid gateway URL: {url}")]
    InvalidUrl {
        /// The offending URL
        url: String,
    },
}

impl GatewayError {
    /// Transport failure with a runtime-provided message
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Message suitable for the user, or `None` when the runtime gave nothing useful
    #[must_use]
    pub fn runtime_message(&self) -> Option<String> {
        let message = self.to_string();
        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

#[cfg(feature = "provider-errors")]
impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_builder() {
            Self::InvalidUrl {
                url: error
                    .url()
                    .map_or_else(String::new, std::string::ToString::to_string),
            }
        } else {
            Self::transport(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_transport_message_has_no_runtime_message() {
        assert_eq!(GatewayError::transport("  ").runtime_message(), None);
    }

    #[test]
    fn test_transport_message_is_surfaced() {
        assert_eq!(
            GatewayError::transport("connection refused").runtime_message(),
            Some("connection refused".to_owned())
        );
    }
}
