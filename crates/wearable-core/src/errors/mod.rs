// ABOUTME: Unified error types with standard error codes for the wearable client
// ABOUTME: AppError carries a code, a human-readable message, and an optional source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation outside the connection orchestrator returns
//! [`AppResult`]. The orchestrator itself never returns errors to its caller;
//! it reports failures through its state and callbacks, and uses these types
//! only internally.

/// Transport-level errors from a single gateway round trip
pub mod gateway;

pub use gateway::GatewayError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Authentication & Authorization (1000-1999)
    /// The backend rejected our credentials
    AuthInvalid = 1000,
    /// The caller may not perform this action
    PermissionDenied = 1001,

    // Validation (3000-3999)
    /// Caller supplied invalid input
    InvalidInput = 3000,

    // Resource Management (4000-4999)
    /// Requested resource does not exist
    ResourceNotFound = 4000,

    // External Services (5000-5999)
    /// The backend answered with an error
    ExternalServiceError = 5000,
    /// The backend could not be reached
    ExternalServiceUnavailable = 5001,
    /// The backend answered with a body we could not interpret
    ExternalResponseInvalid = 5002,

    // Configuration (6000-6999)
    /// Configuration is present but invalid
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// HTTP status equivalent for this error code
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::AuthInvalid => 401,
            Self::PermissionDenied => 403,
            Self::ResourceNotFound => 404,
            Self::ExternalServiceError | Self::ExternalResponseInvalid => 502,
            Self::ExternalServiceUnavailable => 503,
            Self::ConfigInvalid => 500,
        }
    }

    /// User-friendly description of this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AuthInvalid => "The provided credentials are invalid",
            Self::PermissionDenied => "You do not have permission to perform this action",
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "The backend reported an error",
            Self::ExternalServiceUnavailable => "The backend is currently unreachable",
            Self::ExternalResponseInvalid => "The backend returned an unexpected response",
            Self::ConfigInvalid => "Configuration is invalid",
        }
    }

    /// Map an HTTP status returned by the backend to the closest error code
    #[must_use]
    pub const fn from_http_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::InvalidInput,
            401 => Self::AuthInvalid,
            403 => Self::PermissionDenied,
            404 => Self::ResourceNotFound,
            502..=504 => Self::ExternalServiceUnavailable,
            _ => Self::ExternalServiceError,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the client
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status equivalent for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration present but invalid
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Backend reported an error with the given HTTP status
    #[must_use]
    pub fn backend_status(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::from_http_status(status), message)
    }

    /// Backend returned a body that could not be interpreted
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalResponseInvalid, message)
    }
}

impl From<GatewayError> for AppError {
    fn from(error: GatewayError) -> Self {
        let message = error.to_string();
        Self::new(ErrorCode::ExternalServiceUnavailable, message).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
