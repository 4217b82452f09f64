// ABOUTME: Connection orchestrator driving one provider OAuth attempt at a time
// ABOUTME: Generation-guarded state machine: request URL, interpret, notify, navigate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Provider connection orchestration
//!
//! Each call to [`OAuthConnector::connect`] starts a new attempt and bumps the
//! attempt generation. When the gateway round trip resolves, the result is
//! applied only if its generation is still current; results of superseded
//! attempts (a newer `connect` or a `reset` happened meanwhile) are dropped
//! without touching state, calling callbacks, or navigating.

use super::gateway::{AuthorizationGateway, AuthorizationRequest};
use super::navigator::Navigator;
use super::response::{interpret_response, ConnectError};
use super::state::{ConnectionAttempt, ConnectionState};
use crate::constants::{query, redirect};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Callback receiving a provider id or an error message
pub type ConnectCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Parameters for a connection attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectRequest {
    /// Provider to connect
    pub provider_id: String,
    /// User whose account is being linked
    pub user_id: String,
    /// Explicit redirect target; defaults to the app's pair-success page
    pub redirect_uri: Option<String>,
}

impl ConnectRequest {
    /// Request with the default redirect target
    #[must_use]
    pub fn new(provider_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            user_id: user_id.into(),
            redirect_uri: None,
        }
    }

    /// Use an explicit redirect target
    #[must_use]
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }
}

/// Optional success and error hooks
#[derive(Clone, Default)]
pub struct ConnectCallbacks {
    on_success: Option<ConnectCallback>,
    on_error: Option<ConnectCallback>,
}

impl ConnectCallbacks {
    /// No callbacks
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Called with the provider id before navigation
    #[must_use]
    pub fn on_success(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(callback));
        self
    }

    /// Called with the user-facing error message
    #[must_use]
    pub fn on_error(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(callback));
        self
    }
}

impl fmt::Debug for ConnectCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectCallbacks")
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}

/// How a `connect` call ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConnectOutcome {
    /// Authorization URL obtained and handed to the navigator
    Redirected {
        /// Provider that was connected
        provider_id: String,
        /// Consent page URL, exactly as returned by the gateway
        authorization_url: String,
    },
    /// The attempt failed and the connector is in the error state
    Failed {
        /// User-facing message
        message: String,
    },
    /// A newer attempt or a reset superseded this one; nothing was applied
    Superseded,
}

/// Attempt state plus the generation that last wrote it
#[derive(Debug, Default)]
struct AttemptRecord {
    generation: u64,
    attempt: ConnectionAttempt,
}

/// Drives provider connection attempts
#[derive(Clone)]
pub struct OAuthConnector {
    gateway: Arc<dyn AuthorizationGateway>,
    navigator: Arc<dyn Navigator>,
    app_origin: String,
    record: Arc<Mutex<AttemptRecord>>,
}

impl OAuthConnector {
    /// Create a connector in the idle state
    #[must_use]
    pub fn new(
        gateway: Arc<dyn AuthorizationGateway>,
        navigator: Arc<dyn Navigator>,
        app_origin: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            navigator,
            app_origin: app_origin.into().trim_end_matches('/').to_owned(),
            record: Arc::new(Mutex::new(AttemptRecord::default())),
        }
    }

    /// Current state, provider marker, and error message
    #[must_use]
    pub fn snapshot(&self) -> ConnectionAttempt {
        self.lock_record().attempt.clone()
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.lock_record().attempt.state
    }

    /// Return to idle from any state
    ///
    /// An in-flight request is not cancelled; its late result is ignored.
    pub fn reset(&self) {
        let mut record = self.lock_record();
        record.generation += 1;
        record.attempt = ConnectionAttempt::default();
        debug!(generation = record.generation, "Connection attempt reset");
    }

    /// Run one connection attempt
    ///
    /// Never returns an error: failures are reflected in the connector state,
    /// passed to `on_error`, and reported as [`ConnectOutcome::Failed`].
    pub async fn connect(
        &self,
        request: ConnectRequest,
        callbacks: ConnectCallbacks,
    ) -> ConnectOutcome {
        let generation = self.begin_attempt(&request.provider_id);

        info!(
            provider = %request.provider_id,
            user_id = %request.user_id,
            generation,
            "Starting provider connection"
        );

        match self.request_authorization_url(&request).await {
            Ok(url) => self.finish_success(generation, &request.provider_id, url, &callbacks),
            Err(error) => self.finish_failure(generation, &request.provider_id, &error, &callbacks),
        }
    }

    async fn request_authorization_url(
        &self,
        request: &ConnectRequest,
    ) -> Result<String, ConnectError> {
        validate_request(request)?;

        let redirect_uri = request.redirect_uri.clone().unwrap_or_else(|| {
            default_redirect_uri(&self.app_origin, &request.user_id, &request.provider_id)
        });

        let response = self
            .gateway
            .request_authorization(&AuthorizationRequest {
                provider_id: request.provider_id.clone(),
                user_id: request.user_id.clone(),
                redirect_uri,
            })
            .await?;

        interpret_response(&response)
    }

    fn begin_attempt(&self, provider_id: &str) -> u64 {
        let mut record = self.lock_record();
        record.generation += 1;
        record.attempt = ConnectionAttempt {
            state: ConnectionState::Connecting,
            provider_id: Some(provider_id.to_owned()),
            error_message: None,
        };
        record.generation
    }

    fn finish_success(
        &self,
        generation: u64,
        provider_id: &str,
        authorization_url: String,
        callbacks: &ConnectCallbacks,
    ) -> ConnectOutcome {
        {
            let mut record = self.lock_record();
            if record.generation != generation {
                debug!(
                    provider = %provider_id,
                    generation,
                    current = record.generation,
                    "Ignoring result of superseded connection attempt"
                );
                return ConnectOutcome::Superseded;
            }
            record.attempt = ConnectionAttempt {
                state: ConnectionState::Success,
                provider_id: None,
                error_message: None,
            };
        }

        info!(provider = %provider_id, generation, "Authorization URL obtained, redirecting");
        debug!(url = %authorization_url, "Navigating to provider consent page");

        if let Some(on_success) = &callbacks.on_success {
            on_success(provider_id);
        }
        self.navigator.navigate(&authorization_url);

        ConnectOutcome::Redirected {
            provider_id: provider_id.to_owned(),
            authorization_url,
        }
    }

    fn finish_failure(
        &self,
        generation: u64,
        provider_id: &str,
        error: &ConnectError,
        callbacks: &ConnectCallbacks,
    ) -> ConnectOutcome {
        let message = error.user_message();
        {
            let mut record = self.lock_record();
            if record.generation != generation {
                debug!(
                    provider = %provider_id,
                    generation,
                    current = record.generation,
                    "Ignoring failure of superseded connection attempt"
                );
                return ConnectOutcome::Superseded;
            }
            record.attempt = ConnectionAttempt {
                state: ConnectionState::Error,
                provider_id: None,
                error_message: Some(message.clone()),
            };
        }

        warn!(
            provider = %provider_id,
            generation,
            status = ?error.status(),
            "Provider connection failed: {}",
            message
        );

        if let Some(on_error) = &callbacks.on_error {
            on_error(&message);
        }

        ConnectOutcome::Failed { message }
    }

    fn lock_record(&self) -> MutexGuard<'_, AttemptRecord> {
        self.record.lock().unwrap_or_else(|poisoned| {
            warn!("Connection state lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl fmt::Debug for OAuthConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthConnector")
            .field("app_origin", &self.app_origin)
            .field("attempt", &self.snapshot())
            .finish_non_exhaustive()
    }
}

/// Default redirect target: `{origin}/users/{user_id}/pair/success?provider={provider_id}`
#[must_use]
pub fn default_redirect_uri(app_origin: &str, user_id: &str, provider_id: &str) -> String {
    format!(
        "{}/users/{}/{}?{}={}",
        app_origin.trim_end_matches('/'),
        urlencoding::encode(user_id),
        redirect::PAIR_SUCCESS_PATH,
        query::PROVIDER,
        urlencoding::encode(provider_id)
    )
}

fn validate_request(request: &ConnectRequest) -> Result<(), ConnectError> {
    if request.provider_id.trim().is_empty() {
        return Err(ConnectError::InvalidRequest {
            message: "Provider id is required".to_owned(),
        });
    }
    if request.user_id.trim().is_empty() {
        return Err(ConnectError::InvalidRequest {
            message: "User id is required".to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_redirect_uri() {
        assert_eq!(
            default_redirect_uri("http://localhost:3000/", "user-1", "garmin"),
            "http://localhost:3000/users/user-1/pair/success?provider=garmin"
        );
    }

    #[test]
    fn test_default_redirect_uri_encodes_segments() {
        assert_eq!(
            default_redirect_uri("https://app.example.com", "a b", "x&y"),
            "https://app.example.com/users/a%20b/pair/success?provider=x%26y"
        );
    }

    #[test]
    fn test_blank_ids_are_rejected() {
        let err = validate_request(&ConnectRequest::new(" ", "user-1")).unwrap_err();
        assert_eq!(err.user_message(), "Provider id is required");

        let err = validate_request(&ConnectRequest::new("garmin", "")).unwrap_err();
        assert_eq!(err.user_message(), "User id is required");
    }
}
