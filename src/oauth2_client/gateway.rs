// ABOUTME: Authorization gateway seam: one round trip that mints a provider consent URL
// ABOUTME: HTTP implementation calls the backend `/api/v1/oauth/{provider}/authorize` route
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::ClientConfig;
use crate::constants::{api, query};
use crate::errors::GatewayError;
use crate::utils::http_client::client_from_config;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use uuid::Uuid;

/// Parameters for one authorization request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    /// Provider to authorize against
    pub provider_id: String,
    /// User being linked
    pub user_id: String,
    /// Where the provider should return the browser
    pub redirect_uri: String,
}

/// Raw gateway response; interpretation is left to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl GatewayResponse {
    /// Whether the status is 2xx
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }
}

/// Backend capability that mints provider authorization URLs
///
/// Any HTTP response, whatever its status, is returned as `Ok`. `Err` means
/// no response was obtained at all.
#[async_trait]
pub trait AuthorizationGateway: Send + Sync {
    /// Issue a single authorization request
    async fn request_authorization(
        &self,
        request: &AuthorizationRequest,
    ) -> Result<GatewayResponse, GatewayError>;
}

/// Gateway backed by the HTTP API
#[derive(Clone)]
pub struct HttpAuthorizationGateway {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpAuthorizationGateway {
    /// Create a gateway for the given backend base URL
    #[must_use]
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            api_key: None,
        }
    }

    /// Create a gateway from client configuration
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut gateway = Self::new(client_from_config(config), &config.api_base_url);
        gateway.api_key.clone_from(&config.api_key);
        gateway
    }

    /// URL of the authorize route for a provider
    #[must_use]
    pub fn authorize_url(&self, provider_id: &str) -> String {
        format!(
            "{}{}/{}/{}",
            self.base_url,
            api::OAUTH_PREFIX,
            urlencoding::encode(provider_id),
            api::AUTHORIZE_SEGMENT
        )
    }
}

#[async_trait]
impl AuthorizationGateway for HttpAuthorizationGateway {
    async fn request_authorization(
        &self,
        request: &AuthorizationRequest,
    ) -> Result<GatewayResponse, GatewayError> {
        let url = self.authorize_url(&request.provider_id);
        let request_id = Uuid::new_v4().to_string();

        debug!(
            provider = %request.provider_id,
            user_id = %request.user_id,
            request_id = %request_id,
            "Requesting authorization URL"
        );

        let mut builder = self
            .client
            .get(&url)
            .query(&[
                (query::USER_ID, request.user_id.as_str()),
                (query::REDIRECT_URI, request.redirect_uri.as_str()),
            ])
            .header(api::REQUEST_ID_HEADER, &request_id);

        if let Some(key) = &self.api_key {
            builder = builder.header(api::API_KEY_HEADER, key);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, request_id = %request_id, "Authorization gateway responded");

        Ok(GatewayResponse { status, body })
    }
}
