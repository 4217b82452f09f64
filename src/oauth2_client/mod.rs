// ABOUTME: OAuth provider connection client for linking wearable accounts
// ABOUTME: Gateway request, response interpretation, navigation, and attempt state tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Connection orchestrator and its outcome types
pub mod connector;
/// Authorization gateway trait and HTTP implementation
pub mod gateway;
/// Navigation hand-off implementations
pub mod navigator;
/// Gateway response interpretation and connect errors
pub mod response;
/// Observable attempt state
pub mod state;

pub use connector::{
    default_redirect_uri, ConnectCallback, ConnectCallbacks, ConnectOutcome, ConnectRequest,
    OAuthConnector,
};
pub use gateway::{
    AuthorizationGateway, AuthorizationRequest, GatewayResponse, HttpAuthorizationGateway,
};
#[cfg(feature = "browser")]
pub use navigator::BrowserNavigator;
pub use navigator::{Navigator, PrintNavigator, RecordingNavigator};
pub use response::{interpret_response, ConnectError};
pub use state::{ConnectionAttempt, ConnectionState};
