// ABOUTME: connect command for wearable-cli
// ABOUTME: Runs one orchestrated OAuth connection attempt and reports the outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};
use std::sync::Arc;
use tracing::info;
use wearable_link::config::ClientConfig;
#[cfg(feature = "browser")]
use wearable_link::oauth2_client::BrowserNavigator;
use wearable_link::oauth2_client::{
    ConnectCallbacks, ConnectOutcome, ConnectRequest, HttpAuthorizationGateway, Navigator,
    OAuthConnector, PrintNavigator,
};

/// Connect `provider` to `user`; fails when the attempt ends in the error state
pub async fn run(
    config: &ClientConfig,
    user: String,
    provider: String,
    redirect_uri: Option<String>,
    print_only: bool,
) -> Result<()> {
    let connector = OAuthConnector::new(
        Arc::new(HttpAuthorizationGateway::from_config(config)),
        navigator(print_only),
        &config.app_origin,
    );

    let mut request = ConnectRequest::new(provider, user);
    if let Some(redirect_uri) = redirect_uri {
        request = request.with_redirect_uri(redirect_uri);
    }

    let callbacks = ConnectCallbacks::none()
        .on_success(|provider| info!("Redirecting to {} consent page", provider));

    match connector.connect(request, callbacks).await {
        ConnectOutcome::Redirected { provider_id, .. } => {
            if !print_only {
                println!("Continue in the browser to finish connecting {provider_id}.");
            }
            Ok(())
        }
        ConnectOutcome::Failed { message } => bail!(message),
        ConnectOutcome::Superseded => bail!("Connection attempt was superseded"),
    }
}

fn navigator(print_only: bool) -> Arc<dyn Navigator> {
    if print_only {
        return Arc::new(PrintNavigator);
    }
    default_navigator()
}

#[cfg(feature = "browser")]
fn default_navigator() -> Arc<dyn Navigator> {
    Arc::new(BrowserNavigator)
}

#[cfg(not(feature = "browser"))]
fn default_navigator() -> Arc<dyn Navigator> {
    Arc::new(PrintNavigator)
}
