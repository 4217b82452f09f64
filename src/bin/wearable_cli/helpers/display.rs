// ABOUTME: Output formatting helpers for wearable-cli
// ABOUTME: Plain-text listings of providers and connections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use wearable_link::formatters::{format_date, short_id};
use wearable_link::models::{AuthType, ConnectionStatus, Provider, UserConnection};

/// Display the provider catalogue
pub fn display_providers(providers: &[Provider]) {
    if providers.is_empty() {
        println!("No providers available.");
        return;
    }

    println!("ID               NAME                 AUTH       AVAILABLE");
    println!("{}", "=".repeat(60));
    for provider in providers {
        println!(
            "{:<16} {:<20} {:<10} {}",
            provider.id,
            provider.name,
            match provider.auth_type {
                AuthType::Oauth2 => "oauth2",
                AuthType::ApiKey => "api_key",
            },
            if provider.is_available { "yes" } else { "no" }
        );
    }
}

/// Display a user's connections
pub fn display_connections(connections: &[UserConnection]) {
    if connections.is_empty() {
        println!("No connected providers.");
        return;
    }

    for connection in connections {
        println!(
            "{} ({})  id {}",
            connection.provider_name,
            status_label(connection.status),
            short_id(&connection.id)
        );
        println!(
            "   Connected: {}",
            format_date(Some(connection.connected_at.to_rfc3339().as_str()))
        );
        println!(
            "   Last sync: {}",
            format_date(connection.last_sync_at.map(|t| t.to_rfc3339()).as_deref())
        );
        println!("   Data points: {}", connection.data_points);
        if let Some(error) = &connection.sync_error {
            println!("   Sync error: {error}");
        }
    }
}

const fn status_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Active => "active",
        ConnectionStatus::Error => "error",
        ConnectionStatus::Pending => "pending",
        ConnectionStatus::Disconnected => "disconnected",
    }
}
