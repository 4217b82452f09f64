// ABOUTME: wearable-cli - command-line client for linking wearable providers
// ABOUTME: Runs OAuth connection attempts and summarizes synced health data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Link a provider, opening the consent page in the browser
//! wearable-cli connect --user 3f2a... --provider garmin
//!
//! # Print the consent URL instead of opening it
//! wearable-cli connect --user 3f2a... --provider garmin --print-only
//!
//! # Heart-rate summary over the last 14 days
//! wearable-cli stats --user 3f2a... --days 14
//!
//! # Provider catalogue and the user's connections
//! wearable-cli providers
//! wearable-cli connections --user 3f2a...
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use wearable_link::config::ClientConfig;
use wearable_link::constants::{categories, defaults};
use wearable_link::logging::LoggingConfig;

/// Upper bound for `stats --days`, roughly one hundred years
const MAX_HISTORY_DAYS: i64 = 36_500;

#[derive(Parser)]
#[command(
    name = "wearable-cli",
    about = "Wearable provider pairing client",
    long_about = "Links wearable data providers to a user account through the backend OAuth flow and summarizes synced health data."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Connect a provider to a user account
    Connect {
        /// User id
        #[arg(long)]
        user: String,

        /// Provider id, e.g. `garmin`
        #[arg(long)]
        provider: String,

        /// Redirect target (defaults to the app's pair-success page)
        #[arg(long)]
        redirect_uri: Option<String>,

        /// Print the authorization URL instead of opening a browser
        #[arg(long)]
        print_only: bool,
    },

    /// Summarize workout statistics for a recent window
    Stats {
        /// User id
        #[arg(long)]
        user: String,

        /// Category to summarize
        #[arg(long, default_value = categories::HEART_RATE)]
        category: String,

        /// Number of days to look back
        #[arg(
            long,
            default_value_t = defaults::HISTORY_DAYS,
            value_parser = clap::value_parser!(i64).range(1..=MAX_HISTORY_DAYS)
        )]
        days: i64,
    },

    /// List available providers
    Providers,

    /// List a user's provider connections
    Connections {
        /// User id
        #[arg(long)]
        user: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = ClientConfig::from_env().context("Failed to load configuration")?;
    if let Some(api_url) = &cli.api_url {
        config = config
            .with_api_base_url(api_url)
            .context("Invalid --api-url")?;
    }
    debug!("{}", config.summary());

    match cli.command {
        Command::Connect {
            user,
            provider,
            redirect_uri,
            print_only,
        } => commands::connect::run(&config, user, provider, redirect_uri, print_only).await,
        Command::Stats {
            user,
            category,
            days,
        } => commands::health::stats(&config, &user, &category, days).await,
        Command::Providers => commands::health::providers(&config).await,
        Command::Connections { user } => commands::health::connections(&config, &user).await,
    }
}
