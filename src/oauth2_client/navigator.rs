// ABOUTME: Navigation hand-off to the provider consent page
// ABOUTME: System browser, stdout, and recording implementations of one capability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::{Arc, Mutex};
use tracing::warn;
#[cfg(feature = "browser")]
use tracing::info;

/// Sends the user to an authorization URL
///
/// Fire-and-forget: there is no return value and the hand-off cannot be undone.
pub trait Navigator: Send + Sync {
    /// Navigate to `url`
    fn navigate(&self, url: &str);
}

/// Opens the URL in the system browser, printing it if that fails
#[cfg(feature = "browser")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "browser")]
impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) {
        match open::that(url) {
            Ok(()) => info!("Opened authorization page in the system browser"),
            Err(e) => {
                warn!("Failed to open system browser: {}", e);
                println!("Open this URL to continue authorization:\n{url}");
            }
        }
    }
}

/// Prints the URL to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, url: &str) {
        println!("{url}");
    }
}

/// Records visited URLs instead of navigating
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs navigated to so far, in order
    #[must_use]
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .unwrap_or_else(|poisoned| {
                warn!("Navigator record lock poisoned, recovering");
                poisoned.into_inner()
            })
            .clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.visited
            .lock()
            .unwrap_or_else(|poisoned| {
                warn!("Navigator record lock poisoned, recovering");
                poisoned.into_inner()
            })
            .push(url.to_owned());
    }
}
