// ABOUTME: Core types and constants for the wearable pairing client
// ABOUTME: Foundation crate with error handling, wire models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Wearable Core
//!
//! Shared types for the wearable pairing client. This crate changes rarely and
//! carries no network or runtime dependencies, so the intelligence crate and the
//! application crate can both build on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and gateway errors
//! - **constants**: API paths, fallback messages, and environment variable names
//! - **models**: Wire models for statistics, health records, providers, and connections

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Wire models exchanged with the backend
pub mod models;
