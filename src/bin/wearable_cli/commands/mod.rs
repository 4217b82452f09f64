// ABOUTME: Command modules for wearable-cli
// ABOUTME: Provider connection and health data commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod connect;
pub mod health;
