// ABOUTME: HTTP middleware layers applied to the whole router
// ABOUTME: Cross-origin configuration for browser clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-origin resource sharing configuration
pub mod cors;

pub use cors::setup_cors;
