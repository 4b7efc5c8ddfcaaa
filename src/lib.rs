// ABOUTME: Main library entry point for the TrailFuel hiking provisions planner
// ABOUTME: Web wizard, session store, and JSON API around the trip estimation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # TrailFuel Server
//!
//! A small web service that walks a hiker through a four-step wizard and
//! estimates how much food energy and water to pack for each day of a trip.
//!
//! ## Flow
//!
//! 1. `/user`: body weight, gender, age group, and build
//! 2. `/home/step1`: number of days and luggage weight
//! 3. `/home/step2`: per-day course time, meals, hut lodging, water sources
//! 4. `/home/step3`: per-day breakdown and trip totals
//!
//! The same estimation is available as JSON at `/api/estimate`.
//!
//! ## Architecture
//!
//! - **trailfuel-core**: domain models, constants, and error types
//! - **trailfuel-intelligence**: coefficient tables and the estimation engine
//! - **trailfuel-server** (this crate): configuration, sessions, forms, views, routes
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trailfuel_server::config::ServerConfig;
//! use trailfuel_server::resources::ServerResources;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = Arc::new(ServerResources::new(config));
//!     trailfuel_server::server::run(resources).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Server-wide constants
pub mod constants;

/// Urlencoded form decoding for the wizard steps
pub mod forms;

/// Logging configuration and structured event helpers
pub mod logging;

/// HTTP middleware layers
pub mod middleware;

/// Shared handler state
pub mod resources;

/// Route groups
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Visitor sessions
pub mod session;

/// HTML page rendering
pub mod views;
