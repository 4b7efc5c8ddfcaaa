// ABOUTME: Core types and constants for the TrailFuel hiking provisions planner
// ABOUTME: Foundation crate with error handling, trip models, and estimation constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # TrailFuel Core
//!
//! Foundation crate providing shared types and constants for the TrailFuel
//! provisions planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `EstimationError`
//! - **constants**: Energy, water, meal, and default-value constants
//! - **models**: Hiker profile, trip basics, per-day plans, and estimation results

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Estimation coefficients and form defaults organized by domain
pub mod constants;

/// Trip planning models (profile, day plans, estimation results)
pub mod models;
