// ABOUTME: Trip resource estimation engine for hiking calorie and water planning
// ABOUTME: Coefficient tables and the per-day estimation pass with lagged water carry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # TrailFuel Intelligence
//!
//! Pure, deterministic computation of a trip's energy and water needs. The engine
//! takes a [`TripRecord`](trailfuel_core::models::TripRecord) snapshot by reference,
//! never mutates shared state, and performs no I/O.
//!
//! ## Example
//!
//! ```rust
//! use trailfuel_core::models::{DayPlan, Meal, TripRecord};
//! use trailfuel_intelligence::estimate_trip;
//!
//! let mut record = TripRecord::default();
//! record.course_details.push(DayPlan::new(5.0).with_meal(Meal::Lunch));
//!
//! let estimate = estimate_trip(&record).expect("valid record");
//! assert_eq!(estimate.days.len(), 1);
//! assert!((estimate.summary.total_meal_kcal - 400.0).abs() < f64::EPSILON);
//! ```

/// Age and muscle correction tables with permissive fallbacks
pub mod coefficients;

/// Per-day energy and water estimation
pub mod estimation;

pub use coefficients::{lookup, CoefficientTable, Coefficients, AGE_FACTOR, MUSCLE_FACTOR};
pub use estimation::{estimate_trip, round_to_1};
