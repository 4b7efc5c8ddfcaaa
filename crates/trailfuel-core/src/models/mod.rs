// ABOUTME: Trip planning data models shared by the estimation engine and web layer
// ABOUTME: Re-exports profile, trip, and estimation result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Hiker profile and demographic categories
pub mod profile;

/// Trip basics, per-day course plans, and the estimation input record
pub mod trip;

/// Computed per-day results and trip summary
pub mod estimate;

pub use estimate::{DayResult, TripEstimate, TripSummary};
pub use profile::{AgeGroup, Gender, MuscleType, Profile};
pub use trip::{DayPlan, Meal, TripBasics, TripRecord};
