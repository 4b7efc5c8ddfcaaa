// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy expenditure, hydration, meal energy, and profile default constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Energy expenditure coefficients for hiking exertion
pub mod energy {
    /// Energy expenditure per kilogram of carried mass per minute of hiking (kcal/kg/min)
    pub const KCAL_PER_KG_PER_MINUTE: f64 = 0.155;

    /// Minutes per hour of course time
    pub const MINUTES_PER_HOUR: f64 = 60.0;

    /// Combined hourly coefficient (kcal/kg/hour), 9.3
    pub const KCAL_PER_KG_PER_HOUR: f64 = KCAL_PER_KG_PER_MINUTE * MINUTES_PER_HOUR;

    /// Share of the day's expenditure that should be replaced by food
    pub const INTAKE_RATIO: f64 = 0.8;

    /// Flat credit on day 1 for what the hiker ate before setting off (kcal)
    pub const FIRST_DAY_INTAKE_CREDIT_KCAL: f64 = 400.0;
}

/// Hydration coefficients
pub mod water {
    /// Water lost per kilogram of carried mass per hour of hiking (ml/kg/hour)
    pub const ML_PER_KG_PER_HOUR: f64 = 5.0;

    /// Share of the loss that must be carried as drinking water
    pub const CARRY_RATIO: f64 = 0.8;
}

/// Energy provided by each planned meal
pub mod meals {
    /// Breakfast energy (kcal)
    pub const BREAKFAST_KCAL: f64 = 400.0;
    /// Lunch energy (kcal)
    pub const LUNCH_KCAL: f64 = 400.0;
    /// Dinner energy (kcal)
    pub const DINNER_KCAL: f64 = 500.0;
}

/// Values applied when the hiker has not provided a field
pub mod defaults {
    /// Body weight used when the profile step was skipped (kg)
    pub const WEIGHT_KG: f64 = 60.0;
    /// Gender key
    pub const GENDER: &str = "male";
    /// Age group key
    pub const AGE_GROUP: &str = "30-39";
    /// Muscle type key
    pub const MUSCLE: &str = "normal";
    /// Luggage weight (kg)
    pub const LUGGAGE_WEIGHT_KG: f64 = 0.0;
    /// Trip length shown by the course step before trip basics are submitted
    pub const TRIP_DAYS: u32 = 1;
}

/// Coefficient fallback used for unrecognized categories
pub const NEUTRAL_FACTOR: f64 = 1.0;
