// ABOUTME: Age and muscle correction factor tables keyed by gender and category
// ABOUTME: Lookups fall back to the male table, then to a neutral 1.0 factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Correction factors applied to the base expenditure formula.
//!
//! An unrecognized gender resolves to the male sub-table and an unrecognized
//! category resolves to [`NEUTRAL_FACTOR`]. Neither case is an error.

use trailfuel_core::constants::NEUTRAL_FACTOR;
use trailfuel_core::models::{AgeGroup, Profile};

/// A two-level table: gender, then category
#[derive(Debug, Clone, Copy)]
pub struct CoefficientTable {
    name: &'static str,
    male: &'static [(&'static str, f64)],
    female: &'static [(&'static str, f64)],
}

/// Age correction factors
pub const AGE_FACTOR: CoefficientTable = CoefficientTable {
    name: "age_factor",
    male: &[
        ("15-29", 1.00),
        ("30-39", 0.96),
        ("40-49", 0.94),
        ("50-59", 0.92),
        ("60-", 0.91),
    ],
    female: &[
        ("15-29", 0.95),
        ("30-39", 0.87),
        ("40-49", 0.85),
        ("50-59", 0.84),
        ("60-", 0.84),
    ],
};

/// Muscle correction factors
pub const MUSCLE_FACTOR: CoefficientTable = CoefficientTable {
    name: "muscle_factor",
    male: &[("muscular", 1.06), ("normal", 1.00), ("cultural", 0.94)],
    female: &[("muscular", 1.03), ("normal", 1.00), ("cultural", 0.97)],
};

impl CoefficientTable {
    /// Table name, used in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve the sub-table for a gender key, falling back to male
    fn rows_for(&self, gender: &str) -> &'static [(&'static str, f64)] {
        match gender {
            "female" => self.female,
            _ => self.male,
        }
    }

    /// Look up a factor, falling back to the male table and then to 1.0
    #[must_use]
    pub fn lookup(&self, gender: &str, category: &str) -> f64 {
        self.rows_for(gender)
            .iter()
            .find(|(key, _)| *key == category)
            .map_or(NEUTRAL_FACTOR, |(_, factor)| *factor)
    }
}

/// Free-function form of [`CoefficientTable::lookup`]
#[must_use]
pub fn lookup(table: &CoefficientTable, gender: &str, category: &str) -> f64 {
    table.lookup(gender, category)
}

/// Both correction factors for a profile, resolved once per trip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Age correction (`factor1`)
    pub age_factor: f64,
    /// Muscle correction (`factor2`)
    pub muscle_factor: f64,
}

impl Coefficients {
    /// Resolve factors for a profile
    ///
    /// The `60-plus` spelling of the oldest age group is normalized to the table key.
    #[must_use]
    pub fn for_profile(profile: &Profile) -> Self {
        let age_group = AgeGroup::parse(&profile.age_group)
            .map_or(profile.age_group.as_str(), |group| group.key());
        Self {
            age_factor: AGE_FACTOR.lookup(&profile.gender, age_group),
            muscle_factor: MUSCLE_FACTOR.lookup(&profile.gender, &profile.muscle),
        }
    }
}
