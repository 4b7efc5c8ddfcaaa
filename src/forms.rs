// ABOUTME: Decodes urlencoded wizard submissions into typed profile, trip, and course values
// ABOUTME: Rejects the whole submission on the first missing or invalid field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Form Decoding
//!
//! HTML forms arrive as ordered key/value pairs that may repeat a key (the meal
//! checkboxes do). Each parser validates every field it needs before returning,
//! so callers either get a complete typed value or an [`EstimationError`] and
//! write nothing to the session.

use std::collections::BTreeSet;
use trailfuel_core::constants::defaults;
use trailfuel_core::errors::EstimationError;
use trailfuel_core::models::{DayPlan, Meal, Profile, TripBasics};

/// Raw urlencoded form pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// Wrap decoded pairs
    #[must_use]
    pub const fn new(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }

    /// First value submitted for a key, trimmed; blank values count as absent
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Every value submitted for a key, in submission order
    pub fn all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the key was submitted at all (checkbox semantics)
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|(name, _)| name == key)
    }

    /// Required finite number
    fn number(&self, key: &str) -> Result<f64, EstimationError> {
        let raw = self
            .first(key)
            .ok_or_else(|| EstimationError::missing_field(key))?;
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| EstimationError::invalid_value(key, format!("'{raw}' is not a number")))
    }

    /// Optional text with a fallback
    fn text_or(&self, key: &str, default: &str) -> String {
        self.first(key).unwrap_or(default).to_owned()
    }
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::new(pairs)
    }
}

/// Decode the hiker profile form
///
/// `weight` is required and must be positive. Category fields are optional and
/// kept exactly as submitted so unknown values fall through to neutral factors.
///
/// # Errors
///
/// Returns an error if `weight` is absent, not a number, or not positive
pub fn parse_profile(fields: &FormFields) -> Result<Profile, EstimationError> {
    let weight = fields.number("weight")?;
    if weight <= 0.0 {
        return Err(EstimationError::invalid_value(
            "weight",
            "must be greater than zero",
        ));
    }

    Ok(Profile {
        weight,
        gender: fields.text_or("gender", defaults::GENDER),
        age_group: fields.text_or("age_group", defaults::AGE_GROUP),
        muscle: fields.text_or("muscle", defaults::MUSCLE),
    })
}

/// Decode the trip basics form (`days`, `luggage`)
///
/// # Errors
///
/// Returns an error if `days` is not an integer in `1..=max_days` or `luggage`
/// is absent, not a number, or negative
pub fn parse_trip_basics(
    fields: &FormFields,
    max_days: u32,
) -> Result<TripBasics, EstimationError> {
    let raw_days = fields
        .first("days")
        .ok_or_else(|| EstimationError::missing_field("days"))?;
    let days: u32 = raw_days.parse().map_err(|_| {
        EstimationError::invalid_value("days", format!("'{raw_days}' is not a whole number"))
    })?;
    if days == 0 || days > max_days {
        return Err(EstimationError::invalid_value(
            "days",
            format!("must be between 1 and {max_days}"),
        ));
    }

    let luggage_weight = fields.number("luggage")?;
    if luggage_weight < 0.0 {
        return Err(EstimationError::invalid_value(
            "luggage",
            "must not be negative",
        ));
    }

    Ok(TripBasics {
        days,
        luggage_weight,
    })
}

/// Decode the per-day course form for `days` days
///
/// Day `i` (from 1) reads `course_{i}`, every `meals_{i}` value, and the presence
/// of `hut_{i}` and `water_{i}`. Unknown meal names are ignored.
///
/// # Errors
///
/// Returns an error naming the first day whose `course_{i}` is absent, not a
/// number, or negative
pub fn parse_course_details(
    fields: &FormFields,
    days: u32,
) -> Result<Vec<DayPlan>, EstimationError> {
    (1..=days)
        .map(|day| {
            let course_key = format!("course_{day}");
            let course_time = fields.number(&course_key)?;
            if course_time < 0.0 {
                return Err(EstimationError::invalid_value(
                    course_key,
                    "must not be negative",
                ));
            }

            let meals_key = format!("meals_{day}");
            let meals: BTreeSet<Meal> = fields.all(&meals_key).filter_map(Meal::parse).collect();

            Ok(DayPlan {
                course_time,
                meals,
                hut: fields.contains(&format!("hut_{day}")),
                water_source: fields.contains(&format!("water_{day}")),
            })
        })
        .collect()
}
