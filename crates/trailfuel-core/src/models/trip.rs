// ABOUTME: Trip basics, per-day course plans, and the request-scoped estimation record
// ABOUTME: Validates the record as a whole before any estimation is computed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::profile::Profile;
use crate::constants::{defaults, meals};
use crate::errors::EstimationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Meals that can be planned for a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Meal {
    /// Breakfast (400 kcal)
    Breakfast,
    /// Lunch (400 kcal)
    Lunch,
    /// Dinner (500 kcal)
    Dinner,
}

impl Meal {
    /// All meals in serving order
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Form key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }

    /// Energy supplied by the meal (kcal)
    #[must_use]
    pub const fn kcal(self) -> f64 {
        match self {
            Self::Breakfast => meals::BREAKFAST_KCAL,
            Self::Lunch => meals::LUNCH_KCAL,
            Self::Dinner => meals::DINNER_KCAL,
        }
    }

    /// Parse an exact form key
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|meal| meal.key() == key)
    }
}

/// Trip length and carried load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripBasics {
    /// Number of trip days
    #[serde(default = "default_days")]
    pub days: u32,
    /// Luggage weight added to body weight (kg)
    #[serde(default)]
    pub luggage_weight: f64,
}

impl Default for TripBasics {
    fn default() -> Self {
        Self {
            days: defaults::TRIP_DAYS,
            luggage_weight: defaults::LUGGAGE_WEIGHT_KG,
        }
    }
}

fn default_days() -> u32 {
    defaults::TRIP_DAYS
}

/// One day of the course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Hours of hiking exertion
    pub course_time: f64,
    /// Meals eaten that day
    #[serde(default)]
    pub meals: BTreeSet<Meal>,
    /// Overnight lodging is a hut (dinner is provided)
    #[serde(default)]
    pub hut: bool,
    /// A natural water source is available that day
    #[serde(default, alias = "water")]
    pub water_source: bool,
}

impl DayPlan {
    /// Plan with no meals, no hut, and no water source
    #[must_use]
    pub fn new(course_time: f64) -> Self {
        Self {
            course_time,
            meals: BTreeSet::new(),
            hut: false,
            water_source: false,
        }
    }

    /// Add a meal
    #[must_use]
    pub fn with_meal(mut self, meal: Meal) -> Self {
        self.meals.insert(meal);
        self
    }

    /// Set hut lodging
    #[must_use]
    pub fn with_hut(mut self, hut: bool) -> Self {
        self.hut = hut;
        self
    }

    /// Set water source availability
    #[must_use]
    pub fn with_water_source(mut self, water_source: bool) -> Self {
        self.water_source = water_source;
        self
    }

    /// Whether the given meal is planned
    #[must_use]
    pub fn has_meal(&self, meal: Meal) -> bool {
        self.meals.contains(&meal)
    }
}

/// Everything the estimation engine reads, captured as one snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    /// Hiker profile
    #[serde(default)]
    pub profile: Profile,
    /// Trip length and luggage
    #[serde(default)]
    pub trip: TripBasics,
    /// Ordered day plans, one per trip day
    #[serde(default)]
    pub course_details: Vec<DayPlan>,
}

impl TripRecord {
    /// Body weight plus luggage (kg)
    #[must_use]
    pub fn effective_weight(&self) -> f64 {
        self.profile.weight + self.trip.luggage_weight
    }

    /// Check every numeric field and the day count
    ///
    /// # Errors
    ///
    /// Returns the first offending field. Day fields are named `course_{n}` with
    /// `n` starting at 1, matching the course form.
    pub fn validate(&self) -> Result<(), EstimationError> {
        if !self.profile.weight.is_finite() || self.profile.weight <= 0.0 {
            return Err(EstimationError::invalid_value(
                "weight",
                "must be a positive number of kilograms",
            ));
        }
        if !self.trip.luggage_weight.is_finite() || self.trip.luggage_weight < 0.0 {
            return Err(EstimationError::invalid_value(
                "luggage_weight",
                "must not be negative",
            ));
        }

        let days = self.trip.days as usize;
        if self.course_details.len() < days {
            return Err(EstimationError::missing_field(format!(
                "course_{}",
                self.course_details.len() + 1
            )));
        }
        if self.course_details.len() > days {
            return Err(EstimationError::invalid_value(
                "days",
                format!(
                    "declares {days} days but {} day plans were supplied",
                    self.course_details.len()
                ),
            ));
        }

        for (index, day) in self.course_details.iter().enumerate() {
            if !day.course_time.is_finite() || day.course_time < 0.0 {
                return Err(EstimationError::invalid_value(
                    format!("course_{}", index + 1),
                    "must not be negative",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(days: u32, plans: Vec<DayPlan>) -> TripRecord {
        TripRecord {
            profile: Profile::default(),
            trip: TripBasics {
                days,
                luggage_weight: 8.0,
            },
            course_details: plans,
        }
    }

    #[test]
    fn test_effective_weight_adds_luggage() {
        let record = record(1, vec![DayPlan::new(4.0)]);
        assert!((record.effective_weight() - 68.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_reports_first_missing_day() {
        let record = record(3, vec![DayPlan::new(4.0)]);
        assert_eq!(
            record.validate(),
            Err(EstimationError::missing_field("course_2"))
        );
    }

    #[test]
    fn test_validate_rejects_extra_days() {
        let record = record(1, vec![DayPlan::new(4.0), DayPlan::new(2.0)]);
        let error = record.validate().unwrap_err();
        assert_eq!(error.field(), "days");
    }

    #[test]
    fn test_validate_rejects_negative_course_time() {
        let record = record(2, vec![DayPlan::new(4.0), DayPlan::new(-1.0)]);
        let error = record.validate().unwrap_err();
        assert_eq!(error.field(), "course_2");
    }

    #[test]
    fn test_validate_accepts_empty_trip() {
        let record = record(0, Vec::new());
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_day_plan_meals_are_a_set() {
        let plan = DayPlan::new(3.0)
            .with_meal(Meal::Dinner)
            .with_meal(Meal::Dinner)
            .with_meal(Meal::Breakfast);
        assert_eq!(plan.meals.len(), 2);
        assert!(plan.has_meal(Meal::Dinner));
        assert!(!plan.has_meal(Meal::Lunch));
    }

    #[test]
    fn test_day_plan_accepts_water_alias() {
        let plan: DayPlan =
            serde_json::from_str(r#"{"course_time": 5, "meals": ["lunch"], "water": true}"#)
                .unwrap();
        assert!(plan.water_source);
        assert!(!plan.hut);
        assert!(plan.has_meal(Meal::Lunch));
    }
}
