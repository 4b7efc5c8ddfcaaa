// ABOUTME: Per-day energy and water estimation with trip-wide aggregation
// ABOUTME: Single forward pass honoring the day-1 intake credit and lagged water carry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trip Estimation Module
//!
//! For each day, in order:
//!
//! - consumed = effective weight x 9.3 x course time x age factor x muscle factor
//! - intake target = consumed x 0.8, less a 400 kcal credit on day 1, floored at 0
//! - intake needed = intake target - meal energy, floored at 0
//! - required water = effective weight x course time x 5 x 0.8 (ml)
//! - water needed = required water, except 0 when the previous day had a water source
//!
//! The pass must run in day order: day N's water figure depends on day N-1.

use crate::coefficients::{Coefficients, AGE_FACTOR, MUSCLE_FACTOR};
use trailfuel_core::constants::{energy, water};
use trailfuel_core::errors::EstimationError;
use trailfuel_core::models::{DayPlan, DayResult, Meal, TripEstimate, TripRecord, TripSummary};

/// Round to one decimal place
#[must_use]
pub fn round_to_1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Unrounded running totals carried through the day loop
#[derive(Debug, Default)]
struct TripTotals {
    meal_kcal: f64,
    intake_needed: f64,
    water_needed: f64,
    breakfast_count: u32,
    lunch_count: u32,
    dinner_count: u32,
    dinner_to_prepare: u32,
    previous_day_water_source: bool,
}

impl TripTotals {
    /// Energy from the day's meals, updating meal counters and dinners to prepare
    fn record_meals(&mut self, plan: &DayPlan) -> f64 {
        let mut meal_kcal = 0.0;
        for meal in &plan.meals {
            meal_kcal += meal.kcal();
            match meal {
                Meal::Breakfast => self.breakfast_count += 1,
                Meal::Lunch => self.lunch_count += 1,
                Meal::Dinner => {
                    self.dinner_count += 1;
                    if !plan.hut {
                        self.dinner_to_prepare += 1;
                    }
                }
            }
        }
        meal_kcal
    }

    fn into_summary(self) -> TripSummary {
        TripSummary {
            total_meal_kcal: round_to_1(self.meal_kcal),
            total_intake_needed: round_to_1(self.intake_needed),
            total_water_needed: round_to_1(self.water_needed),
            breakfast_count: self.breakfast_count,
            lunch_count: self.lunch_count,
            dinner_count: self.dinner_count,
            total_dinner_to_prepare: self.dinner_to_prepare,
        }
    }
}

/// Energy burned over the day (kcal)
fn consumed_kcal(effective_weight: f64, course_time: f64, coefficients: Coefficients) -> f64 {
    effective_weight
        * energy::KCAL_PER_KG_PER_HOUR
        * course_time
        * coefficients.age_factor
        * coefficients.muscle_factor
}

/// Energy the hiker should eat, with the pre-trip credit applied on day 1
fn intake_target_kcal(consumed: f64, is_first_day: bool) -> f64 {
    let target = consumed * energy::INTAKE_RATIO;
    if is_first_day {
        (target - energy::FIRST_DAY_INTAKE_CREDIT_KCAL).max(0.0)
    } else {
        target.max(0.0)
    }
}

/// Water lost over the day (ml)
fn required_water_ml(effective_weight: f64, course_time: f64) -> f64 {
    effective_weight * course_time * water::ML_PER_KG_PER_HOUR * water::CARRY_RATIO
}

/// Estimate energy and water needs for every day of a trip
///
/// The record is validated first; on failure nothing is computed.
///
/// # Errors
///
/// Returns [`EstimationError`] naming the first missing or out-of-range field.
pub fn estimate_trip(record: &TripRecord) -> Result<TripEstimate, EstimationError> {
    record.validate()?;

    let effective_weight = record.effective_weight();
    let coefficients = Coefficients::for_profile(&record.profile);

    tracing::debug!(
        days = record.course_details.len(),
        effective_weight,
        age_table = AGE_FACTOR.name(),
        age_factor = coefficients.age_factor,
        muscle_table = MUSCLE_FACTOR.name(),
        muscle_factor = coefficients.muscle_factor,
        "Estimating trip provisions"
    );

    let mut totals = TripTotals::default();
    let mut days = Vec::with_capacity(record.course_details.len());

    for (index, plan) in record.course_details.iter().enumerate() {
        let day = index + 1;
        let is_first_day = day == 1;

        let consumed = consumed_kcal(effective_weight, plan.course_time, coefficients);
        let intake_target = intake_target_kcal(consumed, is_first_day);
        let meal_kcal = totals.record_meals(plan);
        let intake_needed = (intake_target - meal_kcal).max(0.0);

        let required_water = required_water_ml(effective_weight, plan.course_time);
        let water_needed = if !is_first_day && totals.previous_day_water_source {
            0.0
        } else {
            required_water
        };
        totals.previous_day_water_source = plan.water_source;

        totals.meal_kcal += meal_kcal.max(0.0);
        totals.intake_needed += intake_needed;
        totals.water_needed += water_needed;

        days.push(DayResult {
            day,
            course_time: plan.course_time,
            intake_target: round_to_1(intake_target),
            meal_kcal: round_to_1(meal_kcal),
            intake_needed: round_to_1(intake_needed),
            required_water: round_to_1(required_water),
            water_needed: round_to_1(water_needed),
            meals: plan.meals.clone(),
            hut: plan.hut,
            water_source: plan.water_source,
            total_dinner_to_prepare: totals.dinner_to_prepare,
        });
    }

    Ok(TripEstimate {
        days,
        summary: totals.into_summary(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailfuel_core::models::{Profile, TripBasics};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn trip(weight: f64, luggage_weight: f64, plans: Vec<DayPlan>) -> TripRecord {
        TripRecord {
            profile: Profile {
                weight,
                ..Profile::default()
            },
            trip: TripBasics {
                days: plans.len() as u32,
                luggage_weight,
            },
            course_details: plans,
        }
    }

    #[test]
    fn test_round_to_1() {
        assert_close(round_to_1(1742.72), 1742.7);
        assert_close(round_to_1(0.04), 0.0);
        assert_close(round_to_1(12.36), 12.4);
    }

    #[test]
    fn test_first_day_credit() {
        let estimate = estimate_trip(&trip(60.0, 0.0, vec![DayPlan::new(5.0)])).unwrap();
        let day = &estimate.days[0];

        assert_close(day.intake_target, 1742.7);
        assert_close(day.meal_kcal, 0.0);
        assert_close(day.intake_needed, 1742.7);
        assert_close(day.required_water, 1200.0);
        assert_close(day.water_needed, 1200.0);
    }

    #[test]
    fn test_credit_applies_to_first_day_only() {
        let estimate = estimate_trip(&trip(
            60.0,
            0.0,
            vec![DayPlan::new(5.0), DayPlan::new(5.0)],
        ))
        .unwrap();

        // 2678.4 x 0.8 = 2142.72
        assert_close(estimate.days[1].intake_target, 2142.7);
        assert_close(
            estimate.days[1].intake_target - estimate.days[0].intake_target,
            400.0,
        );
    }

    #[test]
    fn test_short_first_day_floors_at_zero() {
        let estimate = estimate_trip(&trip(50.0, 0.0, vec![DayPlan::new(0.5)])).unwrap();
        assert_close(estimate.days[0].intake_target, 0.0);
        assert_close(estimate.days[0].intake_needed, 0.0);
    }

    #[test]
    fn test_meals_reduce_intake_needed() {
        let plan = DayPlan::new(5.0)
            .with_meal(Meal::Breakfast)
            .with_meal(Meal::Lunch)
            .with_meal(Meal::Dinner);
        let estimate = estimate_trip(&trip(60.0, 0.0, vec![plan])).unwrap();

        assert_close(estimate.days[0].meal_kcal, 1300.0);
        // 1742.72 - 1300
        assert_close(estimate.days[0].intake_needed, 442.7);
        assert_eq!(estimate.summary.breakfast_count, 1);
        assert_eq!(estimate.summary.lunch_count, 1);
        assert_eq!(estimate.summary.dinner_count, 1);
    }

    #[test]
    fn test_water_source_relieves_following_day() {
        let plans = vec![
            DayPlan::new(4.0).with_water_source(true),
            DayPlan::new(3.0),
            DayPlan::new(3.0).with_water_source(true),
        ];
        let estimate = estimate_trip(&trip(60.0, 0.0, plans)).unwrap();

        assert_close(estimate.days[0].water_needed, 960.0);
        assert_close(estimate.days[1].water_needed, 0.0);
        assert_close(estimate.days[1].required_water, 720.0);
        // Day 3's own source does not help day 3
        assert_close(estimate.days[2].water_needed, 720.0);
        assert_close(estimate.summary.total_water_needed, 1680.0);
    }

    #[test]
    fn test_dinner_to_prepare_runs_forward() {
        let plans = vec![
            DayPlan::new(3.0).with_meal(Meal::Dinner),
            DayPlan::new(3.0).with_meal(Meal::Dinner).with_hut(true),
            DayPlan::new(3.0),
            DayPlan::new(3.0).with_meal(Meal::Dinner),
        ];
        let estimate = estimate_trip(&trip(60.0, 0.0, plans)).unwrap();

        let running: Vec<u32> = estimate
            .days
            .iter()
            .map(|day| day.total_dinner_to_prepare)
            .collect();
        assert_eq!(running, vec![1, 1, 1, 2]);
        assert_eq!(estimate.summary.total_dinner_to_prepare, 2);
        assert_eq!(estimate.summary.dinner_count, 3);
    }

    #[test]
    fn test_luggage_counts_toward_effective_weight() {
        let light = estimate_trip(&trip(60.0, 0.0, vec![DayPlan::new(2.0)])).unwrap();
        let loaded = estimate_trip(&trip(50.0, 10.0, vec![DayPlan::new(2.0)])).unwrap();
        assert_eq!(light, loaded);
    }

    #[test]
    fn test_empty_trip() {
        let estimate = estimate_trip(&trip(60.0, 0.0, Vec::new())).unwrap();
        assert!(estimate.days.is_empty());
        assert_eq!(estimate.summary, TripSummary::default());
    }

    #[test]
    fn test_invalid_record_is_rejected() {
        let mut record = trip(60.0, 0.0, vec![DayPlan::new(2.0)]);
        record.trip.days = 2;
        let error = estimate_trip(&record).unwrap_err();
        assert_eq!(error, EstimationError::missing_field("course_2"));
    }
}
