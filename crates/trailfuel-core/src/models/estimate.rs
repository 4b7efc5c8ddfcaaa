// ABOUTME: Estimation output models for per-day breakdowns and trip totals
// ABOUTME: DayResult, TripSummary, and TripEstimate returned by the estimation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::trip::Meal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Computed figures for one trip day
///
/// Energy figures are kcal and water figures are millilitres, all rounded to one
/// decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayResult {
    /// 1-based day index
    pub day: usize,
    /// Hours of hiking exertion
    pub course_time: f64,
    /// Energy the hiker should take in
    pub intake_target: f64,
    /// Energy covered by planned meals
    pub meal_kcal: f64,
    /// Energy still to be covered by snacks
    pub intake_needed: f64,
    /// Water lost over the day, before considering water sources
    pub required_water: f64,
    /// Water to carry after the previous day's water source is accounted for
    pub water_needed: f64,
    /// Meals eaten that day
    pub meals: BTreeSet<Meal>,
    /// Overnight lodging is a hut
    pub hut: bool,
    /// A natural water source is available that day
    pub water_source: bool,
    /// Running count of self-prepared dinners up to and including this day
    pub total_dinner_to_prepare: u32,
}

/// Trip-wide totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Sum of meal energy (kcal)
    pub total_meal_kcal: f64,
    /// Sum of energy still needed (kcal)
    pub total_intake_needed: f64,
    /// Sum of water to carry (ml)
    pub total_water_needed: f64,
    /// Days with breakfast
    pub breakfast_count: u32,
    /// Days with lunch
    pub lunch_count: u32,
    /// Days with dinner
    pub dinner_count: u32,
    /// Dinners eaten away from a hut
    pub total_dinner_to_prepare: u32,
}

/// Full estimation result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripEstimate {
    /// Per-day breakdown in day order
    pub days: Vec<DayResult>,
    /// Trip totals
    pub summary: TripSummary,
}
