// ABOUTME: Criterion benchmarks for the trip estimation engine
// ABOUTME: Measures single-day, multi-day, and serialized estimation throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for trip estimation.
//!
//! Measures the per-day estimation pass across trip lengths and the cost of
//! decoding a JSON trip record before estimating it.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trailfuel_core::models::{DayPlan, Meal, Profile, TripBasics, TripRecord};
use trailfuel_intelligence::{estimate_trip, Coefficients};

/// Trip lengths exercised by the multi-day benchmarks
const TRIP_LENGTHS: [usize; 4] = [1, 7, 30, 365];

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn generate_trip(days: usize) -> TripRecord {
    let course_details = (0..days)
        .map(|index| {
            let mut plan = DayPlan::new(2.0 + (index % 7) as f64 * 0.75)
                .with_hut(index % 4 == 0)
                .with_water_source(index % 3 == 0);
            for (offset, meal) in Meal::ALL.into_iter().enumerate() {
                if (index + offset) % 2 == 0 {
                    plan = plan.with_meal(meal);
                }
            }
            plan
        })
        .collect();

    TripRecord {
        profile: Profile {
            weight: 68.0,
            gender: "female".to_owned(),
            age_group: "40-49".to_owned(),
            muscle: "muscular".to_owned(),
        },
        trip: TripBasics {
            days: days as u32,
            luggage_weight: 11.5,
        },
        course_details,
    }
}

fn bench_coefficients(c: &mut Criterion) {
    let record = generate_trip(1);

    c.bench_function("coefficients_for_profile", |b| {
        b.iter(|| Coefficients::for_profile(black_box(&record.profile)));
    });
}

fn bench_multi_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_day_estimation");

    for days in TRIP_LENGTHS {
        let record = generate_trip(days);
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &record, |b, record| {
            b.iter(|| estimate_trip(black_box(record)));
        });
    }

    group.finish();
}

fn bench_json_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_estimation");

    for days in [7_usize, 30] {
        let body = serde_json::to_string(&generate_trip(days)).unwrap_or_default();
        group.bench_with_input(BenchmarkId::from_parameter(days), &body, |b, body| {
            b.iter(|| {
                let record: TripRecord = serde_json::from_str(black_box(body)).unwrap_or_default();
                let estimate = estimate_trip(&record).unwrap_or_default();
                serde_json::to_string(&estimate).unwrap_or_default()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_coefficients,
    bench_multi_day,
    bench_json_round
);
criterion_main!(benches);
