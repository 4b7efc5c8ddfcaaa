// ABOUTME: HTML rendering for the wizard pages from compile-time embedded templates
// ABOUTME: Escapes every interpolated value and renders form errors as a 400 page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Views
//!
//! Templates are embedded with `include_str!` so rendering never touches the
//! filesystem. Placeholders use `{{NAME}}` and are filled with plain string
//! replacement. Stored session strings pass through `html_escape` before they
//! reach a page.

use crate::session::SessionData;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write as _;
use trailfuel_core::errors::EstimationError;
use trailfuel_core::models::{AgeGroup, DayPlan, Gender, Meal, MuscleType, TripEstimate};

const LAYOUT_TEMPLATE: &str = include_str!("../templates/layout.html");
const USER_TEMPLATE: &str = include_str!("../templates/user.html");
const STEP1_TEMPLATE: &str = include_str!("../templates/step1.html");
const STEP2_TEMPLATE: &str = include_str!("../templates/step2.html");
const STEP3_TEMPLATE: &str = include_str!("../templates/step3.html");
const ERROR_TEMPLATE: &str = include_str!("../templates/error.html");

/// Wrap page content in the shared layout
fn layout(title: &str, content: &str) -> String {
    LAYOUT_TEMPLATE
        .replace("{{TITLE}}", &encode_text(title))
        .replace("{{CONTENT}}", content)
}

/// Format a figure with one decimal place
fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// Radio inputs for one option group, checking the stored value when it matches
fn radio_options<'a>(
    name: &str,
    options: impl IntoIterator<Item = (&'a str, &'a str)>,
    selected: &str,
) -> String {
    let mut html = String::new();
    for (key, label) in options {
        let checked = if key == selected { " checked" } else { "" };
        let _ = write!(
            html,
            r#"<label><input type="radio" name="{name}" value="{}"{checked}> {}</label>"#,
            encode_double_quoted_attribute(key),
            encode_text(label),
        );
    }
    html
}

/// Hiker profile form, pre-filled from the session
///
/// Weight is left blank until one has been submitted.
#[must_use]
pub fn render_user_form(data: &SessionData) -> String {
    let profile = data.profile();
    let weight = data.weight.map(|w| w.to_string()).unwrap_or_default();
    let age_group =
        AgeGroup::parse(&profile.age_group).map_or(profile.age_group.as_str(), |group| group.key());

    let content = USER_TEMPLATE
        .replace(
            "{{GENDER_OPTIONS}}",
            &radio_options(
                "gender",
                Gender::ALL.iter().map(|g| (g.key(), g.label())),
                &profile.gender,
            ),
        )
        .replace(
            "{{AGE_GROUP_OPTIONS}}",
            &radio_options(
                "age_group",
                AgeGroup::ALL.iter().map(|a| (a.key(), a.label())),
                age_group,
            ),
        )
        .replace(
            "{{MUSCLE_OPTIONS}}",
            &radio_options(
                "muscle",
                MuscleType::ALL.iter().map(|m| (m.key(), m.label())),
                &profile.muscle,
            ),
        )
        .replace("{{WEIGHT}}", &encode_double_quoted_attribute(&weight));

    layout("Hiker profile", &content)
}

/// Trip basics form
#[must_use]
pub fn render_step1(data: &SessionData, max_days: u32) -> String {
    let record = data.to_record();
    let days = data.days.map(|d| d.to_string()).unwrap_or_default();
    let luggage = data
        .luggage_weight
        .map(|l| l.to_string())
        .unwrap_or_default();

    let content = STEP1_TEMPLATE
        .replace("{{MAX_DAYS}}", &max_days.to_string())
        .replace("{{DAYS}}", &days)
        .replace("{{LUGGAGE}}", &luggage)
        .replace("{{WEIGHT}}", &record.profile.weight.to_string());

    layout("Trip basics", &content)
}

/// One fieldset for a course day, pre-filled from a stored plan
fn day_fieldset(day: u32, plan: Option<&DayPlan>) -> String {
    let course_time = plan.map(|p| p.course_time.to_string()).unwrap_or_default();
    let checked = |on: bool| if on { " checked" } else { "" };

    let mut meals = String::new();
    for meal in Meal::ALL {
        let _ = write!(
            meals,
            r#"<label><input type="checkbox" name="meals_{day}" value="{}"{}> {}</label>"#,
            meal.key(),
            checked(plan.is_some_and(|p| p.has_meal(meal))),
            meal.label(),
        );
    }

    format!(
        r#"<fieldset>
        <legend>Day {day}</legend>
        <label>Course time (hours)
            <input type="number" name="course_{day}" min="0" step="0.1" value="{course_time}" required>
        </label>
        <div>{meals}</div>
        <label><input type="checkbox" name="hut_{day}"{hut}> Staying in a hut</label>
        <label><input type="checkbox" name="water_{day}"{water}> Water source available</label>
    </fieldset>"#,
        hut = checked(plan.is_some_and(|p| p.hut)),
        water = checked(plan.is_some_and(|p| p.water_source)),
    )
}

/// Per-day course form with one fieldset per trip day
#[must_use]
pub fn render_step2(data: &SessionData) -> String {
    let days = data.days_or_default();
    let stored = data.course_details.as_deref().unwrap_or_default();

    let fieldsets: Vec<String> = (1..=days)
        .map(|day| day_fieldset(day, stored.get(day as usize - 1)))
        .collect();

    let content = STEP2_TEMPLATE.replace("{{DAY_FIELDSETS}}", &fieldsets.join("\n    "));
    layout("Course details", &content)
}

/// Estimation summary table
#[must_use]
pub fn render_step3(estimate: &TripEstimate) -> String {
    let yes_no = |on: bool| if on { "Yes" } else { "No" };

    let mut rows = String::new();
    for day in &estimate.days {
        let meals: Vec<&str> = day.meals.iter().map(|meal| meal.label()).collect();
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n        ",
            day.day,
            day.course_time.to_string(),
            one_decimal(day.intake_target),
            one_decimal(day.meal_kcal),
            one_decimal(day.intake_needed),
            one_decimal(day.required_water),
            one_decimal(day.water_needed),
            if meals.is_empty() {
                "-".to_owned()
            } else {
                meals.join(", ")
            },
            yes_no(day.hut),
            yes_no(day.water_source),
            day.total_dinner_to_prepare,
        );
    }

    let summary = &estimate.summary;
    let content = STEP3_TEMPLATE
        .replace("{{DAY_ROWS}}", rows.trim_end())
        .replace("{{TOTAL_MEAL_KCAL}}", &one_decimal(summary.total_meal_kcal))
        .replace(
            "{{TOTAL_INTAKE_NEEDED}}",
            &one_decimal(summary.total_intake_needed),
        )
        .replace(
            "{{TOTAL_WATER_NEEDED}}",
            &one_decimal(summary.total_water_needed),
        )
        .replace("{{BREAKFAST_COUNT}}", &summary.breakfast_count.to_string())
        .replace("{{LUNCH_COUNT}}", &summary.lunch_count.to_string())
        .replace("{{DINNER_COUNT}}", &summary.dinner_count.to_string())
        .replace(
            "{{TOTAL_DINNER_TO_PREPARE}}",
            &summary.total_dinner_to_prepare.to_string(),
        );

    layout("Trip provisions", &content)
}

/// Error page pointing back at the form that was rejected
#[must_use]
pub fn render_error(message: &str, back: &str) -> String {
    let content = ERROR_TEMPLATE
        .replace("{{BACK}}", &encode_double_quoted_attribute(back))
        .replace("{{MESSAGE}}", &encode_text(message));
    layout("Please check your input", &content)
}

/// A rejected HTML form submission
///
/// Renders as a 400 error page naming the offending field.
#[derive(Debug, Clone)]
pub struct FormRejection {
    /// Why the submission was rejected
    pub error: EstimationError,
    /// Form page to return to
    pub back: &'static str,
}

impl FormRejection {
    /// Reject a submission made from the form at `back`
    #[must_use]
    pub const fn new(error: EstimationError, back: &'static str) -> Self {
        Self { error, back }
    }
}

impl IntoResponse for FormRejection {
    fn into_response(self) -> Response {
        let body = render_error(&self.error.to_string(), self.back);
        (StatusCode::BAD_REQUEST, Html(body)).into_response()
    }
}
