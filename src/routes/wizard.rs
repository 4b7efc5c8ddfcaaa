// ABOUTME: Multi-step HTML wizard collecting profile, trip basics, and per-day course plans
// ABOUTME: Stores each step in the visitor's session and renders the estimation summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Wizard routes
//!
//! The flow is profile → trip basics → course details → summary. Each POST
//! validates the whole form before touching the session and answers with a
//! 303 redirect to the next step, or a 400 error page naming the bad field.

use super::with_session_cookie;
use crate::constants::paths;
use crate::forms::{self, FormFields};
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use crate::session::SessionContext;
use crate::views::{self, FormRejection};
use axum::{
    extract::State,
    response::{Html, Redirect, Response},
    routing::get,
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use trailfuel_core::constants::defaults;
use trailfuel_core::errors::EstimationError;
use trailfuel_intelligence::estimate_trip;

type FormPairs = Form<Vec<(String, String)>>;

/// Wizard routes
pub struct WizardRoutes;

impl WizardRoutes {
    /// Create all wizard routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(paths::ROOT, get(Self::handle_index))
            .route(
                paths::USER,
                get(Self::handle_user_form).post(Self::handle_user_submit),
            )
            .route(
                paths::STEP1,
                get(Self::handle_step1_form).post(Self::handle_step1_submit),
            )
            .route(
                paths::STEP2,
                get(Self::handle_step2_form).post(Self::handle_step2_submit),
            )
            .route(paths::STEP3, get(Self::handle_step3_summary))
            .with_state(resources)
    }

    async fn handle_index() -> Redirect {
        Redirect::to(paths::STEP1)
    }

    /// Log and render a rejected form
    fn reject(
        jar: CookieJar,
        session: &SessionContext,
        resources: &ServerResources,
        step: &'static str,
        error: EstimationError,
    ) -> Response {
        AppLogger::log_step_rejected(
            &session.id.to_string(),
            step,
            error.field(),
            &error.to_string(),
        );
        with_session_cookie(jar, session, resources, FormRejection::new(error, step))
    }

    async fn handle_user_form(
        State(resources): State<Arc<ServerResources>>,
        jar: CookieJar,
    ) -> Response {
        let session = SessionContext::resolve(&jar, &resources.sessions).await;
        let page = views::render_user_form(&session.data);
        with_session_cookie(jar, &session, &resources, Html(page))
    }

    async fn handle_user_submit(
        State(resources): State<Arc<ServerResources>>,
        jar: CookieJar,
        Form(pairs): FormPairs,
    ) -> Response {
        let session = SessionContext::resolve(&jar, &resources.sessions).await;

        let profile = match forms::parse_profile(&FormFields::new(pairs)) {
            Ok(profile) => profile,
            Err(error) => return Self::reject(jar, &session, &resources, paths::USER, error),
        };

        resources
            .sessions
            .update(session.id, move |data| {
                data.weight = Some(profile.weight);
                data.gender = Some(profile.gender);
                data.age_group = Some(profile.age_group);
                data.muscle = Some(profile.muscle);
            })
            .await;
        AppLogger::log_step_saved(&session.id.to_string(), paths::USER);

        with_session_cookie(jar, &session, &resources, Redirect::to(paths::STEP1))
    }

    async fn handle_step1_form(
        State(resources): State<Arc<ServerResources>>,
        jar: CookieJar,
    ) -> Response {
        let session = SessionContext::resolve(&jar, &resources.sessions).await;

        let data = resources
            .sessions
            .update(session.id, |data| {
                data.weight.get_or_insert(defaults::WEIGHT_KG);
            })
            .await;

        let page = views::render_step1(&data, resources.config.max_trip_days);
        with_session_cookie(jar, &session, &resources, Html(page))
    }

    async fn handle_step1_submit(
        State(resources): State<Arc<ServerResources>>,
        jar: CookieJar,
        Form(pairs): FormPairs,
    ) -> Response {
        let session = SessionContext::resolve(&jar, &resources.sessions).await;

        let basics = match forms::parse_trip_basics(
            &FormFields::new(pairs),
            resources.config.max_trip_days,
        ) {
            Ok(basics) => basics,
            Err(error) => return Self::reject(jar, &session, &resources, paths::STEP1, error),
        };

        resources
            .sessions
            .update(session.id, move |data| {
                data.weight.get_or_insert(defaults::WEIGHT_KG);
                data.days = Some(basics.days);
                data.luggage_weight = Some(basics.luggage_weight);
                // A new day count invalidates the stored course
                data.course_details = None;
            })
            .await;
        AppLogger::log_step_saved(&session.id.to_string(), paths::STEP1);

        with_session_cookie(jar, &session, &resources, Redirect::to(paths::STEP2))
    }

    async fn handle_step2_form(
        State(resources): State<Arc<ServerResources>>,
        jar: CookieJar,
    ) -> Response {
        let session = SessionContext::resolve(&jar, &resources.sessions).await;
        let page = views::render_step2(&session.data);
        with_session_cookie(jar, &session, &resources, Html(page))
    }

    async fn handle_step2_submit(
        State(resources): State<Arc<ServerResources>>,
        jar: CookieJar,
        Form(pairs): FormPairs,
    ) -> Response {
        let session = SessionContext::resolve(&jar, &resources.sessions).await;
        let days = session.data.days_or_default();

        let plans = match forms::parse_course_details(&FormFields::new(pairs), days) {
            Ok(plans) => plans,
            Err(error) => return Self::reject(jar, &session, &resources, paths::STEP2, error),
        };

        resources
            .sessions
            .update(session.id, move |data| {
                data.days = Some(days);
                data.course_details = Some(plans);
            })
            .await;
        AppLogger::log_step_saved(&session.id.to_string(), paths::STEP2);

        with_session_cookie(jar, &session, &resources, Redirect::to(paths::STEP3))
    }

    async fn handle_step3_summary(
        State(resources): State<Arc<ServerResources>>,
        jar: CookieJar,
    ) -> Response {
        let session = SessionContext::resolve(&jar, &resources.sessions).await;

        // No course details yet summarizes an empty plan
        let mut record = session.data.to_record();
        if !session.data.has_course_details() {
            record.trip.days = 0;
        }

        match estimate_trip(&record) {
            Ok(estimate) => {
                AppLogger::log_estimation(
                    paths::STEP3,
                    estimate.days.len(),
                    estimate.summary.total_intake_needed,
                    estimate.summary.total_water_needed,
                );
                let page = views::render_step3(&estimate);
                with_session_cookie(jar, &session, &resources, Html(page))
            }
            Err(error) => Self::reject(jar, &session, &resources, paths::STEP2, error),
        }
    }
}
