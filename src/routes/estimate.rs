// ABOUTME: JSON estimation API for the current session or a caller-supplied trip record
// ABOUTME: Errors use the standard ErrorResponse envelope tagged with the request id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Estimation API routes
//!
//! `GET /api/estimate` estimates the trip stored in the caller's session.
//! `POST /api/estimate` estimates a [`TripRecord`] body and touches no session.

use super::with_session_cookie;
use crate::constants::{headers, paths};
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use crate::session::SessionContext;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use trailfuel_core::errors::{AppError, AppResult};
use trailfuel_core::models::{TripEstimate, TripRecord};
use trailfuel_intelligence::estimate_trip;

/// Estimation API routes
pub struct EstimateRoutes;

impl EstimateRoutes {
    /// Create all estimation API routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                paths::API_ESTIMATE,
                get(Self::handle_session_estimate).post(Self::handle_record_estimate),
            )
            .with_state(resources)
    }

    fn request_id(request_headers: &HeaderMap) -> Option<String> {
        request_headers
            .get(headers::REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    /// Run the engine, tagging failures with the request id
    fn estimate(
        record: &TripRecord,
        source: &str,
        request_id: Option<String>,
    ) -> AppResult<TripEstimate> {
        let estimate = estimate_trip(record).map_err(|error| {
            let app_error = AppError::from(error);
            match request_id {
                Some(id) => app_error.with_request_id(id),
                None => app_error,
            }
        })?;

        AppLogger::log_estimation(
            source,
            estimate.days.len(),
            estimate.summary.total_intake_needed,
            estimate.summary.total_water_needed,
        );
        Ok(estimate)
    }

    async fn handle_session_estimate(
        State(resources): State<Arc<ServerResources>>,
        request_headers: HeaderMap,
        jar: CookieJar,
    ) -> Response {
        let session = SessionContext::resolve(&jar, &resources.sessions).await;
        let result = Self::estimate(
            &session.data.to_record(),
            "session",
            Self::request_id(&request_headers),
        );

        match result {
            Ok(estimate) => with_session_cookie(jar, &session, &resources, Json(estimate)),
            Err(error) => with_session_cookie(jar, &session, &resources, error),
        }
    }

    async fn handle_record_estimate(
        request_headers: HeaderMap,
        body: Result<Json<TripRecord>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request_id = Self::request_id(&request_headers);

        let Json(record) = body.map_err(|rejection| {
            let error = AppError::invalid_input(rejection.body_text());
            match &request_id {
                Some(id) => error.with_request_id(id.clone()),
                None => error,
            }
        })?;

        let estimate = Self::estimate(&record, "request", request_id)?;
        Ok(Json(estimate).into_response())
    }
}
