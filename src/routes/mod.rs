// ABOUTME: Route module organization for TrailFuel HTTP endpoints
// ABOUTME: Groups the wizard pages, the JSON estimation API, and health probes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the TrailFuel server
//!
//! Each domain module exposes a `routes()` constructor returning an axum
//! [`Router`](axum::Router) with its state already attached, so the server can
//! merge them directly.

/// JSON estimation API
pub mod estimate;
/// Health check and readiness routes
pub mod health;
/// Multi-step HTML wizard
pub mod wizard;

pub use estimate::EstimateRoutes;
pub use health::HealthRoutes;
pub use wizard::WizardRoutes;

use crate::resources::ServerResources;
use crate::session::{session_cookie, SessionContext};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

/// Attach the refreshed session cookie to a response
fn with_session_cookie(
    jar: CookieJar,
    session: &SessionContext,
    resources: &ServerResources,
    body: impl IntoResponse,
) -> Response {
    let jar = jar.add(session_cookie(session.id, &resources.config));
    (jar, body).into_response()
}
