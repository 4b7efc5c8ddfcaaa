// ABOUTME: HTTP server assembly and lifecycle for the TrailFuel service
// ABOUTME: Builds the layered axum router and serves it with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server bootstrap
//!
//! [`build_router`] is what integration tests drive with `oneshot`; [`run`]
//! binds it to a socket for the binary.

use crate::constants::headers;
use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{EstimateRoutes, HealthRoutes, WizardRoutes};
use anyhow::{Context, Result};
use axum::{body::Body, http::Request, Router};
use http::HeaderName;
use std::future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Assemble every route group behind the shared middleware stack
///
/// Requests get an `x-request-id` (kept when the client sends one) which is
/// recorded on the request span and echoed on the response.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_id_header = HeaderName::from_static(headers::REQUEST_ID);

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(headers::REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(setup_cors(&resources.config));

    Router::new()
        .merge(WizardRoutes::routes(resources.clone()))
        .merge(EstimateRoutes::routes(resources.clone()))
        .merge(HealthRoutes::routes(resources))
        .layer(middleware)
}

/// Log every endpoint once at startup
fn display_available_endpoints(resources: &ServerResources) {
    let base = format!(
        "http://{}:{}",
        resources.config.host, resources.config.http_port
    );
    info!("=== Available Endpoints ===");
    info!("Wizard:");
    info!("  Profile:          GET/POST {base}/user");
    info!("  Trip Basics:      GET/POST {base}/home/step1");
    info!("  Course Details:   GET/POST {base}/home/step2");
    info!("  Summary:          GET      {base}/home/step3");
    info!("API:");
    info!("  Estimate:         GET/POST {base}/api/estimate");
    info!("Monitoring:");
    info!("  Health:           GET      {base}/health");
    info!("  Ready:            GET      {base}/ready");
    info!("=== End of Endpoint List ===");
}

/// Bind the listener and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = resources.config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;

    display_available_endpoints(&resources);
    info!("TrailFuel server listening on {addr}");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("TrailFuel server stopped");
    Ok(())
}

/// Resolve when the process is asked to stop
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
