// ABOUTME: Common test utilities shared by integration tests
// ABOUTME: Quiet logging setup and router/resource factories with test configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code)]

use std::sync::{Arc, Once};
use std::time::Duration;
use trailfuel_server::config::{Environment, ServerConfig};
use trailfuel_server::resources::ServerResources;
use trailfuel_server::server::build_router;
use trailfuel_server::session::SessionConfig;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Server configuration for tests: no background cleanup, short trip limit
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        session: SessionConfig {
            ttl: Duration::from_secs(30 * 60),
            max_entries: 100,
            cleanup_interval: Duration::from_secs(60),
            enable_background_cleanup: false,
        },
        max_trip_days: 10,
        ..ServerConfig::default()
    }
}

/// Shared resources built from [`test_config`]
pub fn test_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(test_config()))
}

/// Full router over fresh resources
pub fn test_router() -> axum::Router {
    build_router(test_resources())
}
