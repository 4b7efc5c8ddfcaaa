// ABOUTME: Server-wide constants for service identity, routes, headers, and session defaults
// ABOUTME: Environment-independent values shared by configuration, routing, and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Values that never change at runtime. Anything an operator may tune lives in
//! [`crate::config::environment::ServerConfig`] instead.

/// Service names used in structured logs
pub mod service_names {
    /// Main HTTP service
    pub const TRAILFUEL_SERVER: &str = "trailfuel-server";
}

/// Default network settings
pub mod network {
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
}

/// Session defaults
pub mod session {
    /// Name of the session cookie
    pub const COOKIE_NAME: &str = "trailfuel_session";
    /// Inactivity window after which a session expires
    pub const DEFAULT_TTL_MINUTES: u64 = 30;
    /// Maximum number of live sessions held in memory
    pub const DEFAULT_MAX_ENTRIES: usize = 10_000;
    /// Interval between background sweeps of expired sessions
    pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60;
}

/// Trip limits
pub mod limits {
    /// Longest trip the course form will render
    pub const DEFAULT_MAX_TRIP_DAYS: u32 = 30;
}

/// Header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}

/// Route paths for the wizard and API
pub mod paths {
    /// Landing page
    pub const ROOT: &str = "/";
    /// Hiker profile form
    pub const USER: &str = "/user";
    /// Trip basics form
    pub const STEP1: &str = "/home/step1";
    /// Per-day course form
    pub const STEP2: &str = "/home/step2";
    /// Estimation summary
    pub const STEP3: &str = "/home/step3";
    /// JSON estimation endpoint
    pub const API_ESTIMATE: &str = "/api/estimate";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe
    pub const READY: &str = "/ready";
}
