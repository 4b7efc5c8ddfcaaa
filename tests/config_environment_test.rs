// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment parsing, defaults, overrides, and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use std::time::Duration;
use trailfuel_server::config::{Environment, ServerConfig};

const CONFIG_VARS: [&str; 10] = [
    "HOST",
    "HTTP_PORT",
    "ENVIRONMENT",
    "SESSION_TTL_MINUTES",
    "SESSION_MAX_ENTRIES",
    "SESSION_CLEANUP_INTERVAL_SECS",
    "MAX_TRIP_DAYS",
    "CORS_ALLOWED_ORIGINS",
    "COOKIE_SECURE",
    "RUST_LOG",
];

fn clear_config_env() {
    for key in CONFIG_VARS {
        env::remove_var(key);
    }
}

// ============================================================================
// Environment Parsing
// ============================================================================

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("invalid"),
        Environment::Development
    ); // Default fallback
}

#[test]
fn test_environment_display_and_production_flag() {
    assert_eq!(Environment::Production.to_string(), "production");
    assert_eq!(Environment::Testing.to_string(), "testing");
    assert!(Environment::Production.is_production());
    assert!(!Environment::Development.is_production());
}

// ============================================================================
// Loading From Environment
// ============================================================================

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.session.ttl, Duration::from_secs(30 * 60));
    assert_eq!(config.session.max_entries, 10_000);
    assert_eq!(config.session.cleanup_interval, Duration::from_secs(60));
    assert!(config.session.enable_background_cleanup);
    assert_eq!(config.max_trip_days, 30);
    assert_eq!(config.cors.allowed_origins, "*");
    assert!(!config.cookie_secure);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_config_env();
    env::set_var("HOST", "0.0.0.0");
    env::set_var("HTTP_PORT", "9090");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SESSION_TTL_MINUTES", "5");
    env::set_var("SESSION_MAX_ENTRIES", "250");
    env::set_var("MAX_TRIP_DAYS", "14");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://trail.example");
    env::set_var("COOKIE_SECURE", "true");

    let config = ServerConfig::from_env().unwrap();
    clear_config_env();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.http_port, 9090);
    assert!(config.environment.is_production());
    assert_eq!(config.session.ttl, Duration::from_secs(5 * 60));
    assert_eq!(config.session.max_entries, 250);
    assert_eq!(config.max_trip_days, 14);
    assert_eq!(config.cors.allowed_origins, "https://trail.example");
    assert!(config.cookie_secure);
}

#[test]
#[serial]
fn test_from_env_rejects_unparseable_values() {
    clear_config_env();

    env::set_var("HTTP_PORT", "not-a-port");
    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("HTTP_PORT"));
    env::remove_var("HTTP_PORT");

    env::set_var("MAX_TRIP_DAYS", "-3");
    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("MAX_TRIP_DAYS"));
    env::remove_var("MAX_TRIP_DAYS");

    env::set_var("COOKIE_SECURE", "yes");
    assert!(ServerConfig::from_env().is_err());
    clear_config_env();
}

#[test]
#[serial]
fn test_from_env_rejects_zero_limits() {
    clear_config_env();

    env::set_var("SESSION_TTL_MINUTES", "0");
    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("SESSION_TTL_MINUTES"));
    clear_config_env();

    env::set_var("MAX_TRIP_DAYS", "0");
    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("MAX_TRIP_DAYS"));
    clear_config_env();
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_default_config_is_valid() {
    let config = ServerConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
}

#[test]
fn test_validate_rejects_bad_values() {
    let config = ServerConfig {
        http_port: 0,
        ..ServerConfig::default()
    };
    assert!(config.validate().is_err());

    let config = ServerConfig {
        host: "localhost".to_owned(),
        ..ServerConfig::default()
    };
    assert!(config.validate().is_err());
    assert!(config.socket_addr().is_err());

    let mut config = ServerConfig::default();
    config.session.max_entries = 0;
    assert!(config.validate().is_err());

    let mut config = ServerConfig::default();
    config.session.cleanup_interval = Duration::ZERO;
    assert!(config.validate().is_err());
}

#[test]
fn test_summary_lists_key_settings() {
    let config = ServerConfig {
        cookie_secure: true,
        max_trip_days: 12,
        ..ServerConfig::default()
    };
    let summary = config.summary();

    assert!(summary.contains("127.0.0.1:8080"));
    assert!(summary.contains("Session TTL: 30 minutes"));
    assert!(summary.contains("Max Trip Days: 12"));
    assert!(summary.contains("Secure Cookies: Enabled"));
}
