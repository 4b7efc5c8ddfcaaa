// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses network, session, trip-limit, and CORS settings from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{limits, network, session};
use crate::session::SessionConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::info;

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Session store settings
    pub session: SessionConfig,
    /// Longest trip accepted by the trip basics form
    pub max_trip_days: u32,
    /// CORS settings
    pub cors: CorsConfig,
    /// Mark the session cookie `Secure`
    pub cookie_secure: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: network::DEFAULT_HOST.to_owned(),
            http_port: network::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            session: SessionConfig::default(),
            max_trip_days: limits::DEFAULT_MAX_TRIP_DAYS,
            cors: CorsConfig::default(),
            cookie_secure: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting configuration fails [`ServerConfig::validate`]
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let ttl_minutes: u64 = env_var_or(
            "SESSION_TTL_MINUTES",
            &session::DEFAULT_TTL_MINUTES.to_string(),
        )
        .parse()
        .context("Invalid SESSION_TTL_MINUTES value")?;
        let cleanup_secs: u64 = env_var_or(
            "SESSION_CLEANUP_INTERVAL_SECS",
            &session::DEFAULT_CLEANUP_INTERVAL_SECS.to_string(),
        )
        .parse()
        .context("Invalid SESSION_CLEANUP_INTERVAL_SECS value")?;

        let config = Self {
            host: env_var_or("HOST", network::DEFAULT_HOST),
            http_port: env_var_or("HTTP_PORT", &network::DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            session: SessionConfig {
                ttl: Duration::from_secs(ttl_minutes.saturating_mul(60)),
                max_entries: env_var_or(
                    "SESSION_MAX_ENTRIES",
                    &session::DEFAULT_MAX_ENTRIES.to_string(),
                )
                .parse()
                .context("Invalid SESSION_MAX_ENTRIES value")?,
                cleanup_interval: Duration::from_secs(cleanup_secs),
                enable_background_cleanup: true,
            },
            max_trip_days: env_var_or(
                "MAX_TRIP_DAYS",
                &limits::DEFAULT_MAX_TRIP_DAYS.to_string(),
            )
            .parse()
            .context("Invalid MAX_TRIP_DAYS value")?,
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            cookie_secure: env_var_or("COOKIE_SECURE", "false")
                .parse()
                .context("Invalid COOKIE_SECURE value")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any limit is zero or the bind address is unusable
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must be between 1 and 65535"));
        }
        if self.host.parse::<IpAddr>().is_err() {
            return Err(anyhow::anyhow!(
                "HOST must be an IP address, got '{}'",
                self.host
            ));
        }
        if self.session.ttl.is_zero() {
            return Err(anyhow::anyhow!("SESSION_TTL_MINUTES must be at least 1"));
        }
        if self.session.max_entries == 0 {
            return Err(anyhow::anyhow!("SESSION_MAX_ENTRIES must be at least 1"));
        }
        if self.session.cleanup_interval.is_zero() {
            return Err(anyhow::anyhow!(
                "SESSION_CLEANUP_INTERVAL_SECS must be at least 1"
            ));
        }
        if self.max_trip_days == 0 {
            return Err(anyhow::anyhow!("MAX_TRIP_DAYS must be at least 1"));
        }
        Ok(())
    }

    /// Socket address the HTTP listener binds to
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an IP address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid HOST value '{}'", self.host))?;
        Ok(SocketAddr::new(ip, self.http_port))
    }

    /// Human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "TrailFuel Server Configuration:\n\
             - Bind Address: {}:{}\n\
             - Environment: {}\n\
             - Session TTL: {} minutes\n\
             - Session Capacity: {}\n\
             - Session Cleanup: every {}s\n\
             - Max Trip Days: {}\n\
             - CORS Origins: {}\n\
             - Secure Cookies: {}",
            self.host,
            self.http_port,
            self.environment,
            self.session.ttl.as_secs() / 60,
            self.session.max_entries,
            self.session.cleanup_interval.as_secs(),
            self.max_trip_days,
            self.cors.allowed_origins,
            if self.cookie_secure {
                "Enabled"
            } else {
                "Disabled"
            },
        )
    }
}

/// Read an environment variable, substituting a default when unset
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
