// ABOUTME: Per-visitor wizard state keyed by an opaque session identifier
// ABOUTME: Session data, configuration, and conversion into an estimation record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Module
//!
//! Each wizard step writes a few fields into [`SessionData`]. The summary step
//! converts the accumulated fields into a [`TripRecord`] with
//! [`SessionData::to_record`], which is the only place defaults are applied.

/// Session cookie handling
pub mod cookie;
/// In-memory LRU session store with sliding expiry
pub mod memory;

pub use cookie::{session_cookie, SessionContext};
pub use memory::SessionStore;

use crate::constants::session;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use trailfuel_core::constants::defaults;
use trailfuel_core::models::{DayPlan, Profile, TripBasics, TripRecord};
use uuid::Uuid;

/// Opaque session identifier carried in the session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a cookie value, rejecting anything that is not a UUID
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields collected across the wizard steps
///
/// Every field is optional; absent fields take their defaults in [`Self::to_record`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    /// Body weight (kg)
    pub weight: Option<f64>,
    /// Gender key as submitted
    pub gender: Option<String>,
    /// Age group key as submitted
    pub age_group: Option<String>,
    /// Muscle type key as submitted
    pub muscle: Option<String>,
    /// Number of trip days
    pub days: Option<u32>,
    /// Luggage weight (kg)
    pub luggage_weight: Option<f64>,
    /// Per-day course plans, written as a whole by the course form
    pub course_details: Option<Vec<DayPlan>>,
}

impl SessionData {
    /// Profile with defaults applied to unset fields
    #[must_use]
    pub fn profile(&self) -> Profile {
        Profile {
            weight: self.weight.unwrap_or(defaults::WEIGHT_KG),
            gender: self
                .gender
                .clone()
                .unwrap_or_else(|| defaults::GENDER.to_owned()),
            age_group: self
                .age_group
                .clone()
                .unwrap_or_else(|| defaults::AGE_GROUP.to_owned()),
            muscle: self
                .muscle
                .clone()
                .unwrap_or_else(|| defaults::MUSCLE.to_owned()),
        }
    }

    /// Trip day count, defaulting to one day
    #[must_use]
    pub fn days_or_default(&self) -> u32 {
        self.days.unwrap_or(defaults::TRIP_DAYS)
    }

    /// Whether course details have been submitted
    #[must_use]
    pub const fn has_course_details(&self) -> bool {
        self.course_details.is_some()
    }

    /// Snapshot the session as an estimation record
    #[must_use]
    pub fn to_record(&self) -> TripRecord {
        TripRecord {
            profile: self.profile(),
            trip: TripBasics {
                days: self.days_or_default(),
                luggage_weight: self
                    .luggage_weight
                    .unwrap_or(defaults::LUGGAGE_WEIGHT_KG),
            },
            course_details: self.course_details.clone().unwrap_or_default(),
        }
    }
}

/// Session store configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Sliding inactivity window
    pub ttl: Duration,
    /// LRU capacity
    pub max_entries: usize,
    /// Interval between background sweeps
    pub cleanup_interval: Duration,
    /// Spawn the background sweep task
    pub enable_background_cleanup: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(session::DEFAULT_TTL_MINUTES * 60),
            max_entries: session::DEFAULT_MAX_ENTRIES,
            cleanup_interval: Duration::from_secs(session::DEFAULT_CLEANUP_INTERVAL_SECS),
            enable_background_cleanup: false,
        }
    }
}
