// ABOUTME: Session cookie construction and per-request session resolution
// ABOUTME: Maps the trailfuel_session cookie to stored session data or a fresh session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{SessionData, SessionId, SessionStore};
use crate::config::ServerConfig;
use crate::constants::session::COOKIE_NAME;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

/// The session a request operates on
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Session identifier to write back in the cookie
    pub id: SessionId,
    /// Snapshot of the stored data at resolution time
    pub data: SessionData,
    /// No live session matched the request cookie
    pub is_new: bool,
}

impl SessionContext {
    /// Resolve the request's session from its cookie
    ///
    /// A missing, garbled, unknown, or expired cookie yields a fresh session id
    /// with empty data. Nothing is written to the store.
    pub async fn resolve(jar: &CookieJar, store: &SessionStore) -> Self {
        let cookie_id = jar
            .get(COOKIE_NAME)
            .and_then(|cookie| SessionId::parse(cookie.value()));

        if let Some(id) = cookie_id {
            if let Some(data) = store.load(id).await {
                return Self {
                    id,
                    data,
                    is_new: false,
                };
            }
        }

        let id = SessionId::generate();
        tracing::debug!(session_id = %id, "Starting new session");
        Self {
            id,
            data: SessionData::default(),
            is_new: true,
        }
    }
}

/// Build the session cookie for a response
#[must_use]
pub fn session_cookie(id: SessionId, config: &ServerConfig) -> Cookie<'static> {
    let max_age_secs = i64::try_from(config.session.ttl.as_secs()).unwrap_or(i64::MAX);

    Cookie::build((COOKIE_NAME, id.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(config.cookie_secure)
        .max_age(time::Duration::seconds(max_age_secs))
        .build()
}
