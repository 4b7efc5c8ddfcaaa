// ABOUTME: Shared server state handed to every route handler
// ABOUTME: Bundles the immutable configuration with the session store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::session::SessionStore;
use std::sync::Arc;

/// Dependencies shared across handlers, wrapped in an `Arc` by the router
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Wizard session store
    pub sessions: SessionStore,
}

impl ServerResources {
    /// Build resources, creating the session store from the configuration
    ///
    /// Must be called inside a tokio runtime when background cleanup is enabled.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let sessions = SessionStore::new(&config.session);
        Self {
            config: Arc::new(config),
            sessions,
        }
    }
}
