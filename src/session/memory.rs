// ABOUTME: In-memory session store with LRU eviction and sliding TTL
// ABOUTME: Includes background cleanup task for expired sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{SessionConfig, SessionData, SessionId};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, RwLock};

type SessionMap = LruCache<SessionId, SessionEntry>;

/// Stored session with its expiry deadline
#[derive(Debug, Clone)]
struct SessionEntry {
    data: SessionData,
    expires_at: Instant,
}

impl SessionEntry {
    fn new(data: SessionData, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn touch(&mut self, ttl: Duration) {
        self.expires_at = Instant::now() + ttl;
    }
}

/// Session store with LRU eviction and background cleanup
///
/// Uses `Arc<RwLock<LruCache>>` so clones share one map with the cleanup task.
/// Every successful read or write pushes the entry's expiry out by the full TTL.
/// Concurrent writes to the same session are last-write-wins.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<RwLock<SessionMap>>,
    ttl: Duration,
    shutdown_tx: Option<Arc<mpsc::Sender<()>>>,
}

impl SessionStore {
    /// Fallback capacity when config specifies zero entries
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a store, spawning the cleanup task when enabled
    ///
    /// The cleanup task requires a running tokio runtime.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        let store = Arc::new(RwLock::new(LruCache::new(capacity)));

        let shutdown_tx = if config.enable_background_cleanup {
            let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
            let store_clone = store.clone();
            let cleanup_interval = config.cleanup_interval;

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(cleanup_interval);
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            Self::purge_expired(&store_clone).await;
                        }
                        _ = shutdown_rx.recv() => {
                            tracing::debug!("Session cleanup task received shutdown signal");
                            break;
                        }
                    }
                }
            });

            Some(Arc::new(shutdown_tx))
        } else {
            None
        };

        Self {
            store,
            ttl: config.ttl,
            shutdown_tx,
        }
    }

    /// Sliding inactivity window applied to every session
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Load a live session, refreshing its expiry
    ///
    /// Expired sessions are evicted and reported as absent.
    pub async fn load(&self, id: SessionId) -> Option<SessionData> {
        let mut store = self.store.write().await;

        let entry = store.get_mut(&id)?;
        if entry.is_expired() {
            store.pop(&id);
            drop(store);
            tracing::debug!(session_id = %id, "Session expired");
            return None;
        }

        entry.touch(self.ttl);
        let data = entry.data.clone();
        drop(store);
        Some(data)
    }

    /// Store a session, replacing any previous data for the id
    pub async fn save(&self, id: SessionId, data: SessionData) {
        self.store
            .write()
            .await
            .push(id, SessionEntry::new(data, self.ttl));
    }

    /// Apply a change to a session under one lock and return the result
    ///
    /// An absent or expired session starts from [`SessionData::default`].
    pub async fn update<F>(&self, id: SessionId, apply: F) -> SessionData
    where
        F: FnOnce(&mut SessionData),
    {
        let mut store = self.store.write().await;

        let mut data = match store.pop(&id) {
            Some(entry) if !entry.is_expired() => entry.data,
            _ => SessionData::default(),
        };
        apply(&mut data);
        store.push(id, SessionEntry::new(data.clone(), self.ttl));
        drop(store);

        data
    }

    /// Remove a session, returning whether it existed
    pub async fn remove(&self, id: SessionId) -> bool {
        self.store.write().await.pop(&id).is_some()
    }

    /// Number of live (unexpired) sessions
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        let live = store.iter().filter(|(_, entry)| !entry.is_expired()).count();
        drop(store);
        live
    }

    /// Whether no live sessions are held
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Evict every expired session, returning how many were removed
    pub async fn cleanup_expired(&self) -> usize {
        Self::purge_expired(&self.store).await
    }

    async fn purge_expired(store: &Arc<RwLock<SessionMap>>) -> usize {
        let mut store_guard = store.write().await;

        let expired_ids: Vec<SessionId> = store_guard
            .iter()
            .filter_map(|(id, entry)| entry.is_expired().then_some(*id))
            .collect();

        for id in &expired_ids {
            store_guard.pop(id);
        }
        drop(store_guard);

        let removed = expired_ids.len();
        if removed > 0 {
            tracing::debug!("Cleaned up {} expired sessions", removed);
        }
        removed
    }
}

impl Drop for SessionStore {
    fn drop(&mut self) {
        // Only the last handle stops the cleanup task
        if let Some(tx) = &self.shutdown_tx {
            if Arc::strong_count(tx) == 1 {
                if let Err(e) = tx.try_send(()) {
                    tracing::debug!(error = ?e, "Session shutdown signal not delivered");
                }
            }
        }
    }
}
