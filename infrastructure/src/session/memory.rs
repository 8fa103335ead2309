//! In-memory session store.
//!
//! Sessions live in a map keyed by response id for the lifetime of the
//! process. Each entry is an independent record; nothing is shared between
//! sessions except the map itself.

use async_trait::async_trait;
use navigator_application::{SessionStore, SessionStoreError};
use navigator_domain::{ResponseId, TraversalSession};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;
use tracing::trace;

/// Session store backed by a process-local map
#[derive(Default)]
pub struct InMemorySessionStore {
    last_id: AtomicI64,
    sessions: RwLock<HashMap<ResponseId, TraversalSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn next_response_id(&self) -> Result<ResponseId, SessionStoreError> {
        Ok(ResponseId::new(
            self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
        ))
    }

    async fn load(&self, id: ResponseId) -> Result<Option<TraversalSession>, SessionStoreError> {
        Ok(self.sessions.read().await.get(&id).cloned())
    }

    async fn save(&self, session: &TraversalSession) -> Result<(), SessionStoreError> {
        trace!("Saving {} in memory", session.response_id);
        self.sessions
            .write()
            .await
            .insert(session.response_id, session.clone());
        Ok(())
    }
}
