//! Session store port
//!
//! Defines how traversal sessions survive between answers and across
//! process restarts. Adapters must hand sessions back exactly as saved,
//! visited question ids included; navigation never rebuilds history itself.

use async_trait::async_trait;
use navigator_domain::{ResponseId, TraversalSession};
use thiserror::Error;

/// Errors raised by session store adapters
#[derive(Error, Debug)]
pub enum SessionStoreError {
    #[error("Session store I/O error: {0}")]
    Io(String),

    #[error("Session could not be (de)serialized: {0}")]
    Serialization(String),

    #[error("Session store is unavailable: {0}")]
    Unavailable(String),
}

/// Port for traversal session persistence
///
/// Implementations live in the infrastructure layer. Each session is keyed
/// by its [`ResponseId`]; sessions never share state with each other.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Allocate an id for a new response
    async fn next_response_id(&self) -> Result<ResponseId, SessionStoreError>;

    /// Load a session, `None` if it was never saved
    async fn load(&self, id: ResponseId) -> Result<Option<TraversalSession>, SessionStoreError>;

    /// Insert or replace a session
    async fn save(&self, session: &TraversalSession) -> Result<(), SessionStoreError>;
}
