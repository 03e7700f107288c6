use crate::modules::invoicing::core::entry::{Entry, EntryId, NewEntry};
use crate::shared::core::session::Session;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("entry {0} not found")]
    NotFound(EntryId),

    #[error("store rejected the request: {0}")]
    Rejected(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Access to the `entries` relation. The session carries the caller's credentials.
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn create_entry(&self, session: &Session, entry: NewEntry)
    -> Result<EntryId, StoreError>;

    /// Unbilled entries of `owner_id` in the store's natural order.
    async fn list_unbilled(&self, session: &Session, owner_id: &str)
    -> Result<Vec<Entry>, StoreError>;

    /// Idempotent: billing an already billed entry succeeds.
    async fn mark_billed(&self, session: &Session, entry_id: &EntryId) -> Result<(), StoreError>;
}
