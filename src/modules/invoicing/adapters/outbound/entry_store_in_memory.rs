// In memory implementation of the EntryStore port.
//
// Purpose
// - Exercise use cases without the hosted database.
//
// Responsibilities
// - Keep rows in insertion order and assign sequential ids.
// - Simulate an unreachable backend and per-entry update rejections.

use crate::modules::invoicing::adapters::outbound::entry_store::{EntryStore, StoreError};
use crate::modules::invoicing::core::entry::{Entry, EntryId, NewEntry};
use crate::shared::core::session::Session;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEntryStore {
    rows: RwLock<Vec<Entry>>,
    rejected_updates: RwLock<HashSet<EntryId>>,
    mark_billed_calls: AtomicUsize,
    is_offline: bool,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Make every future `mark_billed` for this id fail.
    pub async fn reject_updates_for(&self, entry_id: EntryId) {
        self.rejected_updates.write().await.insert(entry_id);
    }

    pub fn mark_billed_calls(&self) -> usize {
        self.mark_billed_calls.load(Ordering::SeqCst)
    }

    pub async fn find(&self, entry_id: &EntryId) -> Option<Entry> {
        self.rows
            .read()
            .await
            .iter()
            .find(|row| &row.id == entry_id)
            .cloned()
    }
}

#[async_trait::async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn create_entry(
        &self,
        _session: &Session,
        entry: NewEntry,
    ) -> Result<EntryId, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Entry store offline".into()));
        }

        let mut rows = self.rows.write().await;
        let id = EntryId(format!("entry-{:04}", rows.len() + 1));
        rows.push(entry.into_entry(id.clone()));
        Ok(id)
    }

    async fn list_unbilled(
        &self,
        _session: &Session,
        owner_id: &str,
    ) -> Result<Vec<Entry>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Entry store offline".into()));
        }

        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.owner_id == owner_id && !row.billed)
            .cloned()
            .collect())
    }

    async fn mark_billed(&self, _session: &Session, entry_id: &EntryId) -> Result<(), StoreError> {
        self.mark_billed_calls.fetch_add(1, Ordering::SeqCst);
        if self.is_offline {
            return Err(StoreError::Backend("Entry store offline".into()));
        }
        if self.rejected_updates.read().await.contains(entry_id) {
            return Err(StoreError::Rejected(format!("update of {entry_id} refused")));
        }

        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|row| &row.id == entry_id) {
            Some(row) => {
                row.billed = true;
                Ok(())
            }
            None => Err(StoreError::NotFound(entry_id.clone())),
        }
    }
}
