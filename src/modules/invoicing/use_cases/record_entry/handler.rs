use crate::modules::invoicing::adapters::outbound::entry_store::{EntryStore, StoreError};
use crate::modules::invoicing::core::entry::EntryId;
use crate::modules::invoicing::use_cases::authenticate::handler::require_identity;
use crate::modules::invoicing::use_cases::record_entry::command::RecordEntry;
use crate::modules::invoicing::use_cases::record_entry::decide::decide_record_entry;
use crate::modules::invoicing::use_cases::record_entry::decision::{Decision, ValidationError};
use crate::shared::core::session::Session;
use crate::shared::infrastructure::identity::AuthError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid entry: {0}")]
    Validation(#[from] ValidationError),
}

pub struct RecordEntryHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> RecordEntryHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        session: &Session,
        command: RecordEntry,
    ) -> Result<EntryId, ApplicationError> {
        let owner = require_identity(session)?;

        match decide_record_entry(owner, command) {
            Decision::Accepted { entry } => {
                let client = entry.client.clone();
                let entry_id = self.store.create_entry(session, entry).await?;
                tracing::info!(%entry_id, %client, "entry recorded");
                Ok(entry_id)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Validation(reason)),
        }
    }
}
