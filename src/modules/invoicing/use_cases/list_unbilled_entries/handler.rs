use crate::modules::invoicing::adapters::outbound::entry_store::{EntryStore, StoreError};
use crate::modules::invoicing::core::entry::Entry;
use crate::modules::invoicing::use_cases::authenticate::handler::require_identity;
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
}

pub struct ListUnbilledEntriesHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    store: Arc<TStore>,
}

impl<TStore> ListUnbilledEntriesHandler<TStore>
where
    TStore: EntryStore + ?Sized,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, session: &Session) -> Result<Vec<Entry>, ApplicationError> {
        let owner = require_identity(session)?;
        Ok(self.store.list_unbilled(session, &owner.id).await?)
    }
}
