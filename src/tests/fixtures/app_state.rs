// Application state wired to in-memory adapters, with handles kept for assertions.

use crate::modules::invoicing::adapters::outbound::document_sink_in_memory::InMemoryDocumentSink;
use crate::modules::invoicing::adapters::outbound::entry_store_in_memory::InMemoryEntryStore;
use crate::shared::core::session::{Identity, Session};
use crate::shared::infrastructure::identity::in_memory::InMemoryIdentityProvider;
use crate::shell::state::AppState;
use std::sync::Arc;

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<InMemoryEntryStore>,
    pub documents: Arc<InMemoryDocumentSink>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(
            InMemoryIdentityProvider::new(),
            InMemoryEntryStore::new(),
            InMemoryDocumentSink::new(),
        )
    }

    pub fn with(
        identity: InMemoryIdentityProvider,
        store: InMemoryEntryStore,
        documents: InMemoryDocumentSink,
    ) -> Self {
        let store = Arc::new(store);
        let documents = Arc::new(documents);
        let state = AppState::new(Arc::new(identity), store.clone(), documents.clone(), "EUR");
        Self {
            state,
            store,
            documents,
        }
    }

    /// Open a session for the fixture owner and return its id.
    pub async fn sign_in(&self) -> String {
        self.state
            .sessions
            .open(Session::authenticated(
                Identity {
                    id: super::entries::OWNER_ID.to_string(),
                    email: "owner@example.com".to_string(),
                },
                Some("token-0001".to_string()),
            ))
            .await
    }
}
