use crate::modules::invoicing::adapters::outbound::document_sink::DocumentSink;
use crate::modules::invoicing::adapters::outbound::entry_store::EntryStore;
use crate::modules::invoicing::use_cases::authenticate::handler::IdentityGate;
use crate::modules::invoicing::use_cases::generate_invoices::handler::GenerateInvoicesHandler;
use crate::modules::invoicing::use_cases::list_unbilled_entries::handler::ListUnbilledEntriesHandler;
use crate::modules::invoicing::use_cases::record_entry::handler::RecordEntryHandler;
use crate::shared::infrastructure::identity::IdentityProvider;
use crate::shell::sessions::SessionRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
    pub identity_gate: Arc<IdentityGate<dyn IdentityProvider>>,
    pub record_entry_handler: Arc<RecordEntryHandler<dyn EntryStore>>,
    pub list_unbilled_handler: Arc<ListUnbilledEntriesHandler<dyn EntryStore>>,
    pub generate_invoices_handler: Arc<GenerateInvoicesHandler<dyn EntryStore, dyn DocumentSink>>,
    pub documents: Arc<dyn DocumentSink>,
}

impl AppState {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn EntryStore>,
        documents: Arc<dyn DocumentSink>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            sessions: Arc::new(SessionRegistry::new()),
            identity_gate: Arc::new(IdentityGate::new(identity)),
            record_entry_handler: Arc::new(RecordEntryHandler::new(store.clone())),
            list_unbilled_handler: Arc::new(ListUnbilledEntriesHandler::new(store.clone())),
            generate_invoices_handler: Arc::new(GenerateInvoicesHandler::new(
                store,
                documents.clone(),
                currency,
            )),
            documents,
        }
    }

    pub fn with_sessions(mut self, sessions: SessionRegistry) -> Self {
        self.sessions = Arc::new(sessions);
        self
    }
}
