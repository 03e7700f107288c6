// Generate invoices for the signed-in user.
//
// Flow
// - Require an identity, list the unbilled entries, compose one invoice per client.
// - Claim a number per invoice that no earlier run has issued for the owner.
// - Render and write every document. Any write failure aborts before billing.
// - Only then mark the entries billed, collecting per-entry failures.

use crate::modules::invoicing::adapters::outbound::document_sink::{DocumentSink, RenderError};
use crate::modules::invoicing::adapters::outbound::entry_store::{EntryStore, StoreError};
use crate::modules::invoicing::core::document::render_document;
use crate::modules::invoicing::core::invoice::{Invoice, compose_invoices};
use crate::modules::invoicing::use_cases::authenticate::handler::require_identity;
use crate::modules::invoicing::use_cases::generate_invoices::reconcile::{
    BillingReport, reconcile_and_bill,
};
use crate::shared::core::money::round_amount;
use crate::shared::core::session::Session;
use crate::shared::infrastructure::identity::AuthError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedInvoice {
    pub file_name: String,
    pub invoice_number: String,
    pub client: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub invoices: Vec<GeneratedInvoice>,
    pub billing: BillingReport,
}

pub struct GenerateInvoicesHandler<TStore, TSink>
where
    TStore: EntryStore + ?Sized,
    TSink: DocumentSink + ?Sized,
{
    store: Arc<TStore>,
    sink: Arc<TSink>,
    currency: String,
}

impl<TStore, TSink> GenerateInvoicesHandler<TStore, TSink>
where
    TStore: EntryStore + ?Sized,
    TSink: DocumentSink + ?Sized,
{
    pub fn new(store: Arc<TStore>, sink: Arc<TSink>, currency: impl Into<String>) -> Self {
        Self {
            store,
            sink,
            currency: currency.into(),
        }
    }

    pub async fn handle(
        &self,
        session: &Session,
        today: NaiveDate,
    ) -> Result<GenerationOutcome, ApplicationError> {
        let owner = require_identity(session)?;
        let entries = self.store.list_unbilled(session, &owner.id).await?;
        let mut invoices = compose_invoices(entries, today);
        self.claim_numbers(&owner.id, &mut invoices).await?;

        let mut generated = Vec::with_capacity(invoices.len());
        for invoice in &invoices {
            let document = render_document(invoice, &self.currency);
            let handle = self.sink.write(&owner.id, &document).await?;
            tracing::info!(
                invoice = %handle.invoice_number,
                client = %invoice.client,
                entries = invoice.entries.len(),
                total = %invoice.total,
                "invoice produced"
            );
            generated.push(GeneratedInvoice {
                file_name: handle.file_name,
                invoice_number: handle.invoice_number,
                client: invoice.client.clone(),
                total: round_amount(invoice.total),
            });
        }

        let billing = reconcile_and_bill(self.store.as_ref(), session, &invoices).await;
        tracing::info!(
            invoices = generated.len(),
            billed = billing.billed.len(),
            failed = billing.failed.len(),
            "invoice generation finished"
        );

        Ok(GenerationOutcome {
            invoices: generated,
            billing,
        })
    }

    async fn claim_numbers(
        &self,
        owner_id: &str,
        invoices: &mut [Invoice],
    ) -> Result<(), RenderError> {
        let issued = self.sink.list(owner_id).await?;
        let mut claimed: HashSet<String> = HashSet::new();
        for invoice in invoices.iter_mut() {
            loop {
                let suffix = invoice.file_suffix();
                let taken = claimed.contains(&invoice.number)
                    || issued.iter().any(|name| name.ends_with(&suffix));
                if !taken {
                    break;
                }
                invoice.advance();
            }
            claimed.insert(invoice.number.clone());
        }
        Ok(())
    }
}
