// Marks the entries of produced invoices as billed.
//
// Fail-open: every entry is attempted, failures are collected rather than
// aborting, and nothing already produced is undone. Failed entries stay
// unbilled and show up again in the next listing.

use crate::modules::invoicing::adapters::outbound::entry_store::EntryStore;
use crate::modules::invoicing::core::entry::EntryId;
use crate::modules::invoicing::core::invoice::Invoice;
use crate::shared::core::session::Session;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BillingFailure {
    pub entry_id: EntryId,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BillingReport {
    pub billed: Vec<EntryId>,
    pub failed: Vec<BillingFailure>,
}

impl BillingReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub async fn reconcile_and_bill<TStore>(
    store: &TStore,
    session: &Session,
    invoices: &[Invoice],
) -> BillingReport
where
    TStore: EntryStore + ?Sized,
{
    let mut report = BillingReport::default();
    for invoice in invoices {
        for entry_id in invoice.entry_ids() {
            match store.mark_billed(session, entry_id).await {
                Ok(()) => report.billed.push(entry_id.clone()),
                Err(err) => {
                    tracing::warn!(
                        %entry_id,
                        invoice = %invoice.number,
                        error = %err,
                        "entry could not be marked billed"
                    );
                    report.failed.push(BillingFailure {
                        entry_id: entry_id.clone(),
                        error: err.to_string(),
                    });
                }
            }
        }
    }
    report
}
