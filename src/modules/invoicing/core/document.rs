// Fixed-layout text model of an invoice document, independent of the output format.

use crate::modules::invoicing::core::entry::Entry;
use crate::modules::invoicing::core::invoice::Invoice;
use crate::shared::core::money::{format_amount, format_quantity};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDocument {
    pub file_name: String,
    pub invoice_number: String,
    pub title: String,
    pub header: Vec<String>,
    pub lines: Vec<String>,
    pub summary: Vec<String>,
}

pub fn entry_line(entry: &Entry, currency: &str) -> String {
    format!(
        "{} | {} | {}h @ {currency} {}/h | Materials: {} ({currency} {})",
        entry.date.format("%Y-%m-%d"),
        entry.description,
        format_quantity(entry.hours),
        format_amount(entry.rate),
        entry.materials,
        format_amount(entry.material_cost),
    )
}

pub fn render_document(invoice: &Invoice, currency: &str) -> InvoiceDocument {
    InvoiceDocument {
        file_name: invoice.file_name(),
        invoice_number: invoice.number.clone(),
        title: format!("INVOICE for {}", invoice.client),
        header: vec![
            format!("Invoice #: {}", invoice.number),
            format!("Date: {}", invoice.issued_on.format("%Y-%m-%d")),
        ],
        lines: invoice
            .entries
            .iter()
            .map(|entry| entry_line(entry, currency))
            .collect(),
        summary: vec![
            format!("Total Labor: {currency} {}", format_amount(invoice.total_labor)),
            format!(
                "Total Materials: {currency} {}",
                format_amount(invoice.total_materials)
            ),
            format!("TOTAL: {currency} {}", format_amount(invoice.total)),
        ],
    }
}
