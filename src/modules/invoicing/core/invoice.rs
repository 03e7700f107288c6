// Invoice composition: group unbilled entries per client and total them.
//
// Boundaries
// - Pure. No input or output, no clock: the generation date is passed in.
//
// Numbering
// - INV-{YYYYMMDD}-{first three characters of the client, uppercased}.
// - Distinct clients sharing a prefix on the same day get a -2, -3 suffix in group order.
// - The document file name is path safe; the number itself keeps the raw client text.

use crate::modules::invoicing::core::entry::{Entry, EntryId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    pub number: String,
    /// 1 for the bare number, n for the `-n` suffix.
    pub sequence: u32,
    pub client: String,
    pub issued_on: NaiveDate,
    pub entries: Vec<Entry>,
    pub total_labor: Decimal,
    pub total_materials: Decimal,
    pub total: Decimal,
}

impl Invoice {
    pub fn entry_ids(&self) -> impl Iterator<Item = &EntryId> {
        self.entries.iter().map(|entry| &entry.id)
    }

    /// `{client}_{number}.pdf` with spaces and path separators as underscores.
    pub fn file_name(&self) -> String {
        format!("{}{}", path_safe(&self.client), self.file_suffix())
    }

    /// The `_{number}.pdf` tail shared by every document carrying this number.
    pub fn file_suffix(&self) -> String {
        path_safe(&format!("_{}.pdf", self.number))
    }

    /// Move to the next free suffix of this invoice's number.
    pub fn advance(&mut self) {
        self.sequence += 1;
        self.number = sequenced_number(self.issued_on, &self.client, self.sequence);
    }
}

fn path_safe(name: &str) -> String {
    let mut safe: String = name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    while safe.contains("..") {
        safe = safe.replace("..", ".");
    }
    safe
}

pub fn client_prefix(client: &str) -> String {
    client.chars().take(3).collect::<String>().to_uppercase()
}

pub fn invoice_number(issued_on: NaiveDate, client: &str) -> String {
    format!("INV-{}-{}", issued_on.format("%Y%m%d"), client_prefix(client))
}

pub fn sequenced_number(issued_on: NaiveDate, client: &str, sequence: u32) -> String {
    let base = invoice_number(issued_on, client);
    if sequence <= 1 {
        base
    } else {
        format!("{base}-{sequence}")
    }
}

pub fn compose_invoices(entries: Vec<Entry>, issued_on: NaiveDate) -> Vec<Invoice> {
    let mut groups: BTreeMap<String, Vec<Entry>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.client.clone()).or_default().push(entry);
    }

    let mut issued: HashSet<String> = HashSet::new();
    groups
        .into_iter()
        .map(|(client, entries)| {
            let mut sequence = 1;
            let mut number = sequenced_number(issued_on, &client, sequence);
            while !issued.insert(number.clone()) {
                sequence += 1;
                number = sequenced_number(issued_on, &client, sequence);
            }

            let total_labor: Decimal = entries.iter().map(Entry::labor_cost).sum();
            let total_materials: Decimal = entries.iter().map(|e| e.material_cost).sum();
            Invoice {
                number,
                sequence,
                client,
                issued_on,
                entries,
                total_labor,
                total_materials,
                total: total_labor + total_materials,
            }
        })
        .collect()
}
