// Builders for stored entries and entries about to be stored.

use crate::modules::invoicing::core::entry::{Entry, EntryId, NewEntry};
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub const OWNER_ID: &str = "user-fixed-0001";

fn default_new_entry() -> NewEntry {
    NewEntry {
        owner_id: OWNER_ID.to_string(),
        client: "ACME".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 10, 14).unwrap(),
        description: "Fit kitchen".to_string(),
        hours: Decimal::from(2),
        rate: Decimal::from(50),
        materials: "Hinges".to_string(),
        material_cost: Decimal::from(10),
    }
}

pub struct NewEntryBuilder {
    inner: NewEntry,
}

impl Default for NewEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: default_new_entry(),
        }
    }

    pub fn owner_id(mut self, v: impl Into<String>) -> Self {
        self.inner.owner_id = v.into();
        self
    }

    pub fn client(mut self, v: impl Into<String>) -> Self {
        self.inner.client = v.into();
        self
    }

    pub fn hours(mut self, v: Decimal) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn rate(mut self, v: Decimal) -> Self {
        self.inner.rate = v;
        self
    }

    pub fn material_cost(mut self, v: Decimal) -> Self {
        self.inner.material_cost = v;
        self
    }

    pub fn build(self) -> NewEntry {
        self.inner
    }
}

pub struct EntryBuilder {
    inner: Entry,
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: default_new_entry().into_entry(EntryId::from("entry-0001")),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = EntryId(v.into());
        self
    }

    pub fn client(mut self, v: impl Into<String>) -> Self {
        self.inner.client = v.into();
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn hours(mut self, v: Decimal) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn rate(mut self, v: Decimal) -> Self {
        self.inner.rate = v;
        self
    }

    pub fn materials(mut self, v: impl Into<String>) -> Self {
        self.inner.materials = v.into();
        self
    }

    pub fn material_cost(mut self, v: Decimal) -> Self {
        self.inner.material_cost = v;
        self
    }

    pub fn build(self) -> Entry {
        self.inner
    }
}

#[cfg(test)]
mod entry_builder_tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    fn default_builds_an_unbilled_acme_entry() {
        let built = EntryBuilder::default().build();
        assert_eq!(built.id, EntryId::from("entry-0001"));
        assert_eq!(built.owner_id, OWNER_ID);
        assert_eq!(built.client, "ACME");
        assert_eq!(built.labor_cost(), dec!(100));
        assert_eq!(built.material_cost, dec!(10));
        assert!(!built.billed);
    }

    #[rstest]
    fn new_entry_setters_override_fields() {
        let built = NewEntryBuilder::new()
            .owner_id("user-other")
            .client("Globex")
            .hours(dec!(1.5))
            .rate(dec!(80))
            .material_cost(dec!(0))
            .build();
        assert_eq!(built.owner_id, "user-other");
        assert_eq!(built.client, "Globex");
        assert_eq!(built.hours, dec!(1.5));
        assert_eq!(built.rate, dec!(80));
        assert_eq!(built.material_cost, dec!(0));
    }
}
