// Shared test fixture for the RecordEntry command, seeded from json/record_entry.json.

use crate::modules::invoicing::use_cases::record_entry::command::RecordEntry;
use chrono::NaiveDate;
use rust_decimal::Decimal;

pub const RECORD_ENTRY_JSON: &str = include_str!("json/record_entry.json");

pub struct RecordEntryBuilder {
    inner: RecordEntry,
}

impl Default for RecordEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(RECORD_ENTRY_JSON).unwrap(),
        }
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

    pub fn build(self) -> RecordEntry {
        self.inner
    }
}

#[cfg(test)]
mod record_entry_builder_tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RecordEntryBuilder::default().build();
        assert_eq!(built.client, "ACME");
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
        assert_eq!(built.description, "Fit kitchen");
        assert_eq!(built.hours, dec!(2));
        assert_eq!(built.rate, dec!(50));
        assert_eq!(built.materials, "Hinges");
        assert_eq!(built.material_cost, dec!(10));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RecordEntryBuilder::new()
            .client("Globex")
            .date(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap())
            .description("Survey")
            .hours(dec!(0.75))
            .rate(dec!(80))
            .materials("")
            .material_cost(dec!(0))
            .build();

        assert_eq!(custom.client, "Globex");
        assert_eq!(custom.date, NaiveDate::from_ymd_opt(2026, 1, 2).unwrap());
        assert_eq!(custom.description, "Survey");
        assert_eq!(custom.hours, dec!(0.75));
        assert_eq!(custom.rate, dec!(80));
        assert_eq!(custom.materials, "");
        assert_eq!(custom.material_cost, dec!(0));
    }
}
