use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Typed entry input as submitted by the user, before range checks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecordEntry {
    pub client: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub hours: Decimal,
    pub rate: Decimal,
    #[serde(default)]
    pub materials: String,
    pub material_cost: Decimal,
}
