use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Store-assigned identifier. Kept opaque: the hosted table may use integer or uuid keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// One recorded unit of billable work, as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    #[serde(rename = "user_id")]
    pub owner_id: String,
    pub client: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub hours: Decimal,
    pub rate: Decimal,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub materials: String,
    pub material_cost: Decimal,
    #[serde(default)]
    pub billed: bool,
}

impl Entry {
    pub fn labor_cost(&self) -> Decimal {
        self.hours * self.rate
    }
}

/// A validated entry ready to be persisted. The store assigns the id and starts it unbilled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewEntry {
    #[serde(rename = "user_id")]
    pub owner_id: String,
    pub client: String,
    pub date: NaiveDate,
    pub description: String,
    pub hours: Decimal,
    pub rate: Decimal,
    pub materials: String,
    pub material_cost: Decimal,
}

impl NewEntry {
    pub fn into_entry(self, id: EntryId) -> Entry {
        Entry {
            id,
            owner_id: self.owner_id,
            client: self.client,
            date: self.date,
            description: self.description,
            hours: self.hours,
            rate: self.rate,
            materials: self.materials,
            material_cost: self.material_cost,
            billed: false,
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
