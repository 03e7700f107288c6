// EntryStore backed by PostgREST on the hosted project.
//
// Requests run with the user's access token so row level security applies.

use crate::modules::invoicing::adapters::outbound::entry_store::{EntryStore, StoreError};
use crate::modules::invoicing::core::entry::{Entry, EntryId, NewEntry};
use crate::shared::core::session::Session;
use crate::shared::infrastructure::supabase::{SupabaseClient, error_message};
use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;
use serde::de::DeserializeOwned;

const RELATION: &str = "entries";

#[derive(Deserialize)]
struct CreatedRow {
    id: EntryId,
}

pub struct SupabaseEntryStore {
    client: SupabaseClient,
}

impl SupabaseEntryStore {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

fn backend(err: reqwest::Error) -> StoreError {
    StoreError::Backend(err.to_string())
}

async fn read_rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, StoreError> {
    let status = response.status();
    let body = response.text().await.map_err(backend)?;
    if status.is_client_error() {
        return Err(StoreError::Rejected(error_message(status.as_u16(), &body)));
    }
    if !status.is_success() {
        return Err(StoreError::Backend(error_message(status.as_u16(), &body)));
    }
    serde_json::from_str(&body)
        .map_err(|err| StoreError::Backend(format!("unexpected store response: {err}")))
}

#[async_trait]
impl EntryStore for SupabaseEntryStore {
    async fn create_entry(
        &self,
        session: &Session,
        entry: NewEntry,
    ) -> Result<EntryId, StoreError> {
        let mut row = serde_json::to_value(&entry)
            .map_err(|err| StoreError::Backend(err.to_string()))?;
        row["billed"] = serde_json::Value::Bool(false);

        let request = self
            .client
            .http()
            .post(self.client.rest_url(RELATION))
            .header("Prefer", "return=representation")
            .json(&row);
        let response = self
            .client
            .authorize(request, session)
            .send()
            .await
            .map_err(backend)?;

        read_rows::<CreatedRow>(response)
            .await?
            .into_iter()
            .next()
            .map(|created| created.id)
            .ok_or_else(|| StoreError::Backend("insert returned no row".into()))
    }

    async fn list_unbilled(
        &self,
        session: &Session,
        owner_id: &str,
    ) -> Result<Vec<Entry>, StoreError> {
        let request = self.client.http().get(self.client.rest_url(RELATION)).query(&[
            ("select", "*".to_string()),
            ("user_id", format!("eq.{owner_id}")),
            ("billed", "eq.false".to_string()),
        ]);
        let response = self
            .client
            .authorize(request, session)
            .send()
            .await
            .map_err(backend)?;

        read_rows(response).await
    }

    async fn mark_billed(&self, session: &Session, entry_id: &EntryId) -> Result<(), StoreError> {
        let request = self
            .client
            .http()
            .patch(self.client.rest_url(RELATION))
            .query(&[("id", format!("eq.{entry_id}"))])
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({ "billed": true }));
        let response = self
            .client
            .authorize(request, session)
            .send()
            .await
            .map_err(backend)?;

        let updated: Vec<serde_json::Value> = read_rows(response).await?;
        if updated.is_empty() {
            return Err(StoreError::NotFound(entry_id.clone()));
        }
        Ok(())
    }
}
