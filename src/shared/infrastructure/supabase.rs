// Shared HTTP plumbing for the hosted auth (GoTrue) and database (PostgREST) endpoints.

use crate::shared::core::session::Session;
use reqwest::RequestBuilder;

#[derive(Debug, Clone)]
pub struct SupabaseClient {
    base_url: String,
    key: String,
    http: reqwest::Client,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            key: key.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    pub fn rest_url(&self, relation: &str) -> String {
        format!("{}/rest/v1/{relation}", self.base_url)
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Attach the project key, and the user's bearer token when the session carries one.
    pub fn authorize(&self, request: RequestBuilder, session: &Session) -> RequestBuilder {
        let bearer = session.access_token().unwrap_or(self.key.as_str());
        request.header("apikey", self.key.as_str()).bearer_auth(bearer)
    }
}

/// Pull the human readable message out of an error body, falling back to the raw text.
pub fn error_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed.as_ref().and_then(|value| {
        ["error_description", "msg", "message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .map(str::to_string)
    });
    match message {
        Some(message) => message,
        None if body.trim().is_empty() => format!("request failed with status {status}"),
        None => body.trim().to_string(),
    }
}
