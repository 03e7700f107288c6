// IdentityProvider backed by the hosted GoTrue endpoints.

use crate::shared::core::session::{Identity, Session};
use crate::shared::infrastructure::identity::{
    AuthError, AuthGrant, AuthMode, Credentials, IdentityProvider,
};
use crate::shared::infrastructure::supabase::{SupabaseClient, error_message};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Deserialize)]
struct GoTrueUser {
    id: String,
    email: Option<String>,
}

/// Sign up returns a bare user while email confirmation is pending.
#[derive(Deserialize)]
#[serde(untagged)]
enum GoTrueResponse {
    Session {
        access_token: String,
        user: GoTrueUser,
    },
    User(GoTrueUser),
}

pub struct SupabaseIdentityProvider {
    client: SupabaseClient,
}

impl SupabaseIdentityProvider {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

fn transport(err: reqwest::Error) -> AuthError {
    AuthError::Transport(err.to_string())
}

#[async_trait]
impl IdentityProvider for SupabaseIdentityProvider {
    #[tracing::instrument(skip_all, fields(mode = ?mode))]
    async fn authenticate(
        &self,
        credentials: &Credentials,
        mode: AuthMode,
    ) -> Result<AuthGrant, AuthError> {
        let path = match mode {
            AuthMode::Login => "token?grant_type=password",
            AuthMode::Register => "signup",
        };
        let request = self.client.http().post(self.client.auth_url(path));
        let response = self
            .client
            .authorize(request, &Session::Unauthenticated)
            .json(&serde_json::json!({
                "email": credentials.email,
                "password": credentials.password,
            }))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        if !status.is_success() {
            return Err(AuthError::Rejected(error_message(status.as_u16(), &body)));
        }

        let parsed: GoTrueResponse = serde_json::from_str(&body)
            .map_err(|err| AuthError::Transport(format!("unexpected auth response: {err}")))?;
        let (user, access_token) = match parsed {
            GoTrueResponse::Session { access_token, user } => (user, Some(access_token)),
            GoTrueResponse::User(user) => (user, None),
        };
        Ok(AuthGrant {
            identity: Identity {
                id: user.id,
                email: user.email.unwrap_or_else(|| credentials.email.clone()),
            },
            access_token,
        })
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        if session.access_token().is_none() {
            return Ok(());
        }
        let request = self.client.http().post(self.client.auth_url("logout"));
        let response = self
            .client
            .authorize(request, session)
            .send()
            .await
            .map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Rejected(error_message(status.as_u16(), &body)));
        }
        Ok(())
    }
}
