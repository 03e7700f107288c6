use crate::shared::core::session::{Identity, Session};
use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("authentication rejected: {0}")]
    Rejected(String),

    #[error("not authenticated")]
    NotAuthenticated,

    #[error("auth provider unreachable: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What a successful authentication hands back to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGrant {
    pub identity: Identity,
    pub access_token: Option<String>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn authenticate(
        &self,
        credentials: &Credentials,
        mode: AuthMode,
    ) -> Result<AuthGrant, AuthError>;

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError>;
}

pub mod in_memory;
pub mod supabase;
