// In memory implementation of the IdentityProvider port.
//
// Purpose
// - Support tests and local development without a hosted auth project.

use crate::shared::core::session::{Identity, Session};
use crate::shared::infrastructure::identity::{
    AuthError, AuthGrant, AuthMode, Credentials, IdentityProvider,
};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

struct Account {
    id: String,
    password: String,
}

#[derive(Default)]
pub struct InMemoryIdentityProvider {
    accounts: RwLock<HashMap<String, Account>>,
    is_offline: bool,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn authenticate(
        &self,
        credentials: &Credentials,
        mode: AuthMode,
    ) -> Result<AuthGrant, AuthError> {
        if self.is_offline {
            return Err(AuthError::Transport("Identity provider offline".into()));
        }

        let id = match mode {
            AuthMode::Register => {
                let mut accounts = self.accounts.write().await;
                if accounts.contains_key(&credentials.email) {
                    return Err(AuthError::Rejected("User already registered".into()));
                }
                let id = Uuid::now_v7().to_string();
                accounts.insert(
                    credentials.email.clone(),
                    Account {
                        id: id.clone(),
                        password: credentials.password.clone(),
                    },
                );
                id
            }
            AuthMode::Login => {
                let accounts = self.accounts.read().await;
                let id = match accounts.get(&credentials.email) {
                    Some(account) if account.password == credentials.password => account.id.clone(),
                    _ => return Err(AuthError::Rejected("Invalid login credentials".into())),
                };
                id
            }
        };

        Ok(AuthGrant {
            identity: Identity {
                id,
                email: credentials.email.clone(),
            },
            access_token: Some(Uuid::now_v7().to_string()),
        })
    }

    async fn sign_out(&self, _session: &Session) -> Result<(), AuthError> {
        if self.is_offline {
            return Err(AuthError::Transport("Identity provider offline".into()));
        }
        Ok(())
    }
}
