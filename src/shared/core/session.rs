// Explicit session context passed to every operation that needs the current identity.
//
// Lifecycle
// - Unauthenticated until an authentication succeeds.
// - Authenticated(identity) until sign out, which always returns to Unauthenticated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated {
        identity: Identity,
        /// Bearer token issued by the auth provider; absent when sign up awaits confirmation.
        access_token: Option<String>,
    },
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authenticated(identity: Identity, access_token: Option<String>) -> Self {
        Self::Authenticated {
            identity,
            access_token,
        }
    }

    pub fn establish(&mut self, identity: Identity, access_token: Option<String>) {
        *self = Self::authenticated(identity, access_token);
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated { identity, .. } => Some(identity),
            Self::Unauthenticated => None,
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { access_token, .. } => access_token.as_deref(),
            Self::Unauthenticated => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Unauthenticated;
    }
}
