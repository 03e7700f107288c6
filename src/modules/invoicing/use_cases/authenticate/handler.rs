use crate::modules::invoicing::use_cases::authenticate::command::Authenticate;
use crate::shared::core::session::{Identity, Session};
use crate::shared::infrastructure::identity::{AuthError, IdentityProvider};
use std::sync::Arc;

/// The only way a session gains or loses an identity.
pub struct IdentityGate<TProvider>
where
    TProvider: IdentityProvider + ?Sized,
{
    provider: Arc<TProvider>,
}

impl<TProvider> IdentityGate<TProvider>
where
    TProvider: IdentityProvider + ?Sized,
{
    pub fn new(provider: Arc<TProvider>) -> Self {
        Self { provider }
    }

    /// On failure the session ends up unauthenticated, whatever it held before.
    pub async fn authenticate(
        &self,
        session: &mut Session,
        command: Authenticate,
    ) -> Result<Identity, AuthError> {
        match self
            .provider
            .authenticate(&command.credentials, command.mode)
            .await
        {
            Ok(grant) => {
                tracing::info!(user_id = %grant.identity.id, mode = ?command.mode, "authenticated");
                session.establish(grant.identity.clone(), grant.access_token);
                Ok(grant.identity)
            }
            Err(err) => {
                session.clear();
                Err(err)
            }
        }
    }

    /// Always leaves the session unauthenticated; provider failures are only logged.
    pub async fn sign_out(&self, session: &mut Session) {
        if session.current_identity().is_some() {
            if let Err(err) = self.provider.sign_out(session).await {
                tracing::warn!(error = %err, "sign out at the auth provider failed");
            }
        }
        session.clear();
    }
}

pub fn require_identity(session: &Session) -> Result<&Identity, AuthError> {
    session.current_identity().ok_or(AuthError::NotAuthenticated)
}
