// Sessions held by the HTTP shell, keyed by an opaque session id.
//
// A client receives the id on login or register and sends it back as
// `Authorization: Bearer <session id>`. Unknown, missing or idle-expired ids
// resolve to an unauthenticated session. Expired sessions are swept on open.

use crate::shared::core::session::Session;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use std::collections::HashMap;
use std::convert::Infallible;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(8 * 60 * 60);

struct TrackedSession {
    session: Session,
    last_seen: Instant,
}

pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, TrackedSession>>,
    idle_timeout: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    pub async fn open(&self, session: Session) -> String {
        let session_id = Uuid::now_v7().to_string();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, tracked| tracked.last_seen.elapsed() < self.idle_timeout);
        if sessions.len() < before {
            tracing::debug!(expired = before - sessions.len(), "idle sessions swept");
        }
        sessions.insert(
            session_id.clone(),
            TrackedSession {
                session,
                last_seen: Instant::now(),
            },
        );
        session_id
    }

    pub async fn resolve(&self, session_id: Option<&str>) -> Session {
        let Some(session_id) = session_id else {
            return Session::Unauthenticated;
        };
        let mut sessions = self.sessions.write().await;
        let Some(tracked) = sessions.get_mut(session_id) else {
            return Session::Unauthenticated;
        };
        if tracked.last_seen.elapsed() < self.idle_timeout {
            tracked.last_seen = Instant::now();
            return tracked.session.clone();
        }
        sessions.remove(session_id);
        Session::Unauthenticated
    }

    pub async fn close(&self, session_id: &str) -> Option<Session> {
        self.sessions
            .write()
            .await
            .remove(session_id)
            .map(|tracked| tracked.session)
    }

    pub async fn open_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// The bearer value of the `Authorization` header, if any.
pub struct SessionToken(pub Option<String>);

impl SessionToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        Ok(Self(token))
    }
}
