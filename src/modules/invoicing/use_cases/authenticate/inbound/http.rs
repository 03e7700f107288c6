use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::invoicing::use_cases::authenticate::command::Authenticate;
use crate::shared::core::session::Session;
use crate::shared::infrastructure::identity::{AuthMode, Credentials};
use crate::shell::http::error_response;
use crate::shell::sessions::SessionToken;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CredentialsBody {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthenticatedResponse {
    pub session_id: String,
    pub user_id: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct IdentityResponse {
    pub user_id: String,
    pub email: String,
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<CredentialsBody>, JsonRejection>,
) -> impl IntoResponse {
    authenticate(state, body, AuthMode::Login).await
}

pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<CredentialsBody>, JsonRejection>,
) -> impl IntoResponse {
    authenticate(state, body, AuthMode::Register).await
}

async fn authenticate(
    state: AppState,
    body: Result<Json<CredentialsBody>, JsonRejection>,
    mode: AuthMode,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = Authenticate {
        credentials: Credentials {
            email: body.email,
            password: body.password,
        },
        mode,
    };

    let mut session = Session::new();
    match state.identity_gate.authenticate(&mut session, command).await {
        Ok(identity) => {
            let session_id = state.sessions.open(session).await;
            Json(AuthenticatedResponse {
                session_id,
                user_id: identity.id,
                email: identity.email,
            })
            .into_response()
        }
        Err(err) => error_response(StatusCode::UNAUTHORIZED, err),
    }
}

pub async fn logout(State(state): State<AppState>, token: SessionToken) -> impl IntoResponse {
    if let Some(session_id) = token.as_deref() {
        if let Some(mut session) = state.sessions.close(session_id).await {
            state.identity_gate.sign_out(&mut session).await;
        }
    }
    StatusCode::NO_CONTENT
}

pub async fn me(State(state): State<AppState>, token: SessionToken) -> impl IntoResponse {
    match state.sessions.resolve(token.as_deref()).await.current_identity() {
        Some(identity) => Json(IdentityResponse {
            user_id: identity.id.clone(),
            email: identity.email.clone(),
        })
        .into_response(),
        None => StatusCode::UNAUTHORIZED.into_response(),
    }
}
