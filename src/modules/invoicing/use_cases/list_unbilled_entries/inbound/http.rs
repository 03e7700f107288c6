use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::invoicing::use_cases::list_unbilled_entries::handler::ApplicationError;
use crate::shell::http::error_response;
use crate::shell::sessions::SessionToken;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, token: SessionToken) -> impl IntoResponse {
    let session = state.sessions.resolve(token.as_deref()).await;
    match state.list_unbilled_handler.handle(&session).await {
        Ok(entries) => Json(entries).into_response(),
        Err(ApplicationError::Auth(_)) => StatusCode::UNAUTHORIZED.into_response(),
        Err(err @ ApplicationError::Store(_)) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err)
        }
    }
}
