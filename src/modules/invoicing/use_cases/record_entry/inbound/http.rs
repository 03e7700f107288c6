use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::invoicing::core::entry::EntryId;
use crate::modules::invoicing::use_cases::record_entry::command::RecordEntry;
use crate::modules::invoicing::use_cases::record_entry::handler::ApplicationError;
use crate::shell::http::error_response;
use crate::shell::sessions::SessionToken;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct RecordEntryResponse {
    pub entry_id: EntryId,
}

pub async fn handle(
    State(state): State<AppState>,
    token: SessionToken,
    body: Result<Json<RecordEntry>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let session = state.sessions.resolve(token.as_deref()).await;
    match state.record_entry_handler.handle(&session, command).await {
        Ok(entry_id) => (StatusCode::CREATED, Json(RecordEntryResponse { entry_id })).into_response(),
        Err(ApplicationError::Auth(_)) => StatusCode::UNAUTHORIZED.into_response(),
        Err(err @ ApplicationError::Validation(_)) => error_response(StatusCode::BAD_REQUEST, err),
        Err(err @ ApplicationError::Store(_)) => {
            tracing::error!(error = %err, "entry could not be recorded");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err)
        }
    }
}
