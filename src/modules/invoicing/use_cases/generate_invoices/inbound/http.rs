use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Local;
use serde::Serialize;

use crate::modules::invoicing::adapters::outbound::document_sink::RenderError;
use crate::modules::invoicing::core::entry::EntryId;
use crate::modules::invoicing::use_cases::authenticate::handler::require_identity;
use crate::modules::invoicing::use_cases::generate_invoices::handler::{
    ApplicationError, GeneratedInvoice,
};
use crate::modules::invoicing::use_cases::generate_invoices::reconcile::BillingFailure;
use crate::shell::http::error_response;
use crate::shell::sessions::SessionToken;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct GenerateInvoicesResponse {
    pub invoices: Vec<GeneratedInvoice>,
    pub billed: Vec<EntryId>,
    pub billing_failures: Vec<BillingFailure>,
}

pub async fn handle(State(state): State<AppState>, token: SessionToken) -> impl IntoResponse {
    let session = state.sessions.resolve(token.as_deref()).await;
    let today = Local::now().date_naive();

    match state.generate_invoices_handler.handle(&session, today).await {
        Ok(outcome) => Json(GenerateInvoicesResponse {
            invoices: outcome.invoices,
            billed: outcome.billing.billed,
            billing_failures: outcome.billing.failed,
        })
        .into_response(),
        Err(ApplicationError::Auth(_)) => StatusCode::UNAUTHORIZED.into_response(),
        Err(err) => {
            tracing::error!(error = %err, "invoice generation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err)
        }
    }
}

pub async fn download(
    State(state): State<AppState>,
    token: SessionToken,
    Path(file_name): Path<String>,
) -> impl IntoResponse {
    let session = state.sessions.resolve(token.as_deref()).await;
    let Ok(owner) = require_identity(&session) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    match state.documents.read(&owner.id, &file_name).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{file_name}\""),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(err @ RenderError::NotFound(_)) => error_response(StatusCode::NOT_FOUND, err),
        Err(err @ RenderError::InvalidName(_)) => error_response(StatusCode::BAD_REQUEST, err),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err),
    }
}
