use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::modules::invoicing::use_cases::authenticate::inbound::http as auth_http;
use crate::modules::invoicing::use_cases::generate_invoices::inbound::http as invoices_http;
use crate::modules::invoicing::use_cases::list_unbilled_entries::inbound::http as unbilled_http;
use crate::modules::invoicing::use_cases::record_entry::inbound::http as record_http;
use crate::shell::state::AppState;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn error_response(status: StatusCode, error: impl std::fmt::Display) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/auth/login", post(auth_http::login))
        .route("/auth/register", post(auth_http::register))
        .route("/auth/logout", post(auth_http::logout))
        .route("/auth/me", get(auth_http::me))
        .route("/entries", post(record_http::handle))
        .route("/entries/unbilled", get(unbilled_http::handle))
        .route("/invoices", post(invoices_http::handle))
        .route("/invoices/{file_name}", get(invoices_http::download))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
