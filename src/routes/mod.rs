use axum::{
    Router,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get_service},
};
use tower_http::services::ServeDir;

use crate::{
    error::{AccountError, AppError},
    state::SharedState,
};

/// Signup, login and score endpoints.
pub mod account;
/// Swagger UI and OpenAPI document.
pub mod docs;
/// Storage health check.
pub mod health;
/// Leaderboard endpoint.
pub mod ranking;

/// Compose all route trees, wiring in shared state, documentation and the
/// static file fallback.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(account::router())
        .merge(ranking::router());

    let docs_router = docs::router(state.clone());

    // Anything not routed above: GET/HEAD read from the static directory,
    // POST is an unknown endpoint, OPTIONS is a bare preflight answer.
    let fallback: MethodRouter<()> = get_service(ServeDir::new(state.config().static_dir()))
        .post(unknown_endpoint)
        .options(preflight);

    // Known paths hit with another method get the same treatment, so a POST
    // to `/api/ranking` is an unknown endpoint and any OPTIONS answers 200.
    api_router
        .merge(docs_router)
        .method_not_allowed_fallback(method_mismatch)
        .fallback_service(fallback)
        .with_state(state)
}

/// CORS preflight: the headers are added by the router layers.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_mismatch(method: Method) -> Response {
    match method {
        Method::POST => unknown_endpoint().await.into_response(),
        Method::OPTIONS => preflight().await.into_response(),
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

async fn unknown_endpoint() -> AppError {
    AccountError::UnknownEndpoint.into()
}
