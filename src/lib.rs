//! Library crate for fruit-catcher-back, exposing modules for binaries and integration tests.

use axum::{
    Router,
    http::{
        HeaderValue,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Runtime configuration: file, environment and defaults.
pub mod config;
/// User records and the stores persisting them.
pub mod dao;
/// Request and response bodies.
pub mod dto;
/// Error types and their HTTP mapping.
pub mod error;
/// HTTP route trees.
pub mod routes;
/// Business logic shared by the routes.
pub mod services;
/// Shared application state.
pub mod state;

/// Build the top-level router and attach cross-cutting middleware layers.
///
/// The CORS headers are set on every response, including static files and errors.
pub fn build_router(state: state::SharedState) -> Router<()> {
    routes::router(state)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(TraceLayer::new_for_http())
}
