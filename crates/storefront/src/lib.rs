//! Dog Shop Storefront library.
//!
//! This crate provides the storefront functionality as a library,
//! allowing it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, body::Body, http::Request};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::SessionKeyError;
use crate::state::AppState;

/// Build the storefront application.
///
/// Wires routes, static assets, sessions, and the middleware stack. Sentry
/// layers are added by the binary.
///
/// # Errors
///
/// Returns [`SessionKeyError`] if the session signing key cannot be built.
pub fn app(state: AppState) -> Result<Router, SessionKeyError> {
    let key = middleware::session_key(state.config())?;
    let session_layer = middleware::create_session_layer(state.config()).with_signed(key);
    let static_dir = ServeDir::new(&state.config().static_dir);

    Ok(Router::new()
        .merge(routes::routes())
        .nest_service("/static", static_dir)
        .layer(session_layer)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .with_state(state))
}

fn request_span(request: &Request<Body>) -> tracing::Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
    )
}
