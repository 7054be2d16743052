//! Shortener route configuration.

use crate::api::handlers::{
    create_short_url_handler, health_handler, not_found_handler, redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public shortener routes.
///
/// # Endpoints
///
/// - `POST /new`     - Issue a short URL (any other method: 404)
/// - `GET  /health`  - Store health check
/// - `GET  /{code}`  - Redirect to the long URL
///
/// Fixed routes take precedence over `/{code}`, which is why the store never
/// issues `new` or `health` as codes.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/new",
            post(create_short_url_handler).fallback(not_found_handler),
        )
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
