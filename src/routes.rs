//! Top-level router combining routes and middleware.
//!
//! # Route Structure
//!
//! - `POST /new`     - Create a short URL
//! - `GET  /health`  - Health check
//! - `GET  /{code}`  - Short link redirect
//! - anything else   - 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Requests exceeding the limit get `408 Request Timeout`
//! - **Body limit** - Oversized bodies are rejected (surfaced as `400` by the create handler)
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Request limits applied to every route.
#[derive(Debug, Clone, Copy)]
pub struct HttpLimits {
    pub max_body_bytes: usize,
    pub request_timeout: Duration,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
            request_timeout: Duration::from_secs(5),
        }
    }
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, limits: HttpLimits) -> NormalizePath<Router> {
    let router = api::routes::public_routes()
        .fallback(not_found_handler)
        .with_state(state)
        .layer(DefaultBodyLimit::max(limits.max_body_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            limits.request_timeout,
        ))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
