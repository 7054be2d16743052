#![allow(dead_code)]

use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response};
use shorty::infrastructure::persistence::{InMemoryUrlStore, StoreConfig};
use shorty::routes::{HttpLimits, app_router};
use shorty::state::AppState;
use tower::ServiceExt;

pub const BASE_URL: &str = "http://localhost:3000/";

pub fn create_test_store() -> Arc<InMemoryUrlStore> {
    Arc::new(InMemoryUrlStore::new(StoreConfig {
        base_url: BASE_URL.to_string(),
        code_length: 10,
        max_code_attempts: 10,
    }))
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlStore>) {
    let store = create_test_store();
    (AppState::new(store.clone()), store)
}

/// Strips the base URL from an issued short URL.
pub fn short_code_from_url(short_url: &str) -> &str {
    short_url.strip_prefix(BASE_URL).unwrap_or_default()
}

pub fn is_short_code(code: &str, length: usize) -> bool {
    code.len() == length && code.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Sends one request through the full router, middleware included.
pub async fn send(state: AppState, limits: HttpLimits, request: Request<Body>) -> Response {
    app_router(state, limits).oneshot(request).await.unwrap()
}
