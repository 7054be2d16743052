//! Shared state injected into every handler.

use std::sync::Arc;

use crate::domain::repositories::UrlStore;

/// Application state cloned into each request.
///
/// Handlers depend on the [`UrlStore`] trait only, so the in-memory store
/// can be swapped for another backend without touching the HTTP layer.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UrlStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn UrlStore>) -> Self {
        Self { store }
    }
}
