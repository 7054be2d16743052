//! Fallback for unmatched routes and methods.

use axum::http::{Method, Uri};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;

/// Responds `404 Not Found` for any request no route accepts.
///
/// Also installed as the method fallback on `/new`, so non-POST requests
/// there get 404 rather than 405.
pub async fn not_found_handler(method: Method, uri: Uri) -> AppError {
    debug!(%method, path = %uri.path(), "no route matched");

    AppError::not_found(
        "Not found",
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}
