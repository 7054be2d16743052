//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{debug, error, warn};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code in the store
/// 2. Found: `301 Moved Permanently` with `Location` set to the long URL
/// 3. Not found, or stored as an empty URL: `404 Not Found`
///
/// An unknown code is an ordinary outcome, logged as a warning. Only a store
/// failure produces `500 Internal Server Error`.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.store.get_long_url(&code).await.map_err(|e| {
        error!(error = %e, short_code = %code, "unable to get the long url");
        AppError::from(e)
    })?;

    let Some(long_url) = long_url.filter(|url| !url.is_empty()) else {
        warn!(short_code = %code, "short code not found");
        return Err(AppError::not_found(
            "Short link not found",
            json!({ "code": code }),
        ));
    };

    let location = HeaderValue::try_from(long_url).map_err(|e| {
        error!(error = %e, short_code = %code, "stored url is not a valid header value");
        AppError::internal("Stored URL cannot be used as a redirect target", json!({}))
    })?;

    debug!(short_code = %code, "redirecting");

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]))
}
