//! Handler for link creation endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
};
use serde_json::json;
use tracing::{error, info, warn};

use crate::api::dto::shorten::{NewShortUrlRequest, NewShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Issues a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /new`
///
/// # Request Body
///
/// ```json
/// { "user_id": 1, "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "short_url": "http://localhost:3000/aZ3kP9qLm2" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` if the body is missing, malformed, or larger than
///   the configured limit. The store is not called.
/// - `500 Internal Server Error` if the store fails.
///
/// The `Content-Type` header is not checked; the body is always decoded as
/// JSON.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<NewShortUrlResponse>), AppError> {
    let body = body.map_err(|rejection| {
        warn!(error = %rejection, "unable to read create request body");
        AppError::bad_request(
            "Unable to read request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let request: NewShortUrlRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "unable to parse create request");
        AppError::bad_request("Unable to parse request", json!({ "reason": e.to_string() }))
    })?;

    let user_id = request.user_id;

    let short_url = state
        .store
        .create_short_url(user_id.clone(), request.url)
        .await
        .map_err(|e| {
            error!(error = %e, %user_id, "unable to create short url");
            AppError::from(e)
        })?;

    info!(%user_id, %short_url, "short url created");

    Ok((StatusCode::CREATED, Json(NewShortUrlResponse { short_url })))
}
