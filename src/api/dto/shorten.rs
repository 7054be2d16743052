//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UserId;

/// Request to shorten a single URL.
///
/// ```json
/// { "user_id": 1, "url": "https://example.com" }
/// ```
///
/// `url` is taken as opaque text; it is not checked for URL syntax.
#[derive(Debug, Deserialize)]
pub struct NewShortUrlRequest {
    pub user_id: UserId,
    pub url: String,
}

/// Response carrying the issued short URL.
#[derive(Debug, Serialize)]
pub struct NewShortUrlResponse {
    pub short_url: String,
}
