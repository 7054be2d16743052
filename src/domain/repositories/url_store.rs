//! Store trait for short URL creation and lookup.

use crate::domain::entities::UserId;
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a [`UrlStore`].
///
/// A missing short code is not a failure; lookups report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Every candidate code was already taken within the retry budget.
    ///
    /// Usually means the configured code length is too small for the
    /// number of URLs issued.
    #[error("unable to allocate a short code after {attempts} attempts (code length {length})")]
    CodeSpaceExhausted { attempts: u32, length: usize },

    /// The backing datastore could not be reached or failed internally.
    #[error("datastore unavailable: {0}")]
    Unavailable(String),
}

/// Datastore capability consumed by the HTTP layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlStore`] - process-local maps behind a lock
/// - Test mocks available with `cfg(test)`
///
/// Implementations must be safe to call concurrently from many request
/// tasks and must never issue the same short code twice.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Issues a new short code for `long_url` on behalf of `user_id` and
    /// returns the externally visible short URL.
    ///
    /// Unknown users are created on first use. Every call issues a fresh
    /// code, even for a long URL the user has shortened before.
    ///
    /// # Errors
    ///
    /// - [`StoreError::CodeSpaceExhausted`] if no free code was found
    /// - [`StoreError::Unavailable`] on backend failure
    async fn create_short_url(&self, user_id: UserId, long_url: String)
    -> Result<String, StoreError>;

    /// Looks up the long URL for `short_code`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the code was issued
    /// - `Ok(None)` if it was not
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on backend failure.
    async fn get_long_url(&self, short_code: &str) -> Result<Option<String>, StoreError>;

    /// Reports whether the store can serve requests.
    async fn health_check(&self) -> bool {
        true
    }
}
