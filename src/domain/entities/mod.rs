//! Core domain entities.
//!
//! - [`User`] - A tenant that owns shortened URLs, keyed by [`UserId`]
//! - [`UrlRecord`] - A short code bound to its long URL
//!
//! Entities are plain data; ownership and locking live in the store.

pub mod url_record;
pub mod user;

pub use url_record::UrlRecord;
pub use user::{User, UserId};
