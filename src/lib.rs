//! # Shorty
//!
//! A URL shortening service built with Axum. Given a user identifier and a
//! long URL it issues a short, unique code that redirects to the original.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the [`domain::repositories::UrlStore`] contract
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory store
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//!
//! ## Behaviour
//!
//! - Codes are random alphanumeric strings of a configured length, checked
//!   for uniqueness under a single store lock
//! - Users are created on first sight; no authentication is performed
//! - State lives in memory and is lost on restart
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:3000/"
//! cargo run
//!
//! curl -X POST localhost:3000/new -H 'content-type: application/json' \
//!     -d '{"user_id": 1, "url": "https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{UrlRecord, User, UserId};
    pub use crate::domain::repositories::{StoreError, UrlStore};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{InMemoryUrlStore, StoreConfig};
    pub use crate::routes::{HttpLimits, app_router};
    pub use crate::state::AppState;
}
