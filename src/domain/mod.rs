//! Domain layer containing business entities and the store contract.
//!
//! - [`entities`] - Users and URL records
//! - [`repositories`] - The [`repositories::UrlStore`] trait and its error type
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers.

pub mod entities;
pub mod repositories;
