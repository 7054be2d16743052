//! Infrastructure layer implementing the domain's store contract.
//!
//! - [`persistence`] - [`crate::domain::repositories::UrlStore`] implementations

pub mod persistence;
