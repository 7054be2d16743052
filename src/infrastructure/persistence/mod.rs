//! Store implementations.
//!
//! - [`InMemoryUrlStore`] - Users and codes held in process memory

pub mod memory_url_store;

pub use memory_url_store::{InMemoryUrlStore, StoreConfig};
