//! HTTP layer translating requests into store operations.
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - Endpoint handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route table and middleware stack

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
