//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Random short code generation and reserved codes

pub mod code_generator;
