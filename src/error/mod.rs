//! Error handling
//!
//! Defines error types and handling for the file gateway.

pub mod types;

pub use types::*;
