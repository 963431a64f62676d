//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that the sleep module builds on.

mod errors;
mod instant;

pub use errors::ValidationError;
pub use instant::Instant;
