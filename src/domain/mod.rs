//! Domain layer containing the sleep-cycle logic and its value objects.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (instants, validation errors)
//! - `sleep` - Cycle calculator, cycle-count sets, time formatting, sleep plans

pub mod foundation;
pub mod sleep;
