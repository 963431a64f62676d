//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{AnchorTime, PlanError, PlanSleepConfig, PlanSleepHandler, PlanSleepQuery};
