//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

mod plan_sleep;

pub use plan_sleep::{
    AnchorTime, PlanError, PlanSleepConfig, PlanSleepHandler, PlanSleepQuery,
};
