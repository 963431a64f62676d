//! Sleep module - pure sleep-cycle arithmetic.
//!
//! # Components
//!
//! - `CycleCalculator` - wake-up and bed times offset by whole 90-minute cycles
//! - `CycleCountSet` - ordered cycle counts (`{4, 5, 6}` by default, `{2, 3}` for naps)
//! - `format_time` - hour:minute rendering in the host locale convention
//! - `SleepPlan` - candidate times for one anchor, ready for display
//!
//! Everything here is stateless. Reading the host locale in `format_time` is
//! the only contact with the environment.

mod calculator;
mod cycle;
mod format;
mod plan;

pub use calculator::CycleCalculator;
pub use cycle::{cycle_minutes, CycleCountSet, CYCLE_MINUTES, DEFAULT_CYCLES, NAP_CYCLES};
pub use format::{format_time, format_time_in, host_locale, ClockFormat};
pub use plan::{PlanMode, SleepOption, SleepPlan};
