//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `clock` - system and fixed clocks
//! - `cli` - command-line parsing and rendering

pub mod cli;
pub mod clock;

pub use clock::{FixedClock, SystemClock};
