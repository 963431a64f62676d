//! Sleep Cycles - ideal wake-up and bed times in whole sleep cycles.
//!
//! Given a bedtime, the calculator proposes wake-up times that land at the
//! end of a 90-minute sleep cycle; given a wake-up time, it proposes bedtimes.
//! The arithmetic lives in [`domain::sleep`]; the other layers wire it to a
//! clock, configuration and the command line.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
