//! CycleCalculator - ideal wake-up and bed times in whole sleep cycles.

use super::cycle::{cycle_minutes, CycleCountSet};
use crate::domain::foundation::Instant;

/// Pure sleep-cycle arithmetic.
///
/// All functions are stateless and deterministic: the same anchor and cycle
/// set always produce the same candidates, in the order of the cycle set.
pub struct CycleCalculator;

impl CycleCalculator {
    /// Returns `instant` shifted forward by `minutes` (backward if negative).
    pub fn add_offset(instant: Instant, minutes: i64) -> Instant {
        instant.plus_minutes(minutes)
    }

    /// Returns `instant` shifted back by `minutes`.
    ///
    /// Equivalent to `add_offset(instant, -minutes)`.
    pub fn subtract_offset(instant: Instant, minutes: i64) -> Instant {
        instant.minus_minutes(minutes)
    }

    /// For each count `c`, `bed_time + c × 90 minutes`.
    ///
    /// # Example
    /// Bedtime 22:00 with `{4, 5, 6}` gives 04:00, 05:30 and 07:00 the next day.
    pub fn ideal_wake_times(bed_time: Instant, cycles: &CycleCountSet) -> Vec<Instant> {
        cycles
            .iter()
            .map(|count| Self::add_offset(bed_time, cycle_minutes(count)))
            .collect()
    }

    /// For each count `c`, `wake_time − c × 90 minutes`.
    ///
    /// # Example
    /// Wake time 07:00 with `{4, 5, 6}` gives 01:00, then 23:30 and 22:00 the
    /// day before.
    pub fn ideal_bed_times(wake_time: Instant, cycles: &CycleCountSet) -> Vec<Instant> {
        cycles
            .iter()
            .map(|count| Self::subtract_offset(wake_time, cycle_minutes(count)))
            .collect()
    }

    /// Wake times for a nap starting at `nap_start`, using the nap set.
    pub fn ideal_nap_wake_times(nap_start: Instant) -> Vec<Instant> {
        Self::ideal_wake_times(nap_start, &CycleCountSet::nap())
    }
}
