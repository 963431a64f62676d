//! PlanSleepHandler - Query handler computing candidate sleep times.
//!
//! Resolves the anchor through the [`Clock`] port, picks the cycle set and
//! delegates the arithmetic to [`SleepPlan::compute`].

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;
use tracing::debug;

use crate::domain::foundation::{Instant, ValidationError};
use crate::domain::sleep::{CycleCountSet, PlanMode, SleepPlan};
use crate::ports::Clock;

/// When the calculation starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorTime {
    /// The clock's current instant.
    Now,
    /// A fully specified instant.
    Exact(Instant),
    /// The next occurrence of a local wall-clock time, today or tomorrow.
    /// A time within the current minute counts as today.
    NextLocal(NaiveTime),
}

/// Query for a sleep plan.
#[derive(Debug, Clone)]
pub struct PlanSleepQuery {
    pub mode: PlanMode,
    pub anchor: AnchorTime,
    /// Overrides the configured cycle set for the mode.
    pub cycles: Option<CycleCountSet>,
}

impl PlanSleepQuery {
    pub fn new(mode: PlanMode, anchor: AnchorTime) -> Self {
        Self {
            mode,
            anchor,
            cycles: None,
        }
    }

    pub fn with_cycles(mut self, cycles: CycleCountSet) -> Self {
        self.cycles = Some(cycles);
        self
    }
}

/// Handler settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSleepConfig {
    /// Cycle set for bed and wake planning.
    pub default_cycles: CycleCountSet,
    /// Cycle set for naps.
    pub nap_cycles: CycleCountSet,
    /// Minutes allowed for falling asleep.
    pub latency_minutes: i64,
}

impl Default for PlanSleepConfig {
    fn default() -> Self {
        Self {
            default_cycles: CycleCountSet::standard(),
            nap_cycles: CycleCountSet::nap(),
            latency_minutes: 0,
        }
    }
}

/// Error type for sleep planning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Cannot plan sleep: {0}")]
    Validation(#[from] ValidationError),
}

/// Handler for computing sleep plans.
pub struct PlanSleepHandler {
    clock: Arc<dyn Clock>,
    config: PlanSleepConfig,
}

impl PlanSleepHandler {
    pub fn new(clock: Arc<dyn Clock>, config: PlanSleepConfig) -> Self {
        Self { clock, config }
    }

    pub fn handle(&self, query: PlanSleepQuery) -> Result<SleepPlan, PlanError> {
        let anchor = self.resolve_anchor(query.anchor)?;
        let cycles = query
            .cycles
            .unwrap_or_else(|| self.configured_cycles(query.mode));

        let plan = SleepPlan::compute(query.mode, anchor, &cycles, self.config.latency_minutes)?;

        debug!(
            mode = %plan.mode,
            anchor = %plan.anchor,
            cycles = %cycles,
            options = plan.options.len(),
            "Computed sleep plan"
        );

        Ok(plan)
    }

    fn configured_cycles(&self, mode: PlanMode) -> CycleCountSet {
        match mode {
            PlanMode::WakeTimes | PlanMode::BedTimes => self.config.default_cycles.clone(),
            PlanMode::Nap => self.config.nap_cycles.clone(),
        }
    }

    fn resolve_anchor(&self, anchor: AnchorTime) -> Result<Instant, ValidationError> {
        match anchor {
            AnchorTime::Now => Ok(self.clock.now()),
            AnchorTime::Exact(instant) => Ok(instant),
            AnchorTime::NextLocal(time) => self.next_local(time),
        }
    }

    fn next_local(&self, time: NaiveTime) -> Result<Instant, ValidationError> {
        let now = self.clock.now();
        let today = self.clock.today();
        let local = today.and_time(time);

        let upcoming = match self.clock.resolve_local(local) {
            Some(candidate) => candidate.minutes_since(&now) >= 0,
            // Skipped today: compare wall-clock readings instead.
            None => {
                let local_now = now.in_zone(&self.clock.offset_at(now)).naive_local();
                local.signed_duration_since(local_now).num_minutes() >= 0
            }
        };
        if upcoming {
            return self.resolve_on(today, time);
        }

        let tomorrow = today
            .succ_opt()
            .ok_or_else(|| ValidationError::invalid_format("date", "no day after today"))?;
        self.resolve_on(tomorrow, time)
    }

    fn resolve_on(&self, date: NaiveDate, time: NaiveTime) -> Result<Instant, ValidationError> {
        let local = date.and_time(time);
        self.clock
            .resolve_local(local)
            .ok_or_else(|| ValidationError::nonexistent_local_time(local))
    }
}
