//! Cycle set configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::PlanSleepConfig;
use crate::domain::sleep::CycleCountSet;

/// Upper bound for the fall-asleep latency, in minutes.
pub const MAX_LATENCY_MINUTES: i64 = 180;

/// Which cycle counts to offer, and how long falling asleep takes
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CyclesConfig {
    /// Cycle counts for bed and wake planning (`4,5,6`)
    #[serde(default = "CycleCountSet::standard")]
    pub default: CycleCountSet,

    /// Cycle counts for naps (`2,3`)
    #[serde(default = "CycleCountSet::nap")]
    pub nap: CycleCountSet,

    /// Minutes allowed for falling asleep
    #[serde(default)]
    pub latency_minutes: i64,
}

impl CyclesConfig {
    /// Validate cycle configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default.is_empty() {
            return Err(ValidationError::EmptyCycleSet("default"));
        }
        if self.nap.is_empty() {
            return Err(ValidationError::EmptyCycleSet("nap"));
        }
        if !(0..=MAX_LATENCY_MINUTES).contains(&self.latency_minutes) {
            return Err(ValidationError::LatencyOutOfRange {
                max: MAX_LATENCY_MINUTES,
                actual: self.latency_minutes,
            });
        }
        Ok(())
    }

    /// Settings for the sleep planning handler
    pub fn plan_config(&self) -> PlanSleepConfig {
        PlanSleepConfig {
            default_cycles: self.default.clone(),
            nap_cycles: self.nap.clone(),
            latency_minutes: self.latency_minutes,
        }
    }
}

impl Default for CyclesConfig {
    fn default() -> Self {
        Self {
            default: CycleCountSet::standard(),
            nap: CycleCountSet::nap(),
            latency_minutes: 0,
        }
    }
}
