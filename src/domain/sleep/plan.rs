//! SleepPlan read model - candidate times for one anchor.

use serde::{Deserialize, Serialize};
use std::fmt;

use chrono::TimeZone;

use super::calculator::CycleCalculator;
use super::cycle::{cycle_minutes, CycleCountSet, CYCLE_MINUTES};
use super::format::{format_time_in, ClockFormat};
use crate::domain::foundation::{Instant, ValidationError};

/// Which way the calculation runs from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanMode {
    /// Anchor is a bedtime; candidates are wake-up times.
    WakeTimes,
    /// Anchor is a wake-up time; candidates are bedtimes.
    BedTimes,
    /// Anchor is the start of a nap; candidates are wake-up times.
    Nap,
}

impl PlanMode {
    /// Whether candidates lie after the anchor.
    fn runs_forward(&self) -> bool {
        !matches!(self, PlanMode::BedTimes)
    }
}

impl fmt::Display for PlanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlanMode::WakeTimes => "wake_times",
            PlanMode::BedTimes => "bed_times",
            PlanMode::Nap => "nap",
        };
        f.write_str(s)
    }
}

/// One candidate time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepOption {
    pub cycles: i32,
    pub at: Instant,
    /// Minutes asleep (`cycles × 90`).
    pub sleep_minutes: i64,
    /// Minutes in bed, including time spent falling asleep.
    pub in_bed_minutes: i64,
}

/// Candidate times for one anchor, in cycle-set order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepPlan {
    pub mode: PlanMode,
    pub anchor: Instant,
    pub latency_minutes: i64,
    pub options: Vec<SleepOption>,
}

impl SleepPlan {
    /// Computes the plan for `anchor`.
    ///
    /// `latency_minutes` is the time allowed for falling asleep. Wake-up
    /// candidates count cycles from `anchor + latency`; bedtime candidates are
    /// moved earlier by `latency`. With zero latency the candidates are exactly
    /// the [`CycleCalculator`] results.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` when the latency or a cycle count
    /// would move a candidate outside the representable date range.
    pub fn compute(
        mode: PlanMode,
        anchor: Instant,
        cycles: &CycleCountSet,
        latency_minutes: i64,
    ) -> Result<Self, ValidationError> {
        let forward = mode.runs_forward();

        let start = shift(anchor, latency_minutes, forward).ok_or_else(|| {
            let (min, max) = reach(anchor, forward);
            ValidationError::out_of_range("latency_minutes", min, max, latency_minutes)
        })?;

        let (min, max) = reach(start, forward);
        if let Some(count) = cycles
            .iter()
            .find(|&count| !(min..=max).contains(&cycle_minutes(count)))
        {
            return Err(ValidationError::out_of_range(
                "cycles",
                min / CYCLE_MINUTES,
                max / CYCLE_MINUTES,
                i64::from(count),
            ));
        }

        let instants = if forward {
            CycleCalculator::ideal_wake_times(start, cycles)
        } else {
            CycleCalculator::ideal_bed_times(start, cycles)
        };

        let options = cycles
            .iter()
            .zip(instants)
            .map(|(count, at)| SleepOption {
                cycles: count,
                at,
                sleep_minutes: cycle_minutes(count),
                in_bed_minutes: cycle_minutes(count) + latency_minutes,
            })
            .collect();

        Ok(Self {
            mode,
            anchor,
            latency_minutes,
            options,
        })
    }

    /// Candidate instants in order.
    pub fn instants(&self) -> Vec<Instant> {
        self.options.iter().map(|option| option.at).collect()
    }

    /// Renders every candidate as hour:minute in `zone`.
    pub fn format_times<Tz>(&self, zone: &Tz, format: ClockFormat) -> Vec<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.options
            .iter()
            .map(|option| format_time_in(option.at, zone, format))
            .collect()
    }
}

fn shift(from: Instant, minutes: i64, forward: bool) -> Option<Instant> {
    if forward {
        from.checked_plus_minutes(minutes)
    } else {
        from.checked_minus_minutes(minutes)
    }
}

/// Offsets `shift` accepts from `from` in the given direction.
fn reach(from: Instant, forward: bool) -> (i64, i64) {
    let (back, ahead) = from.minute_headroom();
    if forward {
        (-back, ahead)
    } else {
        (-ahead, back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn at(rfc3339: &str) -> Instant {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().into()
    }

    #[test]
    fn zero_latency_matches_calculator() {
        let anchor = at("2024-01-15T22:00:00Z");
        let cycles = CycleCountSet::standard();
        let plan = SleepPlan::compute(PlanMode::WakeTimes, anchor, &cycles, 0).unwrap();

        assert_eq!(plan.instants(), CycleCalculator::ideal_wake_times(anchor, &cycles));
    }

    #[test]
    fn wake_plan_counts_cycles_after_latency() {
        let plan = SleepPlan::compute(
            PlanMode::WakeTimes,
            at("2024-01-15T22:00:00Z"),
            &CycleCountSet::new(vec![5]),
            15,
        ).unwrap();

        assert_eq!(plan.options[0].at, at("2024-01-16T05:45:00Z"));
        assert_eq!(plan.options[0].sleep_minutes, 450);
        assert_eq!(plan.options[0].in_bed_minutes, 465);
    }

    #[test]
    fn bed_plan_moves_bedtime_earlier_by_latency() {
        let plan = SleepPlan::compute(
            PlanMode::BedTimes,
            at("2024-01-16T07:00:00Z"),
            &CycleCountSet::new(vec![6]),
            15,
        ).unwrap();

        assert_eq!(plan.options[0].at, at("2024-01-15T21:45:00Z"));
    }

    #[test]
    fn nap_plan_uses_wake_direction() {
        let plan = SleepPlan::compute(
            PlanMode::Nap,
            at("2024-01-15T14:00:00Z"),
            &CycleCountSet::nap(),
            0,
        ).unwrap();

        assert_eq!(
            plan.format_times(&Utc, ClockFormat::TwentyFourHour),
            vec!["17:00", "18:30"]
        );
    }

    #[test]
    fn options_keep_cycle_order() {
        let plan = SleepPlan::compute(
            PlanMode::BedTimes,
            at("2024-01-16T07:00:00Z"),
            &CycleCountSet::new(vec![5, 6, 4]),
            0,
        ).unwrap();

        let cycles: Vec<i32> = plan.options.iter().map(|o| o.cycles).collect();
        assert_eq!(cycles, vec![5, 6, 4]);
    }

    #[test]
    fn cycle_count_past_date_range_is_out_of_range() {
        let result = SleepPlan::compute(
            PlanMode::WakeTimes,
            at("2024-01-15T22:00:00Z"),
            &CycleCountSet::new(vec![4, 2_000_000_000]),
            0,
        );

        match result {
            Err(ValidationError::OutOfRange {
                field, max, actual, ..
            }) => {
                assert_eq!(field, "cycles");
                assert_eq!(actual, 2_000_000_000);
                assert!(max > 1_000_000_000 && max < actual);
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn negative_cycle_count_past_date_range_is_out_of_range_for_bedtimes() {
        let result = SleepPlan::compute(
            PlanMode::BedTimes,
            at("2024-01-16T07:00:00Z"),
            &CycleCountSet::new(vec![-2_000_000_000]),
            0,
        );

        assert!(matches!(
            result,
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "cycles"
        ));
    }

    #[test]
    fn latency_past_date_range_is_out_of_range() {
        let result = SleepPlan::compute(
            PlanMode::BedTimes,
            at("2024-01-16T07:00:00Z"),
            &CycleCountSet::standard(),
            i64::MAX,
        );

        assert!(matches!(
            result,
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "latency_minutes"
        ));
    }

    #[test]
    fn plan_serializes_mode_in_snake_case() {
        let plan = SleepPlan::compute(
            PlanMode::WakeTimes,
            at("2024-01-15T22:00:00Z"),
            &CycleCountSet::new(vec![4]),
            0,
        ).unwrap();

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["mode"], "wake_times");
        assert_eq!(json["options"][0]["cycles"], 4);
        assert_eq!(json["options"][0]["at"], "2024-01-16T04:00:00Z");
    }
}
