//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveTime;
use clap::{Parser, Subcommand};

use super::time_arg::parse_wall_clock;
use crate::application::{AnchorTime, PlanSleepQuery};
use crate::domain::sleep::{ClockFormat, CycleCountSet, PlanMode};

#[derive(Debug, Parser)]
#[command(name = "sleep-cycles")]
#[command(version, about = "Find bed and wake-up times that fit whole 90-minute sleep cycles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Cycle counts to try, in order (e.g. 4,5,6)
    #[arg(long, global = true, value_name = "COUNTS", allow_hyphen_values = true)]
    pub cycles: Option<CycleCountSet>,

    /// Clock convention: auto, 12h or 24h
    #[arg(long, global = true, value_name = "FORMAT")]
    pub clock: Option<ClockFormat>,

    /// Print the plan as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read settings from this TOML file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// I'm going to bed at TIME: when should I wake up?
    BedAt {
        /// Bedtime, e.g. 22:30 or 10:30pm
        #[arg(value_parser = parse_wall_clock)]
        time: NaiveTime,
    },
    /// I need to wake up at TIME: when should I go to bed?
    WakeAt {
        /// Wake-up time, e.g. 07:00 or 7am
        #[arg(value_parser = parse_wall_clock)]
        time: NaiveTime,
    },
    /// I'm going to bed now: when should I wake up?
    Now,
    /// Nap starting at TIME (default: now): when should I wake up?
    Nap {
        /// Nap start, e.g. 14:00
        #[arg(value_parser = parse_wall_clock)]
        time: Option<NaiveTime>,
    },
}

impl Cli {
    /// The planning query this invocation asks for.
    pub fn query(&self) -> PlanSleepQuery {
        let (mode, anchor) = match &self.command {
            Command::BedAt { time } => (PlanMode::WakeTimes, AnchorTime::NextLocal(*time)),
            Command::WakeAt { time } => (PlanMode::BedTimes, AnchorTime::NextLocal(*time)),
            Command::Now => (PlanMode::WakeTimes, AnchorTime::Now),
            Command::Nap { time } => (
                PlanMode::Nap,
                time.map(AnchorTime::NextLocal).unwrap_or(AnchorTime::Now),
            ),
        };

        let query = PlanSleepQuery::new(mode, anchor);
        match &self.cycles {
            Some(cycles) => query.with_cycles(cycles.clone()),
            None => query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sleep-cycles").chain(args.iter().copied())).unwrap()
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn bed_at_plans_wake_times() {
        let query = parse(&["bed-at", "22:00"]).query();
        assert_eq!(query.mode, PlanMode::WakeTimes);
        assert_eq!(query.anchor, AnchorTime::NextLocal(hm(22, 0)));
        assert_eq!(query.cycles, None);
    }

    #[test]
    fn wake_at_plans_bed_times() {
        let query = parse(&["wake-at", "7am"]).query();
        assert_eq!(query.mode, PlanMode::BedTimes);
        assert_eq!(query.anchor, AnchorTime::NextLocal(hm(7, 0)));
    }

    #[test]
    fn now_anchors_on_current_time() {
        let query = parse(&["now"]).query();
        assert_eq!(query.mode, PlanMode::WakeTimes);
        assert_eq!(query.anchor, AnchorTime::Now);
    }

    #[test]
    fn nap_defaults_to_now() {
        assert_eq!(parse(&["nap"]).query().anchor, AnchorTime::Now);
        assert_eq!(
            parse(&["nap", "14:00"]).query().anchor,
            AnchorTime::NextLocal(hm(14, 0))
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["bed-at", "23:00", "--cycles", "5,6", "--clock", "12h", "--json"]);
        assert_eq!(cli.query().cycles, Some(CycleCountSet::new(vec![5, 6])));
        assert_eq!(cli.clock, Some(ClockFormat::TwelveHour));
        assert!(cli.json);
    }

    #[test]
    fn invalid_time_is_rejected() {
        let result = Cli::try_parse_from(["sleep-cycles", "bed-at", "late"]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_cycles_are_rejected() {
        let result = Cli::try_parse_from(["sleep-cycles", "now", "--cycles", "four"]);
        assert!(result.is_err());
    }
}
