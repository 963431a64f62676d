//! Plan rendering for the terminal (text or JSON).

use serde::Serialize;

use crate::domain::foundation::Instant;
use crate::domain::sleep::{format_time_in, ClockFormat, PlanMode, SleepPlan};
use crate::ports::Clock;

/// JSON shape: the plan plus its rendered times.
#[derive(Debug, Serialize)]
struct PlanOutput<'a> {
    #[serde(flatten)]
    plan: &'a SleepPlan,
    anchor_formatted: String,
    formatted: Vec<String>,
}

/// Renders `instant` in the clock's zone as it stands at that instant.
pub fn local_time(clock: &dyn Clock, instant: Instant, format: ClockFormat) -> String {
    format_time_in(instant, &clock.offset_at(instant), format)
}

/// Human-readable listing, one candidate per line.
pub fn render_text(plan: &SleepPlan, clock: &dyn Clock, format: ClockFormat) -> String {
    let anchor = local_time(clock, plan.anchor, format);
    let mut out = match plan.mode {
        PlanMode::WakeTimes => format!("If you go to bed at {}, try to wake up at:\n", anchor),
        PlanMode::BedTimes => format!("To wake up at {}, try to go to bed at:\n", anchor),
        PlanMode::Nap => format!("Napping at {}? Set an alarm for:\n", anchor),
    };

    for option in &plan.options {
        let unit = if option.cycles == 1 { "cycle" } else { "cycles" };
        out.push_str(&format!(
            "  {}  {} {:<6}  {}\n",
            local_time(clock, option.at, format),
            option.cycles,
            unit,
            hours_minutes(option.sleep_minutes),
        ));
    }

    if plan.latency_minutes > 0 {
        out.push_str(&format!(
            "(includes {} minutes to fall asleep)\n",
            plan.latency_minutes
        ));
    }

    out
}

/// Pretty JSON with rendered times alongside the raw instants.
pub fn render_json(
    plan: &SleepPlan,
    clock: &dyn Clock,
    format: ClockFormat,
) -> Result<String, serde_json::Error> {
    let output = PlanOutput {
        plan,
        anchor_formatted: local_time(clock, plan.anchor, format),
        formatted: plan
            .options
            .iter()
            .map(|option| local_time(clock, option.at, format))
            .collect(),
    };
    serde_json::to_string_pretty(&output)
}

fn hours_minutes(total: i64) -> String {
    let sign = if total < 0 { "-" } else { "" };
    let abs = total.unsigned_abs();
    format!("{}{}h{:02}m", sign, abs / 60, abs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedClock;
    use crate::domain::sleep::CycleCountSet;
    use chrono::{DateTime, FixedOffset};

    fn at(rfc3339: &str) -> Instant {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().into()
    }

    fn utc_clock() -> FixedClock {
        FixedClock::utc(at("2024-01-15T12:00:00Z"))
    }

    #[test]
    fn text_lists_wake_times() {
        let plan = SleepPlan::compute(
            PlanMode::WakeTimes,
            at("2024-01-15T22:00:00Z"),
            &CycleCountSet::standard(),
            0,
        ).unwrap();

        let text = render_text(&plan, &utc_clock(), ClockFormat::TwentyFourHour);
        assert_eq!(
            text,
            "If you go to bed at 22:00, try to wake up at:\n\
             \x20 04:00  4 cycles  6h00m\n\
             \x20 05:30  5 cycles  7h30m\n\
             \x20 07:00  6 cycles  9h00m\n"
        );
    }

    #[test]
    fn text_uses_twelve_hour_clock() {
        let plan = SleepPlan::compute(
            PlanMode::BedTimes,
            at("2024-01-16T07:00:00Z"),
            &CycleCountSet::new(vec![5]),
            0,
        ).unwrap();

        let text = render_text(&plan, &utc_clock(), ClockFormat::TwelveHour);
        assert!(text.starts_with("To wake up at 07:00 AM, try to go to bed at:\n"));
        assert!(text.contains("11:30 PM  5 cycles  7h30m"));
    }

    #[test]
    fn text_mentions_latency() {
        let plan = SleepPlan::compute(
            PlanMode::Nap,
            at("2024-01-15T14:00:00Z"),
            &CycleCountSet::new(vec![1]),
            10,
        ).unwrap();

        let text = render_text(&plan, &utc_clock(), ClockFormat::TwentyFourHour);
        assert!(text.contains("15:40  1 cycle   1h30m"));
        assert!(text.ends_with("(includes 10 minutes to fall asleep)\n"));
    }

    #[test]
    fn text_renders_in_clock_zone() {
        let plan = SleepPlan::compute(
            PlanMode::Nap,
            at("2024-01-15T13:00:00Z"),
            &CycleCountSet::nap(),
            0,
        ).unwrap();
        let berlin = FixedClock::new(at("2024-01-15T12:00:00Z"), FixedOffset::east_opt(3600).unwrap());

        let text = render_text(&plan, &berlin, ClockFormat::TwentyFourHour);
        assert!(text.starts_with("Napping at 14:00?"));
        assert!(text.contains("17:00"));
        assert!(text.contains("18:30"));
    }

    #[test]
    fn json_includes_formatted_times() {
        let plan = SleepPlan::compute(
            PlanMode::WakeTimes,
            at("2024-01-15T22:00:00Z"),
            &CycleCountSet::new(vec![4, 5]),
            0,
        ).unwrap();

        let json = render_json(&plan, &utc_clock(), ClockFormat::TwentyFourHour).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "wake_times");
        assert_eq!(value["anchor_formatted"], "22:00");
        assert_eq!(value["formatted"], serde_json::json!(["04:00", "05:30"]));
        assert_eq!(value["options"][1]["sleep_minutes"], 450);
    }

    #[test]
    fn hours_minutes_handles_negative_totals() {
        assert_eq!(hours_minutes(450), "7h30m");
        assert_eq!(hours_minutes(0), "0h00m");
        assert_eq!(hours_minutes(-90), "-1h30m");
    }
}
