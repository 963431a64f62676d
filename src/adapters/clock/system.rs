//! Clock backed by the host system time and local zone.

use chrono::{FixedOffset, Local, NaiveDateTime, Offset, TimeZone};

use crate::domain::foundation::Instant;
use crate::ports::Clock;

/// Reads the system clock; converts through `chrono::Local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn offset_at(&self, instant: Instant) -> FixedOffset {
        instant.in_zone(&Local).offset().fix()
    }

    fn resolve_local(&self, local: NaiveDateTime) -> Option<Instant> {
        Local
            .from_local_datetime(&local)
            .earliest()
            .map(Instant::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn now_tracks_system_time() {
        let clock = SystemClock::new();
        let before = Instant::now();
        let now = clock.now();
        assert!(!now.is_before(&before));
    }

    #[test]
    fn resolve_local_round_trips_through_offset() {
        let clock = SystemClock::new();
        // Midday readings are never inside a DST transition.
        let local = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();

        let instant = clock.resolve_local(local).unwrap();
        let wall = instant.in_zone(&clock.offset_at(instant));
        assert_eq!(wall.hour(), 12);
        assert_eq!(wall.minute(), 30);
    }
}
