//! Clock frozen at one instant in one fixed-offset zone.

use chrono::{FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};

use crate::domain::foundation::Instant;
use crate::ports::Clock;

/// Deterministic clock for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: Instant,
    offset: FixedOffset,
}

impl FixedClock {
    /// A clock stopped at `now`, in the zone `offset`.
    pub fn new(now: Instant, offset: FixedOffset) -> Self {
        Self { now, offset }
    }

    /// A clock stopped at `now`, in UTC.
    pub fn utc(now: Instant) -> Self {
        Self::new(now, Utc.fix())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn offset_at(&self, _instant: Instant) -> FixedOffset {
        self.offset
    }

    fn resolve_local(&self, local: NaiveDateTime) -> Option<Instant> {
        self.offset
            .from_local_datetime(&local)
            .single()
            .map(Instant::from)
    }
}
