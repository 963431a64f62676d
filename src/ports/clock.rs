//! Clock port - current time and the host time zone.
//!
//! The application layer never reads the system clock directly. Going through
//! this port keeps sleep planning deterministic under test.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime};

use crate::domain::foundation::Instant;

/// Source of "now" and of local wall-clock conversions.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;

    /// UTC offset of the clock's zone in effect at `instant`.
    fn offset_at(&self, instant: Instant) -> FixedOffset;

    /// Maps a local wall-clock reading to an instant.
    ///
    /// Ambiguous readings (a DST fold) resolve to the earliest instant.
    /// Readings skipped by a DST gap return `None`.
    fn resolve_local(&self, local: NaiveDateTime) -> Option<Instant>;

    /// The local calendar date right now.
    fn today(&self) -> NaiveDate {
        let now = self.now();
        now.in_zone(&self.offset_at(now)).date_naive()
    }
}
