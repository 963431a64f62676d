//! Instant value object for immutable absolute points in time.

use std::fmt;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Immutable absolute point in time, stored as UTC.
///
/// Local wall-clock rendering happens only when an instant is viewed through
/// a time zone (see [`Instant::in_zone`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// Creates an instant for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates an instant from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Views this instant as a wall-clock reading in `zone`.
    pub fn in_zone<Tz: TimeZone>(&self, zone: &Tz) -> DateTime<Tz> {
        self.0.with_timezone(zone)
    }

    /// Returns a new instant shifted by `minutes`. Negative values shift backward.
    ///
    /// # Panics
    ///
    /// Panics if the result falls outside chrono's representable range.
    /// Use [`Instant::checked_plus_minutes`] when the offset is untrusted.
    pub fn plus_minutes(&self, minutes: i64) -> Self {
        Self(self.0 + Duration::minutes(minutes))
    }

    /// Returns a new instant shifted back by `minutes`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`Instant::plus_minutes`].
    pub fn minus_minutes(&self, minutes: i64) -> Self {
        Self(self.0 - Duration::minutes(minutes))
    }

    /// Shifts by `minutes`, returning `None` on overflow.
    pub fn checked_plus_minutes(&self, minutes: i64) -> Option<Self> {
        let delta = Duration::try_minutes(minutes)?;
        self.0.checked_add_signed(delta).map(Self)
    }

    /// Shifts back by `minutes`, returning `None` on overflow.
    pub fn checked_minus_minutes(&self, minutes: i64) -> Option<Self> {
        let delta = Duration::try_minutes(minutes)?;
        self.0.checked_sub_signed(delta).map(Self)
    }

    /// Whole minutes this instant can move backward and forward, respectively,
    /// before leaving chrono's representable range.
    pub fn minute_headroom(&self) -> (i64, i64) {
        let back = self.0.signed_duration_since(DateTime::<Utc>::MIN_UTC);
        let ahead = DateTime::<Utc>::MAX_UTC.signed_duration_since(self.0);
        (back.num_minutes(), ahead.num_minutes())
    }

    /// Whole minutes from `earlier` to this instant.
    ///
    /// Negative if `earlier` is after self.
    pub fn minutes_since(&self, earlier: &Instant) -> i64 {
        self.0.signed_duration_since(earlier.0).num_minutes()
    }

    /// Checks if this instant is before another.
    pub fn is_before(&self, other: &Instant) -> bool {
        self.0 < other.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(dt: DateTime<Tz>) -> Self {
        Self(dt.with_timezone(&Utc))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
