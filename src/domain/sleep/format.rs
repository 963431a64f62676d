//! Short local time rendering (hour:minute).

use std::env;
use std::fmt;
use std::str::FromStr;

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Instant, ValidationError};

/// Territories whose short time format uses a 12-hour clock.
const TWELVE_HOUR_TERRITORIES: &[&str] = &[
    "US", "CA", "AU", "NZ", "IN", "PH", "PK", "BD", "EG", "SA", "KR",
];

/// Locale environment variables in POSIX precedence order.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_TIME", "LANG"];

/// Hour convention for rendered times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClockFormat {
    /// Follow the host locale.
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl ClockFormat {
    /// Infers the clock convention from a POSIX or BCP 47 locale tag,
    /// e.g. `en_US.UTF-8` or `en-GB`.
    ///
    /// `C`, `POSIX` and unknown territories use 24-hour time.
    pub fn from_locale(tag: &str) -> Self {
        let base = tag.split(|c: char| c == '.' || c == '@').next().unwrap_or_default();
        let mut parts = base.split(|c: char| c == '_' || c == '-');
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let territory = parts.next().map(str::to_ascii_uppercase);

        let twelve_hour = match (language.as_str(), territory.as_deref()) {
            ("fr", Some("CA")) => false,
            (_, Some(territory)) => TWELVE_HOUR_TERRITORIES.contains(&territory),
            ("en", None) => true,
            _ => false,
        };

        if twelve_hour {
            ClockFormat::TwelveHour
        } else {
            ClockFormat::TwentyFourHour
        }
    }

    /// Resolves `Auto` against the given locale tag; concrete formats are kept.
    pub fn resolve_with(self, locale: Option<&str>) -> Self {
        match self {
            ClockFormat::Auto => locale
                .map(Self::from_locale)
                .unwrap_or(ClockFormat::TwentyFourHour),
            concrete => concrete,
        }
    }

    /// Resolves `Auto` against the host locale.
    pub fn resolve(self) -> Self {
        self.resolve_with(host_locale().as_deref())
    }

    fn pattern(self) -> &'static str {
        match self {
            ClockFormat::TwelveHour => "%I:%M %p",
            ClockFormat::TwentyFourHour | ClockFormat::Auto => "%H:%M",
        }
    }
}

impl fmt::Display for ClockFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClockFormat::Auto => "auto",
            ClockFormat::TwelveHour => "12h",
            ClockFormat::TwentyFourHour => "24h",
        };
        f.write_str(s)
    }
}

impl FromStr for ClockFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ClockFormat::Auto),
            "12h" | "12" => Ok(ClockFormat::TwelveHour),
            "24h" | "24" => Ok(ClockFormat::TwentyFourHour),
            other => Err(ValidationError::invalid_format(
                "clock",
                format!("expected auto, 12h or 24h, got '{}'", other),
            )),
        }
    }
}

/// The first non-empty locale variable from the environment.
pub fn host_locale() -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty())
}

/// Renders `instant` as hour:minute in the host zone and locale convention.
pub fn format_time(instant: Instant) -> String {
    format_time_in(instant, &Local, ClockFormat::Auto.resolve())
}

/// Renders `instant` as hour:minute in `zone` using `format`.
///
/// An unresolved `Auto` renders as 24-hour.
pub fn format_time_in<Tz>(instant: Instant, zone: &Tz, format: ClockFormat) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant.in_zone(zone).format(format.pattern()).to_string()
}
