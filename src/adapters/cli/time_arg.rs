//! Wall-clock time arguments (`22:00`, `7:30pm`, `7 AM`).

use chrono::NaiveTime;

use crate::domain::foundation::ValidationError;

/// Parses a wall-clock time.
///
/// Accepts 24-hour `H:MM`/`HH:MM` and 12-hour forms with an `am`/`pm`
/// suffix, with or without minutes. Case and inner spaces are ignored.
pub fn parse_wall_clock(input: &str) -> Result<NaiveTime, ValidationError> {
    let normalized: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();

    if normalized.is_empty() {
        return Err(ValidationError::empty_field("time"));
    }

    let (body, meridiem) = match normalized
        .strip_suffix("AM")
        .map(|body| (body, "AM"))
        .or_else(|| normalized.strip_suffix("PM").map(|body| (body, "PM")))
    {
        Some((body, meridiem)) => (body, Some(meridiem)),
        None => (normalized.as_str(), None),
    };

    let body = if body.contains(':') {
        body.to_string()
    } else {
        format!("{}:00", body)
    };

    let parsed = match meridiem {
        Some(meridiem) => NaiveTime::parse_from_str(&format!("{}{}", body, meridiem), "%I:%M%p"),
        None => NaiveTime::parse_from_str(&body, "%H:%M"),
    };

    parsed.map_err(|_| {
        ValidationError::invalid_format(
            "time",
            format!("'{}' is not a time like 22:00 or 7:30pm", input.trim()),
        )
    })
}
