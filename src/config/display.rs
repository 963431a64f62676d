//! Display configuration

use serde::Deserialize;

use crate::domain::sleep::ClockFormat;

/// How candidate times are rendered
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    /// `auto` (host locale), `12h` or `24h`
    #[serde(default)]
    pub clock: ClockFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_defaults_to_auto() {
        assert_eq!(DisplayConfig::default().clock, ClockFormat::Auto);
    }

    #[test]
    fn test_display_deserialization() {
        let config: DisplayConfig = serde_json::from_str(r#"{ "clock": "24h" }"#).unwrap();
        assert_eq!(config.clock, ClockFormat::TwentyFourHour);
    }
}
