//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional TOML
//! file and environment variables using the `config` and `dotenvy` crates.
//! Environment variables use the `SLEEP_CYCLES` prefix and nested values are
//! separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use sleep_cycles::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//!
//! println!("Offering {} cycles", config.cycles.default);
//! ```

mod cycles;
mod display;
mod error;
mod logging;

pub use cycles::{CyclesConfig, MAX_LATENCY_MINUTES};
pub use display::DisplayConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use std::path::Path;

use serde::Deserialize;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "sleep-cycles";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Time rendering (clock convention)
    #[serde(default)]
    pub display: DisplayConfig,

    /// Cycle sets and fall-asleep latency
    #[serde(default)]
    pub cycles: CyclesConfig,

    /// Log filter
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `sleep-cycles.toml` (if present) and the environment
    ///
    /// See [`AppConfig::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads `path` when given (must exist), otherwise `sleep-cycles.toml`
    ///    in the working directory if it exists
    /// 3. Reads environment variables with `SLEEP_CYCLES` prefix, which
    ///    override file values
    /// 4. Validates the merged result
    ///
    /// # Environment Variable Format
    ///
    /// - `SLEEP_CYCLES__CYCLES__DEFAULT=3,4,5` -> `cycles.default = [3, 4, 5]`
    /// - `SLEEP_CYCLES__DISPLAY__CLOCK=12h` -> `display.clock = 12h`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if the file is missing or malformed, or
    /// if values cannot be parsed into expected types, and
    /// `ConfigError::ValidationFailed` if [`AppConfig::validate`] rejects them.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE)
                .format(config::FileFormat::Toml)
                .required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::default()
                    .prefix("SLEEP_CYCLES")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for empty cycle sets, out-of-range latency
    /// or an unparseable log filter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.cycles.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
