use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Limits applied by callers before handing a window to the recurrence engine.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Window length used when a request names no end date.
    pub default_window_days: u32,
    /// Longest window a single request may ask for.
    pub max_window_days: u32,
}

impl CalendarConfig {
    /// ## Summary
    /// Checks that the configured window lengths are usable together.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if either length is zero or the default
    /// exceeds the maximum.
    pub fn validate(&self) -> CoreResult<()> {
        if self.default_window_days == 0 || self.max_window_days == 0 {
            return Err(CoreError::ConfigError(
                "calendar window lengths must be positive".to_string(),
            ));
        }
        if self.default_window_days > self.max_window_days {
            return Err(CoreError::ConfigError(format!(
                "calendar.default_window_days ({}) exceeds calendar.max_window_days ({})",
                self.default_window_days, self.max_window_days
            )));
        }
        Ok(())
    }
}

impl Settings {
    /// ## Summary
    /// Builder pre-populated with the defaults every source overrides.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("calendar.default_window_days", 28)?
            .set_default("calendar.max_window_days", 3660)?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`
    /// into a `Settings`. Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the calendar limits fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env, e.g. PKV_CALENDAR__MAX_WINDOW_DAYS=400
            .add_source(
                config::Environment::with_prefix("PKV")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.calendar.validate()?;
        tracing::trace!(settings = ?settings, "Settings loaded");

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
