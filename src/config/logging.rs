//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ConfigError;

/// Log formats understood by [`LoggingConfig::init`].
pub const LOG_FORMATS: &[&str] = &["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        self.validate_level()?;
        if !LOG_FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!(
                    "unknown format '{}' (expected one of: {})",
                    self.format,
                    LOG_FORMATS.join(", ")
                ),
            });
        }
        Ok(())
    }

    /// A bare word must be a level name, not a target.
    fn validate_level(&self) -> Result<(), ConfigError> {
        let level = self.level.trim();
        let parsed = if level.contains('=') || level.contains(',') {
            EnvFilter::try_new(level).map(|_| ()).map_err(|e| e.to_string())
        } else {
            level
                .parse::<LevelFilter>()
                .map(|_| ())
                .map_err(|e| e.to_string())
        };

        parsed.map_err(|reason| ConfigError::InvalidValue {
            field: "logging.level",
            reason: format!("'{}': {reason}", self.level),
        })
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr; stdout carries rendered node configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}
