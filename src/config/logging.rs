//! Logging configuration and initialization.
//!
//! A config file may carry a `[logging]` section next to the estimator
//! settings. The estimator parser ignores it; [`LoggingConfig::from_section`]
//! reads it.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use super::ConfigFormat;
use crate::error::{ConfigError, Result};

fn default_level() -> String {
    "warn".into()
}

/// Log line layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
///
/// `RUST_LOG` takes precedence over `level` when set. Output goes to stderr
/// so rendered configs on stdout stay machine-readable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive such as `info` or `work_estimator=debug`. Defaults to `warn`.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Deserialize)]
struct LoggingSection {
    #[serde(default)]
    logging: Option<LoggingConfig>,
}

impl LoggingConfig {
    /// Read the optional `logging` section of a config document.
    pub fn from_section(content: &str, format: ConfigFormat) -> Result<Option<Self>> {
        let section: LoggingSection = match format {
            ConfigFormat::Toml => toml::from_str(content).map_err(ConfigError::ParseToml)?,
            ConfigFormat::Json => serde_json::from_str(content).map_err(ConfigError::ParseJson)?,
        };
        Ok(section.logging)
    }

    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format {
            LogFormat::Json => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            LogFormat::Pretty => {
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
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}
