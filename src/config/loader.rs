//! Reading and writing work estimator configuration files.
//!
//! Missing fields take their defaults one by one. A missing nested section
//! stays `None` after parsing; [`WorkEstimatorConfig::load`] then fills it in.

use std::path::Path;

use tracing::debug;

use super::WorkEstimatorConfig;
use crate::error::{ConfigError, Result};

/// Supported file formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension. Anything but `.json` is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl WorkEstimatorConfig {
    /// Load a config file and fill absent sections with defaults.
    ///
    /// No bounds are checked; call [`crate::validation::validate`] for that.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::read(path)?.with_defaults())
    }

    /// Load a config file as written, leaving absent sections as `None`.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let format = ConfigFormat::from_path(path);
        let config = Self::parse(&content, format)?;

        debug!(
            path = %path.display(),
            ?format,
            minimum_seats = config.minimum_seats,
            maximum_seats = config.maximum_seats,
            has_list_config = config.list_config.is_some(),
            has_mutating_config = config.mutating_config.is_some(),
            "loaded work estimator config"
        );

        Ok(config)
    }

    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Toml => Self::from_toml_str(content),
            ConfigFormat::Json => Self::from_json_str(content),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::ParseToml)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content).map_err(ConfigError::ParseJson)?)
    }

    pub fn render(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Toml => self.to_toml_string(),
            ConfigFormat::Json => self.to_json_string(),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self).map_err(ConfigError::SerializeToml)?)
    }

    /// Pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(ConfigError::SerializeJson)?)
    }
}
