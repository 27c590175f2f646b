use thiserror::Error;

/// Errors produced when reading a textual duration such as `"5ms"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,

    #[error("negative duration '{0}'")]
    Negative(String),

    #[error("missing unit in duration '{0}'")]
    MissingUnit(String),

    #[error("unknown unit '{unit}' in duration '{input}'")]
    UnknownUnit { unit: String, input: String },

    #[error("invalid number in duration '{0}'")]
    InvalidNumber(String),

    #[error("duration '{0}' is out of range")]
    Overflow(String),
}

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse TOML config: {0}")]
    ParseToml(#[source] toml::de::Error),

    #[error("failed to parse JSON config: {0}")]
    ParseJson(#[source] serde_json::Error),

    #[error("failed to serialize config as TOML: {0}")]
    SerializeToml(#[source] toml::ser::Error),

    #[error("failed to serialize config as JSON: {0}")]
    SerializeJson(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
