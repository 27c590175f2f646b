//! Work estimator configuration.
//!
//! [`WorkEstimatorConfig`] holds the parameters an estimator uses to turn a
//! request into a number of seats. It is plain data: construction never
//! fails and no bounds are checked. See [`crate::validation`] for the opt-in
//! checks.

use serde::{Deserialize, Serialize};

mod duration;
mod list;
mod loader;
mod logging;
mod mutating;

pub use duration::{DurationUnit, UnitDuration};
pub use list::{ListWorkEstimatorConfig, DEFAULT_OBJECTS_PER_SEAT};
pub use loader::ConfigFormat;
pub use logging::{LogFormat, LoggingConfig};
pub use mutating::{
    MutatingWorkEstimatorConfig, DEFAULT_EVENT_ADDITIONAL_DURATION, DEFAULT_MUTATING_ENABLED,
    DEFAULT_WATCHES_PER_SEAT,
};

/// Minimum number of seats a request occupies.
pub const DEFAULT_MINIMUM_SEATS: u64 = 1;

/// Maximum number of seats a request can occupy.
///
/// Seat histograms use this as their upper bucket, so a change here should
/// be mirrored in those buckets.
pub const DEFAULT_MAXIMUM_SEATS: u64 = 10;

const fn default_minimum_seats() -> u64 {
    DEFAULT_MINIMUM_SEATS
}

const fn default_maximum_seats() -> u64 {
    DEFAULT_MAXIMUM_SEATS
}

/// Work estimator parameters.
///
/// Expected to satisfy `1 <= minimum_seats <= maximum_seats`; the estimator
/// clamps its result into that range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkEstimatorConfig {
    /// Floor on computed seats. Defaults to 1.
    #[serde(default = "default_minimum_seats")]
    pub minimum_seats: u64,

    /// Ceiling on computed seats. Defaults to 10.
    #[serde(default = "default_maximum_seats")]
    pub maximum_seats: u64,

    /// List request parameters. `None` means the embedded defaults apply.
    #[serde(
        rename = "listWorkEstimatorConfig",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub list_config: Option<ListWorkEstimatorConfig>,

    /// Mutating request parameters. `None` means the embedded defaults apply.
    #[serde(
        rename = "mutatingWorkEstimatorConfig",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mutating_config: Option<MutatingWorkEstimatorConfig>,
}

impl WorkEstimatorConfig {
    /// Effective list parameters.
    #[must_use]
    pub fn list(&self) -> ListWorkEstimatorConfig {
        self.list_config.unwrap_or_default()
    }

    /// Effective mutating parameters.
    #[must_use]
    pub fn mutating(&self) -> MutatingWorkEstimatorConfig {
        self.mutating_config.unwrap_or_default()
    }

    /// Replace every absent sub-config with its defaults.
    #[must_use]
    pub fn with_defaults(self) -> Self {
        Self {
            list_config: Some(self.list()),
            mutating_config: Some(self.mutating()),
            ..self
        }
    }
}

impl Default for WorkEstimatorConfig {
    fn default() -> Self {
        Self {
            minimum_seats: default_minimum_seats(),
            maximum_seats: default_maximum_seats(),
            list_config: Some(ListWorkEstimatorConfig::default()),
            mutating_config: Some(MutatingWorkEstimatorConfig::default()),
        }
    }
}

/// Build a fully populated configuration with baseline values.
#[must_use]
pub fn default_work_estimator_config() -> WorkEstimatorConfig {
    WorkEstimatorConfig::default()
}
