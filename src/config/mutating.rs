//! Parameters for mutating requests that fan out to watchers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::duration::UnitDuration;

/// Whether watch fan-out is counted for mutating requests.
pub const DEFAULT_MUTATING_ENABLED: bool = true;

/// Extra processing time attributed to each watch event.
pub const DEFAULT_EVENT_ADDITIONAL_DURATION: UnitDuration = UnitDuration::from_millis(5);

/// Number of active watchers that count as one seat.
pub const DEFAULT_WATCHES_PER_SEAT: f64 = 10.0;

const fn default_enabled() -> bool {
    DEFAULT_MUTATING_ENABLED
}

const fn default_event_additional_duration() -> UnitDuration {
    DEFAULT_EVENT_ADDITIONAL_DURATION
}

fn default_watches_per_seat() -> f64 {
    DEFAULT_WATCHES_PER_SEAT
}

/// Work estimator parameters related to watches of mutated objects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutatingWorkEstimatorConfig {
    /// Count watch fan-out cost at all. Defaults to true.
    #[serde(rename = "enable", default = "default_enabled")]
    pub enabled: bool,

    /// Extra time per watch event, kept with its external unit.
    ///
    /// Use [`event_additional_duration`](Self::event_additional_duration)
    /// for arithmetic. Defaults to 5ms.
    #[serde(
        rename = "eventAdditionalDurationMs",
        default = "default_event_additional_duration"
    )]
    pub event_additional_duration: UnitDuration,

    /// Divisor turning active watchers into seats. Defaults to 10.0.
    #[serde(default = "default_watches_per_seat")]
    pub watches_per_seat: f64,
}

impl MutatingWorkEstimatorConfig {
    /// The per-event duration as a plain [`Duration`].
    #[must_use]
    pub const fn event_additional_duration(&self) -> Duration {
        self.event_additional_duration.as_duration()
    }
}

impl Default for MutatingWorkEstimatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            event_additional_duration: default_event_additional_duration(),
            watches_per_seat: default_watches_per_seat(),
        }
    }
}
