//! Parameters for list (bulk-read) requests.

use serde::{Deserialize, Serialize};

/// Number of listed objects that count as one seat.
pub const DEFAULT_OBJECTS_PER_SEAT: f64 = 100.0;

fn default_objects_per_seat() -> f64 {
    DEFAULT_OBJECTS_PER_SEAT
}

/// Work estimator parameters related to list requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWorkEstimatorConfig {
    /// Divisor turning an estimated result-set size into seats.
    ///
    /// Expected to be positive; not checked here. Defaults to 100.0.
    #[serde(default = "default_objects_per_seat")]
    pub objects_per_seat: f64,
}

impl Default for ListWorkEstimatorConfig {
    fn default() -> Self {
        Self {
            objects_per_seat: default_objects_per_seat(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_objects_per_seat_is_one_hundred() {
        assert_eq!(ListWorkEstimatorConfig::default().objects_per_seat, 100.0);
    }

    #[test]
    fn missing_field_takes_default() {
        let config: ListWorkEstimatorConfig = serde_json::from_str("{}").expect("parse");
        assert_eq!(config, ListWorkEstimatorConfig::default());
    }

    #[test]
    fn integer_value_is_accepted() {
        let config: ListWorkEstimatorConfig =
            serde_json::from_str(r#"{"objectsPerSeat": 250}"#).expect("parse");
        assert_eq!(config.objects_per_seat, 250.0);
    }
}
