//! Opt-in contract checks for [`WorkEstimatorConfig`].
//!
//! Nothing in the model or the loader calls these. Owners that want to reject
//! bad bounds before handing a config to an estimator do so explicitly.

use crate::config::WorkEstimatorConfig;
use crate::error::ConfigError;

/// Return the first contract violation, if any.
pub fn validate(config: &WorkEstimatorConfig) -> Result<(), ConfigError> {
    match violations(config).into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}

/// Collect every contract violation in field order.
///
/// Absent sub-configs resolve to defaults, which always pass.
#[must_use]
pub fn violations(config: &WorkEstimatorConfig) -> Vec<ConfigError> {
    let mut found = Vec::new();

    if config.minimum_seats < 1 {
        found.push(ConfigError::InvalidValue {
            field: "minimumSeats",
            reason: "must be at least 1".into(),
        });
    }
    if config.minimum_seats > config.maximum_seats {
        found.push(ConfigError::InvalidValue {
            field: "maximumSeats",
            reason: format!(
                "{} is below minimumSeats ({})",
                config.maximum_seats, config.minimum_seats
            ),
        });
    }
    if let Some(list) = config.list_config {
        if let Some(reason) = positive_divisor(list.objects_per_seat) {
            found.push(ConfigError::InvalidValue {
                field: "objectsPerSeat",
                reason,
            });
        }
    }
    if let Some(mutating) = config.mutating_config {
        if let Some(reason) = positive_divisor(mutating.watches_per_seat) {
            found.push(ConfigError::InvalidValue {
                field: "watchesPerSeat",
                reason,
            });
        }
    }

    found
}

fn positive_divisor(value: f64) -> Option<String> {
    if value.is_finite() && value > 0.0 {
        None
    } else {
        Some(format!("must be a positive finite number, got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ListWorkEstimatorConfig, MutatingWorkEstimatorConfig};

    fn fields(config: &WorkEstimatorConfig) -> Vec<&'static str> {
        violations(config)
            .into_iter()
            .map(|violation| match violation {
                ConfigError::InvalidValue { field, .. } => field,
                other => panic!("unexpected error {other}"),
            })
            .collect()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&WorkEstimatorConfig::default()).is_ok());
    }

    #[test]
    fn config_without_sections_is_valid() {
        let config = WorkEstimatorConfig {
            list_config: None,
            mutating_config: None,
            ..WorkEstimatorConfig::default()
        };
        assert!(violations(&config).is_empty());
    }

    #[test]
    fn zero_minimum_seats_is_rejected() {
        let config = WorkEstimatorConfig {
            minimum_seats: 0,
            ..WorkEstimatorConfig::default()
        };
        assert_eq!(fields(&config), vec!["minimumSeats"]);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let config = WorkEstimatorConfig {
            minimum_seats: 5,
            maximum_seats: 4,
            ..WorkEstimatorConfig::default()
        };
        let err = validate(&config).expect_err("inverted bounds");
        assert_eq!(
            err.to_string(),
            "invalid value for maximumSeats: 4 is below minimumSeats (5)"
        );
    }

    #[test]
    fn equal_bounds_are_allowed() {
        let config = WorkEstimatorConfig {
            minimum_seats: 3,
            maximum_seats: 3,
            ..WorkEstimatorConfig::default()
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn non_positive_divisors_are_rejected() {
        let config = WorkEstimatorConfig {
            list_config: Some(ListWorkEstimatorConfig {
                objects_per_seat: 0.0,
            }),
            mutating_config: Some(MutatingWorkEstimatorConfig {
                watches_per_seat: f64::NAN,
                ..MutatingWorkEstimatorConfig::default()
            }),
            ..WorkEstimatorConfig::default()
        };
        assert_eq!(fields(&config), vec!["objectsPerSeat", "watchesPerSeat"]);
    }

    #[test]
    fn all_violations_are_reported_in_field_order() {
        let config = WorkEstimatorConfig {
            minimum_seats: 0,
            maximum_seats: 0,
            list_config: Some(ListWorkEstimatorConfig {
                objects_per_seat: -10.0,
            }),
            mutating_config: None,
        };
        assert_eq!(fields(&config), vec!["minimumSeats", "objectsPerSeat"]);
    }
}
