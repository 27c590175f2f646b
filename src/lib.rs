//! Work estimator configuration.
//!
//! This crate defines the parameters a request-cost estimator uses to turn an
//! API request into a number of concurrency "seats": seat bounds, the list
//! request divisor, and the watch fan-out settings for mutating requests.
//!
//! # Modules
//!
//! - [`config`] - The configuration model, its defaults, and TOML/JSON loading
//! - [`validation`] - Opt-in contract checks (never applied implicitly)
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use work_estimator::config::WorkEstimatorConfig;
//!
//! let config = WorkEstimatorConfig::default();
//! assert_eq!(config.maximum_seats, 10);
//! assert_eq!(
//!     config.mutating().event_additional_duration(),
//!     Duration::from_millis(5)
//! );
//! ```

pub mod config;
pub mod error;
pub mod validation;
