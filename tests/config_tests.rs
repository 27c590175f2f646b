use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;
use work_estimator::config::{
    ConfigFormat, DurationUnit, LogFormat, LoggingConfig, UnitDuration, WorkEstimatorConfig,
};
use work_estimator::error::{ConfigError, Error};
use work_estimator::validation;

fn write_temp_config(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("work-estimator-config-test-")
        .suffix(suffix)
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn load_fills_absent_sections_with_defaults() {
    let file = write_temp_config("minimumSeats = 2\nmaximumSeats = 8\n", ".toml");

    let config = WorkEstimatorConfig::load(file.path()).expect("load");

    assert_eq!(config.minimum_seats, 2);
    assert_eq!(config.maximum_seats, 8);
    assert_eq!(config.list_config.map(|l| l.objects_per_seat), Some(100.0));
    let mutating = config.mutating_config.expect("mutating defaults applied");
    assert!(mutating.enabled);
    assert_eq!(mutating.event_additional_duration(), Duration::from_millis(5));
}

#[test]
fn read_leaves_absent_sections_unset() {
    let file = write_temp_config("[listWorkEstimatorConfig]\nobjectsPerSeat = 40.0\n", ".toml");

    let config = WorkEstimatorConfig::read(file.path()).expect("read");

    assert_eq!(config.list().objects_per_seat, 40.0);
    assert!(config.mutating_config.is_none());
    assert!(config.mutating().enabled);
}

#[test]
fn absent_mutating_section_keeps_enabled_true() {
    let file = write_temp_config(r#"{"maximumSeats": 12}"#, ".json");

    let config = WorkEstimatorConfig::load(file.path()).expect("load");

    assert_eq!(config.maximum_seats, 12);
    assert!(config.mutating().enabled);
}

#[test]
fn json_file_is_detected_by_extension() {
    let json = r#"{
  "minimumSeats": 1,
  "maximumSeats": 10,
  "mutatingWorkEstimatorConfig": {
    "enable": false,
    "eventAdditionalDurationMs": "1500us",
    "watchesPerSeat": 25
  }
}"#;
    let file = write_temp_config(json, ".json");

    let config = WorkEstimatorConfig::load(file.path()).expect("load");
    let mutating = config.mutating();

    assert!(!mutating.enabled);
    assert_eq!(mutating.watches_per_seat, 25.0);
    assert_eq!(
        mutating.event_additional_duration,
        UnitDuration::new(1_500, DurationUnit::Microseconds)
    );
    assert_eq!(mutating.event_additional_duration(), Duration::from_micros(1_500));
}

#[test]
fn written_defaults_load_back_unchanged() {
    let rendered = WorkEstimatorConfig::default()
        .to_toml_string()
        .expect("serialize");
    let file = write_temp_config(&rendered, ".toml");

    let config = WorkEstimatorConfig::load(file.path()).expect("load");

    assert_eq!(config, WorkEstimatorConfig::default());
    assert_eq!(config.mutating().event_additional_duration.to_string(), "5ms");
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = WorkEstimatorConfig::load(dir.path().join("missing.toml"));

    assert!(
        matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))),
        "Expected missing file to be reported as a read error"
    );
}

#[test]
fn load_reports_malformed_toml() {
    let file = write_temp_config("minimumSeats = [1, 2]\n", ".toml");

    let result = WorkEstimatorConfig::load(file.path());

    match result {
        Err(Error::Config(ConfigError::ParseToml(_))) => {}
        Err(err) => panic!("Expected TOML parse error, got {err}"),
        Ok(config) => panic!("Expected parse failure, got {config:?}"),
    }
}

#[test]
fn load_accepts_contract_violations_until_validated() {
    let toml = r#"
minimumSeats = 9
maximumSeats = 3

[mutatingWorkEstimatorConfig]
watchesPerSeat = 0.0
"#;
    let file = write_temp_config(toml, ".toml");

    let config = WorkEstimatorConfig::load(file.path()).expect("load is permissive");

    let fields: Vec<_> = validation::violations(&config)
        .into_iter()
        .filter_map(|violation| match violation {
            ConfigError::InvalidValue { field, .. } => Some(field),
            _ => None,
        })
        .collect();
    assert_eq!(fields, vec!["maximumSeats", "watchesPerSeat"]);
}

#[test]
fn logging_section_shares_the_estimator_file() {
    let toml = r#"
minimumSeats = 2

[logging]
level = "debug"

[mutatingWorkEstimatorConfig]
eventAdditionalDurationMs = "2.5h"
"#;
    let file = write_temp_config(toml, ".toml");

    let config = WorkEstimatorConfig::load(file.path()).expect("load");
    assert_eq!(config.minimum_seats, 2);
    assert_eq!(
        config.mutating().event_additional_duration.to_string(),
        "2.5h"
    );

    let content = std::fs::read_to_string(file.path()).expect("read back");
    let logging = LoggingConfig::from_section(&content, ConfigFormat::Toml)
        .expect("parse logging")
        .expect("logging section present");
    assert_eq!(logging.level, "debug");
    assert_eq!(logging.format, LogFormat::Pretty);
}
