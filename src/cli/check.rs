use std::fmt::Display;

use anyhow::Context;
use tracing::warn;
use work_estimator::config::WorkEstimatorConfig;
use work_estimator::validation;

use super::{output, CheckArgs};

/// Load a config file, print its effective values, and check its contracts.
pub fn execute(args: &CheckArgs) -> anyhow::Result<()> {
    let path = &args.path;
    let config = WorkEstimatorConfig::read(path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let list = config.list();
    let list_defaulted = config.list_config.is_none();
    let mutating = config.mutating();
    let mutating_defaulted = config.mutating_config.is_none();

    output::section(&format!("Work estimator config: {}", path.display()));
    output::field("minimumSeats", config.minimum_seats);
    output::field("maximumSeats", config.maximum_seats);
    output::field(
        "objectsPerSeat",
        annotate(list.objects_per_seat, list_defaulted),
    );
    output::field("enable", annotate(mutating.enabled, mutating_defaulted));
    output::field(
        "eventAdditionalDurationMs",
        annotate(mutating.event_additional_duration, mutating_defaulted),
    );
    output::field(
        "watchesPerSeat",
        annotate(mutating.watches_per_seat, mutating_defaulted),
    );
    println!();

    let violations = validation::violations(&config);
    if violations.is_empty() {
        output::success("seat bounds and divisors satisfy their contracts");
        return Ok(());
    }

    for violation in &violations {
        warn!(path = %path.display(), error = %violation, "contract violation");
        output::error(&violation.to_string());
    }
    anyhow::bail!(
        "{} contract violation(s) in {}",
        violations.len(),
        path.display()
    )
}

fn annotate(value: impl Display, defaulted: bool) -> String {
    if defaulted {
        format!("{value} (default)")
    } else {
        value.to_string()
    }
}
