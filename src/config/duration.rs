//! Durations that remember the unit they were written in.
//!
//! External configuration spells durations the way Go does (`"5ms"`,
//! `"1m30s"`, `"250us"`). [`UnitDuration`] keeps the parsed value together
//! with the unit so that writing a config back out produces `"5ms"` rather
//! than a normalized `"0.005s"`.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DurationParseError;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// Fraction digits past this point are truncated while parsing.
const MAX_FRACTION_DIGITS: usize = 18;

/// Unit a duration is expressed in externally.
///
/// Variants are ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DurationUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
}

impl DurationUnit {
    /// Length of one unit in nanoseconds.
    #[must_use]
    pub const fn nanos(self) -> u64 {
        match self {
            Self::Nanoseconds => 1,
            Self::Microseconds => 1_000,
            Self::Milliseconds => 1_000_000,
            Self::Seconds => 1_000_000_000,
            Self::Minutes => 60_000_000_000,
            Self::Hours => 3_600_000_000_000,
        }
    }

    /// Suffix used when writing a duration in this unit.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Nanoseconds => "ns",
            Self::Microseconds => "us",
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "ns" => Some(Self::Nanoseconds),
            // U+00B5 micro sign and U+03BC greek mu are both accepted.
            "us" | "\u{00b5}s" | "\u{03bc}s" => Some(Self::Microseconds),
            "ms" => Some(Self::Milliseconds),
            "s" => Some(Self::Seconds),
            "m" => Some(Self::Minutes),
            "h" => Some(Self::Hours),
            _ => None,
        }
    }

    /// Coarsest unit that represents `nanos` without a fractional part.
    fn coarsest_exact(nanos: u128) -> Self {
        if nanos == 0 {
            return Self::Seconds;
        }
        [
            Self::Hours,
            Self::Minutes,
            Self::Seconds,
            Self::Milliseconds,
            Self::Microseconds,
        ]
        .into_iter()
        .find(|unit| nanos % u128::from(unit.nanos()) == 0)
        .unwrap_or(Self::Nanoseconds)
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A duration paired with the unit used to serialize it.
///
/// A compound string such as `"1m30s"` remembers its coarsest unit and is
/// written back as `"1.5m"`. Negative durations (`"-5ms"`) are rejected,
/// although Go's `time.ParseDuration` accepts them; configs written by Go
/// tooling with a negative value fail to load here.
///
/// Two values are equal only when both the duration and the unit match, so
/// `5ms` and `5000us` compare unequal even though
/// [`as_duration`](Self::as_duration) agrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitDuration {
    duration: Duration,
    unit: DurationUnit,
}

impl UnitDuration {
    /// Build a duration of `magnitude` units. Saturates instead of overflowing.
    #[must_use]
    pub const fn new(magnitude: u64, unit: DurationUnit) -> Self {
        let duration = match unit {
            DurationUnit::Nanoseconds => Duration::from_nanos(magnitude),
            DurationUnit::Microseconds => Duration::from_micros(magnitude),
            DurationUnit::Milliseconds => Duration::from_millis(magnitude),
            DurationUnit::Seconds => Duration::from_secs(magnitude),
            DurationUnit::Minutes => Duration::from_secs(magnitude.saturating_mul(60)),
            DurationUnit::Hours => Duration::from_secs(magnitude.saturating_mul(3_600)),
        };
        Self { duration, unit }
    }

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self::new(millis, DurationUnit::Milliseconds)
    }

    /// Pair an existing duration with an explicit unit.
    #[must_use]
    pub const fn with_unit(duration: Duration, unit: DurationUnit) -> Self {
        Self { duration, unit }
    }

    /// The plain duration, independent of the serialization unit.
    #[must_use]
    pub const fn as_duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub const fn unit(&self) -> DurationUnit {
        self.unit
    }
}

impl From<Duration> for UnitDuration {
    fn from(duration: Duration) -> Self {
        let unit = DurationUnit::coarsest_exact(duration.as_nanos());
        Self { duration, unit }
    }
}

impl From<UnitDuration> for Duration {
    fn from(value: UnitDuration) -> Self {
        value.duration
    }
}

impl fmt::Display for UnitDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.duration.as_nanos();
        let unit_nanos = u128::from(self.unit.nanos());
        let whole = nanos / unit_nanos;
        let remainder = nanos % unit_nanos;
        let suffix = self.unit.suffix();

        if remainder == 0 {
            return write!(f, "{whole}{suffix}");
        }
        if let Some(width) = terminating_digits(remainder, unit_nanos) {
            let digits = remainder * 10u128.pow(width) / unit_nanos;
            let width = width as usize;
            return write!(f, "{whole}.{digits:0width$}{suffix}");
        }
        // Minutes and hours can leave a remainder with no finite decimal.
        // Leading with the remembered unit keeps it the coarsest segment.
        write!(f, "{whole}{suffix}")?;
        write_canonical(f, remainder)
    }
}

/// Fraction digits needed to write `remainder / unit_nanos` exactly.
fn terminating_digits(remainder: u128, unit_nanos: u128) -> Option<u32> {
    (1..=MAX_FRACTION_DIGITS as u32)
        .find(|&digits| remainder * 10u128.pow(digits) % unit_nanos == 0)
}

/// Go-style rendering: `1.5ms`, `250us`, `1m30s`, `20m0.000000001s`.
fn write_canonical(f: &mut fmt::Formatter<'_>, nanos: u128) -> fmt::Result {
    if nanos == 0 {
        return f.write_str("0s");
    }
    if nanos < NANOS_PER_MICRO {
        return write!(f, "{nanos}ns");
    }
    if nanos < NANOS_PER_MILLI {
        write_fraction(f, nanos, NANOS_PER_MICRO)?;
        return f.write_str("us");
    }
    if nanos < NANOS_PER_SECOND {
        write_fraction(f, nanos, NANOS_PER_MILLI)?;
        return f.write_str("ms");
    }

    let hours = nanos / NANOS_PER_HOUR;
    let minutes = (nanos % NANOS_PER_HOUR) / NANOS_PER_MINUTE;
    if hours > 0 {
        write!(f, "{hours}h{minutes}m")?;
    } else if minutes > 0 {
        write!(f, "{minutes}m")?;
    }
    write_fraction(f, nanos % NANOS_PER_MINUTE, NANOS_PER_SECOND)?;
    f.write_str("s")
}

fn write_fraction(f: &mut fmt::Formatter<'_>, value: u128, scale: u128) -> fmt::Result {
    let whole = value / scale;
    let fraction = value % scale;
    if fraction == 0 {
        return write!(f, "{whole}");
    }
    let width = scale.ilog10() as usize;
    let digits = format!("{fraction:0width$}");
    write!(f, "{whole}.{}", digits.trim_end_matches('0'))
}

impl FromStr for UnitDuration {
    type Err = DurationParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DurationParseError::Empty);
        }
        if trimmed.starts_with('-') {
            return Err(DurationParseError::Negative(input.to_string()));
        }
        let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if body == "0" {
            return Ok(Self::new(0, DurationUnit::Seconds));
        }

        let mut total: u128 = 0;
        let mut coarsest: Option<DurationUnit> = None;
        let mut rest = body;

        while !rest.is_empty() {
            let number_len = rest
                .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                .unwrap_or(rest.len());
            let (number, tail) = rest.split_at(number_len);
            if number.is_empty() {
                return Err(DurationParseError::InvalidNumber(input.to_string()));
            }

            let suffix_len = tail
                .find(|c: char| c.is_ascii_digit() || c == '.')
                .unwrap_or(tail.len());
            let (suffix, tail) = tail.split_at(suffix_len);
            if suffix.is_empty() {
                return Err(DurationParseError::MissingUnit(input.to_string()));
            }
            let unit =
                DurationUnit::from_suffix(suffix).ok_or_else(|| DurationParseError::UnknownUnit {
                    unit: suffix.to_string(),
                    input: input.to_string(),
                })?;

            total = total
                .checked_add(segment_nanos(number, unit, input)?)
                .ok_or_else(|| DurationParseError::Overflow(input.to_string()))?;
            coarsest = Some(coarsest.map_or(unit, |current| current.max(unit)));
            rest = tail;
        }

        let secs = u64::try_from(total / NANOS_PER_SECOND)
            .map_err(|_| DurationParseError::Overflow(input.to_string()))?;
        let subsec_nanos = (total % NANOS_PER_SECOND) as u32;
        Ok(Self {
            duration: Duration::new(secs, subsec_nanos),
            unit: coarsest.unwrap_or(DurationUnit::Seconds),
        })
    }
}

/// Nanoseconds contributed by one `<number><unit>` segment.
fn segment_nanos(number: &str, unit: DurationUnit, input: &str) -> Result<u128, DurationParseError> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
        return Err(DurationParseError::InvalidNumber(input.to_string()));
    }

    let unit_nanos = u128::from(unit.nanos());
    let whole_value: u128 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| DurationParseError::Overflow(input.to_string()))?
    };
    let whole_nanos = whole_value
        .checked_mul(unit_nanos)
        .ok_or_else(|| DurationParseError::Overflow(input.to_string()))?;

    let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    let fraction_nanos = if digits.is_empty() {
        0
    } else {
        let value: u128 = digits
            .parse()
            .map_err(|_| DurationParseError::InvalidNumber(input.to_string()))?;
        value * unit_nanos / 10u128.pow(digits.len() as u32)
    };

    whole_nanos
        .checked_add(fraction_nanos)
        .ok_or_else(|| DurationParseError::Overflow(input.to_string()))
}

impl Serialize for UnitDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UnitDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(UnitDurationVisitor)
    }
}

struct UnitDurationVisitor;

impl<'de> Visitor<'de> for UnitDurationVisitor {
    type Value = UnitDuration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a duration string such as \"5ms\" or a whole number of milliseconds")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(UnitDuration::from_millis(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u64::try_from(value)
            .map(UnitDuration::from_millis)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }
}
