//! Duration literal parsing
//!
//! Normalizes benchmark timings such as `46.3µs`, `5.0ms` or `1.2s` into
//! floating-point milliseconds.

use crate::error::{Result, StatsError};
use std::fmt;

/// Time unit of a duration literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
}

impl TimeUnit {
    /// Canonical suffix for this unit
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Nanosecond => "ns",
            Self::Microsecond => "µs",
            Self::Millisecond => "ms",
            Self::Second => "s",
        }
    }

    /// Convert `value` expressed in this unit to milliseconds
    pub fn to_ms(&self, value: f64) -> f64 {
        match self {
            Self::Nanosecond => value / 1_000_000.0,
            Self::Microsecond => value / 1_000.0,
            Self::Millisecond => value,
            Self::Second => value * 1_000.0,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Recognized suffixes, most specific first.
///
/// Every two-character suffix must precede `s`, since `ms`, `ns` and `µs`
/// all end in `s`. Adding a unit alias is a new row here.
pub const UNIT_SUFFIXES: &[(&str, TimeUnit)] = &[
    ("ns", TimeUnit::Nanosecond),
    ("µs", TimeUnit::Microsecond), // U+00B5 MICRO SIGN
    ("μs", TimeUnit::Microsecond), // U+03BC GREEK SMALL LETTER MU
    ("us", TimeUnit::Microsecond),
    ("ms", TimeUnit::Millisecond),
    ("s", TimeUnit::Second),
];

/// Split a duration literal into its numeric part and unit
///
/// A suffix only counts when it is not glued to a longer alphabetic unit,
/// so `10xs` has no recognized unit rather than being read as seconds.
pub fn split_unit(literal: &str) -> Option<(&str, TimeUnit)> {
    UNIT_SUFFIXES.iter().find_map(|(suffix, unit)| {
        let number = literal.strip_suffix(suffix)?.trim();
        match number.chars().last() {
            Some(c) if c.is_alphabetic() => None,
            _ => Some((number, *unit)),
        }
    })
}

/// Parse a duration literal into milliseconds
///
/// # Examples
///
/// ```
/// use time_stats::duration::parse_ms;
///
/// assert_eq!(parse_ms("2s").unwrap(), 2000.0);
/// assert_eq!(parse_ms("500µs").unwrap(), 0.5);
/// assert!(parse_ms("10xs").is_err());
/// ```
pub fn parse_ms(literal: &str) -> Result<f64> {
    let literal = literal.trim();

    let (number, unit) = split_unit(literal).ok_or_else(|| StatsError::UnrecognizedUnit {
        literal: literal.to_string(),
    })?;

    let value: f64 = number.parse().map_err(|_| StatsError::InvalidNumber {
        literal: literal.to_string(),
    })?;

    if value < 0.0 {
        return Err(StatsError::NegativeDuration {
            literal: literal.to_string(),
        });
    }

    // Scaling can overflow a finite value (1e306s)
    let ms = unit.to_ms(value);
    if !ms.is_finite() {
        return Err(StatsError::InvalidNumber {
            literal: literal.to_string(),
        });
    }

    // -0.0 parses fine and would print as "-0"
    Ok(ms + 0.0)
}
