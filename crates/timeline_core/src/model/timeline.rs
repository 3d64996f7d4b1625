//! Axis bounds, increments and tick records.
//!
//! # Responsibility
//! - Validate the numeric axis before any layout work happens.
//! - Normalize increment values into the `>= 0` range the engine expects.
//!
//! # Invariants
//! - `TimelineDomain::start < TimelineDomain::end`, both finite.
//! - `IncrementSpec` fields are finite and `>= 0`; `0` means disabled.

use crate::layout::scale::BUFFER_DIVISOR;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validated numeric extent of a timeline.
///
/// Values are plain numbers or epoch milliseconds; the engine treats both as
/// one linear axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelineDomain {
    start: f64,
    end: f64,
}

impl TimelineDomain {
    /// Creates a domain, rejecting inverted, empty or non-finite ranges.
    ///
    /// Bounds whose padded axis overflows `f64` are rejected as `NonFinite`.
    pub fn new(start: f64, end: f64) -> Result<Self, DomainError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(DomainError::NonFinite);
        }
        if start >= end {
            return Err(DomainError::InvertedRange { start, end });
        }
        let buffer = (end - start) / BUFFER_DIVISOR;
        let (padded_start, padded_end) = (start - buffer, end + buffer);
        if !(padded_end - padded_start).is_finite() {
            return Err(DomainError::NonFinite);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `end - start`, always positive.
    pub fn range(&self) -> f64 {
        self.end - self.start
    }
}

/// Construction errors for [`TimelineDomain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    NonFinite,
    InvertedRange { start: f64, end: f64 },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite => write!(f, "timeline bounds and their padded span must be finite"),
            Self::InvertedRange { start, end } => {
                write!(f, "timeline start ({start}) must be less than end ({end})")
            }
        }
    }
}

impl Error for DomainError {}

/// Minor/major tick spacing along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IncrementSpec {
    pub minor: f64,
    pub major: f64,
}

impl IncrementSpec {
    /// Creates a spec, mapping negative or non-finite values to `0`.
    pub fn new(minor: f64, major: f64) -> Self {
        Self {
            minor: normalize_increment(minor),
            major: normalize_increment(major),
        }
    }

    /// Returns whether any periodic tick will be generated.
    pub fn is_enabled(&self) -> bool {
        self.minor > 0.0 || self.major > 0.0
    }

    /// Walk step for periodic ticks; minor wins when both are set.
    pub fn step(&self) -> Option<f64> {
        if self.minor > 0.0 {
            Some(self.minor)
        } else if self.major > 0.0 {
            Some(self.major)
        } else {
            None
        }
    }
}

fn normalize_increment(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Visual weight of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickKind {
    Major,
    Minor,
}

impl TickKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
        }
    }
}

/// Positioned axis marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    /// Percentage along the padded axis, `0..=100`.
    pub position: f64,
    /// Boundary ticks carry the literal input text; periodic major ticks carry
    /// their raw value; minor ticks carry nothing.
    pub label: Option<String>,
    pub kind: TickKind,
}

impl Tick {
    /// Identity key: position rounded to 3 decimal places, scaled to an integer.
    pub fn position_key(&self) -> i64 {
        position_key(self.position)
    }
}

pub(crate) fn position_key(position: f64) -> i64 {
    (position * 1000.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::{DomainError, IncrementSpec, Tick, TickKind, TimelineDomain};

    #[test]
    fn domain_rejects_inverted_and_empty_ranges() {
        assert_eq!(
            TimelineDomain::new(100.0, 0.0).unwrap_err(),
            DomainError::InvertedRange {
                start: 100.0,
                end: 0.0
            }
        );
        assert!(TimelineDomain::new(5.0, 5.0).is_err());
        assert_eq!(
            TimelineDomain::new(f64::NAN, 1.0).unwrap_err(),
            DomainError::NonFinite
        );
    }

    #[test]
    fn domain_rejects_bounds_whose_padded_axis_overflows() {
        assert_eq!(
            TimelineDomain::new(-1e308, 1e308).unwrap_err(),
            DomainError::NonFinite
        );
        assert_eq!(
            TimelineDomain::new(0.0, f64::MAX).unwrap_err(),
            DomainError::NonFinite
        );
        assert!(TimelineDomain::new(-1e300, 1e300).is_ok());
    }

    #[test]
    fn increments_normalize_invalid_values_to_zero() {
        let spec = IncrementSpec::new(-5.0, f64::INFINITY);
        assert_eq!(spec, IncrementSpec::new(0.0, 0.0));
        assert!(!spec.is_enabled());
        assert_eq!(spec.step(), None);
    }

    #[test]
    fn minor_increment_drives_step_when_both_are_set() {
        assert_eq!(IncrementSpec::new(10.0, 50.0).step(), Some(10.0));
        assert_eq!(IncrementSpec::new(0.0, 50.0).step(), Some(50.0));
    }

    #[test]
    fn position_key_collapses_sub_thousandth_differences() {
        let a = Tick {
            position: 12.3451,
            label: None,
            kind: TickKind::Minor,
        };
        let b = Tick {
            position: 12.3454,
            label: None,
            kind: TickKind::Major,
        };
        assert_eq!(a.position_key(), b.position_key());
    }
}
