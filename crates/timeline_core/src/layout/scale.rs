//! Padded percentage axis.

use crate::model::timeline::TimelineDomain;

/// Divisor applied to the range to get the margin on each side (5%).
pub const BUFFER_DIVISOR: f64 = 20.0;

/// Linear mapping from axis values to percentages of the padded axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    domain: TimelineDomain,
    padded_start: f64,
    padded_end: f64,
}

impl AxisScale {
    pub fn new(domain: TimelineDomain) -> Self {
        let buffer = domain.range() / BUFFER_DIVISOR;
        Self {
            domain,
            padded_start: domain.start() - buffer,
            padded_end: domain.end() + buffer,
        }
    }

    pub fn domain(&self) -> TimelineDomain {
        self.domain
    }

    pub fn padded_start(&self) -> f64 {
        self.padded_start
    }

    pub fn padded_end(&self) -> f64 {
        self.padded_end
    }

    /// Returns the percentage position of `value`; may fall outside `0..=100`.
    pub fn position_of(&self, value: f64) -> f64 {
        (value - self.padded_start) / (self.padded_end - self.padded_start) * 100.0
    }

    /// Returns whether `position` lies on the visible padded axis.
    pub fn is_visible(position: f64) -> bool {
        (0.0..=100.0).contains(&position)
    }
}
