//! Applicable zones.
//!
//! A zone is the closed interval of raw scroll or zoom values that resolve
//! to a given snap point.

use std::fmt;

/// Closed interval `[min, max]` of values attracted by a snap point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    /// Lower bound (inclusive). May be negative infinity.
    pub min: f64,
    /// Upper bound (inclusive). May be positive infinity.
    pub max: f64,
}

impl Zone {
    /// The whole axis.
    pub const UNBOUNDED: Self = Self::new(f64::NEG_INFINITY, f64::INFINITY);

    /// Create a new zone.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the zone, bounds included.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && self.max >= value
    }

    /// Whether both bounds are finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

impl Default for Zone {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
