//! Applicable ranges (attraction radii).

use crate::error::{Error, Result};

/// Attraction radius of a snap point.
///
/// A mandatory point attracts every value of its zone. An optional point only
/// attracts values within `radius` of one of its positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ApplicableRange {
    /// Infinite radius.
    #[default]
    Mandatory,
    /// Finite, strictly positive radius.
    Optional(f64),
}

impl ApplicableRange {
    /// Create an optional range.
    ///
    /// # Errors
    ///
    /// Returns an error unless `radius` is strictly positive.
    pub fn optional(radius: f64) -> Result<Self> {
        // NaN fails the comparison too.
        if !(radius > 0.0) {
            return Err(Error::invalid(
                "applicableRange",
                "'applicableRange' must be strictly positive.",
            ));
        }
        Ok(Self::Optional(radius))
    }

    /// The radius, infinite when mandatory.
    #[must_use]
    pub fn radius(self) -> f64 {
        match self {
            Self::Mandatory => f64::INFINITY,
            Self::Optional(radius) => radius,
        }
    }

    /// Whether the range is infinite.
    #[must_use]
    pub fn is_mandatory(self) -> bool {
        matches!(self, Self::Mandatory)
    }

    /// The larger of two ranges. Mandatory absorbs optional.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        match (self, other) {
            (Self::Optional(a), Self::Optional(b)) => Self::Optional(a.max(b)),
            _ => Self::Mandatory,
        }
    }
}
