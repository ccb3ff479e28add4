//! Irregular snap points: a single declared value.

use crate::alignment::Alignment;
use crate::error::{Error, Result};
use crate::range::ApplicableRange;
use crate::zone::Zone;

fn validate_value(value: f64) -> Result<f64> {
    if value.is_nan() {
        return Err(Error::invalid("value", "'value' must be a number."));
    }
    Ok(value)
}

/// A single scroll snap point, aligned to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapPoint {
    value: f64,
    applicable_range: ApplicableRange,
    alignment: Alignment,
    alignment_adjustment: f64,
}

impl ScrollSnapPoint {
    /// Create a mandatory scroll snap point.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is NaN.
    pub fn new(value: f64, alignment: Alignment) -> Result<Self> {
        Ok(Self {
            value: validate_value(value)?,
            applicable_range: ApplicableRange::Mandatory,
            alignment,
            alignment_adjustment: 0.0,
        })
    }

    /// Create an optional scroll snap point.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is NaN or `applicable_range` is not
    /// strictly positive.
    pub fn with_applicable_range(
        value: f64,
        applicable_range: f64,
        alignment: Alignment,
    ) -> Result<Self> {
        let applicable_range = ApplicableRange::optional(applicable_range)?;
        Ok(Self {
            value: validate_value(value)?,
            applicable_range,
            alignment,
            alignment_adjustment: 0.0,
        })
    }

    /// Declared value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value with the alignment adjustment applied.
    #[must_use]
    pub fn actual_value(&self) -> f64 {
        self.value + self.alignment_adjustment
    }

    /// Attraction radius.
    #[must_use]
    pub fn applicable_range(&self) -> ApplicableRange {
        self.applicable_range
    }

    /// Viewport alignment.
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Current alignment adjustment.
    #[must_use]
    pub fn alignment_adjustment(&self) -> f64 {
        self.alignment_adjustment
    }

    pub(crate) fn absorb(&mut self, other: &Self) {
        self.applicable_range = self.applicable_range.max(other.applicable_range);
    }

    pub(crate) fn on_update_viewport(&mut self, viewport: f64) -> bool {
        if !self.alignment.tracks_viewport() {
            debug_assert!(self.alignment_adjustment == 0.0);
            return false;
        }
        self.alignment_adjustment = self.alignment.adjustment(viewport);
        true
    }
}

/// A single zoom snap point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSnapPoint {
    value: f64,
    applicable_range: ApplicableRange,
}

impl ZoomSnapPoint {
    /// Create a mandatory zoom snap point.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is NaN.
    pub fn new(value: f64) -> Result<Self> {
        Ok(Self { value: validate_value(value)?, applicable_range: ApplicableRange::Mandatory })
    }

    /// Create an optional zoom snap point.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is NaN or `applicable_range` is not
    /// strictly positive.
    pub fn with_applicable_range(value: f64, applicable_range: f64) -> Result<Self> {
        let applicable_range = ApplicableRange::optional(applicable_range)?;
        Ok(Self { value: validate_value(value)?, applicable_range })
    }

    /// Zoom factor of the point.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Attraction radius.
    #[must_use]
    pub fn applicable_range(&self) -> ApplicableRange {
        self.applicable_range
    }

    pub(crate) fn absorb(&mut self, other: &Self) {
        self.applicable_range = self.applicable_range.max(other.applicable_range);
    }
}

/// Zone an irregular point claims before any neighbor is known.
pub(crate) fn declared_zone(value: f64, applicable_range: ApplicableRange) -> Zone {
    match applicable_range {
        ApplicableRange::Mandatory => Zone::UNBOUNDED,
        ApplicableRange::Optional(radius) => Zone::new(value - radius, value + radius),
    }
}
