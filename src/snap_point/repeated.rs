//! Repeated snap points: arithmetic sequences `offset + k * interval`
//! confined to `[start, end]`.

use crate::alignment::Alignment;
use crate::error::{Error, Result};
use crate::range::ApplicableRange;

/// A validated arithmetic sequence of snap positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sequence {
    offset: f64,
    interval: f64,
    start: f64,
    end: f64,
}

impl Sequence {
    /// Create a new sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is NaN, `end <= start`, `offset`
    /// lies outside `[start, end]`, or `interval` is not strictly positive.
    pub fn new(offset: f64, interval: f64, start: f64, end: f64) -> Result<Self> {
        for (parameter, value) in
            [("offset", offset), ("interval", interval), ("start", start), ("end", end)]
        {
            if value.is_nan() {
                return Err(Error::invalid(parameter, format!("'{parameter}' must be a number.")));
            }
        }

        if end <= start {
            return Err(Error::invalid("end", "'end' must be greater than 'start'."));
        }

        if offset < start {
            return Err(Error::invalid(
                "offset",
                "'offset' must be greater than or equal to 'start'.",
            ));
        }

        if offset > end {
            return Err(Error::invalid(
                "offset",
                "'offset' must be smaller than or equal to 'end'.",
            ));
        }

        if interval <= 0.0 {
            return Err(Error::invalid("interval", "'interval' must be strictly positive."));
        }

        Ok(Self { offset, interval, start, end })
    }

    /// Offset of one position of the sequence.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Distance between two consecutive positions.
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Lower bound of the sequence.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound of the sequence.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// The same sequence moved by `adjustment`. The interval is unchanged.
    #[must_use]
    pub(crate) fn shifted(self, adjustment: f64) -> Self {
        Self {
            offset: self.offset + adjustment,
            interval: self.interval,
            start: self.start + adjustment,
            end: self.end + adjustment,
        }
    }

    /// Whether `value` lies within `[start, end]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }

    /// Smallest position that is not below `start`.
    #[must_use]
    pub fn first_value(&self) -> f64 {
        debug_assert!(self.offset >= self.start);
        self.offset - ((self.offset - self.start) / self.interval).floor() * self.interval
    }

    /// Largest position that is not above `end`.
    #[must_use]
    pub fn last_value(&self) -> f64 {
        debug_assert!(self.offset <= self.end);
        self.offset + ((self.end - self.offset) / self.interval).floor() * self.interval
    }

    /// Number of whole intervals between `start` and `end`.
    #[must_use]
    pub fn snap_count(&self) -> u32 {
        ((self.end - self.start) / self.interval) as u32
    }

    /// Nearest position to `value` if it lies within `radius`, else `value`.
    ///
    /// An exact tie goes to the lower position.
    #[must_use]
    pub fn nearest(&self, value: f64, radius: f64) -> f64 {
        let first = self.first_value();
        let passed = ((value - first) / self.interval).floor();
        let previous = passed * self.interval + first;
        let next = previous + self.interval;

        if value - previous <= next - value {
            if previous + radius >= value {
                return previous;
            }
        } else if next - radius <= value {
            return next;
        }
        value
    }
}

/// Repeated scroll snap points, aligned to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatedScrollSnapPoint {
    sequence: Sequence,
    applicable_range: ApplicableRange,
    alignment: Alignment,
    alignment_adjustment: f64,
}

impl RepeatedScrollSnapPoint {
    /// Create mandatory repeated scroll snap points.
    ///
    /// # Errors
    ///
    /// See [`Sequence::new`].
    pub fn new(
        offset: f64,
        interval: f64,
        start: f64,
        end: f64,
        alignment: Alignment,
    ) -> Result<Self> {
        Ok(Self {
            sequence: Sequence::new(offset, interval, start, end)?,
            applicable_range: ApplicableRange::Mandatory,
            alignment,
            alignment_adjustment: 0.0,
        })
    }

    /// Create optional repeated scroll snap points attracting values within
    /// `applicable_range` of each position.
    ///
    /// # Errors
    ///
    /// See [`Sequence::new`]; also fails unless `applicable_range > 0`.
    pub fn with_applicable_range(
        offset: f64,
        interval: f64,
        start: f64,
        end: f64,
        applicable_range: f64,
        alignment: Alignment,
    ) -> Result<Self> {
        let sequence = Sequence::new(offset, interval, start, end)?;
        Ok(Self {
            sequence,
            applicable_range: ApplicableRange::optional(applicable_range)?,
            alignment,
            alignment_adjustment: 0.0,
        })
    }

    /// Declared sequence, before alignment.
    #[must_use]
    pub fn sequence(&self) -> Sequence {
        self.sequence
    }

    /// Declared offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.sequence.offset()
    }

    /// Declared interval.
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.sequence.interval()
    }

    /// Declared start.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.sequence.start()
    }

    /// Declared end.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.sequence.end()
    }

    /// Attraction radius around each position.
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

    /// Sequence with the alignment adjustment applied.
    #[must_use]
    pub fn actual_sequence(&self) -> Sequence {
        self.sequence.shifted(self.alignment_adjustment)
    }

    /// Ignored value as bound into impulse expressions.
    #[must_use]
    pub fn actual_impulse_ignored_value(&self, ignored_value: f64) -> f64 {
        ignored_value + self.alignment_adjustment
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

/// Repeated zoom snap points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepeatedZoomSnapPoint {
    sequence: Sequence,
    applicable_range: ApplicableRange,
}

impl RepeatedZoomSnapPoint {
    /// Create mandatory repeated zoom snap points.
    ///
    /// # Errors
    ///
    /// See [`Sequence::new`].
    pub fn new(offset: f64, interval: f64, start: f64, end: f64) -> Result<Self> {
        Ok(Self {
            sequence: Sequence::new(offset, interval, start, end)?,
            applicable_range: ApplicableRange::Mandatory,
        })
    }

    /// Create optional repeated zoom snap points.
    ///
    /// # Errors
    ///
    /// See [`Sequence::new`]; also fails unless `applicable_range > 0`.
    pub fn with_applicable_range(
        offset: f64,
        interval: f64,
        start: f64,
        end: f64,
        applicable_range: f64,
    ) -> Result<Self> {
        let sequence = Sequence::new(offset, interval, start, end)?;
        Ok(Self { sequence, applicable_range: ApplicableRange::optional(applicable_range)? })
    }

    /// The sequence. Zoom points are never aligned.
    #[must_use]
    pub fn sequence(&self) -> Sequence {
        self.sequence
    }

    /// Offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.sequence.offset()
    }

    /// Interval.
    #[must_use]
    pub fn interval(&self) -> f64 {
        self.sequence.interval()
    }

    /// Start.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.sequence.start()
    }

    /// End.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.sequence.end()
    }

    /// Attraction radius around each position.
    #[must_use]
    pub fn applicable_range(&self) -> ApplicableRange {
        self.applicable_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_rejects_end_before_start() {
        let err = Sequence::new(0.0, 10.0, 100.0, 100.0).unwrap_err();
        assert!(err.to_string().contains("'end' must be greater than 'start'"));
    }

    #[test]
    fn test_sequence_rejects_offset_before_start() {
        let err = Sequence::new(-1.0, 10.0, 0.0, 100.0).unwrap_err();
        assert!(err.to_string().contains("'offset' must be greater than or equal to 'start'"));
    }

    #[test]
    fn test_sequence_rejects_offset_after_end() {
        let err = Sequence::new(101.0, 10.0, 0.0, 100.0).unwrap_err();
        assert!(err.to_string().contains("smaller than or equal to 'end'"));
    }

    #[test]
    fn test_sequence_rejects_non_positive_interval() {
        assert!(Sequence::new(0.0, 0.0, 0.0, 100.0).is_err());
        assert!(Sequence::new(0.0, -5.0, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_sequence_rejects_nan() {
        assert!(Sequence::new(f64::NAN, 10.0, 0.0, 100.0).is_err());
        assert!(Sequence::new(0.0, f64::NAN, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_first_and_last_values() {
        let seq = Sequence::new(35.0, 10.0, 2.0, 98.0).expect("valid sequence");
        assert_eq!(seq.first_value(), 5.0);
        assert_eq!(seq.last_value(), 95.0);
    }

    #[test]
    fn test_snap_count_truncates() {
        let seq = Sequence::new(0.0, 30.0, 0.0, 100.0).expect("valid sequence");
        assert_eq!(seq.snap_count(), 3);
    }

    #[test]
    fn test_nearest_with_radius() {
        let seq = Sequence::new(0.0, 10.0, 0.0, 100.0).expect("valid sequence");
        assert_eq!(seq.nearest(7.0, 3.0), 10.0);
        assert_eq!(seq.nearest(2.0, 3.0), 0.0);
        assert_eq!(seq.nearest(5.0, 3.0), 5.0);
        assert_eq!(seq.nearest(5.0, f64::INFINITY), 0.0);
        assert_eq!(seq.nearest(5.5, f64::INFINITY), 10.0);
    }

    #[test]
    fn test_shifted_keeps_interval() {
        let seq = Sequence::new(10.0, 10.0, 0.0, 100.0).expect("valid sequence").shifted(-50.0);
        assert_eq!(seq.start(), -50.0);
        assert_eq!(seq.end(), 50.0);
        assert_eq!(seq.offset(), -40.0);
        assert_eq!(seq.interval(), 10.0);
    }

    #[test]
    fn test_repeated_scroll_alignment() {
        let mut point = RepeatedScrollSnapPoint::new(0.0, 10.0, 0.0, 100.0, Alignment::Far)
            .expect("valid point");
        assert!(point.on_update_viewport(30.0));
        assert_eq!(point.actual_sequence().start(), -30.0);
        assert_eq!(point.start(), 0.0);
        assert_eq!(point.actual_impulse_ignored_value(20.0), -10.0);
    }

    #[test]
    fn test_repeated_scroll_near_ignores_viewport() {
        let mut point = RepeatedScrollSnapPoint::new(0.0, 10.0, 0.0, 100.0, Alignment::Near)
            .expect("valid point");
        assert!(!point.on_update_viewport(30.0));
        assert_eq!(point.alignment_adjustment(), 0.0);
    }

    #[test]
    fn test_repeated_zoom_rejects_bad_range() {
        assert!(RepeatedZoomSnapPoint::with_applicable_range(1.0, 0.5, 1.0, 4.0, 0.0).is_err());
        let point = RepeatedZoomSnapPoint::with_applicable_range(1.0, 0.5, 1.0, 4.0, 0.1)
            .expect("valid point");
        assert_eq!(point.applicable_range(), ApplicableRange::Optional(0.1));
    }
}
