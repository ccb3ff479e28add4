//! Snap point kinds.
//!
//! A [`SnapPoint`] is one of four closed kinds: a single scroll point, a
//! repeated scroll sequence, a single zoom point, or a repeated zoom sequence.
//! Every algorithm matches on the kind exhaustively.

pub mod irregular;
pub mod repeated;

use std::fmt;

pub use irregular::{ScrollSnapPoint, ZoomSnapPoint};
pub use repeated::{RepeatedScrollSnapPoint, RepeatedZoomSnapPoint, Sequence};

use crate::alignment::Alignment;
use crate::error::{Error, Result};
use crate::range::ApplicableRange;
use crate::sort::{SortPredicate, EQUALITY_EPSILON};
use crate::zone::Zone;

/// Axis a snap point applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Scroll offsets.
    Scroll,
    /// Zoom factors.
    Zoom,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scroll => "scroll",
            Self::Zoom => "zoom",
        })
    }
}

/// A declared snap point of any kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapPoint {
    /// Single scroll point.
    Scroll(ScrollSnapPoint),
    /// Repeated scroll points.
    RepeatedScroll(RepeatedScrollSnapPoint),
    /// Single zoom point.
    Zoom(ZoomSnapPoint),
    /// Repeated zoom points.
    RepeatedZoom(RepeatedZoomSnapPoint),
}

/// Aligned geometry of a snap point, independent of its dimension.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Geometry {
    Irregular { value: f64, range: ApplicableRange },
    Repeated { sequence: Sequence, range: ApplicableRange },
}

impl SnapPoint {
    /// Axis of the point.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Scroll(_) | Self::RepeatedScroll(_) => Dimension::Scroll,
            Self::Zoom(_) | Self::RepeatedZoom(_) => Dimension::Zoom,
        }
    }

    /// Whether the point is a repeated sequence.
    #[must_use]
    pub fn is_repeated(&self) -> bool {
        matches!(self, Self::RepeatedScroll(_) | Self::RepeatedZoom(_))
    }

    /// Human readable kind name.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scroll(_) => "scroll",
            Self::RepeatedScroll(_) => "repeated scroll",
            Self::Zoom(_) => "zoom",
            Self::RepeatedZoom(_) => "repeated zoom",
        }
    }

    /// Viewport alignment. `None` for zoom points.
    #[must_use]
    pub fn alignment(&self) -> Option<Alignment> {
        match self {
            Self::Scroll(point) => Some(point.alignment()),
            Self::RepeatedScroll(point) => Some(point.alignment()),
            Self::Zoom(_) | Self::RepeatedZoom(_) => None,
        }
    }

    /// Attraction radius.
    #[must_use]
    pub fn applicable_range(&self) -> ApplicableRange {
        match self {
            Self::Scroll(point) => point.applicable_range(),
            Self::RepeatedScroll(point) => point.applicable_range(),
            Self::Zoom(point) => point.applicable_range(),
            Self::RepeatedZoom(point) => point.applicable_range(),
        }
    }

    pub(crate) fn geometry(&self) -> Geometry {
        match self {
            Self::Scroll(point) => {
                Geometry::Irregular { value: point.actual_value(), range: point.applicable_range() }
            }
            Self::Zoom(point) => {
                Geometry::Irregular { value: point.value(), range: point.applicable_range() }
            }
            Self::RepeatedScroll(point) => Geometry::Repeated {
                sequence: point.actual_sequence(),
                range: point.applicable_range(),
            },
            Self::RepeatedZoom(point) => {
                Geometry::Repeated { sequence: point.sequence(), range: point.applicable_range() }
            }
        }
    }

    /// Sort key, computed on aligned values.
    #[must_use]
    pub fn sort_predicate(&self) -> SortPredicate {
        match self.geometry() {
            Geometry::Irregular { value, .. } => SortPredicate::new(value, value, 0),
            Geometry::Repeated { sequence, .. } => {
                SortPredicate::new(sequence.start(), sequence.end(), 1)
            }
        }
    }

    /// Strict `<` on sort keys.
    #[must_use]
    pub fn precedes(&self, other: &Self) -> bool {
        self.sort_predicate().precedes(&other.sort_predicate())
    }

    /// Epsilon-tolerant equality on sort keys.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.sort_predicate().matches(&other.sort_predicate())
    }

    /// Number of snap positions the point stands for.
    #[must_use]
    pub fn snap_count(&self) -> u32 {
        match self.geometry() {
            Geometry::Irregular { .. } => 1,
            Geometry::Repeated { sequence, .. } => sequence.snap_count(),
        }
    }

    /// Snapped value for `value`, or `value` itself when it is outside
    /// `zone` or out of reach of every position.
    #[must_use]
    pub fn evaluate(&self, zone: Zone, value: f64) -> f64 {
        if !zone.contains(value) {
            return value;
        }
        match self.geometry() {
            Geometry::Irregular { value: snapped, .. } => snapped,
            Geometry::Repeated { sequence, range } => {
                if sequence.contains(value) {
                    sequence.nearest(value, range.radius())
                } else {
                    value
                }
            }
        }
    }

    /// Whether `value` is inside `zone` and already at a snap position.
    #[must_use]
    pub fn snaps_at(&self, zone: Zone, value: f64) -> bool {
        zone.contains(value) && (value - self.evaluate(zone, value)).abs() < EQUALITY_EPSILON
    }

    /// Merge `other` into this point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMerge`] when either point is repeated or the
    /// kinds differ.
    pub fn combine(&mut self, combination_count: &mut u32, other: &Self) -> Result<()> {
        match (self, other) {
            (Self::Scroll(point), Self::Scroll(other)) => point.absorb(other),
            (Self::Zoom(point), Self::Zoom(other)) => point.absorb(other),
            (this, other) => {
                return Err(Error::InvalidMerge(format!(
                    "cannot combine {} snap point with {} snap point",
                    this.kind(),
                    other.kind()
                )));
            }
        }
        *combination_count += 1;
        Ok(())
    }

    /// Recompute the alignment adjustment for a viewport of `viewport` length.
    ///
    /// Returns whether the point depends on future viewport changes.
    pub fn on_update_viewport(&mut self, viewport: f64) -> bool {
        match self {
            Self::Scroll(point) => point.on_update_viewport(viewport),
            Self::RepeatedScroll(point) => point.on_update_viewport(viewport),
            Self::Zoom(_) | Self::RepeatedZoom(_) => false,
        }
    }

    /// Zone the point claims before its neighbors are known.
    #[must_use]
    pub fn default_zone(&self) -> Zone {
        match self.geometry() {
            Geometry::Irregular { value, range } => irregular::declared_zone(value, range),
            Geometry::Repeated { sequence, .. } => Zone::new(sequence.start(), sequence.end()),
        }
    }
}

impl From<ScrollSnapPoint> for SnapPoint {
    fn from(point: ScrollSnapPoint) -> Self {
        Self::Scroll(point)
    }
}

impl From<RepeatedScrollSnapPoint> for SnapPoint {
    fn from(point: RepeatedScrollSnapPoint) -> Self {
        Self::RepeatedScroll(point)
    }
}

impl From<ZoomSnapPoint> for SnapPoint {
    fn from(point: ZoomSnapPoint) -> Self {
        Self::Zoom(point)
    }
}

impl From<RepeatedZoomSnapPoint> for SnapPoint {
    fn from(point: RepeatedZoomSnapPoint) -> Self {
        Self::RepeatedZoom(point)
    }
}

impl fmt::Display for SnapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.geometry() {
            Geometry::Irregular { value, .. } => write!(f, "{} {value}", self.kind())?,
            Geometry::Repeated { sequence, .. } => write!(
                f,
                "{} {}+k*{} in [{}, {}]",
                self.kind(),
                sequence.offset(),
                sequence.interval(),
                sequence.start(),
                sequence.end()
            )?,
        }
        if let ApplicableRange::Optional(radius) = self.applicable_range() {
            write!(f, " range {radius}")?;
        }
        Ok(())
    }
}
