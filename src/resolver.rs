//! Neighbor-aware zone resolution.
//!
//! A point's zone is bounded below by the influence of its previous neighbor
//! and above by the influence of its next neighbor. Influence is always
//! evaluated from the neighbor's side, looking toward the current point.
//! Repeated points have fixed zones; their neighbors are only consulted to
//! detect overlaps.
//!
//! The impulse variant threads an optional ignored value per point so that a
//! fling starting on a snap position can resolve back to it.

use crate::error::{Error, Result};
use crate::snap_point::{Geometry, SnapPoint};
use crate::zone::Zone;

fn invaded(sequence_start: f64, sequence_end: f64, edge: f64) -> Error {
    Error::InvalidTopology(format!(
        "value {edge} falls inside repeated snap points [{sequence_start}, {sequence_end}]"
    ))
}

impl SnapPoint {
    /// Boundary this point imposes on a neighbor whose position is
    /// `edge_of_midpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTopology`] when this point is repeated and
    /// `edge_of_midpoint` lies strictly inside its bounds.
    pub fn influence(&self, edge_of_midpoint: f64) -> Result<f64> {
        match self.geometry() {
            Geometry::Irregular { value, range } => {
                let midpoint = (value + edge_of_midpoint) / 2.0;
                if range.is_mandatory() {
                    Ok(midpoint)
                } else if value <= edge_of_midpoint {
                    Ok((value + range.radius()).min(midpoint))
                } else {
                    Ok((value - range.radius()).max(midpoint))
                }
            }
            Geometry::Repeated { sequence, .. } => {
                if edge_of_midpoint <= sequence.start() {
                    Ok(sequence.start())
                } else if edge_of_midpoint >= sequence.end() {
                    Ok(sequence.end())
                } else {
                    Err(invaded(sequence.start(), sequence.end(), edge_of_midpoint))
                }
            }
        }
    }

    /// Impulse counterpart of [`SnapPoint::influence`], for a point whose own
    /// ignored value is `ignored_value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTopology`] when this point is repeated and
    /// `edge_of_midpoint` lies strictly inside its bounds.
    pub fn impulse_influence(
        &self,
        edge_of_midpoint: f64,
        ignored_value: Option<f64>,
    ) -> Result<f64> {
        match self.geometry() {
            Geometry::Irregular { value, .. } => {
                let midpoint = (value + edge_of_midpoint) / 2.0;
                Ok(match ignored_value {
                    None => midpoint,
                    Some(_) if value <= edge_of_midpoint => value.min(midpoint),
                    Some(_) => value.max(midpoint),
                })
            }
            Geometry::Repeated { sequence, .. } => {
                if edge_of_midpoint <= sequence.start() {
                    let first = sequence.first_value();
                    Ok(if ignored_value == Some(first) { first } else { sequence.start() })
                } else if edge_of_midpoint >= sequence.end() {
                    let last = sequence.last_value();
                    Ok(if ignored_value == Some(last) { last } else { sequence.end() })
                } else {
                    Err(invaded(sequence.start(), sequence.end(), edge_of_midpoint))
                }
            }
        }
    }

    /// Zone of this point given its immediate neighbors in sort order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTopology`] when a neighbor invades a repeated
    /// point, or when a repeated point is followed by one with the same
    /// bounds.
    pub fn determine_actual_applicable_zone(
        &self,
        previous: Option<&SnapPoint>,
        next: Option<&SnapPoint>,
    ) -> Result<Zone> {
        match self.geometry() {
            Geometry::Irregular { value, range } => {
                let radius = range.radius();
                let min = match previous {
                    None => value - radius,
                    Some(previous) => previous.influence(value)?.max(value - radius),
                };
                let max = match next {
                    None => value + radius,
                    Some(next) => next.influence(value)?.min(value + radius),
                };
                Ok(Zone::new(min, max))
            }
            Geometry::Repeated { sequence, .. } => {
                if let Some(previous) = previous {
                    previous.influence(sequence.start())?;
                }
                if let Some(next) = next {
                    next.influence(sequence.end())?;
                    if self.matches(next) {
                        return Err(Error::InvalidTopology(format!(
                            "repeated snap points share bounds [{}, {}] with their neighbor",
                            sequence.start(),
                            sequence.end()
                        )));
                    }
                }
                Ok(Zone::new(sequence.start(), sequence.end()))
            }
        }
    }

    /// Impulse zone of this point given its neighbors and the ignored values
    /// of all three points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTopology`] when a neighbor's impulse influence
    /// is evaluated from inside a repeated point.
    pub fn determine_actual_impulse_applicable_zone(
        &self,
        previous: Option<&SnapPoint>,
        next: Option<&SnapPoint>,
        current_ignored_value: Option<f64>,
        previous_ignored_value: Option<f64>,
        next_ignored_value: Option<f64>,
    ) -> Result<Zone> {
        match self.geometry() {
            Geometry::Irregular { value, .. } => {
                let min = match previous {
                    None => f64::NEG_INFINITY,
                    Some(previous) => {
                        let influence = previous.impulse_influence(value, previous_ignored_value)?;
                        if current_ignored_value.is_some() {
                            influence.max(value)
                        } else {
                            influence
                        }
                    }
                };
                let max = match next {
                    None => f64::INFINITY,
                    Some(next) => {
                        let influence = next.impulse_influence(value, next_ignored_value)?;
                        if current_ignored_value.is_some() {
                            value.min(influence)
                        } else {
                            influence
                        }
                    }
                };
                Ok(Zone::new(min, max))
            }
            Geometry::Repeated { sequence, .. } => {
                let min = match previous {
                    Some(_) if current_ignored_value == Some(sequence.first_value()) => {
                        sequence.first_value()
                    }
                    Some(previous) => match previous_ignored_value {
                        Some(ignored) => {
                            previous.impulse_influence(sequence.start(), Some(ignored))?
                        }
                        None => sequence.start(),
                    },
                    None => sequence.start(),
                };
                let max = match next {
                    Some(_) if current_ignored_value == Some(sequence.last_value()) => {
                        sequence.last_value()
                    }
                    Some(next) => match next_ignored_value {
                        Some(ignored) => next.impulse_influence(sequence.end(), Some(ignored))?,
                        None => sequence.end(),
                    },
                    None => sequence.end(),
                };
                Ok(Zone::new(min, max))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Alignment;
    use crate::snap_point::{RepeatedScrollSnapPoint, ScrollSnapPoint, ZoomSnapPoint};

    fn scroll(value: f64) -> SnapPoint {
        ScrollSnapPoint::new(value, Alignment::Near).expect("valid point").into()
    }

    fn optional(value: f64, range: f64) -> SnapPoint {
        ScrollSnapPoint::with_applicable_range(value, range, Alignment::Near)
            .expect("valid point")
            .into()
    }

    fn repeated(offset: f64, interval: f64, start: f64, end: f64) -> SnapPoint {
        RepeatedScrollSnapPoint::new(offset, interval, start, end, Alignment::Near)
            .expect("valid point")
            .into()
    }

    #[test]
    fn test_mandatory_neighbors_split_at_midpoint() {
        let a = scroll(0.0);
        let b = scroll(100.0);
        let zone_a = a.determine_actual_applicable_zone(None, Some(&b)).expect("zone");
        let zone_b = b.determine_actual_applicable_zone(Some(&a), None).expect("zone");
        assert_eq!(zone_a, Zone::new(f64::NEG_INFINITY, 50.0));
        assert_eq!(zone_b, Zone::new(50.0, f64::INFINITY));
        assert_eq!(a.evaluate(zone_a, 40.0), 0.0);
        assert_eq!(b.evaluate(zone_b, 60.0), 100.0);
    }

    #[test]
    fn test_optional_point_without_neighbors() {
        let point = optional(10.0, 4.0);
        let zone = point.determine_actual_applicable_zone(None, None).expect("zone");
        assert_eq!(zone, Zone::new(6.0, 14.0));
    }

    #[test]
    fn test_optional_neighbor_influence_is_clamped() {
        let near = optional(0.0, 10.0);
        let far = scroll(100.0);
        assert_eq!(near.influence(100.0).expect("influence"), 10.0);
        assert_eq!(near.influence(-100.0).expect("influence"), -10.0);
        // The mandatory point reaches down to the optional one's radius.
        let zone = far.determine_actual_applicable_zone(Some(&near), None).expect("zone");
        assert_eq!(zone.min, 10.0);
    }

    #[test]
    fn test_optional_zone_clamped_by_own_range() {
        let a = scroll(0.0);
        let b = optional(100.0, 20.0);
        let zone = b.determine_actual_applicable_zone(Some(&a), None).expect("zone");
        assert_eq!(zone, Zone::new(80.0, 120.0));
    }

    #[test]
    fn test_repeated_influence_outside_bounds() {
        let rep = repeated(0.0, 10.0, 0.0, 100.0);
        assert_eq!(rep.influence(-20.0).expect("influence"), 0.0);
        assert_eq!(rep.influence(150.0).expect("influence"), 100.0);
        assert!(matches!(rep.influence(50.0), Err(Error::InvalidTopology(_))));
        assert!(rep.impulse_influence(50.0, None).is_err());
    }

    #[test]
    fn test_repeated_zone_is_fixed() {
        let before = scroll(-50.0);
        let rep = repeated(0.0, 10.0, 0.0, 100.0);
        let after = scroll(300.0);
        let zone = rep.determine_actual_applicable_zone(Some(&before), Some(&after)).expect("zone");
        assert_eq!(zone, Zone::new(0.0, 100.0));
        let zone = before.determine_actual_applicable_zone(None, Some(&rep)).expect("zone");
        assert_eq!(zone.max, 0.0);
    }

    #[test]
    fn test_point_inside_repeated_bounds_is_rejected() {
        let rep = repeated(0.0, 10.0, 0.0, 100.0);
        let inside = scroll(50.0);
        assert!(rep.precedes(&inside));
        assert!(inside.determine_actual_applicable_zone(Some(&rep), None).is_err());
    }

    #[test]
    fn test_adjacent_repeated_with_same_bounds_is_rejected() {
        let a = repeated(0.0, 10.0, 0.0, 100.0);
        let b = repeated(5.0, 10.0, 0.0, 100.0);
        let err = a.determine_actual_applicable_zone(None, Some(&b)).unwrap_err();
        assert!(matches!(err, Error::InvalidTopology(_)));
    }

    #[test]
    fn test_touching_repeated_points_are_allowed() {
        let a = repeated(0.0, 10.0, 0.0, 100.0);
        let b = repeated(100.0, 10.0, 100.0, 200.0);
        let zone = a.determine_actual_applicable_zone(None, Some(&b)).expect("zone");
        assert_eq!(zone, Zone::new(0.0, 100.0));
    }

    #[test]
    fn test_irregular_impulse_influence() {
        let point = scroll(100.0);
        assert_eq!(point.impulse_influence(0.0, None).expect("influence"), 50.0);
        assert_eq!(point.impulse_influence(0.0, Some(100.0)).expect("influence"), 100.0);
        assert_eq!(point.impulse_influence(200.0, Some(100.0)).expect("influence"), 100.0);
    }

    #[test]
    fn test_irregular_impulse_zone_ignores_range() {
        let point = optional(10.0, 2.0);
        let zone = point
            .determine_actual_impulse_applicable_zone(None, None, None, None, None)
            .expect("zone");
        assert_eq!(zone, Zone::UNBOUNDED);
    }

    #[test]
    fn test_irregular_impulse_zone_with_ignored_neighbor() {
        let a = scroll(0.0);
        let b = scroll(100.0);
        // The fling started on `a`, so `b` claims everything down to `a`.
        let zone = b
            .determine_actual_impulse_applicable_zone(Some(&a), None, None, Some(0.0), None)
            .expect("zone");
        assert_eq!(zone.min, 0.0);
        // `a` itself is pinned to its own value.
        let zone = a
            .determine_actual_impulse_applicable_zone(None, Some(&b), Some(0.0), None, None)
            .expect("zone");
        assert_eq!(zone.max, 0.0);
    }

    #[test]
    fn test_repeated_impulse_zone_anchored_on_first_position() {
        let before = scroll(-50.0);
        let rep = repeated(5.0, 10.0, 0.0, 100.0);
        let zone = rep
            .determine_actual_impulse_applicable_zone(Some(&before), None, Some(5.0), None, None)
            .expect("zone");
        assert_eq!(zone, Zone::new(5.0, 100.0));
        // Without a neighbor the bounds are kept.
        let zone = rep
            .determine_actual_impulse_applicable_zone(None, None, Some(5.0), None, None)
            .expect("zone");
        assert_eq!(zone, Zone::new(0.0, 100.0));
    }

    #[test]
    fn test_repeated_impulse_zone_consults_ignored_neighbor() {
        let before = scroll(-50.0);
        let rep = repeated(0.0, 10.0, 0.0, 100.0);
        let after = repeated(100.0, 10.0, 100.0, 200.0);
        let zone = rep
            .determine_actual_impulse_applicable_zone(
                Some(&before),
                Some(&after),
                None,
                Some(-50.0),
                Some(100.0),
            )
            .expect("zone");
        assert_eq!(zone.min, -50.0);
        assert_eq!(zone.max, 100.0);
    }

    #[test]
    fn test_zoom_points_resolve_like_scroll_points() {
        let a: SnapPoint = ZoomSnapPoint::new(1.0).expect("valid point").into();
        let b: SnapPoint = ZoomSnapPoint::new(2.0).expect("valid point").into();
        let zone = a.determine_actual_applicable_zone(None, Some(&b)).expect("zone");
        assert_eq!(zone.max, 1.5);
    }
}
