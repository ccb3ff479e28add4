//! Owning collection of snap points for one dimension.
//!
//! Every membership, viewport, or ignored-value change runs one pass:
//!
//! 1. fresh copies of the declared points get the current alignment,
//! 2. the copies are stably sorted by their sort predicate,
//! 3. adjacent equal points are merged,
//! 4. every wrapper's zones are determined from its immediate neighbors,
//! 5. the impulse ignored value is re-applied.
//!
//! A pass builds new wrappers before replacing the current ones, so a failed
//! pass leaves the collection as it was.

use std::mem;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::expression::ExpressionTemplate;
use crate::snap_point::{Dimension, SnapPoint};
use crate::wrapper::SnapPointWrapper;

/// Conditional and resting point expressions of one resolved point.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapPointExpressions {
    /// Whether the point applies.
    pub conditional: ExpressionTemplate,
    /// Where the point rests.
    pub resting_point: ExpressionTemplate,
}

/// Snap points of one dimension, kept resolved.
#[derive(Debug, Clone)]
pub struct SnapPointCollection {
    dimension: Dimension,
    declared: Vec<SnapPoint>,
    viewport: Option<f64>,
    ignored_value: Option<f64>,
    wrappers: Vec<SnapPointWrapper>,
}

impl SnapPointCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            declared: Vec::new(),
            viewport: None,
            ignored_value: None,
            wrappers: Vec::new(),
        }
    }

    /// Dimension of the collection.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Last viewport size, if any.
    #[must_use]
    pub fn viewport(&self) -> Option<f64> {
        self.viewport
    }

    /// Current impulse ignored value, if any.
    #[must_use]
    pub fn impulse_ignored_value(&self) -> Option<f64> {
        self.ignored_value
    }

    /// Declared points in insertion order.
    #[must_use]
    pub fn declared(&self) -> &[SnapPoint] {
        &self.declared
    }

    /// Resolved points in sort order.
    #[must_use]
    pub fn wrappers(&self) -> &[SnapPointWrapper] {
        &self.wrappers
    }

    /// Number of resolved points after merging.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    /// Whether the collection has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }

    /// Add a snap point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] for a point of the other
    /// dimension, or the topology or merge error of the failed pass. The
    /// collection is unchanged on error.
    pub fn insert(&mut self, snap_point: impl Into<SnapPoint>) -> Result<()> {
        let snap_point = snap_point.into();
        if snap_point.dimension() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                found: snap_point.dimension(),
            });
        }

        self.declared.push(snap_point);
        match self.rebuild() {
            Ok(wrappers) => {
                debug!("inserted {snap_point}, {} resolved points", wrappers.len());
                self.wrappers = wrappers;
                Ok(())
            }
            Err(err) => {
                self.declared.pop();
                warn!("rejected {snap_point}: {err}");
                Err(err)
            }
        }
    }

    /// Remove the first declared point of the same kind equal to
    /// `snap_point`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no declared point matches.
    pub fn remove(&mut self, snap_point: &SnapPoint) -> Result<SnapPoint> {
        let index = self
            .declared
            .iter()
            .position(|declared| {
                mem::discriminant(declared) == mem::discriminant(snap_point)
                    && declared.matches(snap_point)
            })
            .ok_or(Error::NotFound)?;

        let removed = self.declared.remove(index);
        match self.rebuild() {
            Ok(wrappers) => {
                debug!("removed {removed}, {} resolved points", wrappers.len());
                self.wrappers = wrappers;
                Ok(removed)
            }
            Err(err) => {
                self.declared.insert(index, removed);
                warn!("failed to remove {removed}: {err}");
                Err(err)
            }
        }
    }

    /// Record a new viewport size.
    ///
    /// Returns whether any point depends on future viewport changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] unless `viewport` is finite and
    /// not negative, or the error of the failed pass. The previous viewport is
    /// kept on error.
    pub fn update_viewport(&mut self, viewport: f64) -> Result<bool> {
        if !viewport.is_finite() || viewport < 0.0 {
            return Err(Error::invalid(
                "viewport",
                format!("'viewport' must be a finite, non-negative size, got {viewport}."),
            ));
        }

        let tracks_viewport = self
            .declared
            .iter()
            .any(|point| point.alignment().is_some_and(|alignment| alignment.tracks_viewport()));

        let previous = self.viewport.replace(viewport);
        if !tracks_viewport || previous == Some(viewport) {
            return Ok(tracks_viewport);
        }

        match self.rebuild() {
            Ok(wrappers) => {
                debug!("viewport {previous:?} -> {viewport}");
                self.wrappers = wrappers;
                Ok(true)
            }
            Err(err) => {
                self.viewport = previous;
                warn!("viewport {viewport} rejected: {err}");
                Err(err)
            }
        }
    }

    /// Ignore `value` during impulse resolution: every point that snaps at
    /// `value` ignores it, every other point ignores nothing.
    ///
    /// Returns whether any ignored value changed.
    ///
    /// # Errors
    ///
    /// Returns the error of the impulse pass. The collection is unchanged on
    /// error.
    pub fn set_impulse_ignored_value(&mut self, value: f64) -> Result<bool> {
        if value.is_nan() {
            return self.reset_impulse_ignored_value();
        }
        self.apply_ignored_value(Some(value))
    }

    /// Stop ignoring values during impulse resolution.
    ///
    /// # Errors
    ///
    /// Returns the error of the impulse pass.
    pub fn reset_impulse_ignored_value(&mut self) -> Result<bool> {
        self.apply_ignored_value(None)
    }

    /// Snapped value for `value`. The first point in sort order whose zone
    /// contains `value` decides; values in no zone are returned unchanged.
    ///
    /// A shared boundary belongs to the lower point, even when `value` is
    /// also a position of the upper one. [`SnapPointCollection::snaps_at`]
    /// still reports such a value as a snap position.
    #[must_use]
    pub fn resolve(&self, value: f64) -> f64 {
        self.wrappers
            .iter()
            .find(|wrapper| wrapper.actual_applicable_zone().contains(value))
            .map_or(value, |wrapper| wrapper.evaluate(value))
    }

    /// Snapped value for `value` at the end of an inertial impulse, using
    /// the impulse zones and the current ignored value. Same first-zone rule
    /// as [`SnapPointCollection::resolve`].
    #[must_use]
    pub fn resolve_impulse(&self, value: f64) -> f64 {
        self.wrappers
            .iter()
            .find(|wrapper| wrapper.actual_impulse_applicable_zone().contains(value))
            .map_or(value, |wrapper| wrapper.evaluate_impulse(value))
    }

    /// Whether any point snaps at `value`.
    #[must_use]
    pub fn snaps_at(&self, value: f64) -> bool {
        self.wrappers.iter().any(|wrapper| wrapper.snaps_at(value))
    }

    /// Create the expressions of every point, in sort order.
    pub fn create_expressions(&mut self, target: &str, scale: &str) -> Vec<SnapPointExpressions> {
        self.wrappers
            .iter_mut()
            .map(|wrapper| SnapPointExpressions {
                conditional: wrapper.create_conditional_expression(target, scale),
                resting_point: wrapper.create_resting_point_expression(target, scale),
            })
            .collect()
    }

    /// Re-bind the impulse parameters of previously created expressions.
    /// Points whose expressions were never created are skipped.
    ///
    /// Every insert, remove, or viewport change rebuilds the wrappers and
    /// drops their expressions. Call [`SnapPointCollection::create_expressions`]
    /// again after those.
    pub fn updated_expressions_for_impulse(&mut self) -> Vec<SnapPointExpressions> {
        self.wrappers
            .iter_mut()
            .filter_map(SnapPointWrapper::updated_expressions_for_impulse)
            .map(|(conditional, resting_point)| SnapPointExpressions { conditional, resting_point })
            .collect()
    }

    fn rebuild(&self) -> Result<Vec<SnapPointWrapper>> {
        let mut points: Vec<SnapPoint> = self.declared.clone();
        if let Some(viewport) = self.viewport {
            for point in &mut points {
                point.on_update_viewport(viewport);
            }
        }
        points.sort_by(|a, b| a.sort_predicate().ordering(&b.sort_predicate()));

        let mut wrappers: Vec<SnapPointWrapper> = Vec::with_capacity(points.len());
        for point in points {
            let wrapper = SnapPointWrapper::new(point);
            match wrappers.last_mut() {
                Some(last) if last.snap_point().matches(&point) => last.combine(&wrapper)?,
                _ => wrappers.push(wrapper),
            }
        }

        determine_zones(&mut wrappers, false)?;
        if let Some(value) = self.ignored_value {
            if assign_ignored_value(&mut wrappers, Some(value)) {
                determine_zones(&mut wrappers, true)?;
            }
        }
        Ok(wrappers)
    }

    fn apply_ignored_value(&mut self, value: Option<f64>) -> Result<bool> {
        let mut wrappers = self.wrappers.clone();
        if !assign_ignored_value(&mut wrappers, value) {
            self.ignored_value = value;
            return Ok(false);
        }
        if let Err(err) = determine_zones(&mut wrappers, true) {
            warn!("ignored value {value:?} rejected: {err}");
            return Err(err);
        }
        debug!("impulse ignored value {:?} -> {value:?}", self.ignored_value);
        self.ignored_value = value;
        self.wrappers = wrappers;
        Ok(true)
    }
}

/// Give `value` to every wrapper snapping at it and clear the others.
/// Returns whether any wrapper changed.
fn assign_ignored_value(wrappers: &mut [SnapPointWrapper], value: Option<f64>) -> bool {
    let mut changed = false;
    for wrapper in wrappers {
        match value {
            Some(value) if wrapper.snaps_at(value) => {
                if wrapper.ignored_value() != Some(value) {
                    wrapper.set_ignored_value(value);
                    changed = true;
                }
            }
            _ => changed |= wrapper.reset_ignored_value(),
        }
    }
    changed
}

/// Determine the zones of every wrapper from its immediate neighbors.
fn determine_zones(wrappers: &mut [SnapPointWrapper], for_impulse_only: bool) -> Result<()> {
    for index in 0..wrappers.len() {
        let (before, rest) = wrappers.split_at_mut(index);
        if let Some((current, after)) = rest.split_first_mut() {
            let (previous, next) = (before.last(), after.first());
            current.determine_actual_applicable_zone(previous, next, for_impulse_only)?;
        }
    }
    Ok(())
}
