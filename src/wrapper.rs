//! Per-point state held by an owning collection.

use log::trace;

use crate::error::Result;
use crate::expression::ExpressionTemplate;
use crate::snap_point::SnapPoint;
use crate::zone::Zone;

/// A snap point bound to its last computed zones.
///
/// Neighbors are never stored. They are passed in for each zone
/// determination.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapPointWrapper {
    snap_point: SnapPoint,
    actual_applicable_zone: Zone,
    actual_impulse_applicable_zone: Zone,
    combination_count: u32,
    ignored_value: Option<f64>,
    conditional_expression: Option<ExpressionTemplate>,
    resting_point_expression: Option<ExpressionTemplate>,
}

impl SnapPointWrapper {
    /// Wrap `snap_point` with its default zone. Repeated points start with
    /// both zones at their bounds.
    #[must_use]
    pub fn new(snap_point: SnapPoint) -> Self {
        let impulse_zone =
            if snap_point.is_repeated() { snap_point.default_zone() } else { Zone::UNBOUNDED };
        Self {
            actual_applicable_zone: snap_point.default_zone(),
            actual_impulse_applicable_zone: impulse_zone,
            snap_point,
            combination_count: 1,
            ignored_value: None,
            conditional_expression: None,
            resting_point_expression: None,
        }
    }

    /// The wrapped point.
    #[must_use]
    pub fn snap_point(&self) -> &SnapPoint {
        &self.snap_point
    }

    /// Zone used for regular interactions.
    #[must_use]
    pub fn actual_applicable_zone(&self) -> Zone {
        self.actual_applicable_zone
    }

    /// Zone used for inertial impulses.
    #[must_use]
    pub fn actual_impulse_applicable_zone(&self) -> Zone {
        self.actual_impulse_applicable_zone
    }

    /// Number of declared points merged into this one.
    #[must_use]
    pub fn combination_count(&self) -> u32 {
        self.combination_count
    }

    /// Value ignored during impulse resolution.
    #[must_use]
    pub fn ignored_value(&self) -> Option<f64> {
        self.ignored_value
    }

    /// Set the ignored value.
    pub fn set_ignored_value(&mut self, ignored_value: f64) {
        debug_assert!(!ignored_value.is_nan());
        self.ignored_value = Some(ignored_value);
    }

    /// Clear the ignored value. Returns whether one was set.
    pub fn reset_ignored_value(&mut self) -> bool {
        self.ignored_value.take().is_some()
    }

    /// Recompute the zones from the immediate neighbors. With
    /// `for_impulse_only` the regular zone is kept.
    ///
    /// # Errors
    ///
    /// Propagates topology errors from the resolver. The wrapper is left
    /// unchanged on error.
    pub fn determine_actual_applicable_zone(
        &mut self,
        previous: Option<&SnapPointWrapper>,
        next: Option<&SnapPointWrapper>,
        for_impulse_only: bool,
    ) -> Result<()> {
        let previous_point = previous.map(SnapPointWrapper::snap_point);
        let next_point = next.map(SnapPointWrapper::snap_point);

        let zone = if for_impulse_only {
            self.actual_applicable_zone
        } else {
            self.snap_point.determine_actual_applicable_zone(previous_point, next_point)?
        };
        let impulse_zone = self.snap_point.determine_actual_impulse_applicable_zone(
            previous_point,
            next_point,
            self.ignored_value,
            previous.and_then(SnapPointWrapper::ignored_value),
            next.and_then(SnapPointWrapper::ignored_value),
        )?;

        trace!(
            "{}: zone {} -> {}, impulse zone {} -> {}",
            self.snap_point,
            self.actual_applicable_zone,
            zone,
            self.actual_impulse_applicable_zone,
            impulse_zone
        );
        self.actual_applicable_zone = zone;
        self.actual_impulse_applicable_zone = impulse_zone;
        Ok(())
    }

    /// Merge `other` into this wrapper, incrementing the combination count.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMerge`] for repeated or mismatched kinds.
    pub fn combine(&mut self, other: &SnapPointWrapper) -> Result<()> {
        self.snap_point.combine(&mut self.combination_count, &other.snap_point)?;
        trace!("{}: combined, count {}", self.snap_point, self.combination_count);
        Ok(())
    }

    /// Snapped value for `value` within the regular zone.
    #[must_use]
    pub fn evaluate(&self, value: f64) -> f64 {
        self.snap_point.evaluate(self.actual_applicable_zone, value)
    }

    /// Snapped value for `value` within the impulse zone.
    #[must_use]
    pub fn evaluate_impulse(&self, value: f64) -> f64 {
        self.snap_point.evaluate(self.actual_impulse_applicable_zone, value)
    }

    /// Whether `value` already sits on this point.
    #[must_use]
    pub fn snaps_at(&self, value: f64) -> bool {
        self.snap_point.snaps_at(self.actual_applicable_zone, value)
    }

    /// Create and keep the resting point expression.
    pub fn create_resting_point_expression(
        &mut self,
        target: &str,
        scale: &str,
    ) -> ExpressionTemplate {
        let template = self.snap_point.create_resting_point_expression(
            self.ignored_value,
            self.actual_impulse_applicable_zone,
            target,
            scale,
        );
        self.resting_point_expression = Some(template.clone());
        template
    }

    /// Create and keep the conditional expression.
    pub fn create_conditional_expression(
        &mut self,
        target: &str,
        scale: &str,
    ) -> ExpressionTemplate {
        let template = self.snap_point.create_conditional_expression(
            self.actual_applicable_zone,
            self.actual_impulse_applicable_zone,
            target,
            scale,
        );
        self.conditional_expression = Some(template.clone());
        template
    }

    /// Re-bind the impulse parameters of the kept expressions and return
    /// them as `(conditional, resting)`. `None` until both were created.
    pub fn updated_expressions_for_impulse(
        &mut self,
    ) -> Option<(ExpressionTemplate, ExpressionTemplate)> {
        let conditional = self.conditional_expression.as_mut()?;
        let resting = self.resting_point_expression.as_mut()?;
        let impulse_zone = self.actual_impulse_applicable_zone;
        self.snap_point.update_conditional_expression_for_impulse(conditional, impulse_zone);
        self.snap_point.update_resting_point_expression_for_impulse(
            resting,
            self.ignored_value,
            impulse_zone,
        );
        Some((conditional.clone(), resting.clone()))
    }
}
