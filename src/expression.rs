//! Animation expression templates.
//!
//! The engine does not evaluate these formulas. It produces the text and the
//! named parameters that an external animation host binds and evaluates every
//! frame: a boolean conditional expression deciding whether a snap point
//! applies, and a resting point expression yielding the snapped value.
//!
//! Templates reference the running interaction as `it` (repeated kinds) or
//! `this.Target` (irregular kinds) and read the inertia flag
//! `IsInertiaFromImpulse`. The formula text must match the host's grammar
//! exactly, so every fragment below is assembled verbatim.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::snap_point::{Geometry, SnapPoint};
use crate::zone::Zone;

/// Reference parameter bound to the interaction tracker.
pub const INTERACTION_REFERENCE: &str = "it";

/// Runtime flag distinguishing inertial impulses from regular interactions.
pub const IMPULSE_FLAG: &str = "IsInertiaFromImpulse";

/// A formula plus the parameters it must be bound with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpressionTemplate {
    expression: String,
    scalar_parameters: BTreeMap<&'static str, f32>,
    reference_parameters: BTreeSet<&'static str>,
}

impl ExpressionTemplate {
    /// Create a template with no bound parameters.
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self { expression: expression.into(), ..Self::default() }
    }

    /// Formula text.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Bind or re-bind a scalar parameter. Values are single precision.
    pub fn set_scalar_parameter(&mut self, name: &'static str, value: f64) {
        self.scalar_parameters.insert(name, value as f32);
    }

    /// Bind a reference parameter.
    pub fn set_reference_parameter(&mut self, name: &'static str) {
        self.reference_parameters.insert(name);
    }

    /// Value bound to `name`, if any.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<f32> {
        self.scalar_parameters.get(name).copied()
    }

    /// All scalar parameters, by name.
    #[must_use]
    pub fn scalar_parameters(&self) -> &BTreeMap<&'static str, f32> {
        &self.scalar_parameters
    }

    /// All reference parameters.
    #[must_use]
    pub fn reference_parameters(&self) -> &BTreeSet<&'static str> {
        &self.reference_parameters
    }
}

impl fmt::Display for ExpressionTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)?;
        for (name, value) in &self.scalar_parameters {
            write!(f, "\n  {name} = {value}")?;
        }
        for name in &self.reference_parameters {
            write!(f, "\n  {name} -> interaction")?;
        }
        Ok(())
    }
}

// ============================================================================
// Formula fragments
// ============================================================================

fn target_expression(target: &str) -> String {
    format!("this.Target.{target}")
}

/// Compact repeated-point resting formula over the unscaled target `u`.
struct RestingFormula {
    unscaled: String,
}

impl RestingFormula {
    fn previous_bare(&self) -> String {
        format!("(Floor(({}-fst)/itv)*itv)+fst", self.unscaled)
    }

    fn next_bare(&self) -> String {
        format!("(Ceil(({}-fst)/itv)*itv)+fst", self.unscaled)
    }

    fn previous(&self) -> String {
        format!("({})", self.previous_bare())
    }

    fn next(&self) -> String {
        format!("({})", self.next_bare())
    }

    fn effective_end() -> String {
        format!("({INTERACTION_REFERENCE}.{IMPULSE_FLAG}?iEnd:end)")
    }

    fn next_is_nearer(&self) -> String {
        let u = &self.unscaled;
        let (previous, next) = (self.previous(), self.next());
        let end = Self::effective_end();
        format!("((Abs({u}-{previous})>=Abs({u}-{next}))&&({next}<={end}))")
    }

    fn scroll(&self) -> String {
        let (previous, next) = (self.previous(), self.next());
        let end = Self::effective_end();
        let impulse = format!("{INTERACTION_REFERENCE}.{IMPULSE_FLAG}");
        format!(
            "{}?({impulse}?({next}==iIgn?((iIgn==fst?fst*it.Scale:(iIgn-itv)*it.Scale)):{next}*it.Scale):{next}*it.Scale):({impulse}?({previous}==iIgn?(iIgn+itv<={end}?(iIgn+itv)*it.Scale:iIgn*it.Scale):{previous}*it.Scale):{previous}*it.Scale)",
            self.next_is_nearer()
        )
    }

    fn zoom(&self) -> String {
        let (previous, next) = (self.previous(), self.next());
        let (previous_bare, next_bare) = (self.previous_bare(), self.next_bare());
        let end = Self::effective_end();
        let impulse = format!("{INTERACTION_REFERENCE}.{IMPULSE_FLAG}");
        format!(
            "{}?({impulse}?({next}==iIgn?((iIgn==fst?fst:iIgn-itv)):{next_bare}):{next_bare}):({impulse}?({previous}==iIgn?(iIgn+itv<={end}?iIgn+itv:iIgn):{previous_bare}):{previous_bare})",
            self.next_is_nearer()
        )
    }
}

/// Spaced repeated-point conditional formula over the unscaled target `u`.
fn repeated_conditional(u: &str) -> String {
    let impulse = format!("{INTERACTION_REFERENCE}.{IMPULSE_FLAG}");
    let previous = format!("(Floor(({u} - fst) / itv) * itv) + fst");
    let next = format!("(Ceil(({u} - fst) / itv) * itv) + fst");
    format!(
        "((!{impulse} && {u} >= stt && {u} <= end) || ({impulse} && {u} >= iStt && {u} <= iEnd)) && (({previous} + aRg >= {u}) || (({next} - aRg <= {u}) && ({next} <= ({impulse} ? iEnd : end))))"
    )
}

fn irregular_conditional(target: &str, bound: impl Fn(&str) -> String) -> String {
    let te = target_expression(target);
    format!(
        "this.Target.{IMPULSE_FLAG} ? ({te} >= {} && {te} <= {}) : ({te} >= {} && {te} <= {})",
        bound("minImpulseApplicableValue"),
        bound("maxImpulseApplicableValue"),
        bound("minApplicableValue"),
        bound("maxApplicableValue"),
    )
}

// ============================================================================
// Factories
// ============================================================================

impl SnapPoint {
    /// Ignored value as bound to `iIgn`. NaN when there is none.
    ///
    /// Repeated scroll points shift it by their alignment adjustment. Zoom
    /// points bind it as is.
    #[must_use]
    pub fn actual_impulse_ignored_value(&self, ignored_value: Option<f64>) -> f64 {
        let ignored_value = ignored_value.unwrap_or(f64::NAN);
        match self {
            Self::RepeatedScroll(point) => point.actual_impulse_ignored_value(ignored_value),
            Self::Scroll(_) | Self::Zoom(_) | Self::RepeatedZoom(_) => ignored_value,
        }
    }

    /// Resting point expression for the target property `target` scaled by
    /// the property `scale`.
    #[must_use]
    pub fn create_resting_point_expression(
        &self,
        ignored_value: Option<f64>,
        impulse_zone: Zone,
        target: &str,
        scale: &str,
    ) -> ExpressionTemplate {
        let mut template = match self {
            Self::Scroll(point) => {
                let mut template = ExpressionTemplate::new(format!("snapPointValue * {scale}"));
                template.set_scalar_parameter("snapPointValue", point.actual_value());
                return template;
            }
            Self::Zoom(point) => {
                let mut template = ExpressionTemplate::new("snapPointValue");
                template.set_scalar_parameter("snapPointValue", point.value());
                return template;
            }
            Self::RepeatedScroll(_) => {
                let unscaled =
                    format!("{INTERACTION_REFERENCE}.{target}/{INTERACTION_REFERENCE}.Scale");
                let formula = RestingFormula { unscaled };
                ExpressionTemplate::new(formula.scroll())
            }
            Self::RepeatedZoom(_) => {
                let unscaled = format!("{INTERACTION_REFERENCE}.{target}");
                let formula = RestingFormula { unscaled };
                ExpressionTemplate::new(formula.zoom())
            }
        };

        if let Geometry::Repeated { sequence, .. } = self.geometry() {
            template.set_scalar_parameter("itv", sequence.interval());
            template.set_scalar_parameter("end", sequence.end());
            template.set_scalar_parameter("fst", sequence.first_value());
        }
        template.set_reference_parameter(INTERACTION_REFERENCE);
        self.update_resting_point_expression_for_impulse(
            &mut template,
            ignored_value,
            impulse_zone,
        );
        template
    }

    /// Conditional expression deciding whether this point applies.
    #[must_use]
    pub fn create_conditional_expression(
        &self,
        zone: Zone,
        impulse_zone: Zone,
        target: &str,
        scale: &str,
    ) -> ExpressionTemplate {
        let sequence = match self.geometry() {
            Geometry::Irregular { .. } => {
                let expression = match self {
                    Self::Scroll(_) => {
                        irregular_conditional(target, |name| format!("({name} * {scale})"))
                    }
                    _ => irregular_conditional(target, str::to_string),
                };
                let mut template = ExpressionTemplate::new(expression);
                template.set_scalar_parameter("minApplicableValue", zone.min);
                template.set_scalar_parameter("maxApplicableValue", zone.max);
                template.set_scalar_parameter("minImpulseApplicableValue", impulse_zone.min);
                template.set_scalar_parameter("maxImpulseApplicableValue", impulse_zone.max);
                return template;
            }
            Geometry::Repeated { sequence, .. } => sequence,
        };
        debug_assert!(zone == Zone::new(sequence.start(), sequence.end()));

        let unscaled = match self {
            Self::RepeatedScroll(_) => {
                format!("{INTERACTION_REFERENCE}.{target} / {INTERACTION_REFERENCE}.Scale")
            }
            _ => format!("{INTERACTION_REFERENCE}.{target}"),
        };
        let mut template = ExpressionTemplate::new(repeated_conditional(&unscaled));
        template.set_scalar_parameter("itv", sequence.interval());
        template.set_scalar_parameter("fst", sequence.first_value());
        template.set_scalar_parameter("stt", sequence.start());
        template.set_scalar_parameter("end", sequence.end());
        template.set_scalar_parameter("aRg", self.applicable_range().radius());
        template.set_reference_parameter(INTERACTION_REFERENCE);
        self.update_conditional_expression_for_impulse(&mut template, impulse_zone);
        template
    }

    /// Re-bind the impulse parameters of a conditional expression.
    /// Irregular expressions have none.
    pub fn update_conditional_expression_for_impulse(
        &self,
        template: &mut ExpressionTemplate,
        impulse_zone: Zone,
    ) {
        if self.is_repeated() {
            template.set_scalar_parameter("iStt", impulse_zone.min);
            template.set_scalar_parameter("iEnd", impulse_zone.max);
        }
    }

    /// Re-bind the impulse parameters of a resting point expression.
    /// Irregular expressions have none.
    pub fn update_resting_point_expression_for_impulse(
        &self,
        template: &mut ExpressionTemplate,
        ignored_value: Option<f64>,
        impulse_zone: Zone,
    ) {
        if self.is_repeated() {
            template.set_scalar_parameter("iEnd", impulse_zone.max);
            template.set_scalar_parameter("iIgn", self.actual_impulse_ignored_value(ignored_value));
        }
    }
}
