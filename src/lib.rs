//! # Trueno-Snap
//!
//! Snap-point zone resolution for scroll and zoom axes.
//!
//! Declared snap points (single values or repeated interval sequences) are
//! ordered along one axis, merged when equal, and given the exclusive zone of
//! raw values that resolve to them. A parallel "impulse" zone is kept for
//! inertial gestures that ignore the value they started from.
//!
//! ## Features
//!
//! - **Four kinds**: single and repeated points, for scroll and zoom
//! - **Mandatory and optional ranges**: infinite or finite attraction radius
//! - **Viewport alignment**: near, center and far edges for scroll points
//! - **Expression templates**: formulas for an external animation host
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_snap::prelude::*;
//!
//! let mut collection = SnapPointCollection::new(Dimension::Scroll);
//! collection.insert(ScrollSnapPoint::new(0.0, Alignment::Near)?)?;
//! collection.insert(ScrollSnapPoint::new(100.0, Alignment::Near)?)?;
//!
//! assert_eq!(collection.resolve(40.0), 0.0);
//! assert_eq!(collection.resolve(60.0), 100.0);
//! # Ok::<(), trueno_snap::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML declaration of snap points
//! - `cli`: the `trueno-snap` inspection binary
//! - `full`: All features enabled

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Applicable zones.
pub mod zone;

/// Mandatory and optional applicable ranges.
pub mod range;

/// Viewport alignment of scroll snap points.
pub mod alignment;

/// Sort predicate and equality tolerance.
pub mod sort;

/// The four snap point kinds.
pub mod snap_point;

// ============================================================================
// Resolution Modules
// ============================================================================

/// Influence functions and zone determination.
pub mod resolver;

/// Per-point state binding a snap point to its zones.
pub mod wrapper;

/// Owning collection running resolution passes.
pub mod collection;

// ============================================================================
// Output Modules
// ============================================================================

/// Conditional and resting point expression templates.
pub mod expression;

// ============================================================================
// Optional Modules
// ============================================================================

/// YAML declaration of snap points.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-snap operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use trueno_snap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::alignment::Alignment;
    pub use crate::collection::{SnapPointCollection, SnapPointExpressions};
    pub use crate::error::{Error, Result};
    pub use crate::expression::ExpressionTemplate;
    pub use crate::range::ApplicableRange;
    pub use crate::snap_point::{
        Dimension, RepeatedScrollSnapPoint, RepeatedZoomSnapPoint, ScrollSnapPoint, SnapPoint,
        ZoomSnapPoint,
    };
    pub use crate::sort::{SortPredicate, EQUALITY_EPSILON};
    pub use crate::wrapper::SnapPointWrapper;
    pub use crate::zone::Zone;
}
