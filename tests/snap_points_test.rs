//! Resolution behavior of whole collections.
//!
//! Run: cargo test --test snap_points_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use approx::assert_relative_eq;

use trueno_snap::prelude::*;

fn near(value: f64) -> ScrollSnapPoint {
    ScrollSnapPoint::new(value, Alignment::Near).unwrap()
}

fn pages() -> RepeatedScrollSnapPoint {
    RepeatedScrollSnapPoint::with_applicable_range(0.0, 10.0, 0.0, 100.0, 3.0, Alignment::Near)
        .unwrap()
}

// ============================================================================
// Single Points
// ============================================================================

#[test]
fn test_mandatory_points_split_at_midpoint() {
    let mut collection = SnapPointCollection::new(Dimension::Scroll);
    collection.insert(near(0.0)).unwrap();
    collection.insert(near(100.0)).unwrap();

    let zones: Vec<Zone> =
        collection.wrappers().iter().map(SnapPointWrapper::actual_applicable_zone).collect();
    assert_eq!(zones[0].max, 50.0);
    assert_eq!(zones[1].min, 50.0);
    assert!(!zones[0].is_bounded());

    assert_eq!(collection.wrappers()[0].evaluate(40.0), 0.0);
    assert_eq!(collection.wrappers()[1].evaluate(60.0), 100.0);
}

#[test]
fn test_optional_points_leave_gap() {
    let mut collection = SnapPointCollection::new(Dimension::Scroll);
    for value in [0.0, 100.0] {
        let point = ScrollSnapPoint::with_applicable_range(value, 10.0, Alignment::Near).unwrap();
        collection.insert(point).unwrap();
    }

    assert_eq!(collection.resolve(8.0), 0.0);
    assert_eq!(collection.resolve(50.0), 50.0);
    assert_eq!(collection.resolve(93.0), 100.0);
    assert!(!collection.snaps_at(50.0));
}

#[test]
fn test_combined_points_keep_widest_range() {
    let mut collection = SnapPointCollection::new(Dimension::Scroll);
    for range in [5.0, 8.0] {
        let point = ScrollSnapPoint::with_applicable_range(40.0, range, Alignment::Near).unwrap();
        collection.insert(point).unwrap();
    }

    assert_eq!(collection.len(), 1);
    let wrapper = &collection.wrappers()[0];
    assert_eq!(wrapper.combination_count(), 2);
    assert_eq!(wrapper.snap_point().applicable_range(), ApplicableRange::Optional(8.0));
    assert_eq!(collection.resolve(47.0), 40.0);
}

// ============================================================================
// Repeated Points
// ============================================================================

#[test]
fn test_repeated_points_snap_within_range() {
    let mut collection = SnapPointCollection::new(Dimension::Scroll);
    collection.insert(pages()).unwrap();

    assert_eq!(collection.resolve(7.0), 10.0);
    assert_eq!(collection.resolve(5.0), 5.0);
    assert_eq!(collection.resolve(32.0), 30.0);
    assert!(collection.snaps_at(70.0));
}

#[test]
fn test_repeated_points_between_single_points() {
    let mut collection = SnapPointCollection::new(Dimension::Scroll);
    collection.insert(near(150.0)).unwrap();
    collection.insert(pages()).unwrap();
    collection.insert(near(-50.0)).unwrap();

    let kinds: Vec<&str> = collection.wrappers().iter().map(|w| w.snap_point().kind()).collect();
    assert_eq!(kinds, vec!["scroll", "repeated scroll", "scroll"]);

    assert_eq!(collection.wrappers()[0].actual_applicable_zone().max, 0.0);
    assert_eq!(collection.wrappers()[1].actual_applicable_zone(), Zone::new(0.0, 100.0));
    assert_eq!(collection.wrappers()[2].actual_applicable_zone().min, 100.0);

    assert_eq!(collection.resolve(-10.0), -50.0);
    assert_eq!(collection.resolve(98.0), 100.0);
    assert_eq!(collection.resolve(120.0), 150.0);
}

#[test]
fn test_point_inside_repeated_bounds_is_rejected() {
    let mut collection = SnapPointCollection::new(Dimension::Scroll);
    collection.insert(near(-50.0)).unwrap();
    collection.insert(pages()).unwrap();

    let err = collection.insert(near(50.0)).unwrap_err();
    assert!(matches!(err, Error::InvalidTopology(_)));
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.resolve(7.0), 10.0);
}

#[test]
fn test_invalid_repeated_declaration() {
    let err = RepeatedScrollSnapPoint::new(-1.0, 10.0, 0.0, 100.0, Alignment::Near).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { parameter: "offset", .. }));
}

// ============================================================================
// Viewport and Impulse
// ============================================================================

#[test]
fn test_viewport_alignment() {
    let mut collection = SnapPointCollection::new(Dimension::Scroll);
    collection.insert(ScrollSnapPoint::new(500.0, Alignment::Center).unwrap()).unwrap();
    collection.insert(ScrollSnapPoint::new(500.0, Alignment::Far).unwrap()).unwrap();
    assert_eq!(collection.len(), 1);

    assert!(collection.update_viewport(300.0).unwrap());
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.resolve(0.0), 200.0);
    assert_eq!(collection.resolve(1000.0), 350.0);
}

#[test]
fn test_impulse_ignores_starting_point() {
    let mut collection = SnapPointCollection::new(Dimension::Scroll);
    collection.insert(near(0.0)).unwrap();
    collection.insert(near(100.0)).unwrap();
    collection.insert(near(200.0)).unwrap();

    assert!(collection.set_impulse_ignored_value(100.0).unwrap());
    let middle = &collection.wrappers()[1];
    assert_eq!(middle.ignored_value(), Some(100.0));
    assert_eq!(middle.actual_impulse_applicable_zone(), Zone::new(100.0, 100.0));
    assert_eq!(middle.actual_applicable_zone(), Zone::new(50.0, 150.0));

    assert_eq!(collection.wrappers()[0].actual_impulse_applicable_zone().max, 100.0);
    assert_eq!(collection.wrappers()[2].actual_impulse_applicable_zone().min, 100.0);

    // A fling from 100 no longer settles back on it.
    assert_eq!(collection.resolve_impulse(60.0), 0.0);
    assert_eq!(collection.resolve_impulse(140.0), 200.0);
    assert_eq!(collection.resolve(60.0), 100.0);

    assert!(collection.reset_impulse_ignored_value().unwrap());
    assert_eq!(collection.wrappers()[0].actual_impulse_applicable_zone().max, 50.0);
}

// ============================================================================
// Zoom
// ============================================================================

#[test]
fn test_zoom_points() {
    let mut collection = SnapPointCollection::new(Dimension::Zoom);
    collection.insert(ZoomSnapPoint::new(1.0).unwrap()).unwrap();
    collection.insert(ZoomSnapPoint::new(2.0).unwrap()).unwrap();

    assert_eq!(collection.resolve(1.4), 1.0);
    assert_eq!(collection.resolve(1.6), 2.0);
    assert!(matches!(
        collection.insert(near(3.0)),
        Err(Error::DimensionMismatch { expected: Dimension::Zoom, found: Dimension::Scroll })
    ));
}

#[test]
fn test_fractional_repeated_zoom() {
    let mut collection = SnapPointCollection::new(Dimension::Zoom);
    collection.insert(RepeatedZoomSnapPoint::new(1.0, 0.1, 1.0, 2.0).unwrap()).unwrap();

    assert_relative_eq!(collection.resolve(1.34), 1.3, epsilon = 1e-9);
    assert_relative_eq!(collection.resolve(1.77), 1.8, epsilon = 1e-9);
}

#[test]
fn test_expressions_for_every_point() {
    let mut collection = SnapPointCollection::new(Dimension::Scroll);
    collection.insert(near(-50.0)).unwrap();
    collection.insert(pages()).unwrap();

    let expressions = collection.create_expressions("Position.X", "Scale");
    assert_eq!(expressions.len(), 2);
    for expression in &expressions {
        assert!(expression.conditional.expression().contains("Position.X"));
        assert!(!expression.resting_point.expression().is_empty());
    }
}
