//! Ordering and equality of snap points along an axis.

use std::cmp::Ordering;

/// Tolerance used by snap point equality and `snaps_at`.
pub const EQUALITY_EPSILON: f64 = 0.00001;

/// Three-key sort predicate.
///
/// Irregular points use `(value, value, 0)`, repeated points use
/// `(start, end, 1)` so irregular points sort first on a tie.
///
/// `precedes` is exact while `matches` tolerates [`EQUALITY_EPSILON`]. Keys
/// closer than the tolerance but not identical both precede and match, so
/// the three outcomes are only exclusive for keys further apart than it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortPredicate {
    /// First key.
    pub primary: f64,
    /// Second key.
    pub secondary: f64,
    /// Tie breaker between kinds.
    pub tertiary: u8,
}

impl SortPredicate {
    /// Create a new sort predicate.
    #[must_use]
    pub const fn new(primary: f64, secondary: f64, tertiary: u8) -> Self {
        Self { primary, secondary, tertiary }
    }

    /// Strict lexicographic `<` over the three keys.
    #[must_use]
    pub fn precedes(&self, other: &Self) -> bool {
        if self.primary < other.primary {
            return true;
        }
        if other.primary < self.primary {
            return false;
        }
        if self.secondary < other.secondary {
            return true;
        }
        if other.secondary < self.secondary {
            return false;
        }
        self.tertiary < other.tertiary
    }

    /// Epsilon-tolerant equality on the first two keys, exact on the third.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        (self.primary - other.primary).abs() < EQUALITY_EPSILON
            && (self.secondary - other.secondary).abs() < EQUALITY_EPSILON
            && self.tertiary == other.tertiary
    }

    /// Total order used for sorting. Keys must not be NaN.
    #[must_use]
    pub fn ordering(&self, other: &Self) -> Ordering {
        if self.precedes(other) {
            Ordering::Less
        } else if other.precedes(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_decides_first() {
        let a = SortPredicate::new(0.0, 100.0, 1);
        let b = SortPredicate::new(10.0, 10.0, 0);
        assert!(a.precedes(&b));
        assert!(!b.precedes(&a));
    }

    #[test]
    fn test_irregular_before_repeated_on_tie() {
        let irregular = SortPredicate::new(5.0, 5.0, 0);
        let repeated = SortPredicate::new(5.0, 5.0, 1);
        assert!(irregular.precedes(&repeated));
        assert_eq!(irregular.ordering(&repeated), Ordering::Less);
        assert!(!irregular.matches(&repeated));
    }

    #[test]
    fn test_matches_within_epsilon() {
        let a = SortPredicate::new(1.0, 1.0, 0);
        let b = SortPredicate::new(1.0 + EQUALITY_EPSILON / 2.0, 1.0, 0);
        let c = SortPredicate::new(1.0 + EQUALITY_EPSILON * 2.0, 1.0, 0);
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
    }

    #[test]
    fn test_keys_within_epsilon_precede_and_match() {
        let a = SortPredicate::new(1.0, 1.0, 0);
        let b = SortPredicate::new(1.000_001, 1.000_001, 0);
        assert!(a.precedes(&b));
        assert!(a.matches(&b));
        assert_eq!(a.ordering(&b), Ordering::Less);
    }

    #[test]
    fn test_ordering_equal() {
        let a = SortPredicate::new(3.0, 7.0, 1);
        assert_eq!(a.ordering(&a), Ordering::Equal);
    }
}
