//! Dominance relation over scaled coordinates.
//!
//! Scaling has already folded the monotonicity sign into the coordinates,
//! so dominance here is plain elementwise comparison: a point that is
//! greater-or-equal everywhere and strictly greater somewhere should
//! score at least as high.

/// How one scaled point relates to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dominance {
    /// Every coordinate >= the other's, at least one strictly greater.
    Dominates,
    /// Every coordinate <= the other's, at least one strictly smaller.
    DominatedBy,
    /// Identical coordinates.
    Equal,
    /// Strictly greater in some dimension and strictly smaller in another.
    Incomparable,
}

/// Compare two scaled coordinate slices of equal dimensionality.
pub(crate) fn compare(a: &[f64], b: &[f64]) -> Dominance {
    debug_assert_eq!(a.len(), b.len());
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (x, y) in a.iter().zip(b) {
        let diff = x - y;
        min = min.min(diff);
        max = max.max(diff);
    }
    if min == 0.0 && max == 0.0 {
        Dominance::Equal
    } else if min >= 0.0 {
        Dominance::Dominates
    } else if max <= 0.0 {
        Dominance::DominatedBy
    } else {
        Dominance::Incomparable
    }
}

/// Elementwise approximate equality with numpy `allclose` tolerances.
pub(crate) fn approx_eq(a: &[f64], b: &[f64]) -> bool {
    const RTOL: f64 = 1e-5;
    const ATOL: f64 = 1e-8;
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| (x - y).abs() <= ATOL + RTOL * y.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_strict_dominance() {
        assert_eq!(compare(&[1.0, 2.0], &[1.0, 1.0]), Dominance::Dominates);
        assert_eq!(compare(&[0.0, 1.0], &[1.0, 1.0]), Dominance::DominatedBy);
    }

    #[test]
    fn equal_points_are_equal() {
        assert_eq!(compare(&[1.0, 1.0], &[1.0, 1.0]), Dominance::Equal);
    }

    #[test]
    fn mixed_signs_are_incomparable() {
        assert_eq!(compare(&[2.0, 0.0], &[1.0, 1.0]), Dominance::Incomparable);
    }

    #[test]
    fn approx_eq_tolerates_rounding() {
        assert!(approx_eq(&[1.0 + 1e-9], &[1.0]));
        assert!(!approx_eq(&[1.1], &[1.0]));
        assert!(!approx_eq(&[1.0], &[1.0, 2.0]));
    }
}
