//! Declared min/max bounds and their validation.

use serde::{Deserialize, Serialize};

use crate::errors::{BoundSide, BoundsError, CreationError};

/// Sentinel magnitude standing in for an unset bound so one comparison
/// rule covers every set/unset combination.
const UNBOUNDED: f64 = 1e47;

/// Optional lower/upper bounds on the scoring function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub minval: Option<f64>,
    pub maxval: Option<f64>,
}

impl Bounds {
    /// No bounds on either side.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(minval: Option<f64>, maxval: Option<f64>) -> Self {
        Self { minval, maxval }
    }

    pub fn min(minval: f64) -> Self {
        Self {
            minval: Some(minval),
            maxval: None,
        }
    }

    pub fn max(maxval: f64) -> Self {
        Self {
            minval: None,
            maxval: Some(maxval),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.minval.is_none() && self.maxval.is_none()
    }

    /// Reject an inverted declaration (minval above maxval).
    pub(crate) fn validate(&self) -> Result<(), CreationError> {
        if let (Some(minval), Some(maxval)) = (self.minval, self.maxval) {
            if minval > maxval {
                return Err(CreationError::InvertedBounds { minval, maxval });
            }
        }
        Ok(())
    }
}

/// Check every reference value against the declared bounds. `raw` and
/// `values` are parallel arenas.
pub(crate) fn check_bounds(
    raw: &[Vec<f64>],
    values: &[f64],
    bounds: &Bounds,
) -> Result<(), BoundsError> {
    let maxtest = bounds.maxval.unwrap_or(UNBOUNDED);
    let mintest = bounds.minval.unwrap_or(-UNBOUNDED);
    for (point, &value) in raw.iter().zip(values) {
        if value > maxtest {
            return Err(BoundsError {
                point: point.clone(),
                value,
                bound: maxtest,
                side: BoundSide::Maximum,
            });
        }
        if value < mintest {
            return Err(BoundsError {
                point: point.clone(),
                value,
                bound: mintest,
                side: BoundSide::Minimum,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_inside_bounds_pass() {
        let raw = vec![vec![0.0], vec![1.0]];
        let values = vec![10.0, 90.0];
        assert!(check_bounds(&raw, &values, &Bounds::new(Some(0.0), Some(100.0))).is_ok());
    }

    #[test]
    fn value_below_minimum_fails() {
        let raw = vec![vec![0.0]];
        let values = vec![5.0];
        let err = check_bounds(&raw, &values, &Bounds::min(10.0)).unwrap_err();
        assert_eq!(err.side, BoundSide::Minimum);
        assert_eq!(err.bound, 10.0);
        assert_eq!(err.value, 5.0);
    }

    #[test]
    fn value_above_maximum_fails() {
        let raw = vec![vec![0.0]];
        let values = vec![95.0];
        let err = check_bounds(&raw, &values, &Bounds::max(90.0)).unwrap_err();
        assert_eq!(err.side, BoundSide::Maximum);
        assert_eq!(err.point, vec![0.0]);
    }

    #[test]
    fn one_sided_bounds_leave_other_side_open() {
        let raw = vec![vec![0.0]];
        let values = vec![1e40];
        assert!(check_bounds(&raw, &values, &Bounds::min(0.0)).is_ok());
    }

    #[test]
    fn inverted_declaration_is_rejected() {
        let err = Bounds::new(Some(10.0), Some(0.0)).validate().unwrap_err();
        assert!(matches!(err, CreationError::InvertedBounds { .. }));
        assert!(Bounds::new(Some(0.0), Some(10.0)).validate().is_ok());
    }
}
