//! Signed, range-normalized coordinate scaling.
//!
//! Each dimension gets a signed factor: the declared direction (+1/-1)
//! times the observed coordinate range across the reference set, clamped
//! to avoid degenerate or exploding scale. Dividing raw coordinates by
//! the factor folds the monotonicity sign into the coordinate space, so
//! after scaling "larger coordinate" always means "should score at least
//! as high".

use serde::{Deserialize, Serialize};

use crate::errors::CreationError;
use crate::reference::ReferenceSet;

/// Clamp window for the observed per-dimension range.
const RANGE_MIN: f64 = 0.001;
const RANGE_MAX: f64 = 1000.0;

/// Per-dimension signed scale factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    factors: Vec<f64>,
}

impl Scale {
    /// Build the scale from a reference set and a direction vector.
    ///
    /// Rejects an empty direction vector, entries other than +1/-1, an
    /// empty reference set, and points whose dimensionality does not
    /// match the direction vector.
    pub fn from_reference_set(
        set: &ReferenceSet,
        directions: &[i8],
    ) -> Result<Self, CreationError> {
        if directions.is_empty() {
            return Err(CreationError::EmptyDirections);
        }
        for (dim, &entry) in directions.iter().enumerate() {
            if entry != 1 && entry != -1 {
                return Err(CreationError::InvalidDirection { dim, entry });
            }
        }
        if set.is_empty() {
            return Err(CreationError::EmptyReferenceSet);
        }
        for entry in set.iter() {
            if entry.point.len() != directions.len() {
                return Err(CreationError::DimensionMismatch {
                    directions: directions.len(),
                    dims: entry.point.len(),
                    point: entry.point.clone(),
                });
            }
        }

        let dim = directions.len();
        let mut lo = vec![f64::INFINITY; dim];
        let mut hi = vec![f64::NEG_INFINITY; dim];
        for entry in set.iter() {
            for (d, &coord) in entry.point.iter().enumerate() {
                lo[d] = lo[d].min(coord);
                hi[d] = hi[d].max(coord);
            }
        }

        let factors = directions
            .iter()
            .zip(lo.iter().zip(&hi))
            .map(|(&sign, (&lo, &hi))| f64::from(sign) * (hi - lo).clamp(RANGE_MIN, RANGE_MAX))
            .collect();

        Ok(Self { factors })
    }

    pub fn dim(&self) -> usize {
        self.factors.len()
    }

    /// Raw coordinates to scaled coordinates.
    pub fn apply(&self, point: &[f64]) -> Vec<f64> {
        point
            .iter()
            .zip(&self.factors)
            .map(|(coord, factor)| coord / factor)
            .collect()
    }

    /// Scaled coordinates back to raw units, for reporting.
    pub fn invert(&self, scaled: &[f64]) -> Vec<f64> {
        scaled
            .iter()
            .zip(&self.factors)
            .map(|(coord, factor)| coord * factor)
            .collect()
    }
}
