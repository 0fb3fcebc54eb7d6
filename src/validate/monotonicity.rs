//! Pairwise monotonicity validation.
//!
//! Every ordered pair of scaled reference points is checked: when one
//! point dominates another, its value must not be smaller. O(P^2 * N)
//! nested iteration over the arena, acceptable since reference sets are
//! expected to stay in the tens to low hundreds of points.

use crate::dominance::{self, Dominance};
use crate::errors::MonotoneError;

/// Scan all ordered pairs and fail on the first dominance/value
/// inconsistency. `raw` and `scaled` are parallel arenas; violations are
/// reported in raw units.
pub(crate) fn check_monotonicity(
    raw: &[Vec<f64>],
    scaled: &[Vec<f64>],
    values: &[f64],
) -> Result<(), MonotoneError> {
    for i in 0..scaled.len() {
        for j in 0..scaled.len() {
            if i == j {
                continue;
            }
            // Ordered iteration covers both directions, so checking the
            // dominating side alone sees every inconsistent pair.
            if dominance::compare(&scaled[j], &scaled[i]) == Dominance::Dominates
                && values[j] < values[i]
            {
                return Err(MonotoneError {
                    dominating: raw[j].clone(),
                    dominating_value: values[j],
                    dominated: raw[i].clone(),
                    dominated_value: values[i],
                });
            }
        }
    }
    Ok(())
}
