//! Monotonicity violation errors.

/// A pair of reference points whose dominance relation in scaled
/// coordinates contradicts their relative values.
///
/// Coordinates are reported in original, unscaled units.
#[derive(Debug, Clone, thiserror::Error)]
#[error(
    "monotonicity constraint violated: {dominating:?} scores {dominating_value} \
     but dominates {dominated:?} which scores {dominated_value}"
)]
pub struct MonotoneError {
    /// The point that dominates (should score at least as high).
    pub dominating: Vec<f64>,
    pub dominating_value: f64,
    /// The point it dominates.
    pub dominated: Vec<f64>,
    pub dominated_value: f64,
}
