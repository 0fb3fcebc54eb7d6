//! Declared-bounds violation errors.

use std::fmt;

/// Which declared bound a reference value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    Minimum,
    Maximum,
}

impl fmt::Display for BoundSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundSide::Minimum => write!(f, "minimum"),
            BoundSide::Maximum => write!(f, "maximum"),
        }
    }
}

/// A reference point whose value falls outside a declared bound.
#[derive(Debug, Clone, thiserror::Error)]
#[error("bounds violated: {point:?} has a value of {value} but the {side} was declared as {bound}")]
pub struct BoundsError {
    /// Offending point in original, unscaled units.
    pub point: Vec<f64>,
    /// The point's declared score.
    pub value: f64,
    /// The bound that was violated.
    pub bound: f64,
    /// Whether the minimum or the maximum was violated.
    pub side: BoundSide,
}
