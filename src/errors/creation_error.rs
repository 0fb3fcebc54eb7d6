//! Creation errors.

/// Errors that reject the construction inputs before or during the solve.
#[derive(Debug, thiserror::Error)]
pub enum CreationError {
    #[error("entries in the direction vector must be +1 or -1 exclusively, got {entry} at dimension {dim}")]
    InvalidDirection { dim: usize, entry: i8 },

    #[error("direction vector must not be empty")]
    EmptyDirections,

    #[error("direction vector has {directions} entries but reference point {point:?} has {dims} dimensions")]
    DimensionMismatch {
        directions: usize,
        dims: usize,
        point: Vec<f64>,
    },

    #[error("reference set is empty")]
    EmptyReferenceSet,

    #[error("minval {minval} exceeds maxval {maxval}")]
    InvertedBounds { minval: f64, maxval: f64 },

    #[error("could not create scoring function: {0}")]
    Solver(String),
}
