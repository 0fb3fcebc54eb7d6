//! Errors that can arise while constructing a scoring function.
//!
//! All three kinds are construction-time only: once a `ScoringFunction`
//! exists it cannot enter an invalid state, and queries never fail for
//! well-typed input of matching dimensionality.

mod bounds_error;
mod creation_error;
mod monotone_error;

pub use bounds_error::{BoundSide, BoundsError};
pub use creation_error::CreationError;
pub use monotone_error::MonotoneError;

/// Top-level error type wrapping every construction failure.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error(transparent)]
    Creation(#[from] CreationError),

    #[error(transparent)]
    Monotone(#[from] MonotoneError),

    #[error(transparent)]
    Bounds(#[from] BoundsError),
}

/// Result alias used throughout the crate.
pub type ScoreResult<T> = Result<T, ScoreError>;
