//! monoscore: monotone scoring functions from sparse labeled points
//!
//! Builds a scoring function from a handful of multi-attribute reference
//! points, each carrying a human-assigned score, plus a declared
//! monotonicity direction per attribute. The constructed function
//! interpolates and extrapolates those scores while provably never
//! violating the declared monotonicity:
//! - Scale: signed, range-normalized coordinate space
//! - Validation: pairwise monotonicity and declared min/max bounds
//! - Solver: one linear program producing a directional slope cone per point
//! - Engine: sup/inf envelope evaluation with bound clamping
//!
//! ```
//! use monoscore::{create, Bounds, ReferenceSet};
//!
//! let refs: ReferenceSet = [
//!     (vec![0.0, 0.0, 0.0], 0.0),
//!     (vec![1.0, 1.0, 1.0], 100.0),
//! ]
//! .into_iter()
//! .collect();
//! let func = create(&refs, &[1, 1, 1], Bounds::none()).unwrap();
//! let scores = func.calculate(&[vec![0.0, 0.0, 0.0], vec![1.0, 1.0, 1.0]]);
//! assert!((scores[0] - 0.0).abs() < 1e-6);
//! assert!((scores[1] - 100.0).abs() < 1e-6);
//! ```

pub mod cone;
mod dominance;
pub mod engine;
pub mod errors;
pub mod reference;
pub mod scale;
mod solver;
pub mod validate;

// Re-exports for convenience
pub use cone::{Cone, ConePoint};
pub use engine::{create, ScoringFunction};
pub use errors::{
    BoundSide, BoundsError, CreationError, MonotoneError, ScoreError, ScoreResult,
};
pub use reference::{ReferenceEntry, ReferenceSet};
pub use scale::Scale;
pub use validate::Bounds;
