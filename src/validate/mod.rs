//! Construction-time validation of the reference set.

mod bounds;
mod monotonicity;

pub use bounds::Bounds;
pub(crate) use bounds::check_bounds;
pub(crate) use monotonicity::check_monotonicity;
