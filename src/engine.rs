//! ScoringFunction: construction pipeline and query surface.
//!
//! Construction runs a fixed, fail-fast sequence: scale the reference
//! set, validate pairwise monotonicity, validate declared bounds, solve
//! the cone program, then freeze one cone per point. A constructed
//! function is immutable, side-effect-free, and safe to query from many
//! threads.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cone::ConePoint;
use crate::dominance::{self, Dominance};
use crate::errors::ScoreResult;
use crate::reference::ReferenceSet;
use crate::scale::Scale;
use crate::solver;
use crate::validate::{self, Bounds};

/// A monotone scoring function built from a labeled reference set.
///
/// Holds the signed scale, one cone-carrying point per reference entry,
/// and the declared bounds. Serializable: a deserialized instance
/// answers queries identically without re-running the solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringFunction {
    scale: Scale,
    points: Vec<ConePoint>,
    bounds: Bounds,
}

/// Build a scoring function from a reference set, a per-dimension
/// direction vector (+1 increasing, -1 decreasing), and optional bounds.
pub fn create(
    reference: &ReferenceSet,
    directions: &[i8],
    bounds: Bounds,
) -> ScoreResult<ScoringFunction> {
    ScoringFunction::create(reference, directions, bounds)
}

impl ScoringFunction {
    /// See [`create`].
    pub fn create(
        reference: &ReferenceSet,
        directions: &[i8],
        bounds: Bounds,
    ) -> ScoreResult<Self> {
        bounds.validate()?;
        let scale = Scale::from_reference_set(reference, directions)?;

        // Parallel arenas: raw points, scaled points, values, one index space.
        let raw: Vec<Vec<f64>> = reference.iter().map(|e| e.point.clone()).collect();
        let values: Vec<f64> = reference.iter().map(|e| e.value).collect();
        let scaled: Vec<Vec<f64>> = raw.iter().map(|p| scale.apply(p)).collect();
        debug!(points = raw.len(), dim = scale.dim(), "scaled reference set");

        validate::check_monotonicity(&raw, &scaled, &values)?;
        if !bounds.is_unbounded() {
            validate::check_bounds(&raw, &values, &bounds)?;
        }

        let cones = solver::solve_cones(&scaled, &values)?;
        let points = scaled
            .into_iter()
            .zip(values)
            .zip(cones)
            .map(|((coords, value), cone)| ConePoint::new(coords, value, cone))
            .collect::<Vec<_>>();

        info!(
            points = points.len(),
            dim = scale.dim(),
            "scoring function constructed"
        );
        Ok(Self {
            scale,
            points,
            bounds,
        })
    }

    /// Attribute dimensionality.
    pub fn dim(&self) -> usize {
        self.scale.dim()
    }

    /// Number of reference points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Score one query point.
    ///
    /// Takes the tightest upper bound (minimum over all cones' sup) and
    /// the tightest lower bound (maximum over all cones' inf), clamps
    /// both against maxval then minval, and returns the midpoint.
    ///
    /// Panics if the query's dimensionality does not match the
    /// reference set's.
    pub fn evaluate(&self, query: &[f64]) -> f64 {
        assert_eq!(
            query.len(),
            self.dim(),
            "query dimensionality must match the reference set"
        );
        let adjusted = self.scale.apply(query);

        let mut sup = f64::INFINITY;
        let mut inf = f64::NEG_INFINITY;
        for point in &self.points {
            sup = sup.min(point.find_sup(&adjusted));
            inf = inf.max(point.find_inf(&adjusted));
        }

        // Clamp order is load-bearing: maxval is applied to both bounds
        // first, then minval to both.
        if let Some(maxval) = self.bounds.maxval {
            sup = sup.min(maxval);
            inf = inf.min(maxval);
        }
        if let Some(minval) = self.bounds.minval {
            sup = sup.max(minval);
            inf = inf.max(minval);
        }

        (sup + inf) / 2.0
    }

    /// Score a batch of query points, order-preserving, one output per
    /// input. Evaluation is pure, so query points run in parallel.
    pub fn calculate(&self, queries: &[Vec<f64>]) -> Vec<f64> {
        queries.par_iter().map(|q| self.evaluate(q)).collect()
    }

    /// Bounds on a point's score implied by the reference set and the
    /// direction vector alone, without consulting the solved cones.
    ///
    /// Reference points dominating the query (or approximately equal to
    /// it) cap the upper bound; dominated points floor the lower bound.
    /// Unset declared bounds start the interval at +/- infinity.
    pub fn value_bounds(&self, point: &[f64]) -> (f64, f64) {
        assert_eq!(
            point.len(),
            self.dim(),
            "query dimensionality must match the reference set"
        );
        let adjusted = self.scale.apply(point);

        let mut upper = self.bounds.maxval.unwrap_or(f64::INFINITY);
        let mut lower = self.bounds.minval.unwrap_or(f64::NEG_INFINITY);
        for p in &self.points {
            if dominance::approx_eq(p.coords(), &adjusted) {
                upper = upper.min(p.value());
                lower = lower.max(p.value());
                continue;
            }
            match dominance::compare(p.coords(), &adjusted) {
                Dominance::Dominates => upper = upper.min(p.value()),
                Dominance::DominatedBy => lower = lower.max(p.value()),
                // Exact equality is already caught by the approx check above.
                Dominance::Equal | Dominance::Incomparable => {}
            }
        }
        (lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(points: &[(&[f64], f64)]) -> ReferenceSet {
        points.iter().map(|(p, v)| (p.to_vec(), *v)).collect()
    }

    #[test]
    fn reproduces_reference_values() {
        let set = refs(&[(&[0.0, 0.0], 0.0), (&[1.0, 1.0], 100.0)]);
        let func = create(&set, &[1, 1], Bounds::none()).unwrap();
        assert!((func.evaluate(&[0.0, 0.0]) - 0.0).abs() < 1e-6);
        assert!((func.evaluate(&[1.0, 1.0]) - 100.0).abs() < 1e-6);
    }

    #[test]
    fn single_point_scores_itself() {
        let set = refs(&[(&[3.0, 4.0], 5.0)]);
        let func = create(&set, &[1, 1], Bounds::none()).unwrap();
        assert!((func.evaluate(&[3.0, 4.0]) - 5.0).abs() < 1e-9);
    }

    #[test]
    #[should_panic(expected = "query dimensionality")]
    fn mismatched_query_dimension_panics() {
        let set = refs(&[(&[0.0, 0.0], 0.0), (&[1.0, 1.0], 1.0)]);
        let func = create(&set, &[1, 1], Bounds::none()).unwrap();
        func.evaluate(&[0.0]);
    }
}
