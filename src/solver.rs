//! Cone solver: one linear program over every point's slope vectors.
//!
//! For each reference point the program determines four non-negative
//! slope vectors (sup_plus, inf_plus, sup_minus, inf_minus). Cross
//! consistency requires that the cone emanating from any point, linearly
//! extrapolated to any other point, never under- or over-shoots that
//! point's known value. The objective minimizes total cone width (the L1
//! norm of sup - inf per signed direction), producing the tightest
//! feasible envelope.

use microlp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem, Variable};
use tracing::debug;

use crate::cone::Cone;
use crate::errors::CreationError;

/// Slope variables for one point, indexed by dimension.
struct ConeVars {
    sup_plus: Vec<Variable>,
    inf_plus: Vec<Variable>,
    sup_minus: Vec<Variable>,
    inf_minus: Vec<Variable>,
}

/// Solve for one cone per scaled reference point.
///
/// `scaled` and `values` are parallel arenas; all points share one
/// dimensionality. Returns cones in arena order, or a solver-flavored
/// `CreationError` when the program is infeasible or the solve fails.
pub(crate) fn solve_cones(
    scaled: &[Vec<f64>],
    values: &[f64],
) -> Result<Vec<Cone>, CreationError> {
    let count = scaled.len();
    let dim = scaled.first().map_or(0, Vec::len);

    let mut problem = Problem::new(OptimizationDirection::Minimize);

    // Objective: minimize sum of (sup_plus - inf_plus) + (inf_minus - sup_minus),
    // encoded directly in the per-variable objective coefficients. All
    // slopes are constrained non-negative through their variable bounds.
    let vars: Vec<ConeVars> = (0..count)
        .map(|_| {
            let mut cone = ConeVars {
                sup_plus: Vec::with_capacity(dim),
                inf_plus: Vec::with_capacity(dim),
                sup_minus: Vec::with_capacity(dim),
                inf_minus: Vec::with_capacity(dim),
            };
            for _ in 0..dim {
                cone.sup_plus.push(problem.add_var(1.0, (0.0, f64::INFINITY)));
                cone.inf_plus.push(problem.add_var(-1.0, (0.0, f64::INFINITY)));
                cone.sup_minus.push(problem.add_var(-1.0, (0.0, f64::INFINITY)));
                cone.inf_minus.push(problem.add_var(1.0, (0.0, f64::INFINITY)));
            }
            cone
        })
        .collect();

    // Cone shape constraints: the sup side bounds from above, the inf
    // side from below, in each signed direction.
    for cone in &vars {
        for d in 0..dim {
            let mut wider = LinearExpr::empty();
            wider.add(cone.sup_plus[d], 1.0);
            wider.add(cone.inf_plus[d], -1.0);
            problem.add_constraint(wider, ComparisonOp::Ge, 0.0);

            let mut narrower = LinearExpr::empty();
            narrower.add(cone.inf_minus[d], 1.0);
            narrower.add(cone.sup_minus[d], -1.0);
            problem.add_constraint(narrower, ComparisonOp::Ge, 0.0);
        }
    }

    // Cross-consistency: point i's cone must project into every point j.
    let mut pair_constraints = 0usize;
    for (i, cone) in vars.iter().enumerate() {
        for j in 0..count {
            if i == j {
                continue;
            }
            let mut sup_pred = LinearExpr::empty();
            let mut inf_pred = LinearExpr::empty();
            for d in 0..dim {
                let run = scaled[j][d] - scaled[i][d];
                if run > 0.0 {
                    sup_pred.add(cone.sup_plus[d], run);
                    inf_pred.add(cone.inf_plus[d], run);
                } else if run < 0.0 {
                    sup_pred.add(cone.sup_minus[d], run);
                    inf_pred.add(cone.inf_minus[d], run);
                }
            }
            let rise = values[j] - values[i];
            problem.add_constraint(sup_pred, ComparisonOp::Ge, rise);
            problem.add_constraint(inf_pred, ComparisonOp::Le, rise);
            pair_constraints += 2;
        }
    }

    debug!(
        points = count,
        dim,
        variables = 4 * count * dim,
        pair_constraints,
        "formulated cone program"
    );

    let solution = problem
        .solve()
        .map_err(|e| CreationError::Solver(e.to_string()))?;

    debug!(objective = solution.objective(), "cone program solved");

    Ok(vars
        .iter()
        .map(|cone| Cone {
            sup_plus: cone.sup_plus.iter().map(|&v| solution[v]).collect(),
            sup_minus: cone.sup_minus.iter().map(|&v| solution[v]).collect(),
            inf_plus: cone.inf_plus.iter().map(|&v| solution[v]).collect(),
            inf_minus: cone.inf_minus.iter().map(|&v| solution[v]).collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-6;

    fn assert_cone_shape(cone: &Cone) {
        for d in 0..cone.sup_plus.len() {
            assert!(cone.sup_plus[d] >= -TOL);
            assert!(cone.inf_plus[d] >= -TOL);
            assert!(cone.sup_minus[d] >= -TOL);
            assert!(cone.inf_minus[d] >= -TOL);
            assert!(cone.sup_plus[d] >= cone.inf_plus[d] - TOL);
            assert!(cone.sup_minus[d] <= cone.inf_minus[d] + TOL);
        }
    }

    #[test]
    fn two_point_line_pins_both_cones() {
        let scaled = vec![vec![0.0], vec![1.0]];
        let values = vec![0.0, 10.0];
        let cones = solve_cones(&scaled, &values).unwrap();
        assert_eq!(cones.len(), 2);
        for cone in &cones {
            assert_cone_shape(cone);
        }
        // Projecting each cone at the other point must reproduce its value
        // exactly: the consistency constraints sandwich the prediction and
        // the width objective collapses the sandwich.
        assert!((cones[0].sup_plus[0] - 10.0).abs() < TOL);
        assert!((cones[0].inf_plus[0] - 10.0).abs() < TOL);
        assert!((cones[1].sup_minus[0] - 10.0).abs() < TOL);
        assert!((cones[1].inf_minus[0] - 10.0).abs() < TOL);
    }

    #[test]
    fn single_point_is_trivially_feasible() {
        let scaled = vec![vec![0.5, 0.5]];
        let values = vec![42.0];
        let cones = solve_cones(&scaled, &values).unwrap();
        assert_eq!(cones.len(), 1);
        assert_cone_shape(&cones[0]);
    }

    #[test]
    fn consistency_holds_across_a_grid() {
        // 2-D grid with an additive value function.
        let mut scaled = Vec::new();
        let mut values = Vec::new();
        for x in 0..3 {
            for y in 0..3 {
                scaled.push(vec![f64::from(x), f64::from(y)]);
                values.push(f64::from(x) * 3.0 + f64::from(y) * 7.0);
            }
        }
        let cones = solve_cones(&scaled, &values).unwrap();
        for (i, cone) in cones.iter().enumerate() {
            assert_cone_shape(cone);
            for j in 0..scaled.len() {
                if i == j {
                    continue;
                }
                let mut sup = 0.0;
                let mut inf = 0.0;
                for d in 0..2 {
                    let run = scaled[j][d] - scaled[i][d];
                    if run > 0.0 {
                        sup += run * cone.sup_plus[d];
                        inf += run * cone.inf_plus[d];
                    } else if run < 0.0 {
                        sup += run * cone.sup_minus[d];
                        inf += run * cone.inf_minus[d];
                    }
                }
                let rise = values[j] - values[i];
                assert!(sup >= rise - TOL, "sup predictor undershoots {i}->{j}");
                assert!(inf <= rise + TOL, "inf predictor overshoots {i}->{j}");
            }
        }
    }
}
