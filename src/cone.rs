//! Directional slope cones anchored at reference points.
//!
//! A cone bundles four length-N non-negative slope vectors: the sup pair
//! bounds linear extrapolation from its anchor from above, the inf pair
//! from below, for positive and negative coordinate differences
//! respectively. Cones are produced once by the solver and are immutable.

use serde::{Deserialize, Serialize};

/// Four directional slope vectors of equal length.
///
/// Solver-established invariants: all entries non-negative,
/// `sup_plus >= inf_plus` and `sup_minus <= inf_minus` elementwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cone {
    pub sup_plus: Vec<f64>,
    pub sup_minus: Vec<f64>,
    pub inf_plus: Vec<f64>,
    pub inf_minus: Vec<f64>,
}

/// A scaled reference point, its value, and the cone emanating from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConePoint {
    coords: Vec<f64>,
    value: f64,
    cone: Cone,
}

impl ConePoint {
    pub fn new(coords: Vec<f64>, value: f64, cone: Cone) -> Self {
        Self {
            coords,
            value,
            cone,
        }
    }

    /// Scaled anchor coordinates.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// The anchor's reference value.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn cone(&self) -> &Cone {
        &self.cone
    }

    /// Largest value `other` can take based on the cone emanating from
    /// this point. Zero-difference dimensions contribute nothing.
    pub fn find_sup(&self, other: &[f64]) -> f64 {
        self.value + self.project(other, &self.cone.sup_plus, &self.cone.sup_minus)
    }

    /// Smallest value `other` can take based on the cone emanating from
    /// this point.
    pub fn find_inf(&self, other: &[f64]) -> f64 {
        self.value + self.project(other, &self.cone.inf_plus, &self.cone.inf_minus)
    }

    fn project(&self, other: &[f64], plus: &[f64], minus: &[f64]) -> f64 {
        other
            .iter()
            .zip(&self.coords)
            .zip(plus.iter().zip(minus))
            .map(|((o, c), (p, m))| {
                let diff = o - c;
                if diff > 0.0 {
                    diff * p
                } else if diff < 0.0 {
                    diff * m
                } else {
                    0.0
                }
            })
            .sum()
    }
}
