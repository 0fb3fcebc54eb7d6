//! Reference set: the labeled points a scoring function is built from.
//!
//! Mapping semantics with a stable arena order: inserting a point whose
//! coordinates exactly equal an existing key replaces its score, and
//! iteration order is insertion order so validators, the solver, and the
//! cone set all share one index space.

use serde::{Deserialize, Serialize};

/// One labeled reference point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Raw (unscaled) coordinates.
    pub point: Vec<f64>,
    /// The score assigned to this point.
    pub value: f64,
}

/// Mapping from an N-dimensional point to a real-valued score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSet {
    entries: Vec<ReferenceEntry>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point, replacing the score of an exactly-equal existing key.
    pub fn insert(&mut self, point: Vec<f64>, value: f64) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.point == point) {
            existing.value = value;
        } else {
            self.entries.push(ReferenceEntry { point, value });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dimensionality of the first point, if any.
    pub fn dim(&self) -> Option<usize> {
        self.entries.first().map(|e| e.point.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }
}

impl FromIterator<(Vec<f64>, f64)> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = (Vec<f64>, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (point, value) in iter {
            set.insert(point, value);
        }
        set
    }
}
