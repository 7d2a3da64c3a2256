pub mod cluster_tests;
pub mod determinism_tests;

use crate::cluster::ClusterDiscoverer;
use crate::error::{RelevanceError, Result};
use crate::types::{Attribute, Centroid, Dataset, FeatureMatrix, Record, Schema};

/// Unlabeled all-numeric dataset, one record per row.
pub fn numeric_dataset(rows: &[&[f64]]) -> Dataset {
    let dim = rows.first().map_or(0, |r| r.len());
    let attributes = (0..dim).map(|i| Attribute::numeric(format!("f{}", i))).collect();
    Dataset::new(
        Schema::new(attributes, None),
        rows.iter().map(|r| Record::numeric(r)).collect(),
    )
}

/// Discoverer that always fails.
pub struct FailingDiscoverer;

impl ClusterDiscoverer for FailingDiscoverer {
    fn discover(&self, _: &FeatureMatrix, _: usize, _: usize, _: usize) -> Result<Vec<Centroid>> {
        Err(RelevanceError::Clustering("did not converge".to_string()))
    }
}

/// A simple deterministic RNG for tests.
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed, inc: 1 }
    }

    pub fn next_u32(&mut self) -> u32 {
        let oldstate = self.state;
        self.state = oldstate.wrapping_mul(6364136223846793005).wrapping_add(self.inc);
        let xorshifted = (((oldstate >> 18) ^ oldstate) >> 27) as u32;
        let rot = (oldstate >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}
