// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Cluster discovery.
//!
//! The relevance filter only depends on [`ClusterDiscoverer`]: given the
//! unlabeled rows and a range for the number of clusters, return centroids.
//! [`XMeans`] is the default implementation; [`FixedCentroids`] returns a
//! preset set and is what tests use.

pub mod kmeans;
pub mod xmeans;

pub use xmeans::XMeans;

use crate::error::{RelevanceError, Result};
use crate::types::{Centroid, FeatureMatrix};

pub trait ClusterDiscoverer {
    /// Returns between 1 and `max_k` centroids of width `view.dim()`.
    ///
    /// Any failure must be reported as [`RelevanceError::Clustering`].
    fn discover(
        &self,
        view: &FeatureMatrix,
        min_k: usize,
        max_k: usize,
        max_iterations: usize,
    ) -> Result<Vec<Centroid>>;
}

impl<T: ClusterDiscoverer + ?Sized> ClusterDiscoverer for &T {
    fn discover(
        &self,
        view: &FeatureMatrix,
        min_k: usize,
        max_k: usize,
        max_iterations: usize,
    ) -> Result<Vec<Centroid>> {
        (**self).discover(view, min_k, max_k, max_iterations)
    }
}

/// Discoverer that ignores its input and hands back a preset centroid set.
#[derive(Clone, Debug, Default)]
pub struct FixedCentroids {
    centroids: Vec<Centroid>,
}

impl FixedCentroids {
    pub fn new(centroids: Vec<Centroid>) -> Self {
        Self { centroids }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self::new(rows.into_iter().map(Centroid::new).collect())
    }
}

impl ClusterDiscoverer for FixedCentroids {
    fn discover(&self, _: &FeatureMatrix, _: usize, _: usize, _: usize) -> Result<Vec<Centroid>> {
        Ok(self.centroids.clone())
    }
}

/// Checks a discoverer's output before any distance is computed.
///
/// An empty set or one larger than `max_k` is a clustering failure; a
/// centroid of the wrong width is a dimension mismatch.
pub fn validate_centroids(centroids: &[Centroid], dim: usize, max_k: usize) -> Result<()> {
    if centroids.is_empty() {
        return Err(RelevanceError::Clustering("discoverer returned no centroids".to_string()));
    }
    if centroids.len() > max_k {
        return Err(RelevanceError::Clustering(format!(
            "discoverer returned {} centroids, limit is {}",
            centroids.len(),
            max_k
        )));
    }
    if let Some(bad) = centroids.iter().find(|c| c.dim() != dim) {
        return Err(RelevanceError::DimensionMismatch { expected: dim, found: bad.dim() });
    }
    if let Some(row) = centroids.iter().position(|c| c.as_slice().iter().any(|v| !v.is_finite())) {
        return Err(RelevanceError::Clustering(format!(
            "centroid {} has non-finite coordinates",
            row
        )));
    }
    Ok(())
}
