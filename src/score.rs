// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Relevance scoring: distance from each record to its nearest centroid.

use crate::error::{RelevanceError, Result};
use crate::math::nearest_distance;
use crate::types::{Centroid, Dataset, FeatureMatrix};

/// Computes one raw weight per record: the minimum Euclidean distance from
/// its unlabeled row to any centroid.
///
/// A record close to a centroid is redundant and gets a small weight; one far
/// from every centroid gets a large weight. Nothing is written to `dataset`.
///
/// # Errors
/// * `Schema` if `view` does not have one row per record.
/// * `Clustering` if `centroids` is empty.
/// * `DimensionMismatch` if any centroid's width differs from the view's.
/// * `NonFiniteWeight` if a distance overflows.
pub fn score(dataset: &Dataset, view: &FeatureMatrix, centroids: &[Centroid]) -> Result<Vec<f64>> {
    if view.len() != dataset.len() {
        return Err(RelevanceError::Schema(format!(
            "unlabeled view has {} rows, dataset has {}",
            view.len(),
            dataset.len()
        )));
    }
    if centroids.is_empty() {
        return Err(RelevanceError::Clustering("no centroids to score against".to_string()));
    }
    let dim = view.dim();
    if let Some(bad) = centroids.iter().find(|c| c.dim() != dim) {
        return Err(RelevanceError::DimensionMismatch { expected: dim, found: bad.dim() });
    }

    view.iter()
        .enumerate()
        .map(|(row, features)| {
            let weight = nearest_distance(features, centroids);
            if weight.is_finite() {
                Ok(weight)
            } else {
                Err(RelevanceError::NonFiniteWeight { row })
            }
        })
        .collect()
}
