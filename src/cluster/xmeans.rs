// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! X-Means: k-means with the number of clusters picked by BIC.
//!
//! Starts from `min_k` centroids and repeatedly tries to split each cluster in
//! two, keeping a split only when the Bayesian Information Criterion of the
//! two-child model beats the single-parent model on that cluster's rows.
//! Stops when `max_k` is reached, no split helps, or the round cap is hit.
//! Every step is deterministic.

use std::f64::consts::PI;

use super::kmeans::{deterministic_kmeans, kmeans_from};
use super::ClusterDiscoverer;
use crate::error::{RelevanceError, Result};
use crate::math::l2_sq;
use crate::types::{Centroid, FeatureMatrix};

/// Keeps the log-likelihood finite when a cluster has zero spread.
const VARIANCE_FLOOR: f64 = 1e-12;

#[derive(Clone, Copy, Debug, Default)]
pub struct XMeans;

impl XMeans {
    pub fn new() -> Self {
        Self
    }
}

/// BIC of a spherical-Gaussian model (Pelleg & Moore, 2000).
///
/// `assignments[i]` is the centroid index for `rows[i]`. Higher is better.
pub fn bic(rows: &[&[f64]], centroids: &[Vec<f64>], assignments: &[usize]) -> f64 {
    let r = rows.len();
    let k = centroids.len();
    if r <= k || k == 0 {
        return f64::NEG_INFINITY;
    }
    let dim = rows[0].len().max(1) as f64;

    let mut sizes = vec![0usize; k];
    let mut sse = 0.0;
    for (row, &c) in rows.iter().zip(assignments) {
        sizes[c] += 1;
        sse += l2_sq(row, &centroids[c]);
    }

    let r_f = r as f64;
    let k_f = k as f64;
    let variance = (sse / (dim * (r_f - k_f))).max(VARIANCE_FLOOR);

    let mut log_likelihood = 0.0;
    for &n in sizes.iter().filter(|&&n| n > 0) {
        let n = n as f64;
        log_likelihood += n * n.ln() - n * r_f.ln() - n / 2.0 * (2.0 * PI).ln()
            - n * dim / 2.0 * variance.ln()
            - (n - k_f) / 2.0;
    }

    let free_params = (k_f - 1.0) + k_f * dim + 1.0;
    log_likelihood - free_params / 2.0 * r_f.ln()
}

impl XMeans {
    /// One improve-structure round. Returns the new centroid list and whether
    /// any cluster was split.
    fn improve_structure(
        &self,
        rows: &[&[f64]],
        centroids: Vec<Vec<f64>>,
        max_k: usize,
        max_iterations: usize,
    ) -> (Vec<Vec<f64>>, bool) {
        let fit = kmeans_from(rows, centroids, max_iterations);
        let mut budget = max_k.saturating_sub(fit.centroids.len());
        let mut next = Vec::with_capacity(fit.centroids.len() * 2);
        let mut split_any = false;

        for (c_idx, parent) in fit.centroids.iter().enumerate() {
            let members: Vec<&[f64]> = rows
                .iter()
                .zip(&fit.assignments)
                .filter(|(_, &a)| a == c_idx)
                .map(|(row, _)| *row)
                .collect();

            if budget == 0 || members.len() < 2 {
                next.push(parent.clone());
                continue;
            }

            let children = deterministic_kmeans(&members, 2, max_iterations);
            if children.centroids.len() < 2 {
                next.push(parent.clone());
                continue;
            }

            let parent_bic = bic(&members, std::slice::from_ref(parent), &vec![0; members.len()]);
            let child_bic = bic(&members, &children.centroids, &children.assignments);

            if child_bic > parent_bic {
                tracing::trace!(
                    "Splitting cluster {} ({} rows): BIC {:.3} -> {:.3}",
                    c_idx,
                    members.len(),
                    parent_bic,
                    child_bic
                );
                next.extend(children.centroids);
                budget -= 1;
                split_any = true;
            } else {
                next.push(parent.clone());
            }
        }

        (next, split_any)
    }
}

impl ClusterDiscoverer for XMeans {
    fn discover(
        &self,
        view: &FeatureMatrix,
        min_k: usize,
        max_k: usize,
        max_iterations: usize,
    ) -> Result<Vec<Centroid>> {
        if view.is_empty() {
            return Err(RelevanceError::Clustering("cannot cluster an empty view".to_string()));
        }
        if min_k == 0 || max_k < min_k {
            return Err(RelevanceError::Clustering(format!(
                "invalid cluster range [{}, {}]",
                min_k, max_k
            )));
        }
        if max_iterations == 0 {
            return Err(RelevanceError::Clustering("max_iterations must be at least 1".to_string()));
        }

        let rows: Vec<&[f64]> = view.iter().collect();

        // seeding stops early when there are fewer distinct rows than min_k
        let mut centroids = deterministic_kmeans(&rows, min_k, max_iterations).centroids;

        let mut rounds = 0;
        while centroids.len() < max_k && rounds < max_iterations {
            rounds += 1;
            let (next, split_any) =
                self.improve_structure(&rows, centroids, max_k, max_iterations);
            centroids = next;
            if !split_any {
                break;
            }
        }

        let fit = kmeans_from(&rows, centroids, max_iterations);
        if fit.centroids.is_empty() {
            return Err(RelevanceError::Clustering("k-means produced no centroids".to_string()));
        }

        tracing::debug!(
            "X-Means selected {} clusters after {} rounds (converged: {}, sse: {:.6}, sizes: {:?})",
            fit.centroids.len(),
            rounds,
            fit.converged,
            fit.sse(&rows),
            fit.cluster_sizes()
        );

        Ok(fit.centroids.into_iter().map(Centroid::new).collect())
    }
}
