// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Deterministic K-Means clustering.
//!
//! Guarantees bit-identical centroids given the same rows in the same order:
//! seeding is driven by an FNV-1a hash of each row, Lloyd iterations visit rows
//! and centroids in a fixed order, and distance ties go to the lower centroid
//! index.

use crate::math::l2_sq;

/// Output of a k-means run.
#[derive(Clone, Debug, PartialEq)]
pub struct KMeansFit {
    pub centroids: Vec<Vec<f64>>,
    /// Centroid index per input row.
    pub assignments: Vec<usize>,
    /// Lloyd iterations actually run.
    pub iterations: usize,
    /// True if assignments stabilised before the iteration cap.
    pub converged: bool,
}

impl KMeansFit {
    fn empty() -> Self {
        Self { centroids: Vec::new(), assignments: Vec::new(), iterations: 0, converged: true }
    }

    /// Sum of squared distances from every row to its assigned centroid.
    pub fn sse(&self, rows: &[&[f64]]) -> f64 {
        rows.iter()
            .zip(&self.assignments)
            .map(|(row, &c)| l2_sq(row, &self.centroids[c]))
            .sum()
    }

    /// Rows assigned to each centroid.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.centroids.len()];
        for &c in &self.assignments {
            sizes[c] += 1;
        }
        sizes
    }
}

// FNV-1a over the raw bit pattern of each value, then the row position.
fn hash_row(idx: usize, row: &[f64]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    for &val in row {
        // -0.0 and 0.0 must hash alike
        let bits = if val == 0.0 { 0u64 } else { val.to_bits() };
        for byte in bits.to_le_bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }

    for byte in (idx as u64).to_le_bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }

    hash
}

/// Picks up to `k` distinct seed rows.
///
/// The first seed is the row with the lowest hash; each further seed is the
/// row farthest from the seeds chosen so far. Fewer than `k` seeds come back
/// when the rows hold fewer than `k` distinct points.
pub fn seed_centroids(rows: &[&[f64]], k: usize) -> Vec<Vec<f64>> {
    if rows.is_empty() || k == 0 {
        return Vec::new();
    }

    // hash order doubles as the tie-break for equally distant candidates
    let mut order: Vec<(u64, usize)> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (hash_row(i, row), i))
        .collect();
    order.sort();

    let mut seeds: Vec<Vec<f64>> = vec![rows[order[0].1].to_vec()];
    let mut nearest: Vec<f64> = order
        .iter()
        .map(|&(_, i)| l2_sq(rows[i], &seeds[0]))
        .collect();

    while seeds.len() < k {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &d) in nearest.iter().enumerate() {
            if d > 0.0 && best.map_or(true, |(_, bd)| d > bd) {
                best = Some((pos, d));
            }
        }
        let Some((pos, _)) = best else {
            break;
        };
        let seed = rows[order[pos].1].to_vec();
        for (slot, &(_, i)) in nearest.iter_mut().zip(&order) {
            let d = l2_sq(rows[i], &seed);
            if d < *slot {
                *slot = d;
            }
        }
        seeds.push(seed);
    }

    seeds
}

/// Index of the closest centroid; exact ties resolve to the lower index.
pub fn nearest_centroid(row: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best_dist = f64::INFINITY;
    let mut best_c = 0usize;
    for (c_idx, centroid) in centroids.iter().enumerate() {
        let d = l2_sq(row, centroid);
        if d < best_dist {
            best_dist = d;
            best_c = c_idx;
        }
    }
    best_c
}

/// Runs Lloyd's algorithm from the given starting centroids.
///
/// Stops after `max_iterations` passes or as soon as no assignment changes.
/// A centroid that loses all its rows keeps its previous position.
pub fn kmeans_from(rows: &[&[f64]], initial: Vec<Vec<f64>>, max_iterations: usize) -> KMeansFit {
    if rows.is_empty() || initial.is_empty() {
        return KMeansFit::empty();
    }

    let dim = rows[0].len();
    let k = initial.len();
    let mut centroids = initial;
    let mut assignments: Vec<usize> =
        rows.iter().map(|r| nearest_centroid(r, &centroids)).collect();
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iterations {
        iterations += 1;

        // update
        let mut sums: Vec<Vec<f64>> = vec![vec![0.0; dim]; k];
        let mut counts: Vec<usize> = vec![0usize; k];
        for (row, &c_idx) in rows.iter().zip(&assignments) {
            counts[c_idx] += 1;
            for (acc, &val) in sums[c_idx].iter_mut().zip(row.iter()) {
                *acc += val;
            }
        }
        for c_idx in 0..k {
            let count = counts[c_idx];
            if count > 0 {
                for d_idx in 0..dim {
                    centroids[c_idx][d_idx] = sums[c_idx][d_idx] / count as f64;
                }
            }
        }

        // assign
        let mut changed = false;
        for (i, row) in rows.iter().enumerate() {
            let c = nearest_centroid(row, &centroids);
            if c != assignments[i] {
                assignments[i] = c;
                changed = true;
            }
        }
        if !changed {
            converged = true;
            break;
        }
    }

    KMeansFit { centroids, assignments, iterations, converged }
}

/// Seeds with [`seed_centroids`] and runs [`kmeans_from`].
///
/// # Arguments
/// * rows - Feature rows; all must share one width.
/// * k - Requested number of centroids (fewer if there are fewer distinct rows).
/// * max_iterations - Cap on Lloyd passes.
pub fn deterministic_kmeans(rows: &[&[f64]], k: usize, max_iterations: usize) -> KMeansFit {
    let seeds = seed_centroids(rows, k);
    kmeans_from(rows, seeds, max_iterations)
}
