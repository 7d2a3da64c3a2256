//! L2 (Euclidean) distances over `f64` feature rows.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::types::matrix::Centroid;

/// Computes the squared L2 distance between two rows.
/// ||a - b||^2
///
/// Callers are responsible for matching widths; this is the hot loop.
#[inline(always)]
pub fn l2_sq(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimension mismatch");

    let mut sum = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let diff = x - y;
        sum += diff * diff;
    }
    sum
}

/// Unweighted Euclidean distance over all dimensions.
///
/// Falls back to a sum scaled by the largest |a[i] - b[i]| when the plain
/// squared sum overflows, so only distances beyond `f64::MAX` are infinite.
#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    let sq = l2_sq(a, b);
    if sq.is_finite() {
        return sq.sqrt();
    }

    let scale = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0f64, f64::max);
    if !scale.is_finite() {
        return f64::INFINITY;
    }

    let mut sum = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let r = (x - y) / scale;
        sum += r * r;
    }
    scale * sum.sqrt()
}

/// Smallest Euclidean distance from `row` to any centroid.
///
/// Returns `f64::INFINITY` for an empty centroid set. Only the minimum
/// value matters, so ties need no resolution.
pub fn nearest_distance(row: &[f64], centroids: &[Centroid]) -> f64 {
    centroids
        .iter()
        .map(|c| euclidean_distance(row, c.as_slice()))
        .fold(f64::INFINITY, f64::min)
}
