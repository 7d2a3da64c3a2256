// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Weight normalization.

use crate::config::Normalization;
use crate::error::Result;
use crate::types::Dataset;

/// Rescales `weights` in place by the slice minimum.
///
/// The minimum is taken over the whole slice before any entry changes. Both
/// modes are positive monotonic rescales, so ordering is preserved:
///
/// * `Offset`: `w / (min + epsilon)`
/// * `Shifted`: `(w + epsilon) / (min + epsilon)`
///
/// An empty slice is left alone.
pub fn normalize(weights: &mut [f64], epsilon: f64, mode: Normalization) {
    if weights.is_empty() {
        return;
    }

    let min_weight = weights.iter().copied().fold(f64::INFINITY, f64::min);
    let denom = min_weight + epsilon;

    match mode {
        Normalization::Offset => {
            for w in weights.iter_mut() {
                *w /= denom;
            }
        }
        Normalization::Shifted => {
            for w in weights.iter_mut() {
                *w = (*w + epsilon) / denom;
            }
        }
    }
}

/// [`normalize`] applied to a dataset's record weights.
pub fn normalize_dataset(dataset: &mut Dataset, epsilon: f64, mode: Normalization) -> Result<()> {
    let mut weights = dataset.weights();
    normalize(&mut weights, epsilon, mode);
    dataset.set_weights(&weights)
}
