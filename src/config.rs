// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Filter configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RelevanceError, Result};

/// Default lower bound on the number of discovered clusters.
pub const DEFAULT_MIN_CLUSTERS: usize = 2;

/// Default upper bound on the number of discovered clusters.
pub const DEFAULT_MAX_CLUSTERS: usize = 1000;

/// Default cap on clustering iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Added to the minimum weight so normalization never divides by zero.
pub const DEFAULT_EPSILON: f64 = 1e-3;

/// How raw weights are rescaled after scoring.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// `w / (min + epsilon)`.
    ///
    /// The minimum only approaches 1 when it is large relative to epsilon; a
    /// zero minimum divides every weight by epsilon.
    #[default]
    Offset,
    /// `(w + epsilon) / (min + epsilon)`: the minimum maps to exactly 1 and
    /// every other weight is above it.
    Shifted,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RelevanceConfig {
    pub min_clusters: usize,
    pub max_clusters: usize,
    pub max_iterations: usize,
    pub epsilon: f64,
    pub normalization: Normalization,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            min_clusters: DEFAULT_MIN_CLUSTERS,
            max_clusters: DEFAULT_MAX_CLUSTERS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            epsilon: DEFAULT_EPSILON,
            normalization: Normalization::Offset,
        }
    }
}

impl RelevanceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_clusters == 0 {
            return Err(RelevanceError::InvalidConfig(
                "min_clusters must be at least 1".to_string(),
            ));
        }
        if self.max_clusters < self.min_clusters {
            return Err(RelevanceError::InvalidConfig(format!(
                "max_clusters ({}) is below min_clusters ({})",
                self.max_clusters, self.min_clusters
            )));
        }
        if self.max_iterations == 0 {
            return Err(RelevanceError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(RelevanceError::InvalidConfig(format!(
                "epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}
