// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! The relevance filter: strip, discover, score, normalize.

use serde::Serialize;

use crate::cluster::{validate_centroids, ClusterDiscoverer, XMeans};
use crate::config::RelevanceConfig;
use crate::error::{RelevanceError, Result};
use crate::normalize::normalize;
use crate::score::score;
use crate::strip::strip;
use crate::types::{Dataset, Schema};

/// What inputs the filter accepts, for hosts that negotiate capabilities.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub numeric_attributes: bool,
    pub nominal_attributes: bool,
    pub numeric_label: bool,
    pub nominal_label: bool,
    /// Datasets without any label column.
    pub no_label: bool,
}

impl Capabilities {
    pub fn all() -> Self {
        Self {
            numeric_attributes: true,
            nominal_attributes: true,
            numeric_label: true,
            nominal_label: true,
            no_label: true,
        }
    }
}

/// Assigns each record a weight from its distance to the nearest cluster
/// centroid. Batch transform, no state is kept between calls.
pub struct RelevanceFilter<D: ClusterDiscoverer = XMeans> {
    config: RelevanceConfig,
    discoverer: D,
}

impl RelevanceFilter<XMeans> {
    pub fn new(config: RelevanceConfig) -> Self {
        Self::with_discoverer(config, XMeans::new())
    }
}

impl<D: ClusterDiscoverer> RelevanceFilter<D> {
    pub fn with_discoverer(config: RelevanceConfig, discoverer: D) -> Self {
        Self { config, discoverer }
    }

    pub fn config(&self) -> &RelevanceConfig {
        &self.config
    }

    pub fn global_info(&self) -> &'static str {
        "Computes relevance scores for data instances, based on clustering"
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    /// Weights are the only thing that changes, so the schema passes through.
    pub fn output_schema(&self, input: &Schema) -> Schema {
        input.clone()
    }

    /// Computes the final weights without touching `dataset`.
    ///
    /// A single record skips clustering and keeps its prior weight before
    /// normalization; that prior must be finite and non-negative.
    pub fn compute_weights(&self, dataset: &Dataset) -> Result<Vec<f64>> {
        self.config.validate()?;
        if dataset.is_empty() {
            return Ok(Vec::new());
        }

        let mut staged = if dataset.len() == 1 {
            let prior = dataset.records[0].weight;
            if !prior.is_finite() || prior < 0.0 {
                return Err(RelevanceError::InvalidWeight { row: 0, weight: prior });
            }
            vec![prior]
        } else {
            let view = strip(dataset)?;
            let centroids = self
                .discoverer
                .discover(
                    &view,
                    self.config.min_clusters,
                    self.config.max_clusters,
                    self.config.max_iterations,
                )
                .map_err(|e| match e {
                    RelevanceError::Clustering(_) => e,
                    other => RelevanceError::Clustering(other.to_string()),
                })?;
            validate_centroids(&centroids, view.dim(), self.config.max_clusters)?;

            tracing::info!(
                "Scoring {} records against {} centroids",
                dataset.len(),
                centroids.len()
            );
            score(dataset, &view, &centroids)?
        };

        normalize(&mut staged, self.config.epsilon, self.config.normalization);
        if let Some(row) = staged.iter().position(|w| !w.is_finite()) {
            return Err(RelevanceError::NonFiniteWeight { row });
        }
        Ok(staged)
    }

    /// Replaces every record's weight with its normalized relevance.
    ///
    /// Weights are committed only after scoring and normalization both
    /// succeed; on error the dataset is unchanged.
    pub fn process(&self, dataset: &mut Dataset) -> Result<()> {
        let weights = self.compute_weights(dataset)?;
        dataset.set_weights(&weights)
    }
}
