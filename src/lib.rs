// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! clusterweight: clustering-based relevance weighting for tabular records.
//!
//! Records far from every cluster centroid are less redundant and receive a
//! larger weight than records sitting on top of a centroid.

pub mod config;
pub mod error;
pub mod types;
pub mod math;
pub mod strip;
pub mod cluster;
pub mod score;
pub mod normalize;
pub mod filter;

pub use cluster::{ClusterDiscoverer, FixedCentroids, XMeans};
pub use config::{Normalization, RelevanceConfig};
pub use error::{RelevanceError, Result};
pub use filter::{Capabilities, RelevanceFilter};
pub use types::{Attribute, AttributeKind, Centroid, Dataset, FeatureMatrix, Record, Schema, Value};

#[cfg(test)]
pub mod tests;
