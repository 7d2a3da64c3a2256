// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelevanceError {
    /// Label column or record layout disagrees with the declared schema.
    #[error("Schema error: {0}")]
    Schema(String),

    /// The cluster discoverer failed or produced an unusable centroid set.
    #[error("Clustering error: {0}")]
    Clustering(String),

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Non-finite relevance weight at row {row}")]
    NonFiniteWeight { row: usize },

    /// A prior weight that cannot be rescaled into a valid relevance.
    #[error("Invalid weight {weight} at row {row}")]
    InvalidWeight { row: usize, weight: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, RelevanceError>;
