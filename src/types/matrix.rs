// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Unlabeled feature view and centroids.

use serde::{Deserialize, Serialize};

use crate::error::{RelevanceError, Result};

/// Label-free rows in the same order as the dataset they were stripped from.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureMatrix {
    dim: usize,
    rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    /// Builds a matrix, rejecting rows whose width differs from `dim`.
    pub fn new(dim: usize, rows: Vec<Vec<f64>>) -> Result<Self> {
        if let Some(row) = rows.iter().find(|r| r.len() != dim) {
            return Err(RelevanceError::DimensionMismatch { expected: dim, found: row.len() });
        }
        Ok(Self { dim, rows })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

/// Representative point of one cluster. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centroid(Vec<f64>);

impl Centroid {
    pub fn new(coords: Vec<f64>) -> Self {
        Self(coords)
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Centroid {
    fn from(coords: Vec<f64>) -> Self {
        Self(coords)
    }
}
