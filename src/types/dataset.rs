// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Dataset container.

use serde::{Deserialize, Serialize};

use crate::error::{RelevanceError, Result};
use crate::types::record::Record;
use crate::types::schema::Schema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub schema: Schema,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(schema: Schema, records: Vec<Record>) -> Self {
        Self { schema, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn weights(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.weight).collect()
    }

    /// Replaces every record's weight at once. Nothing is written unless
    /// `weights` has exactly one entry per record.
    pub fn set_weights(&mut self, weights: &[f64]) -> Result<()> {
        if weights.len() != self.records.len() {
            return Err(RelevanceError::Schema(format!(
                "expected {} weights, got {}",
                self.records.len(),
                weights.len()
            )));
        }
        for (record, &w) in self.records.iter_mut().zip(weights) {
            record.weight = w;
        }
        Ok(())
    }

    /// BLAKE3 digest of all weights in record order.
    ///
    /// Hashes the raw IEEE-754 bit patterns (little endian), so two datasets
    /// share a digest only if their weights are bit-identical.
    pub fn weight_digest(&self) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.records.len() as u64).to_le_bytes());
        for record in &self.records {
            hasher.update(&record.weight.to_bits().to_le_bytes());
        }
        *hasher.finalize().as_bytes()
    }
}
