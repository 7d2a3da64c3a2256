// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Record definition.

use serde::{Deserialize, Serialize};

/// A single cell value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Numeric(f64),
    Nominal(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Numeric(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Nominal(v.to_string())
    }
}

fn default_weight() -> f64 {
    1.0
}

/// One row of a dataset plus its relevance weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub values: Vec<Value>,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl Record {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values, weight: default_weight() }
    }

    /// Convenience constructor for all-numeric rows.
    pub fn numeric(values: &[f64]) -> Self {
        Self::new(values.iter().copied().map(Value::Numeric).collect())
    }
}
