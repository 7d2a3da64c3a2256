// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Tabular data model: schema, records, datasets and the unlabeled feature view.

pub mod schema;
pub mod record;
pub mod dataset;
pub mod matrix;

pub use dataset::Dataset;
pub use matrix::{Centroid, FeatureMatrix};
pub use record::{Record, Value};
pub use schema::{Attribute, AttributeKind, Schema};
