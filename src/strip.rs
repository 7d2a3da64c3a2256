// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Label stripping.
//!
//! Produces the unlabeled feature view that clustering runs on. Row `i` of
//! the view always corresponds to record `i` of the dataset.

use crate::error::{RelevanceError, Result};
use crate::types::{AttributeKind, Dataset, FeatureMatrix, Value};

/// Copies every feature column of `dataset` into a [`FeatureMatrix`],
/// dropping the label column if the schema declares one.
///
/// Nominal features are encoded as the index of the value in the attribute's
/// declared category list. The label value itself is never inspected.
pub fn strip(dataset: &Dataset) -> Result<FeatureMatrix> {
    let schema = &dataset.schema;
    let num_attributes = schema.num_attributes();

    if let Some(label) = schema.label_index {
        if label >= num_attributes {
            return Err(RelevanceError::Schema(format!(
                "label index {} out of range for {} attributes",
                label, num_attributes
            )));
        }
    }

    tracing::debug!(
        "Stripping label column {:?} from {} records",
        schema.label_index.map(|i| i + 1),
        dataset.len()
    );

    let dim = schema.num_features();
    let mut rows = Vec::with_capacity(dataset.len());

    for (row_idx, record) in dataset.records.iter().enumerate() {
        if record.values.len() != num_attributes {
            return Err(RelevanceError::Schema(format!(
                "record {} has {} values, schema declares {}",
                row_idx,
                record.values.len(),
                num_attributes
            )));
        }

        let mut row = Vec::with_capacity(dim);
        for (col, (attr, value)) in schema.attributes.iter().zip(&record.values).enumerate() {
            if Some(col) == schema.label_index {
                continue;
            }
            let encoded = match (&attr.kind, value) {
                (AttributeKind::Numeric, Value::Numeric(v)) => {
                    if !v.is_finite() {
                        return Err(RelevanceError::Schema(format!(
                            "record {} attribute '{}' is not finite: {}",
                            row_idx, attr.name, v
                        )));
                    }
                    *v
                }
                (AttributeKind::Nominal(_), Value::Nominal(v)) => match attr.category_index(v) {
                    Some(idx) => idx as f64,
                    None => {
                        return Err(RelevanceError::Schema(format!(
                            "record {} attribute '{}' has undeclared value '{}'",
                            row_idx, attr.name, v
                        )));
                    }
                },
                _ => {
                    return Err(RelevanceError::Schema(format!(
                        "record {} attribute '{}' holds a value of the wrong kind",
                        row_idx, attr.name
                    )));
                }
            };
            row.push(encoded);
        }
        rows.push(row);
    }

    FeatureMatrix::new(dim, rows)
}
