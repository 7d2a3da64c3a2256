// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Attribute and schema definitions.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Numeric,
    /// Categorical attribute with its declared values, in encoding order.
    Nominal(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub kind: AttributeKind,
}

impl Attribute {
    pub fn numeric(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: AttributeKind::Numeric }
    }

    pub fn nominal<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Nominal(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Position of `value` in the declared category list, if nominal.
    pub fn category_index(&self, value: &str) -> Option<usize> {
        match &self.kind {
            AttributeKind::Nominal(values) => values.iter().position(|v| v == value),
            AttributeKind::Numeric => None,
        }
    }
}

/// Column layout shared by every record of a dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub attributes: Vec<Attribute>,
    /// Index of the label (class) column, if the dataset has one.
    #[serde(default)]
    pub label_index: Option<usize>,
}

impl Schema {
    pub fn new(attributes: Vec<Attribute>, label_index: Option<usize>) -> Self {
        Self { attributes, label_index }
    }

    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    /// Number of columns left once the label is removed.
    pub fn num_features(&self) -> usize {
        match self.label_index {
            Some(_) => self.attributes.len().saturating_sub(1),
            None => self.attributes.len(),
        }
    }

    pub fn label(&self) -> Option<&Attribute> {
        self.label_index.and_then(|i| self.attributes.get(i))
    }
}
