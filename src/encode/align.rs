//! Column alignment against a trained feature schema.
//!
//! [`align`] is a pure function from (arbitrary encoded record, ordered
//! schema) to a schema-shaped vector. It never fails: schema columns missing
//! from the record are zero-filled, record columns missing from the schema
//! are discarded, and the output order is always the schema order.

use ndarray::Array1;

use super::EncodedRecord;

/// Error raised when a trained column schema is structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnSchemaError {
    #[error("column schema is empty")]
    Empty,
    #[error("column schema contains an empty column name at index {index}")]
    EmptyName { index: usize },
    #[error("column schema contains duplicate column name {name:?}")]
    Duplicate { name: String },
}

/// The ordered list of column names a trained model expects.
///
/// Fixed at training time and loaded alongside the model weights. Validated
/// on construction: non-empty, no empty names, no duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureColumns {
    names: Vec<String>,
}

impl FeatureColumns {
    /// Create a validated column schema.
    pub fn new(names: Vec<String>) -> Result<Self, ColumnSchemaError> {
        if names.is_empty() {
            return Err(ColumnSchemaError::Empty);
        }
        let mut seen = std::collections::HashSet::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(ColumnSchemaError::EmptyName { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(ColumnSchemaError::Duplicate { name: name.clone() });
            }
        }
        Ok(Self { names })
    }

    /// Number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the schema is empty. Always `false` for a validated schema;
    /// present for API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column name at `index`.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Position of a column name in the schema.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Iterate over column names in schema order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The underlying names, in schema order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Reconcile an encoded record against a trained column schema.
///
/// Returns a vector with exactly `columns.len()` entries in schema order.
/// Columns absent from the record are filled with zero; record entries not
/// named by the schema are dropped. Total and idempotent for any input.
pub fn align(record: &EncodedRecord, columns: &FeatureColumns) -> Array1<f32> {
    Array1::from_iter(columns.iter().map(|name| record.get(name).unwrap_or(0.0)))
}
