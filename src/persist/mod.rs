//! Artifact loading and validation.
//!
//! Inference needs two artifacts produced at training time: the model
//! weights file (JSON, [`ModelSchema`]) and the feature-column schema file
//! (a JSON array of column names). Both are read here; a missing file is
//! reported as its own startup failure, distinct from unreadable, malformed,
//! or structurally invalid artifacts.

mod schema;

pub use schema::{ModelSchema, CURRENT_FORMAT_VERSION};

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use crate::encode::{ColumnSchemaError, FeatureColumns};

/// Error raised when loading a trained artifact.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// A required artifact file does not exist at the configured path.
    #[error("required artifact not found: {path}")]
    MissingArtifact {
        /// Path that was probed.
        path: PathBuf,
    },

    /// The artifact exists but could not be read.
    #[error("failed to read artifact")]
    Io(#[from] io::Error),

    /// The artifact is not valid JSON for its schema.
    #[error("failed to parse artifact")]
    Parse(#[from] serde_json::Error),

    /// The artifact parsed but violates a structural invariant.
    #[error("invalid artifact")]
    Validation(#[from] ValidationError),
}

/// Structural invariant violations across the artifact pair.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("unsupported model format version {found} (current is {CURRENT_FORMAT_VERSION})")]
    UnsupportedVersion { found: u32 },

    #[error(
        "model has {coefficients} coefficients but the column schema has {columns} columns"
    )]
    LengthMismatch {
        coefficients: usize,
        columns: usize,
    },

    #[error("coefficient {index} is not finite")]
    NonFiniteCoefficient { index: usize },

    #[error("model intercept is not finite")]
    NonFiniteIntercept,

    #[error(transparent)]
    Columns(#[from] ColumnSchemaError),
}

/// Parse a model artifact from a reader.
pub fn read_model(reader: impl Read) -> Result<ModelSchema, ReadError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a column-schema artifact (JSON array of names) from a reader.
///
/// Returns the raw name list; structural validation happens when the list
/// is turned into [`FeatureColumns`] during predictor assembly.
pub fn read_columns(reader: impl Read) -> Result<Vec<String>, ReadError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a model artifact from a path.
pub fn read_model_from_path(path: impl AsRef<Path>) -> Result<ModelSchema, ReadError> {
    read_model(open_artifact(path.as_ref())?)
}

/// Load a column-schema artifact from a path.
pub fn read_columns_from_path(path: impl AsRef<Path>) -> Result<Vec<String>, ReadError> {
    read_columns(open_artifact(path.as_ref())?)
}

/// Write a model artifact as pretty JSON.
pub fn write_model(writer: impl Write, model: &ModelSchema) -> Result<(), ReadError> {
    Ok(serde_json::to_writer_pretty(writer, model)?)
}

/// Write a column-schema artifact as pretty JSON.
pub fn write_columns(writer: impl Write, columns: &FeatureColumns) -> Result<(), ReadError> {
    Ok(serde_json::to_writer_pretty(writer, columns.names())?)
}

/// Validate a model artifact against its column schema.
///
/// Checks format version, coefficient/column cardinality, and finiteness of
/// every weight. Both artifacts must already have parsed.
pub fn validate(model: &ModelSchema, columns: &FeatureColumns) -> Result<(), ValidationError> {
    if model.format_version != CURRENT_FORMAT_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            found: model.format_version,
        });
    }
    if model.coefficients.len() != columns.len() {
        return Err(ValidationError::LengthMismatch {
            coefficients: model.coefficients.len(),
            columns: columns.len(),
        });
    }
    if !model.intercept.is_finite() {
        return Err(ValidationError::NonFiniteIntercept);
    }
    if let Some(index) = model.coefficients.iter().position(|c| !c.is_finite()) {
        return Err(ValidationError::NonFiniteCoefficient { index });
    }
    Ok(())
}

fn open_artifact(path: &Path) -> Result<BufReader<File>, ReadError> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(ReadError::MissingArtifact {
            path: path.to_path_buf(),
        }),
        Err(err) => Err(err.into()),
    }
}
