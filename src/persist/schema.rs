//! Artifact schema types.
//!
//! These types define the on-disk JSON contract for the two trained
//! artifacts (model weights and feature-column schema), separate from the
//! runtime types so the format can evolve independently of inference code.

use serde::{Deserialize, Serialize};

use crate::encode::OrdinalEncoding;
use crate::model::OutputTransform;

/// Current model artifact format version.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// On-disk model artifact.
///
/// `coefficients` is parallel to the column-schema artifact: coefficient `i`
/// weights column `i` of the trained column list. Cross-artifact consistency
/// is checked when a predictor is assembled, not at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSchema {
    /// Format version; readers reject versions they don't understand.
    pub format_version: u32,
    /// Additive intercept term.
    pub intercept: f32,
    /// Per-column regression coefficients, in trained column order.
    pub coefficients: Vec<f32>,
    /// Inference-time output transform persisted at training time.
    pub output_transform: OutputTransform,
    /// Ordinal encoding mode the column schema was built with.
    pub ordinal_encoding: OrdinalEncoding,
}

impl ModelSchema {
    /// Create a current-version artifact from its parts.
    pub fn new(
        intercept: f32,
        coefficients: Vec<f32>,
        output_transform: OutputTransform,
        ordinal_encoding: OrdinalEncoding,
    ) -> Self {
        Self {
            format_version: CURRENT_FORMAT_VERSION,
            intercept,
            coefficients,
            output_transform,
            ordinal_encoding,
        }
    }
}
