//! salarycast: survey-driven yearly compensation estimation.
//!
//! The crate wraps a previously trained linear regression model in the
//! three-step inference pipeline its training pipeline implies:
//!
//! 1. **encode** — map survey answers to named numeric columns via fixed
//!    ordinal tables and one-hot expansion ([`encode`])
//! 2. **align** — reconcile the encoded record against the trained feature
//!    schema, zero-filling absent columns ([`encode::align`])
//! 3. **predict** — run the linear model and invert the training-time
//!    `log1p` target transform ([`inference`], [`model`])
//!
//! # Key Types
//!
//! - [`SalaryPredictor`] - loaded model + column schema, ready to score
//! - [`SurveyResponse`] - one respondent's answers
//! - [`FeatureColumns`] - the ordered trained column list
//! - [`OrdinalEncoding`] / [`OutputTransform`] - persisted encoding contract
//!
//! # Loading Artifacts
//!
//! Two JSON artifacts are produced at training time: the model weights and
//! the ordered feature-column list. [`SalaryPredictor::load`] reads and
//! cross-validates the pair; a missing file is a distinct startup failure.

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod encode;
pub mod inference;
pub mod model;
pub mod persist;
pub mod survey;
pub mod testing;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use encode::{align, encode, EncodedRecord, FeatureColumns, OrdinalEncoding};
pub use inference::SalaryPredictor;
pub use model::{LinearModel, OutputTransform};
pub use persist::{ModelSchema, ReadError, ValidationError};
pub use survey::{
    CodingExperience, Country, Industry, JobTitle, MlExperience, MlMaturity, MlSpend,
    SurveyResponse,
};
