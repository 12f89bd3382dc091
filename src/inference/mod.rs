//! End-to-end prediction: survey response → compensation estimate.
//!
//! [`SalaryPredictor`] composes the three inference steps — encode the
//! answers, align them against the trained column schema, run the linear
//! model and invert the training-time target transform. All fallible work
//! happens at assembly time; prediction itself is infallible and
//! deterministic for fixed artifacts.

use std::path::Path;

use ndarray::Array1;
use rayon::prelude::*;

use crate::encode::{align, encode, FeatureColumns, OrdinalEncoding};
use crate::model::{LinearModel, OutputTransform};
use crate::persist::{self, ModelSchema, ReadError};
use crate::survey::SurveyResponse;

/// A loaded compensation model ready to score survey responses.
///
/// # Example
///
/// ```
/// use salarycast::inference::SalaryPredictor;
/// use salarycast::survey::SurveyResponse;
///
/// # fn run() -> Result<(), salarycast::persist::ReadError> {
/// let predictor = SalaryPredictor::load("model.json", "feature_cols.json")?;
/// let estimate = predictor.predict(&SurveyResponse::default());
/// println!("estimated yearly compensation: {estimate:.2} USD");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SalaryPredictor {
    model: LinearModel,
    columns: FeatureColumns,
    encoding: OrdinalEncoding,
    transform: OutputTransform,
}

impl SalaryPredictor {
    /// Load and validate the artifact pair from disk.
    ///
    /// A missing file surfaces as [`ReadError::MissingArtifact`] naming the
    /// path, so startup failures are distinguishable from malformed input.
    pub fn load(
        model_path: impl AsRef<Path>,
        columns_path: impl AsRef<Path>,
    ) -> Result<Self, ReadError> {
        let schema = persist::read_model_from_path(model_path.as_ref())?;
        let names = persist::read_columns_from_path(columns_path.as_ref())?;
        let predictor = Self::from_schema(schema, names)?;
        tracing::info!(
            n_features = predictor.columns.len(),
            encoding = ?predictor.encoding,
            "loaded compensation model"
        );
        Ok(predictor)
    }

    /// Assemble a predictor from parsed artifacts, running full validation.
    pub fn from_schema(schema: ModelSchema, column_names: Vec<String>) -> Result<Self, ReadError> {
        let columns = FeatureColumns::new(column_names).map_err(persist::ValidationError::from)?;
        persist::validate(&schema, &columns)?;

        let model = LinearModel::new(Array1::from_vec(schema.coefficients), schema.intercept);
        Ok(Self {
            model,
            columns,
            encoding: schema.ordinal_encoding,
            transform: schema.output_transform,
        })
    }

    /// Estimate yearly compensation for one response, in USD.
    pub fn predict(&self, response: &SurveyResponse) -> f32 {
        let record = encode(response, self.encoding);
        let features = align(&record, &self.columns);
        let margin = self.model.predict_one(features.view());
        self.transform.apply(margin)
    }

    /// Estimate yearly compensation for a batch of responses.
    ///
    /// Scoring is embarrassingly parallel; results keep input order.
    pub fn predict_batch(&self, responses: &[SurveyResponse]) -> Vec<f32> {
        responses.par_iter().map(|r| self.predict(r)).collect()
    }

    /// The trained column schema.
    pub fn columns(&self) -> &FeatureColumns {
        &self.columns
    }

    /// The ordinal encoding mode the model was trained with.
    pub fn encoding(&self) -> OrdinalEncoding {
        self.encoding
    }

    /// The persisted output transform.
    pub fn transform(&self) -> OutputTransform {
        self.transform
    }

    /// The underlying linear model.
    pub fn model(&self) -> &LinearModel {
        &self.model
    }
}
