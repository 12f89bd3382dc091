//! Deterministic synthetic artifacts for tests and examples.
//!
//! Real trained artifacts live outside this crate; tests need a model whose
//! behavior is fully reproducible from code. The synthetic model covers the
//! complete one-hot space of every survey field so alignment never zero-fills
//! merely because the synthetic schema was too small.

use crate::encode::{
    one_hot_column, FeatureColumns, OrdinalEncoding, COL_CLOUD_SPEND, COL_EXPERIENCE_YEARS,
    COL_ML_EXPERIENCE_YEARS, COL_ML_MATURITY, PREFIX_CLOUD_SPEND, PREFIX_CODING_EXPERIENCE,
    PREFIX_COUNTRY, PREFIX_INDUSTRY, PREFIX_ML_EXPERIENCE, PREFIX_ML_MATURITY, PREFIX_ROLE,
};
use crate::inference::SalaryPredictor;
use crate::model::OutputTransform;
use crate::persist::ModelSchema;
use crate::survey::{CodingExperience, Country, Industry, JobTitle, MlExperience, MlMaturity, MlSpend};

/// Synthetic intercept, roughly `log1p` of a mid five-figure salary.
pub const SYNTHETIC_INTERCEPT: f32 = 10.0;

/// Full trained column schema for the given encoding mode.
///
/// Ordinal columns come first, then country, role and industry indicators in
/// survey order.
pub fn synthetic_columns(encoding: OrdinalEncoding) -> FeatureColumns {
    let mut names: Vec<String> = Vec::new();

    match encoding {
        OrdinalEncoding::Midpoint => {
            names.push(COL_EXPERIENCE_YEARS.to_string());
            names.push(COL_ML_EXPERIENCE_YEARS.to_string());
            names.push(COL_CLOUD_SPEND.to_string());
            names.push(COL_ML_MATURITY.to_string());
        }
        OrdinalEncoding::OneHot => {
            for c in CodingExperience::ALL {
                names.push(one_hot_column(PREFIX_CODING_EXPERIENCE, c.label()));
            }
            for c in MlExperience::ALL {
                names.push(one_hot_column(PREFIX_ML_EXPERIENCE, c.label()));
            }
            for c in MlSpend::ALL {
                names.push(one_hot_column(PREFIX_CLOUD_SPEND, c.label()));
            }
            for c in MlMaturity::ALL {
                names.push(one_hot_column(PREFIX_ML_MATURITY, c.label()));
            }
        }
    }
    for c in Country::ALL {
        names.push(one_hot_column(PREFIX_COUNTRY, c.label()));
    }
    for c in JobTitle::ALL {
        names.push(one_hot_column(PREFIX_ROLE, c.label()));
    }
    for c in Industry::ALL {
        names.push(one_hot_column(PREFIX_INDUSTRY, c.label()));
    }

    FeatureColumns::new(names).expect("synthetic column names are unique and non-empty")
}

/// Deterministic weight for a synthetic column.
///
/// Ordinal columns get magnitudes matched to their value ranges (spend runs
/// to 100k, so its coefficient is per-dollar); indicator columns cycle
/// through a small symmetric range.
fn synthetic_weight(index: usize, name: &str) -> f32 {
    match name {
        COL_EXPERIENCE_YEARS => 0.012,
        COL_ML_EXPERIENCE_YEARS => 0.025,
        COL_CLOUD_SPEND => 2.0e-6,
        COL_ML_MATURITY => 0.05,
        _ => ((index % 7) as f32 - 3.0) * 0.04,
    }
}

/// Synthetic model artifact consistent with [`synthetic_columns`].
pub fn synthetic_model(columns: &FeatureColumns, encoding: OrdinalEncoding) -> ModelSchema {
    let coefficients = columns
        .iter()
        .enumerate()
        .map(|(index, name)| synthetic_weight(index, name))
        .collect();
    ModelSchema::new(
        SYNTHETIC_INTERCEPT,
        coefficients,
        OutputTransform::Expm1,
        encoding,
    )
}

/// Fully assembled predictor over the synthetic artifacts.
pub fn synthetic_predictor(encoding: OrdinalEncoding) -> SalaryPredictor {
    let columns = synthetic_columns(encoding);
    let model = synthetic_model(&columns, encoding);
    SalaryPredictor::from_schema(model, columns.names().to_vec())
        .expect("synthetic artifacts are mutually consistent")
}
