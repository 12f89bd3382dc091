//! Feature encoding: survey answers → named numeric columns.
//!
//! Encoding is the first of the three inference steps (encode → align →
//! predict). It is total and deterministic: every enumerated survey choice
//! produces exactly one numeric or one-hot representation, in both ordinal
//! modes.
//!
//! # Column naming
//!
//! Ordinal fields under [`OrdinalEncoding::Midpoint`] use the training-time
//! column names `experience_years`, `ml_experience_years`, `cloud_spend` and
//! `ml_maturity`. One-hot columns are named `{prefix}_{label}` with the
//! verbatim survey label, e.g. `country_United States of America`.

mod align;

pub use align::{align, ColumnSchemaError, FeatureColumns};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::survey::SurveyResponse;

/// Midpoint-encoded ordinal column names.
pub const COL_EXPERIENCE_YEARS: &str = "experience_years";
pub const COL_ML_EXPERIENCE_YEARS: &str = "ml_experience_years";
pub const COL_CLOUD_SPEND: &str = "cloud_spend";
pub const COL_ML_MATURITY: &str = "ml_maturity";

/// One-hot column prefixes for nominal fields.
pub const PREFIX_COUNTRY: &str = "country";
pub const PREFIX_ROLE: &str = "role";
pub const PREFIX_INDUSTRY: &str = "industry";

/// One-hot column prefixes for ordinal fields under [`OrdinalEncoding::OneHot`].
pub const PREFIX_CODING_EXPERIENCE: &str = "coding_experience";
pub const PREFIX_ML_EXPERIENCE: &str = "ml_experience";
pub const PREFIX_CLOUD_SPEND: &str = "cloud_spend";
pub const PREFIX_ML_MATURITY: &str = "ml_maturity";

/// Build the column name for a one-hot indicator.
pub fn one_hot_column(prefix: &str, label: &str) -> String {
    format!("{prefix}_{label}")
}

/// How ordinal survey fields are encoded.
///
/// The trained artifact records which mode its column schema was built with;
/// nominal fields one-hot expand in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrdinalEncoding {
    /// Ordinal brackets map to their training-time numeric value.
    #[default]
    Midpoint,
    /// Ordinal brackets expand to indicator columns like nominal fields.
    OneHot,
}

/// A flat column-name → value record produced by encoding.
///
/// Iteration order is the sorted column order, so downstream consumers see a
/// deterministic view regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncodedRecord {
    values: BTreeMap<String, f32>,
}

impl EncodedRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value, replacing any previous value.
    pub fn set(&mut self, column: impl Into<String>, value: f32) {
        self.values.insert(column.into(), value);
    }

    /// Set a one-hot indicator column to 1.
    pub fn set_indicator(&mut self, prefix: &str, label: &str) {
        self.values.insert(one_hot_column(prefix, label), 1.0);
    }

    /// Get a column value, if present.
    pub fn get(&self, column: &str) -> Option<f32> {
        self.values.get(column).copied()
    }

    /// Number of columns in the record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(column, value)` pairs in sorted column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f32)> for EncodedRecord {
    fn from_iter<T: IntoIterator<Item = (String, f32)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Encode a survey response into named numeric columns.
///
/// Nominal fields (country, role, industry) always one-hot expand; ordinal
/// fields follow `encoding`. The output contains only the columns the
/// response actually activates — absent indicator columns are implied zero
/// and materialized later by [`align`].
pub fn encode(response: &SurveyResponse, encoding: OrdinalEncoding) -> EncodedRecord {
    let mut record = EncodedRecord::new();

    match encoding {
        OrdinalEncoding::Midpoint => {
            record.set(COL_EXPERIENCE_YEARS, response.coding_experience.midpoint());
            record.set(COL_ML_EXPERIENCE_YEARS, response.ml_experience.midpoint());
            record.set(COL_CLOUD_SPEND, response.ml_spend.midpoint());
            record.set(COL_ML_MATURITY, response.ml_maturity.level());
        }
        OrdinalEncoding::OneHot => {
            record.set_indicator(PREFIX_CODING_EXPERIENCE, response.coding_experience.label());
            record.set_indicator(PREFIX_ML_EXPERIENCE, response.ml_experience.label());
            record.set_indicator(PREFIX_CLOUD_SPEND, response.ml_spend.label());
            record.set_indicator(PREFIX_ML_MATURITY, response.ml_maturity.label());
        }
    }

    record.set_indicator(PREFIX_COUNTRY, response.country.label());
    record.set_indicator(PREFIX_ROLE, response.job_title.label());
    record.set_indicator(PREFIX_INDUSTRY, response.industry.label());

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::{
        CodingExperience, Country, Industry, JobTitle, MlExperience, MlMaturity, MlSpend,
    };

    fn spec_scenario() -> SurveyResponse {
        SurveyResponse {
            coding_experience: CodingExperience::from_years(5.0),
            ml_experience: MlExperience::from_years(2.0),
            ml_spend: MlSpend::from_dollars(1000),
            country: Country::UnitedStates,
            job_title: JobTitle::DataScientist,
            industry: Industry::Technology,
            ml_maturity: MlMaturity::WellEstablished,
        }
    }

    #[test]
    fn midpoint_encoding_sets_ordinal_columns() {
        let record = encode(&spec_scenario(), OrdinalEncoding::Midpoint);
        assert_eq!(record.get(COL_EXPERIENCE_YEARS), Some(7.5));
        assert_eq!(record.get(COL_ML_EXPERIENCE_YEARS), Some(2.5));
        assert_eq!(record.get(COL_CLOUD_SPEND), Some(5000.0));
        assert_eq!(record.get(COL_ML_MATURITY), Some(4.0));
        // 4 ordinal + 3 indicator columns
        assert_eq!(record.len(), 7);
    }

    #[test]
    fn nominal_fields_one_hot_in_both_modes() {
        for encoding in [OrdinalEncoding::Midpoint, OrdinalEncoding::OneHot] {
            let record = encode(&spec_scenario(), encoding);
            assert_eq!(record.get("country_United States of America"), Some(1.0));
            assert_eq!(record.get("role_Data Scientist"), Some(1.0));
            assert_eq!(record.get("industry_Computers/Technology"), Some(1.0));
            // no stray indicator for unselected choices
            assert_eq!(record.get("country_France"), None);
        }
    }

    #[test]
    fn one_hot_encoding_expands_ordinals() {
        let record = encode(&spec_scenario(), OrdinalEncoding::OneHot);
        assert_eq!(record.get("coding_experience_5-10 years"), Some(1.0));
        assert_eq!(record.get("ml_experience_2-3 years"), Some(1.0));
        assert_eq!(record.get("cloud_spend_$1000-$9,999"), Some(1.0));
        assert_eq!(
            record.get(&one_hot_column(
                PREFIX_ML_MATURITY,
                MlMaturity::WellEstablished.label()
            )),
            Some(1.0)
        );
        assert_eq!(record.get(COL_EXPERIENCE_YEARS), None);
        assert_eq!(record.len(), 7);
    }

    #[test]
    fn encoding_is_total_over_every_choice() {
        // Exhaustively encode every choice of every field; each must yield a
        // complete record with no gaps in either mode.
        for country in Country::ALL {
            for encoding in [OrdinalEncoding::Midpoint, OrdinalEncoding::OneHot] {
                let record = encode(
                    &SurveyResponse::default().with_country(country),
                    encoding,
                );
                assert_eq!(record.len(), 7);
                assert_eq!(
                    record.get(&one_hot_column(PREFIX_COUNTRY, country.label())),
                    Some(1.0)
                );
            }
        }
        for maturity in MlMaturity::ALL {
            let record = encode(
                &SurveyResponse::default().with_ml_maturity(maturity),
                OrdinalEncoding::Midpoint,
            );
            let level = record.get(COL_ML_MATURITY).unwrap();
            assert!(level.is_finite());
        }
    }

    #[test]
    fn encoding_is_deterministic() {
        let a = encode(&spec_scenario(), OrdinalEncoding::Midpoint);
        let b = encode(&spec_scenario(), OrdinalEncoding::Midpoint);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_choices_never_collide() {
        // Two responses differing in one field must produce different records.
        let base = SurveyResponse::default();
        for job in JobTitle::ALL {
            for other in JobTitle::ALL {
                if job == other {
                    continue;
                }
                let a = encode(&base.with_job_title(job), OrdinalEncoding::Midpoint);
                let b = encode(&base.with_job_title(other), OrdinalEncoding::Midpoint);
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn record_iterates_in_sorted_order() {
        let record = encode(&spec_scenario(), OrdinalEncoding::Midpoint);
        let columns: Vec<&str> = record.iter().map(|(c, _)| c).collect();
        let mut sorted = columns.clone();
        sorted.sort_unstable();
        assert_eq!(columns, sorted);
    }
}
