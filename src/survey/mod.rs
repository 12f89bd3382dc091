//! Survey schema: the fields of the compensation survey form.
//!
//! This module is the single declarative contract for the survey: every
//! field is a typed enumeration whose variants carry the exact survey label
//! and, for ordinal fields, the numeric value used at training time. Input
//! validation (`from_label` / `FromStr`) and feature encoding read the same
//! definitions, so the two cannot drift apart.

mod fields;
mod response;

pub use fields::{
    CodingExperience, Country, Industry, JobTitle, MlExperience, MlMaturity, MlSpend,
    ParseChoiceError,
};
pub use response::SurveyResponse;
