//! The survey answer record.

use super::fields::{
    CodingExperience, Country, Industry, JobTitle, MlExperience, MlMaturity, MlSpend,
};

/// One respondent's answers to the compensation survey.
///
/// `Default` reproduces the form's initial state: sliders at 5 coding years,
/// 2 ML years and $1000 spend, select boxes on their first listed choice.
///
/// # Example
///
/// ```
/// use salarycast::survey::{Country, JobTitle, SurveyResponse};
///
/// let response = SurveyResponse::default()
///     .with_country(Country::UnitedStates)
///     .with_job_title(JobTitle::DataScientist);
/// assert_eq!(response.country, Country::UnitedStates);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyResponse {
    /// Years of coding experience.
    pub coding_experience: CodingExperience,
    /// Years of machine-learning experience.
    pub ml_experience: MlExperience,
    /// Money spent on ML/cloud tooling in the last five years.
    pub ml_spend: MlSpend,
    /// Country of residence.
    pub country: Country,
    /// Current role.
    pub job_title: JobTitle,
    /// Industry of the current employer.
    pub industry: Industry,
    /// Employer's ML maturity.
    pub ml_maturity: MlMaturity,
}

impl Default for SurveyResponse {
    fn default() -> Self {
        Self {
            coding_experience: CodingExperience::from_years(5.0),
            ml_experience: MlExperience::from_years(2.0),
            ml_spend: MlSpend::from_dollars(1000),
            country: Country::default(),
            job_title: JobTitle::default(),
            industry: Industry::default(),
            ml_maturity: MlMaturity::default(),
        }
    }
}

impl SurveyResponse {
    /// Set the coding-experience bracket.
    pub fn with_coding_experience(mut self, value: CodingExperience) -> Self {
        self.coding_experience = value;
        self
    }

    /// Set the ML-experience bracket.
    pub fn with_ml_experience(mut self, value: MlExperience) -> Self {
        self.ml_experience = value;
        self
    }

    /// Set the ML-spend bracket.
    pub fn with_ml_spend(mut self, value: MlSpend) -> Self {
        self.ml_spend = value;
        self
    }

    /// Set the country of residence.
    pub fn with_country(mut self, value: Country) -> Self {
        self.country = value;
        self
    }

    /// Set the current role.
    pub fn with_job_title(mut self, value: JobTitle) -> Self {
        self.job_title = value;
        self
    }

    /// Set the employer's industry.
    pub fn with_industry(mut self, value: Industry) -> Self {
        self.industry = value;
        self
    }

    /// Set the employer's ML maturity.
    pub fn with_ml_maturity(mut self, value: MlMaturity) -> Self {
        self.ml_maturity = value;
        self
    }
}
