//! Survey field enumerations.
//!
//! Variant order follows the order the choices appear in the survey form,
//! so `ALL[0]` is each field's default selection. Labels are the verbatim
//! survey strings; one-hot column names embed them, which makes them part
//! of the trained feature schema rather than display text.

use std::fmt;
use std::str::FromStr;

/// Error returned when a label does not name any choice of a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} choice: {value:?}")]
pub struct ParseChoiceError {
    /// Field the label was parsed for.
    pub field: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseChoiceError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

// =============================================================================
// Ordinal fields
// =============================================================================

/// Years of coding experience, as surveyed in brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodingExperience {
    /// "I have never written code"
    #[default]
    Never,
    /// "< 1 years"
    UnderOneYear,
    /// "1-2 years"
    OneToTwo,
    /// "3-5 years"
    ThreeToFive,
    /// "5-10 years"
    FiveToTen,
    /// "10-20 years"
    TenToTwenty,
    /// "20+ years"
    TwentyPlus,
}

impl CodingExperience {
    /// Field name used in parse errors and front ends.
    pub const FIELD: &'static str = "coding experience";

    /// Every choice, in survey order.
    pub const ALL: [Self; 7] = [
        Self::Never,
        Self::UnderOneYear,
        Self::OneToTwo,
        Self::ThreeToFive,
        Self::FiveToTen,
        Self::TenToTwenty,
        Self::TwentyPlus,
    ];

    /// The verbatim survey label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Never => "I have never written code",
            Self::UnderOneYear => "< 1 years",
            Self::OneToTwo => "1-2 years",
            Self::ThreeToFive => "3-5 years",
            Self::FiveToTen => "5-10 years",
            Self::TenToTwenty => "10-20 years",
            Self::TwentyPlus => "20+ years",
        }
    }

    /// Numeric value assigned to this bracket at training time.
    pub fn midpoint(&self) -> f32 {
        match self {
            Self::Never => 0.0,
            Self::UnderOneYear => 0.5,
            Self::OneToTwo => 1.5,
            Self::ThreeToFive => 4.0,
            Self::FiveToTen => 7.5,
            Self::TenToTwenty => 15.0,
            Self::TwentyPlus => 25.0,
        }
    }

    /// Look up a choice by its exact survey label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Bracket containing a raw slider value (years).
    ///
    /// Non-finite or non-positive input maps to [`Never`](Self::Never).
    pub fn from_years(years: f32) -> Self {
        if !years.is_finite() || years <= 0.0 {
            Self::Never
        } else if years < 1.0 {
            Self::UnderOneYear
        } else if years < 3.0 {
            Self::OneToTwo
        } else if years < 5.0 {
            Self::ThreeToFive
        } else if years < 10.0 {
            Self::FiveToTen
        } else if years < 20.0 {
            Self::TenToTwenty
        } else {
            Self::TwentyPlus
        }
    }
}

impl fmt::Display for CodingExperience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CodingExperience {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseChoiceError::new(Self::FIELD, s))
    }
}

/// Years of machine-learning experience, as surveyed in brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MlExperience {
    /// "I do not use machine learning methods"
    #[default]
    NotUsed,
    /// "Under 1 year"
    UnderOneYear,
    /// "1-2 years"
    OneToTwo,
    /// "2-3 years"
    TwoToThree,
    /// "3-4 years"
    ThreeToFour,
    /// "4-5 years"
    FourToFive,
    /// "5-10 years"
    FiveToTen,
    /// "10-20 years"
    TenToTwenty,
    /// "20 or more years"
    TwentyPlus,
}

impl MlExperience {
    pub const FIELD: &'static str = "ML experience";

    pub const ALL: [Self; 9] = [
        Self::NotUsed,
        Self::UnderOneYear,
        Self::OneToTwo,
        Self::TwoToThree,
        Self::ThreeToFour,
        Self::FourToFive,
        Self::FiveToTen,
        Self::TenToTwenty,
        Self::TwentyPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotUsed => "I do not use machine learning methods",
            Self::UnderOneYear => "Under 1 year",
            Self::OneToTwo => "1-2 years",
            Self::TwoToThree => "2-3 years",
            Self::ThreeToFour => "3-4 years",
            Self::FourToFive => "4-5 years",
            Self::FiveToTen => "5-10 years",
            Self::TenToTwenty => "10-20 years",
            Self::TwentyPlus => "20 or more years",
        }
    }

    pub fn midpoint(&self) -> f32 {
        match self {
            Self::NotUsed => 0.0,
            Self::UnderOneYear => 0.5,
            Self::OneToTwo => 1.5,
            Self::TwoToThree => 2.5,
            Self::ThreeToFour => 3.5,
            Self::FourToFive => 4.5,
            Self::FiveToTen => 7.5,
            Self::TenToTwenty => 15.0,
            Self::TwentyPlus => 25.0,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Bracket containing a raw slider value (years).
    ///
    /// Non-finite or non-positive input maps to [`NotUsed`](Self::NotUsed).
    pub fn from_years(years: f32) -> Self {
        if !years.is_finite() || years <= 0.0 {
            Self::NotUsed
        } else if years < 1.0 {
            Self::UnderOneYear
        } else if years < 2.0 {
            Self::OneToTwo
        } else if years < 3.0 {
            Self::TwoToThree
        } else if years < 4.0 {
            Self::ThreeToFour
        } else if years < 5.0 {
            Self::FourToFive
        } else if years < 10.0 {
            Self::FiveToTen
        } else if years < 20.0 {
            Self::TenToTwenty
        } else {
            Self::TwentyPlus
        }
    }
}

impl fmt::Display for MlExperience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MlExperience {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseChoiceError::new(Self::FIELD, s))
    }
}

/// Money spent on ML/cloud tooling over the last five years, in brackets.
///
/// Bracket values reproduce the training-time spend table; they are round
/// representative dollar amounts rather than strict midpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MlSpend {
    /// "$0 ($USD)"
    #[default]
    Zero,
    /// "$1-$99"
    UnderHundred,
    /// "$100-$999"
    UnderThousand,
    /// "$1000-$9,999"
    UnderTenThousand,
    /// "$10,000-$99,999"
    UnderHundredThousand,
    /// "$100,000 or more ($USD)"
    HundredThousandPlus,
}

impl MlSpend {
    pub const FIELD: &'static str = "ML spend";

    pub const ALL: [Self; 6] = [
        Self::Zero,
        Self::UnderHundred,
        Self::UnderThousand,
        Self::UnderTenThousand,
        Self::UnderHundredThousand,
        Self::HundredThousandPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Zero => "$0 ($USD)",
            Self::UnderHundred => "$1-$99",
            Self::UnderThousand => "$100-$999",
            Self::UnderTenThousand => "$1000-$9,999",
            Self::UnderHundredThousand => "$10,000-$99,999",
            Self::HundredThousandPlus => "$100,000 or more ($USD)",
        }
    }

    pub fn midpoint(&self) -> f32 {
        match self {
            Self::Zero => 0.0,
            Self::UnderHundred => 50.0,
            Self::UnderThousand => 550.0,
            Self::UnderTenThousand => 5000.0,
            Self::UnderHundredThousand => 50000.0,
            Self::HundredThousandPlus => 100000.0,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Bracket containing a raw dollar amount.
    pub fn from_dollars(dollars: u32) -> Self {
        match dollars {
            0 => Self::Zero,
            1..=99 => Self::UnderHundred,
            100..=999 => Self::UnderThousand,
            1000..=9999 => Self::UnderTenThousand,
            10000..=99999 => Self::UnderHundredThousand,
            _ => Self::HundredThousandPlus,
        }
    }
}

impl fmt::Display for MlSpend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MlSpend {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseChoiceError::new(Self::FIELD, s))
    }
}

/// How far the respondent's employer has taken machine learning.
///
/// Encoded as an ordinal maturity level 0-4. "I do not know" carries the
/// scale midpoint (2): the survey offers the choice but the training table
/// has no entry for it, and totality requires every choice to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MlMaturity {
    /// "We recently started using ML methods (...)"
    #[default]
    RecentlyAdopted,
    /// "We have well established ML methods (...)"
    WellEstablished,
    /// "We are exploring ML methods (...)"
    Exploring,
    /// "I do not know"
    Unknown,
    /// "We use ML methods for generating insights (...)"
    InsightsOnly,
    /// "No (we do not use ML methods)"
    NotUsed,
}

impl MlMaturity {
    pub const FIELD: &'static str = "ML maturity";

    pub const ALL: [Self; 6] = [
        Self::RecentlyAdopted,
        Self::WellEstablished,
        Self::Exploring,
        Self::Unknown,
        Self::InsightsOnly,
        Self::NotUsed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::RecentlyAdopted => {
                "We recently started using ML methods (i.e., models in production for less than 2 years)"
            }
            Self::WellEstablished => {
                "We have well established ML methods (i.e., models in production for more than 2 years)"
            }
            Self::Exploring => {
                "We are exploring ML methods (and may one day put a model into production)"
            }
            Self::Unknown => "I do not know",
            Self::InsightsOnly => {
                "We use ML methods for generating insights (but do not put working models into production)"
            }
            Self::NotUsed => "No (we do not use ML methods)",
        }
    }

    /// Ordinal maturity level used as the numeric encoding.
    pub fn level(&self) -> f32 {
        match self {
            Self::NotUsed => 0.0,
            Self::Exploring => 1.0,
            Self::InsightsOnly => 2.0,
            Self::Unknown => 2.0,
            Self::RecentlyAdopted => 3.0,
            Self::WellEstablished => 4.0,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for MlMaturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MlMaturity {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseChoiceError::new(Self::FIELD, s))
    }
}

// =============================================================================
// Nominal fields
// =============================================================================

/// Country of residence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Country {
    #[default]
    France,
    Other,
    Australia,
    UnitedStates,
    Italy,
    Brazil,
    Argentina,
    Japan,
    Canada,
    India,
    Colombia,
    Pakistan,
    Mexico,
    Turkey,
    Nigeria,
    Tunisia,
    Philippines,
    SouthKorea,
    Peru,
    Iran,
    Russia,
    Bangladesh,
    Israel,
    Kenya,
}

impl Country {
    pub const FIELD: &'static str = "country";

    pub const ALL: [Self; 24] = [
        Self::France,
        Self::Other,
        Self::Australia,
        Self::UnitedStates,
        Self::Italy,
        Self::Brazil,
        Self::Argentina,
        Self::Japan,
        Self::Canada,
        Self::India,
        Self::Colombia,
        Self::Pakistan,
        Self::Mexico,
        Self::Turkey,
        Self::Nigeria,
        Self::Tunisia,
        Self::Philippines,
        Self::SouthKorea,
        Self::Peru,
        Self::Iran,
        Self::Russia,
        Self::Bangladesh,
        Self::Israel,
        Self::Kenya,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::France => "France",
            Self::Other => "Other",
            Self::Australia => "Australia",
            Self::UnitedStates => "United States of America",
            Self::Italy => "Italy",
            Self::Brazil => "Brazil",
            Self::Argentina => "Argentina",
            Self::Japan => "Japan",
            Self::Canada => "Canada",
            Self::India => "India",
            Self::Colombia => "Colombia",
            Self::Pakistan => "Pakistan",
            Self::Mexico => "Mexico",
            Self::Turkey => "Turkey",
            Self::Nigeria => "Nigeria",
            Self::Tunisia => "Tunisia",
            Self::Philippines => "Philippines",
            Self::SouthKorea => "South Korea",
            Self::Peru => "Peru",
            Self::Iran => "Iran, Islamic Republic of...",
            Self::Russia => "Russia",
            Self::Bangladesh => "Bangladesh",
            Self::Israel => "Israel",
            Self::Kenya => "Kenya",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseChoiceError::new(Self::FIELD, s))
    }
}

/// Current job role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JobTitle {
    #[default]
    DataScientist,
    SoftwareEngineer,
    ResearchScientist,
    DeveloperAdvocate,
    DataAnalyst,
    DataEngineer,
    Other,
    MlOpsEngineer,
    NonSoftwareEngineer,
    Teacher,
    Manager,
    Statistician,
    DataAdministrator,
    DataArchitect,
}

impl JobTitle {
    pub const FIELD: &'static str = "job title";

    pub const ALL: [Self; 14] = [
        Self::DataScientist,
        Self::SoftwareEngineer,
        Self::ResearchScientist,
        Self::DeveloperAdvocate,
        Self::DataAnalyst,
        Self::DataEngineer,
        Self::Other,
        Self::MlOpsEngineer,
        Self::NonSoftwareEngineer,
        Self::Teacher,
        Self::Manager,
        Self::Statistician,
        Self::DataAdministrator,
        Self::DataArchitect,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DataScientist => "Data Scientist",
            Self::SoftwareEngineer => "Software Engineer",
            Self::ResearchScientist => "Research Scientist",
            Self::DeveloperAdvocate => "Developer Advocate",
            Self::DataAnalyst => {
                "Data Analyst (Business, Marketing, Financial, Quantitative, etc)"
            }
            Self::DataEngineer => "Data Engineer",
            Self::Other => "Other",
            Self::MlOpsEngineer => "Machine Learning/ MLops Engineer",
            Self::NonSoftwareEngineer => "Engineer (non-software)",
            Self::Teacher => "Teacher / professor",
            Self::Manager => {
                "Manager (Program, Project, Operations, Executive-level, etc)"
            }
            Self::Statistician => "Statistician",
            Self::DataAdministrator => "Data Administrator",
            Self::DataArchitect => "Data Architect",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobTitle {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseChoiceError::new(Self::FIELD, s))
    }
}

/// Industry of the current employer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Industry {
    #[default]
    OnlineServices,
    Insurance,
    Government,
    Technology,
    Finance,
    Academics,
    NonProfit,
    Other,
    Medical,
    Marketing,
    Manufacturing,
    Energy,
    Broadcasting,
    Retail,
    Shipping,
}

impl Industry {
    pub const FIELD: &'static str = "industry";

    pub const ALL: [Self; 15] = [
        Self::OnlineServices,
        Self::Insurance,
        Self::Government,
        Self::Technology,
        Self::Finance,
        Self::Academics,
        Self::NonProfit,
        Self::Other,
        Self::Medical,
        Self::Marketing,
        Self::Manufacturing,
        Self::Energy,
        Self::Broadcasting,
        Self::Retail,
        Self::Shipping,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnlineServices => "Online Service/Internet-based Services",
            Self::Insurance => "Insurance/Risk Assessment",
            Self::Government => "Government/Public Service",
            Self::Technology => "Computers/Technology",
            Self::Finance => "Accounting/Finance",
            Self::Academics => "Academics/Education",
            Self::NonProfit => "Non-profit/Service",
            Self::Other => "Other",
            Self::Medical => "Medical/Pharmaceutical",
            Self::Marketing => "Marketing/CRM",
            Self::Manufacturing => "Manufacturing/Fabrication",
            Self::Energy => "Energy/Mining",
            Self::Broadcasting => "Broadcasting/Communications",
            Self::Retail => "Retail/Sales",
            Self::Shipping => "Shipping/Transportation",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Industry {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseChoiceError::new(Self::FIELD, s))
    }
}
