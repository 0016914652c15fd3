use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::encoding::EncodeError;

/// Longest applicant name the intake form accepts.
pub const MAX_NAME_LEN: usize = 50;

/// Gender option offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Marital status, collected as "Yes" / "No".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaritalStatus {
    #[serde(rename = "Yes")]
    Married,
    #[serde(rename = "No")]
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    Graduate,
    #[serde(rename = "Not Graduate")]
    NotGraduate,
}

/// Employment declaration, collected as "Yes" / "No" for self-employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Employment {
    #[serde(rename = "Yes")]
    SelfEmployed,
    #[serde(rename = "No")]
    Salaried,
}

/// Declared number of dependents. The form offers "0", "1", "2", and "3+";
/// any other integer-like string is also accepted, anything else is a
/// validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dependents(u8);

impl Dependents {
    pub const fn new(count: u8) -> Self {
        Self(count)
    }

    pub const fn count(self) -> u8 {
        self.0
    }
}

impl FromStr for Dependents {
    type Err = EncodeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed == "3+" {
            return Ok(Self(3));
        }

        trimmed
            .parse::<u8>()
            .map(Self)
            .map_err(|_| EncodeError::InvalidDependents {
                value: raw.to_string(),
            })
    }
}

impl TryFrom<String> for Dependents {
    type Error = EncodeError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<Dependents> for String {
    fn from(value: Dependents) -> Self {
        value.0.to_string()
    }
}

impl fmt::Display for Dependents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Credit bureau flag, carried as 1.0 / 0.0 in the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum CreditHistory {
    Clean,
    Defaulted,
}

impl TryFrom<f64> for CreditHistory {
    type Error = EncodeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 1.0 {
            Ok(Self::Clean)
        } else if value == 0.0 {
            Ok(Self::Defaulted)
        } else {
            Err(EncodeError::InvalidCreditHistory { value })
        }
    }
}

impl From<CreditHistory> for f64 {
    fn from(value: CreditHistory) -> Self {
        match value {
            CreditHistory::Clean => 1.0,
            CreditHistory::Defaulted => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyArea {
    Urban,
    Semiurban,
    Rural,
}

/// One screening request as collected from the intake form. Built fresh per
/// request and dropped when the request completes; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub applicant_name: String,
    pub gender: Gender,
    pub married: MaritalStatus,
    pub dependents: Dependents,
    pub education: Education,
    pub self_employed: Employment,
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    pub loan_term: f64,
    pub credit_history: CreditHistory,
    pub property_area: PropertyArea,
}

/// Binary screening decision derived from the classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanDecision {
    Approved,
    Rejected,
}

impl LoanDecision {
    /// Classifier output 1 approves; anything else rejects.
    pub fn from_output(output: f64) -> Self {
        if output == 1.0 {
            Self::Approved
        } else {
            Self::Rejected
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LoanDecision::Approved => "Approved",
            LoanDecision::Rejected => "Rejected",
        }
    }
}

/// Result of one screening call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionOutcome {
    pub applicant_name: String,
    pub decision: LoanDecision,
    pub classifier_output: f64,
    pub evaluated_at: DateTime<Utc>,
}

impl PredictionOutcome {
    /// Banner rendered back to the applicant.
    pub fn message(&self) -> String {
        format!(
            "{}, your loan application is **{}**! 🎉",
            self.applicant_name,
            self.decision.label()
        )
    }
}
