//! CSV batch scoring for offline applicant exports.
//!
//! Each row runs through the same encode/scale/classify path as the HTTP
//! endpoint; a bad row is reported and skipped rather than failing the batch.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::artifacts::{Classifier, FeatureScaler};
use super::domain::{
    CreditHistory, Dependents, Education, Employment, Gender, LoanApplication, LoanDecision,
    MaritalStatus, PredictionOutcome, PropertyArea,
};
use super::service::{PredictionError, PredictionService};

/// Scores applicant rows from a CSV export against a prediction service.
pub struct BatchScorer<'a, S, C> {
    service: &'a PredictionService<S, C>,
}

impl<'a, S, C> BatchScorer<'a, S, C>
where
    S: FeatureScaler + 'static,
    C: Classifier + 'static,
{
    pub fn new(service: &'a PredictionService<S, C>) -> Self {
        Self { service }
    }

    pub fn score_path<P: AsRef<Path>>(&self, path: P) -> Result<BatchReport, BatchScoreError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BatchScoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.score_reader(file)
    }

    pub fn score_reader<R: Read>(&self, reader: R) -> Result<BatchReport, BatchScoreError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut outcomes = Vec::new();
        for (index, record) in csv_reader.deserialize::<BatchRow>().enumerate() {
            // header occupies line 1
            let row = index + 2;
            match record {
                Ok(parsed) => {
                    let application = parsed.into_application();
                    let applicant_name = application.applicant_name.clone();
                    outcomes.push(BatchOutcome {
                        row,
                        applicant_name,
                        result: self
                            .service
                            .predict(&application)
                            .map_err(BatchRowError::Prediction),
                    });
                }
                Err(err) => outcomes.push(BatchOutcome {
                    row,
                    applicant_name: String::new(),
                    result: Err(BatchRowError::Csv(err)),
                }),
            }
        }

        Ok(BatchReport { outcomes })
    }
}

/// Per-row result of a batch run.
#[derive(Debug)]
pub struct BatchOutcome {
    pub row: usize,
    pub applicant_name: String,
    pub result: Result<PredictionOutcome, BatchRowError>,
}

/// All outcomes of one batch run, in row order.
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(prediction) => match prediction.decision {
                    LoanDecision::Approved => summary.approved += 1,
                    LoanDecision::Rejected => summary.rejected += 1,
                },
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub approved: usize,
    pub rejected: usize,
    pub failed: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} approved, {} rejected, {} failed",
            self.approved, self.rejected, self.failed
        )
    }
}

/// Failure attached to a single row.
#[derive(Debug, thiserror::Error)]
pub enum BatchRowError {
    #[error("invalid row: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

/// Failure that prevents the batch from running at all.
#[derive(Debug, thiserror::Error)]
pub enum BatchScoreError {
    #[error("failed to open applicant export {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Deserialize)]
struct BatchRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Gender")]
    gender: Gender,
    #[serde(rename = "Married")]
    married: MaritalStatus,
    #[serde(rename = "Dependents")]
    dependents: Dependents,
    #[serde(rename = "Education")]
    education: Education,
    #[serde(rename = "Self Employed")]
    self_employed: Employment,
    #[serde(rename = "Applicant Income")]
    applicant_income: f64,
    #[serde(rename = "Coapplicant Income")]
    coapplicant_income: f64,
    #[serde(rename = "Loan Amount")]
    loan_amount: f64,
    #[serde(rename = "Loan Term")]
    loan_term: f64,
    #[serde(rename = "Credit History")]
    credit_history: CreditHistory,
    #[serde(rename = "Property Area")]
    property_area: PropertyArea,
}

impl BatchRow {
    fn into_application(self) -> LoanApplication {
        LoanApplication {
            applicant_name: self.name,
            gender: self.gender,
            married: self.married,
            dependents: self.dependents,
            education: self.education,
            self_employed: self.self_employed,
            applicant_income: self.applicant_income,
            coapplicant_income: self.coapplicant_income,
            loan_amount: self.loan_amount,
            loan_term: self.loan_term,
            credit_history: self.credit_history,
            property_area: self.property_area,
        }
    }
}
