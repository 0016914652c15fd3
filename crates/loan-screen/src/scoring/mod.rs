//! Loan application intake, categorical encoding, and artifact-backed
//! prediction.

pub mod artifacts;
pub mod batch;
pub mod domain;
pub mod encoding;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use artifacts::{
    ArtifactError, Classifier, FeatureScaler, FeatureSchema, InferenceError, LogisticModel,
    ScoringArtifacts, StandardScaler,
};
pub use batch::{
    BatchOutcome, BatchReport, BatchRowError, BatchScoreError, BatchScorer, BatchSummary,
};
pub use domain::{
    CreditHistory, Dependents, Education, Employment, Gender, LoanApplication, LoanDecision,
    MaritalStatus, PredictionOutcome, PropertyArea, MAX_NAME_LEN,
};
pub use encoding::{feature_vector, EncodeError, FEATURE_COUNT, FEATURE_ORDER};
pub use router::prediction_router;
pub use service::{PredictionError, PredictionService};
