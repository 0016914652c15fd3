use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use super::artifacts::{Classifier, FeatureScaler, InferenceError};
use super::domain::{LoanApplication, LoanDecision, PredictionOutcome, MAX_NAME_LEN};
use super::encoding::{self, EncodeError};

/// Service composing the categorical encoder with the loaded artifact pair.
/// Artifact handles are passed in explicitly at startup; there is no ambient
/// global state.
pub struct PredictionService<S, C> {
    scaler: Arc<S>,
    classifier: Arc<C>,
}

impl<S, C> PredictionService<S, C>
where
    S: FeatureScaler + 'static,
    C: Classifier + 'static,
{
    pub fn new(scaler: Arc<S>, classifier: Arc<C>) -> Self {
        Self { scaler, classifier }
    }

    /// Screen one application: validate the name, encode, scale, classify.
    ///
    /// A blank name short-circuits before any artifact is touched.
    pub fn predict(
        &self,
        application: &LoanApplication,
    ) -> Result<PredictionOutcome, PredictionError> {
        let name = application.applicant_name.trim();
        if name.is_empty() {
            return Err(PredictionError::BlankName);
        }
        let name_len = name.chars().count();
        if name_len > MAX_NAME_LEN {
            return Err(PredictionError::NameTooLong {
                max: MAX_NAME_LEN,
                actual: name_len,
            });
        }

        let features = encoding::feature_vector(application)?;
        let scaled = self.scaler.transform(&features)?;
        let output = self.classifier.predict(&scaled)?;
        let decision = LoanDecision::from_output(output);

        debug!(decision = decision.label(), output, "application scored");

        Ok(PredictionOutcome {
            applicant_name: name.to_string(),
            decision,
            classifier_output: output,
            evaluated_at: Utc::now(),
        })
    }
}

/// Error raised by the prediction service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    #[error("please enter your name before requesting a prediction")]
    BlankName,
    #[error("applicant name is limited to {max} characters, got {actual}")]
    NameTooLong { max: usize, actual: usize },
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}
