use serde::{Deserialize, Serialize};

use super::schema::FeatureSchema;
use super::InferenceError;

/// Seam for the pre-trained binary classifier.
pub trait Classifier: Send + Sync {
    /// Returns the class output for a scaled vector: 1.0 approves, anything
    /// else rejects.
    fn predict(&self, features: &[f64]) -> Result<f64, InferenceError>;
    fn feature_count(&self) -> usize;
}

/// Logistic-regression weights exported by the fitting pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub schema: FeatureSchema,
    pub weights: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

impl Classifier for LogisticModel {
    fn predict(&self, features: &[f64]) -> Result<f64, InferenceError> {
        if features.len() != self.weights.len() {
            return Err(InferenceError::ShapeMismatch {
                stage: "classifier",
                expected: self.weights.len(),
                actual: features.len(),
            });
        }

        let logit: f64 = self.intercept
            + features
                .iter()
                .zip(&self.weights)
                .map(|(value, weight)| value * weight)
                .sum::<f64>();
        let probability = 1.0 / (1.0 + (-logit).exp());

        Ok(if probability >= self.threshold { 1.0 } else { 0.0 })
    }

    fn feature_count(&self) -> usize {
        self.weights.len()
    }
}
