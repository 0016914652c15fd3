use serde::{Deserialize, Serialize};

use super::schema::FeatureSchema;
use super::InferenceError;

/// Seam for the pre-fitted feature transformer so tests can substitute
/// fixed implementations.
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError>;
    fn feature_count(&self) -> usize;
}

/// Per-feature mean/scale transformer, deserialized from the scaler
/// artifact produced at fit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub schema: FeatureSchema,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl FeatureScaler for StandardScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if features.len() != self.mean.len() {
            return Err(InferenceError::ShapeMismatch {
                stage: "scaler",
                expected: self.mean.len(),
                actual: features.len(),
            });
        }

        let scaled = features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(value, (mean, scale))| {
                // zero-variance features pass through centered, not divided
                if *scale == 0.0 {
                    value - mean
                } else {
                    (value - mean) / scale
                }
            })
            .collect();

        Ok(scaled)
    }

    fn feature_count(&self) -> usize {
        self.mean.len()
    }
}
