//! Pre-fitted scoring artifacts: the feature scaler and the classifier.
//!
//! Both are opaque, externally produced files loaded once at startup and
//! shared read-only for the life of the process.

mod classifier;
mod loader;
mod scaler;
mod schema;

pub use classifier::{Classifier, LogisticModel};
pub use loader::{load, ArtifactError, ScoringArtifacts};
pub use scaler::{FeatureScaler, StandardScaler};
pub use schema::FeatureSchema;

/// Raised when a feature vector does not match what an artifact was fitted on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    #[error("{stage} expected a {expected}-feature vector, got {actual}")]
    ShapeMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },
}
