use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use super::classifier::LogisticModel;
use super::scaler::StandardScaler;
use super::schema::FeatureSchema;
use crate::config::ArtifactConfig;

/// The immutable artifact pair, loaded once and shared read-only across
/// requests.
#[derive(Debug, Clone)]
pub struct ScoringArtifacts {
    pub scaler: StandardScaler,
    pub model: LogisticModel,
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("artifact {path} is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{artifact} artifact was fitted on schema {found}, expected {expected}")]
    SchemaMismatch {
        artifact: &'static str,
        expected: String,
        found: String,
    },
    #[error("{artifact} artifact carries {parameters} parameters for {features} schema features")]
    ParameterShape {
        artifact: &'static str,
        features: usize,
        parameters: usize,
    },
}

/// Load and validate both artifacts. Schemas must agree with each other and
/// with the canonical assembler order; a mismatch refuses to start rather
/// than risking misaligned features.
pub fn load(config: &ArtifactConfig) -> Result<ScoringArtifacts, ArtifactError> {
    let scaler: StandardScaler = read_json(&config.scaler_path)?;
    let model: LogisticModel = read_json(&config.model_path)?;

    let expected = FeatureSchema::canonical();
    verify_schema("scaler", &scaler.schema, &expected)?;
    verify_schema("classifier", &model.schema, &expected)?;

    if scaler.mean.len() != expected.feature_count() || scaler.scale.len() != scaler.mean.len() {
        return Err(ArtifactError::ParameterShape {
            artifact: "scaler",
            features: expected.feature_count(),
            parameters: scaler.mean.len().min(scaler.scale.len()),
        });
    }
    if model.weights.len() != expected.feature_count() {
        return Err(ArtifactError::ParameterShape {
            artifact: "classifier",
            features: expected.feature_count(),
            parameters: model.weights.len(),
        });
    }

    info!(
        scaler = %config.scaler_path.display(),
        model = %config.model_path.display(),
        features = expected.feature_count(),
        "scoring artifacts loaded"
    );

    Ok(ScoringArtifacts { scaler, model })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ArtifactError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

fn verify_schema(
    artifact: &'static str,
    found: &FeatureSchema,
    expected: &FeatureSchema,
) -> Result<(), ArtifactError> {
    if found != expected {
        return Err(ArtifactError::SchemaMismatch {
            artifact,
            expected: expected.describe(),
            found: found.describe(),
        });
    }
    Ok(())
}
