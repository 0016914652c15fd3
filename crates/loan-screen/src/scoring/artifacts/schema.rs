use serde::{Deserialize, Serialize};

use crate::scoring::encoding::FEATURE_ORDER;

/// Named, versioned description of the feature order an artifact was fitted
/// on. Embedded in every artifact file so the coupling between assembler and
/// artifacts is explicit rather than assumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub name: String,
    pub version: u32,
    pub features: Vec<String>,
}

impl FeatureSchema {
    /// The schema the in-process feature assembler produces.
    pub fn canonical() -> Self {
        Self {
            name: "loan_applicant_features".to_string(),
            version: 1,
            features: FEATURE_ORDER.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Short human-readable description used in load-time diagnostics.
    pub fn describe(&self) -> String {
        format!(
            "'{}' v{} ({} features)",
            self.name,
            self.version,
            self.features.len()
        )
    }
}
