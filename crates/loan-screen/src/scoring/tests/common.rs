use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::scoring::artifacts::{Classifier, FeatureScaler, InferenceError};
use crate::scoring::domain::{
    CreditHistory, Dependents, Education, Employment, Gender, LoanApplication, MaritalStatus,
    PropertyArea,
};
use crate::scoring::encoding::FEATURE_ORDER;
use crate::scoring::service::PredictionService;

/// The reference applicant: expected to encode to
/// [1, 1, 0, 1, 0, 5000, 0, 150, 360, 1, 2].
pub(super) fn application() -> LoanApplication {
    LoanApplication {
        applicant_name: "Ava Martin".to_string(),
        gender: Gender::Male,
        married: MaritalStatus::Married,
        dependents: Dependents::new(0),
        education: Education::Graduate,
        self_employed: Employment::Salaried,
        applicant_income: 5000.0,
        coapplicant_income: 0.0,
        loan_amount: 150.0,
        loan_term: 360.0,
        credit_history: CreditHistory::Clean,
        property_area: PropertyArea::Urban,
    }
}

/// Pass-through scaler that still enforces the fitted width.
pub(super) struct IdentityScaler;

impl FeatureScaler for IdentityScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if features.len() != FEATURE_ORDER.len() {
            return Err(InferenceError::ShapeMismatch {
                stage: "scaler",
                expected: FEATURE_ORDER.len(),
                actual: features.len(),
            });
        }
        Ok(features.to_vec())
    }

    fn feature_count(&self) -> usize {
        FEATURE_ORDER.len()
    }
}

/// Approves exactly when the credit-history feature equals 1.0, counting
/// invocations so tests can assert short-circuits.
#[derive(Default)]
pub(super) struct CreditHistoryClassifier {
    calls: AtomicUsize,
}

impl CreditHistoryClassifier {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    fn credit_history_index() -> usize {
        FEATURE_ORDER
            .iter()
            .position(|name| *name == "credit_history")
            .expect("credit_history is a canonical feature")
    }
}

impl Classifier for CreditHistoryClassifier {
    fn predict(&self, features: &[f64]) -> Result<f64, InferenceError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if features.len() != FEATURE_ORDER.len() {
            return Err(InferenceError::ShapeMismatch {
                stage: "classifier",
                expected: FEATURE_ORDER.len(),
                actual: features.len(),
            });
        }
        Ok(if features[Self::credit_history_index()] == 1.0 {
            1.0
        } else {
            0.0
        })
    }

    fn feature_count(&self) -> usize {
        FEATURE_ORDER.len()
    }
}

/// Scaler fitted on a different width, so every transform fails.
pub(super) struct NarrowScaler;

impl FeatureScaler for NarrowScaler {
    fn transform(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        Err(InferenceError::ShapeMismatch {
            stage: "scaler",
            expected: 9,
            actual: features.len(),
        })
    }

    fn feature_count(&self) -> usize {
        9
    }
}

pub(super) fn build_service() -> (
    PredictionService<IdentityScaler, CreditHistoryClassifier>,
    Arc<CreditHistoryClassifier>,
) {
    let scaler = Arc::new(IdentityScaler);
    let classifier = Arc::new(CreditHistoryClassifier::default());
    let service = PredictionService::new(scaler, classifier.clone());
    (service, classifier)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
