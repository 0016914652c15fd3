use std::sync::Arc;

use super::common::*;
use crate::scoring::artifacts::InferenceError;
use crate::scoring::domain::{CreditHistory, LoanDecision, MAX_NAME_LEN};
use crate::scoring::encoding::EncodeError;
use crate::scoring::service::{PredictionError, PredictionService};

#[test]
fn clean_credit_history_is_approved() {
    let (service, _) = build_service();

    let outcome = service.predict(&application()).expect("prediction runs");

    assert_eq!(outcome.decision, LoanDecision::Approved);
    assert_eq!(outcome.classifier_output, 1.0);
    assert_eq!(
        outcome.message(),
        "Ava Martin, your loan application is **Approved**! 🎉"
    );
}

#[test]
fn defaulted_credit_history_is_rejected() {
    let (service, _) = build_service();
    let mut application = application();
    application.credit_history = CreditHistory::Defaulted;

    let outcome = service.predict(&application).expect("prediction runs");

    assert_eq!(outcome.decision, LoanDecision::Rejected);
    assert_eq!(
        outcome.message(),
        "Ava Martin, your loan application is **Rejected**! 🎉"
    );
}

#[test]
fn blank_name_short_circuits_before_inference() {
    let (service, classifier) = build_service();
    let mut application = application();
    application.applicant_name = "   ".to_string();

    match service.predict(&application) {
        Err(PredictionError::BlankName) => {}
        other => panic!("expected blank-name error, got {other:?}"),
    }
    assert_eq!(classifier.calls(), 0, "no inference for a blank name");
}

#[test]
fn over_long_name_is_rejected() {
    let (service, _) = build_service();
    let mut application = application();
    application.applicant_name = "x".repeat(MAX_NAME_LEN + 1);

    match service.predict(&application) {
        Err(PredictionError::NameTooLong { max, actual }) => {
            assert_eq!(max, MAX_NAME_LEN);
            assert_eq!(actual, MAX_NAME_LEN + 1);
        }
        other => panic!("expected name-length error, got {other:?}"),
    }
}

#[test]
fn negative_amounts_surface_as_encode_errors() {
    let (service, classifier) = build_service();
    let mut application = application();
    application.coapplicant_income = -250.0;

    match service.predict(&application) {
        Err(PredictionError::Encode(EncodeError::NegativeAmount { field, .. })) => {
            assert_eq!(field, "coapplicant income");
        }
        other => panic!("expected encode error, got {other:?}"),
    }
    assert_eq!(classifier.calls(), 0);
}

#[test]
fn scaler_shape_mismatch_is_surfaced_not_truncated() {
    let service = PredictionService::new(
        Arc::new(NarrowScaler),
        Arc::new(CreditHistoryClassifier::default()),
    );

    match service.predict(&application()) {
        Err(PredictionError::Inference(InferenceError::ShapeMismatch {
            stage,
            expected,
            actual,
        })) => {
            assert_eq!(stage, "scaler");
            assert_eq!(expected, 9);
            assert_eq!(actual, 11);
        }
        other => panic!("expected shape mismatch, got {other:?}"),
    }
}

#[test]
fn shape_mismatch_message_names_both_widths() {
    let err = PredictionError::Inference(InferenceError::ShapeMismatch {
        stage: "scaler",
        expected: 9,
        actual: 11,
    });
    assert_eq!(err.to_string(), "scaler expected a 9-feature vector, got 11");
}
