use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::artifacts::{Classifier, FeatureScaler};
use super::domain::LoanApplication;
use super::service::{PredictionError, PredictionService};

/// Router builder exposing the prediction endpoint.
pub fn prediction_router<S, C>(service: Arc<PredictionService<S, C>>) -> Router
where
    S: FeatureScaler + 'static,
    C: Classifier + 'static,
{
    Router::new()
        .route("/api/v1/loan/predictions", post(predict_handler::<S, C>))
        .with_state(service)
}

pub(crate) async fn predict_handler<S, C>(
    State(service): State<Arc<PredictionService<S, C>>>,
    axum::Json(application): axum::Json<LoanApplication>,
) -> Response
where
    S: FeatureScaler + 'static,
    C: Classifier + 'static,
{
    match service.predict(&application) {
        Ok(outcome) => {
            let payload = json!({
                "applicant_name": outcome.applicant_name,
                "decision": outcome.decision.label(),
                "message": outcome.message(),
                "classifier_output": outcome.classifier_output,
                "evaluated_at": outcome.evaluated_at,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err @ PredictionError::BlankName) => {
            let payload = json!({
                "warning": err.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(err @ (PredictionError::NameTooLong { .. } | PredictionError::Encode(_))) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(err @ PredictionError::Inference(_)) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
