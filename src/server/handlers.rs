use super::{
    extract::ValidatedJson,
    types::{MessageResponse, PredictResponse},
};
use crate::{
    Error, Result,
    config::{ProbabilityFormat, ResponseConfig},
    model::{Classifier, CreditRiskInput, FeatureFrame},
};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{debug, error, info};

pub const RUNNING_MESSAGE: &str = "Credit Risk Prediction API is running 🚀";
pub const MODEL_NOT_LOADED: &str = "Model not loaded correctly.";

#[derive(Clone)]
pub struct AppState {
    pub model: Option<Arc<dyn Classifier>>,
    pub response: ResponseConfig,
}

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: RUNNING_MESSAGE.to_string(),
    })
}

pub async fn predict(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreditRiskInput>,
) -> Json<PredictResponse> {
    info!(
        "Received prediction request: grade={}, intent={}",
        input.loan_grade, input.loan_intent
    );

    let Some(model) = state.model.clone() else {
        error!("Prediction requested but no model is loaded");
        return Json(PredictResponse::error(MODEL_NOT_LOADED, None));
    };

    let frame = FeatureFrame::from_input(&input);
    let response = state.response.clone();

    let outcome = {
        let frame = frame.clone();
        tokio::task::spawn_blocking(move || run_prediction(model.as_ref(), &frame, &response))
            .await
            .map_err(|e| Error::internal(format!("Prediction task failed: {}", e)))
            .and_then(|result| result)
    };

    match outcome {
        Ok(body) => {
            debug!("Prediction result: {:?}", body);
            Json(body)
        }
        Err(e) => {
            error!("Prediction failed: {}", e);
            let features = state.response.echo_features_on_error.then_some(frame);
            Json(PredictResponse::error(e.to_string(), features))
        }
    }
}

/// Runs both model capabilities on one frame and shapes the answer.
pub fn run_prediction(
    model: &dyn Classifier,
    frame: &FeatureFrame,
    response: &ResponseConfig,
) -> Result<PredictResponse> {
    let prediction = model.predict(frame)?;
    let probabilities = model.predict_proba(frame)?;

    match response.probability {
        ProbabilityFormat::Positive => {
            let probability = *probabilities.get(1).ok_or_else(|| {
                Error::prediction(format!(
                    "Model returned {} class probabilities, expected 2",
                    probabilities.len()
                ))
            })?;
            Ok(PredictResponse::Positive {
                prediction,
                probability,
                threshold: response.threshold,
            })
        }
        ProbabilityFormat::Distribution => Ok(PredictResponse::Distribution {
            prediction,
            probability: probabilities,
        }),
    }
}
