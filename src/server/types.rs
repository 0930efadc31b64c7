use crate::model::FeatureFrame;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every `POST /predict` answer that reached the handler.
///
/// Failures are carried in the body, the transport status stays 200.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Positive {
        prediction: i64,
        probability: f64,
        threshold: f64,
    },
    Distribution {
        prediction: i64,
        probability: Vec<f64>,
    },
    Error {
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        features: Option<FeatureFrame>,
    },
}

impl PredictResponse {
    pub fn error(message: impl Into<String>, features: Option<FeatureFrame>) -> Self {
        Self::Error {
            error: message.into(),
            features,
        }
    }
}

/// Body returned when the request never reaches the handler.
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub detail: String,
}
