mod artifact;
mod frame;
mod input;
mod logistic;
mod prior;

pub use artifact::ModelArtifact;
pub use frame::{CATEGORICAL_COLUMNS, COLUMNS, CellValue, FeatureFrame, NUMERIC_COLUMNS};
pub use input::CreditRiskInput;
pub use logistic::{CategoricalFeature, HandleUnknown, LogisticPipeline, NumericFeature};
pub use prior::PriorClassifier;

use crate::{Error, Result};
use std::sync::Arc;
use tracing::{debug, info};

/// A trained binary classifier over a single-row [`FeatureFrame`].
///
/// Implementations are shared across requests and must not mutate state
/// while predicting. `predict_proba` is ordered by class label, so the
/// probability of class `1` is the second entry.
pub trait Classifier: Send + Sync {
    fn predict(&self, frame: &FeatureFrame) -> Result<i64>;

    fn predict_proba(&self, frame: &FeatureFrame) -> Result<Vec<f64>>;
}

pub async fn load(path: &str) -> Result<Arc<dyn Classifier>> {
    debug!("Loading model artifact from: {}", path);

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::model_load(path, e.to_string()))?;

    let artifact = parse(&raw).map_err(|reason| Error::model_load(path, reason))?;

    info!("Loaded {} model from {}", artifact.kind(), path);
    Ok(artifact.into_classifier())
}

pub fn parse(raw: &str) -> std::result::Result<ModelArtifact, String> {
    let artifact: ModelArtifact = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    artifact.validate()?;
    Ok(artifact)
}
