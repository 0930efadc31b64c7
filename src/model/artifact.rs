use super::{Classifier, LogisticPipeline, PriorClassifier};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// On-disk model description, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression(LogisticPipeline),
    Prior(PriorClassifier),
}

impl ModelArtifact {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LogisticRegression(_) => "logistic_regression",
            Self::Prior(_) => "prior",
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::LogisticRegression(pipeline) => pipeline.validate(),
            Self::Prior(prior) => prior.validate(),
        }
    }

    pub fn into_classifier(self) -> Arc<dyn Classifier> {
        match self {
            Self::LogisticRegression(pipeline) => Arc::new(pipeline),
            Self::Prior(prior) => Arc::new(prior),
        }
    }
}
