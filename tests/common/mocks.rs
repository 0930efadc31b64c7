use credit_risk_api::{
    Error, Result,
    model::{Classifier, FeatureFrame},
};
use std::sync::{Arc, Mutex};

/// Classifier that always answers with the same label and distribution
#[derive(Debug, Clone)]
pub struct StubClassifier {
    pub prediction: i64,
    pub probabilities: Vec<f64>,
}

impl StubClassifier {
    pub fn new(prediction: i64, probabilities: Vec<f64>) -> Self {
        Self {
            prediction,
            probabilities,
        }
    }

    /// Class 1 with a default probability of 0.73
    pub fn defaulting() -> Self {
        Self::new(1, vec![0.27, 0.73])
    }
}

impl Classifier for StubClassifier {
    fn predict(&self, _frame: &FeatureFrame) -> Result<i64> {
        Ok(self.prediction)
    }

    fn predict_proba(&self, _frame: &FeatureFrame) -> Result<Vec<f64>> {
        Ok(self.probabilities.clone())
    }
}

/// Classifier whose capabilities always fail
#[derive(Debug, Clone)]
pub struct FailingClassifier {
    pub message: String,
}

impl FailingClassifier {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Classifier for FailingClassifier {
    fn predict(&self, _frame: &FeatureFrame) -> Result<i64> {
        Err(Error::prediction(self.message.clone()))
    }

    fn predict_proba(&self, _frame: &FeatureFrame) -> Result<Vec<f64>> {
        Err(Error::prediction(self.message.clone()))
    }
}

/// Stub that keeps every frame it was handed
#[derive(Debug, Default)]
pub struct RecordingClassifier {
    pub frames: Arc<Mutex<Vec<FeatureFrame>>>,
}

impl RecordingClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_frames(&self) -> Vec<FeatureFrame> {
        self.frames.lock().unwrap().clone()
    }
}

impl Classifier for RecordingClassifier {
    fn predict(&self, frame: &FeatureFrame) -> Result<i64> {
        self.frames.lock().unwrap().push(frame.clone());
        Ok(0)
    }

    fn predict_proba(&self, frame: &FeatureFrame) -> Result<Vec<f64>> {
        self.frames.lock().unwrap().push(frame.clone());
        Ok(vec![0.9, 0.1])
    }
}
