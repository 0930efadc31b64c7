use super::{Classifier, FeatureFrame};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Ignores its input and always answers with the class prior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorClassifier {
    pub classes: Vec<i64>,
    pub class_prior: Vec<f64>,
}

impl PriorClassifier {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.classes.len() != 2 {
            return Err(format!(
                "exactly two classes are required, got {}",
                self.classes.len()
            ));
        }
        if self.classes[0] >= self.classes[1] {
            return Err(format!(
                "classes must be distinct and ascending, got {:?}",
                self.classes
            ));
        }
        if self.classes.len() != self.class_prior.len() {
            return Err(format!(
                "{} classes but {} prior probabilities",
                self.classes.len(),
                self.class_prior.len()
            ));
        }
        if self.class_prior.iter().any(|p| !(0.0..=1.0).contains(p)) {
            return Err("prior probabilities must be within [0, 1]".to_string());
        }
        let total: f64 = self.class_prior.iter().sum();
        if (total - 1.0).abs() > 1e-6 {
            return Err(format!("prior probabilities sum to {}, not 1", total));
        }
        Ok(())
    }
}

impl Classifier for PriorClassifier {
    fn predict(&self, _frame: &FeatureFrame) -> Result<i64> {
        // First class wins ties
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in self.class_prior.iter().copied().enumerate() {
            if best.is_none_or(|(_, top)| p > top) {
                best = Some((i, p));
            }
        }
        best
            .and_then(|(i, _)| self.classes.get(i).copied())
            .ok_or_else(|| Error::prediction("Prior classifier has no classes"))
    }

    fn predict_proba(&self, _frame: &FeatureFrame) -> Result<Vec<f64>> {
        Ok(self.class_prior.clone())
    }
}
