use super::{
    Classifier, FeatureFrame,
    frame::{CATEGORICAL_COLUMNS, NUMERIC_COLUMNS},
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericFeature {
    pub column: String,
    pub mean: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalFeature {
    pub column: String,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    #[default]
    Error,
    Ignore,
}

/// Standard scaling for numeric columns, one-hot encoding for categorical
/// columns, then a binary logistic regression over the encoded row.
///
/// Coefficients are laid out numeric features first, followed by every
/// category of every categorical feature, both in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticPipeline {
    pub classes: [i64; 2],
    #[serde(default)]
    pub numeric: Vec<NumericFeature>,
    #[serde(default)]
    pub categorical: Vec<CategoricalFeature>,
    #[serde(default)]
    pub handle_unknown: HandleUnknown,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticPipeline {
    pub fn n_encoded_features(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|feature| feature.categories.len())
                .sum::<usize>()
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.classes[0] >= self.classes[1] {
            return Err(format!(
                "classes must be distinct and ascending, got {:?}",
                self.classes
            ));
        }

        for feature in &self.numeric {
            if !NUMERIC_COLUMNS.contains(&feature.column.as_str()) {
                return Err(format!("'{}' is not a numeric column", feature.column));
            }
            if feature.scale == 0.0 || !feature.scale.is_finite() || !feature.mean.is_finite() {
                return Err(format!(
                    "invalid scaling for '{}': mean={}, scale={}",
                    feature.column, feature.mean, feature.scale
                ));
            }
        }

        for feature in &self.categorical {
            if !CATEGORICAL_COLUMNS.contains(&feature.column.as_str()) {
                return Err(format!("'{}' is not a categorical column", feature.column));
            }
            if feature.categories.is_empty() {
                return Err(format!("no categories for '{}'", feature.column));
            }
        }

        let expected = self.n_encoded_features();
        if self.coefficients.len() != expected {
            return Err(format!(
                "expected {} coefficients, found {}",
                expected,
                self.coefficients.len()
            ));
        }

        if self.coefficients.iter().any(|c| !c.is_finite()) || !self.intercept.is_finite() {
            return Err("coefficients and intercept must be finite".to_string());
        }

        Ok(())
    }

    fn encode(&self, frame: &FeatureFrame) -> Result<Vec<f64>> {
        let mut row = Vec::with_capacity(self.n_encoded_features());

        for feature in &self.numeric {
            let value = frame
                .get(&feature.column)
                .ok_or_else(|| Error::MissingColumn {
                    column: feature.column.clone(),
                })?
                .as_f64()
                .ok_or_else(|| {
                    Error::prediction(format!("Column '{}' is not numeric", feature.column))
                })?;
            row.push((value - feature.mean) / feature.scale);
        }

        for feature in &self.categorical {
            let value = frame
                .get(&feature.column)
                .ok_or_else(|| Error::MissingColumn {
                    column: feature.column.clone(),
                })?
                .as_str()
                .ok_or_else(|| {
                    Error::prediction(format!("Column '{}' is not categorical", feature.column))
                })?;

            let position = feature.categories.iter().position(|c| c == value);
            if position.is_none() && self.handle_unknown == HandleUnknown::Error {
                return Err(Error::UnknownCategory {
                    column: feature.column.clone(),
                    value: value.to_string(),
                });
            }

            row.extend((0..feature.categories.len()).map(|i| {
                if Some(i) == position { 1.0 } else { 0.0 }
            }));
        }

        Ok(row)
    }

    pub fn decision_function(&self, frame: &FeatureFrame) -> Result<f64> {
        let row = self.encode(frame)?;
        let dot: f64 = row
            .iter()
            .zip(&self.coefficients)
            .map(|(x, w)| x * w)
            .sum();
        Ok(self.intercept + dot)
    }

    fn positive_probability(&self, frame: &FeatureFrame) -> Result<f64> {
        Ok(sigmoid(self.decision_function(frame)?))
    }
}

impl Classifier for LogisticPipeline {
    fn predict(&self, frame: &FeatureFrame) -> Result<i64> {
        let p = self.positive_probability(frame)?;
        Ok(if p > 0.5 { self.classes[1] } else { self.classes[0] })
    }

    fn predict_proba(&self, frame: &FeatureFrame) -> Result<Vec<f64>> {
        let p = self.positive_probability(frame)?;
        Ok(vec![1.0 - p, p])
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
