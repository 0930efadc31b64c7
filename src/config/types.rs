use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub response: ResponseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_path")]
    pub path: String,
    /// When false, a model that fails to load leaves the server running and
    /// every prediction answers with an error body.
    #[serde(default = "default_required")]
    pub required: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseConfig {
    #[serde(default)]
    pub probability: ProbabilityFormat,
    /// Echoed in positive-class responses. Never used to derive the prediction.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub echo_features_on_error: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityFormat {
    /// Scalar probability of class `1` plus the threshold.
    #[default]
    Positive,
    /// Full per-class probability list.
    Distribution,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
            required: default_required(),
        }
    }
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            probability: ProbabilityFormat::default(),
            threshold: default_threshold(),
            echo_features_on_error: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_model_path() -> String {
    "credit_risk_model.json".to_string()
}

fn default_required() -> bool {
    true
}

fn default_threshold() -> f64 {
    0.5
}
