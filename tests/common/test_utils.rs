use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use credit_risk_api::{
    config::{ProbabilityFormat, ResponseConfig},
    model::{Classifier, CreditRiskInput},
    server::{self, handlers::AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;
use tower::ServiceExt; // for `oneshot`

/// The reference applicant used across tests
pub fn sample_input_json() -> Value {
    json!({
        "person_age": 30,
        "person_income": 50000,
        "person_emp_length": 5,
        "loan_amnt": 10000,
        "loan_int_rate": 12.5,
        "loan_percent_income": 0.2,
        "cb_person_cred_hist_length": 4,
        "person_home_ownership": "RENT",
        "loan_intent": "EDUCATION",
        "loan_grade": "B",
        "cb_person_default_on_file": "N"
    })
}

pub fn sample_input() -> CreditRiskInput {
    serde_json::from_value(sample_input_json()).unwrap()
}

pub fn positive_response_config() -> ResponseConfig {
    ResponseConfig::default()
}

pub fn distribution_response_config() -> ResponseConfig {
    ResponseConfig {
        probability: ProbabilityFormat::Distribution,
        ..ResponseConfig::default()
    }
}

/// Build the full router around the given model
pub fn create_test_app(model: Option<Arc<dyn Classifier>>, response: ResponseConfig) -> Router {
    server::app(AppState { model, response })
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a file into the temp dir and return its path
pub async fn write_test_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).await.unwrap();
    path.to_string_lossy().to_string()
}

pub async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    send(app, request).await
}

pub async fn post_predict(app: Router, body: &Value) -> (StatusCode, Value) {
    post_json(app, "/predict", body.to_string()).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).to_string())
        })
    };
    (status, body)
}

/// A small but complete logistic artifact using every column
pub const SAMPLE_LOGISTIC_ARTIFACT: &str = r#"
{
  "kind": "logistic_regression",
  "classes": [0, 1],
  "numeric": [
    { "column": "person_age", "mean": 27.7, "scale": 6.3 },
    { "column": "person_income", "mean": 66000.0, "scale": 62000.0 },
    { "column": "person_emp_length", "mean": 4.8, "scale": 4.1 },
    { "column": "loan_amnt", "mean": 9600.0, "scale": 6300.0 },
    { "column": "loan_int_rate", "mean": 11.0, "scale": 3.2 },
    { "column": "loan_percent_income", "mean": 0.17, "scale": 0.107 },
    { "column": "cb_person_cred_hist_length", "mean": 5.8, "scale": 4.0 }
  ],
  "categorical": [
    { "column": "person_home_ownership", "categories": ["MORTGAGE", "OTHER", "OWN", "RENT"] },
    { "column": "loan_intent", "categories": ["DEBTCONSOLIDATION", "EDUCATION", "HOMEIMPROVEMENT", "MEDICAL", "PERSONAL", "VENTURE"] },
    { "column": "loan_grade", "categories": ["A", "B", "C", "D", "E", "F", "G"] },
    { "column": "cb_person_default_on_file", "categories": ["N", "Y"] }
  ],
  "handle_unknown": "error",
  "coefficients": [
    -0.05, -0.35, -0.08, -0.25, 0.45, 1.35, 0.02,
    -0.6, 0.2, -1.4, 0.45,
    0.35, -0.35, 0.45, 0.3, -0.15, -0.6,
    -0.9, -0.55, -0.45, 1.3, 1.5, 1.8, 2.9,
    -0.02, 0.02
  ],
  "intercept": -1.6
}
"#;

pub const SAMPLE_PRIOR_ARTIFACT: &str = r#"
{
  "kind": "prior",
  "classes": [0, 1],
  "class_prior": [0.78, 0.22]
}
"#;

pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"

model:
  path: "models/credit.json"
  required: false

response:
  probability: "distribution"
  threshold: 0.4
  echo_features_on_error: true
"#;
