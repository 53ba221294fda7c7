use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use glucose_advisor::{advisor::Advisor, server};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

pub const MEAL_PLAN_TEXT: &str = "BREAKFAST: Steel-cut oats with berries\n\n\
LUNCH: Grilled tofu salad\n\n\
DINNER: Lentil soup with greens\n\n\
SNACKS: A handful of almonds";

pub const BLOOD_SUGAR_TEXT: &str = "Status: normal\n\n\
A reading of 145 mg/dL after lunch is within the post-meal target.\n\n\
Keep up your current routine and recheck before dinner.";

/// Router backed by `mock`; the mock keeps recording after being cloned in.
pub fn create_test_app(mock: &MockLlmClient) -> Router {
    let advisor = Advisor::new(Arc::new(mock.clone()));
    server::router(advisor)
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "0.0.0.0"
  port: 8080
  logs:
    level: "debug"

llm:
  base_url: "https://api.openai.com/v1"
  api_key_env: "OPENAI_API_KEY"
  model: "gpt-4o-mini"
  temperature: 0.2
  max_tokens: 800
"#;

pub const PARTIAL_CONFIG_YAML: &str = r#"
server:
  port: 9000
"#;

pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
