mod common;

use common::{envelope, TestApp};
use sample_api::services::StaticEnv;

fn full_env() -> StaticEnv {
    StaticEnv::new()
        .with("PORT", "8000")
        .with("CURRENT_ENV", "staging")
        .with("CONFIG_MESSAGE", "Hello from ConfigMap")
        .with("SECRET_KEY", "super-secret-value")
}

#[tokio::test]
async fn env_reports_port_and_current_env() {
    let app = TestApp::spawn_with_env(full_env()).await;

    let body = envelope(app.get("/env").await, 200, "success").await;

    assert_eq!(body["data"]["port"], "8000");
    assert_eq!(body["data"]["currentEnv"], "staging");
}

#[tokio::test]
async fn env_uses_unset_sentinel() {
    let app = TestApp::spawn().await;

    let body = envelope(app.get("/env").await, 200, "success").await;

    assert_eq!(body["data"]["port"], "未設定");
    assert_eq!(body["data"]["currentEnv"], "未設定");
}

#[tokio::test]
async fn config_returns_exact_message() {
    let app = TestApp::spawn_with_env(full_env()).await;

    let body = envelope(app.get("/config").await, 200, "success").await;

    assert_eq!(body["data"]["message"], "Hello from ConfigMap");
    assert!(body["data"]["timestamp"].is_string());
}

#[tokio::test]
async fn config_without_message_returns_500() {
    let app = TestApp::spawn().await;

    let body = envelope(app.get("/config").await, 500, "error").await;

    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("CONFIG_MESSAGE"));
}

#[tokio::test]
async fn secret_is_masked_when_set() {
    let app = TestApp::spawn_with_env(full_env()).await;

    let response = app.get("/secret").await;
    let text = response.text().await.unwrap();
    assert!(!text.contains("super-secret-value"));

    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["data"]["secretKey"], "****MASKED****");
}

#[tokio::test]
async fn secret_reports_unset() {
    let app = TestApp::spawn().await;

    let body = envelope(app.get("/secret").await, 200, "success").await;

    assert_eq!(body["data"]["secretKey"], "未設定");
}

#[tokio::test]
async fn env_check_combines_all_values() {
    let app = TestApp::spawn_with_env(full_env()).await;

    let response = app.get("/env-check").await;
    let text = response.text().await.unwrap();
    assert!(!text.contains("super-secret-value"));

    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["port"], "8000");
    assert_eq!(body["data"]["currentEnv"], "staging");
    assert_eq!(body["data"]["configMessage"], "Hello from ConfigMap");
    assert_eq!(body["data"]["secretKey"], "****MASKED****");
}
