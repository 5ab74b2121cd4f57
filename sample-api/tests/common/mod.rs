#![allow(dead_code)]

use sample_api::config::ApiConfig;
use sample_api::services::{EnvAccessor, PostStore, StaticEnv};
use sample_api::{AppState, Application};

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub state: AppState,
    client: reqwest::Client,
}

impl TestApp {
    /// Seeded store, no injected variables.
    pub async fn spawn() -> Self {
        Self::spawn_with(StaticEnv::new(), PostStore::seeded()).await
    }

    pub async fn spawn_with_env(env: StaticEnv) -> Self {
        Self::spawn_with(env, PostStore::seeded()).await
    }

    pub async fn spawn_with(env: StaticEnv, posts: PostStore) -> Self {
        Self::spawn_with_config(ApiConfig::default(), env, posts).await
    }

    pub async fn spawn_with_config(mut config: ApiConfig, env: StaticEnv, posts: PostStore) -> Self {
        config.common.port = 0; // Random port for testing

        let state = AppState::new(config, EnvAccessor::new(env), posts)
            .expect("Failed to build application state");

        let app = Application::build_with_state(state.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            port,
            state,
            client: reqwest::Client::new(),
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Asserts the common envelope fields and returns the parsed body.
pub async fn envelope(
    response: reqwest::Response,
    expected_status: u16,
    expected_kind: &str,
) -> serde_json::Value {
    assert_eq!(response.status().as_u16(), expected_status);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], expected_kind);
    assert!(body["timestamp"].is_string(), "timestamp missing: {}", body);
    if expected_kind == "success" {
        assert!(body.get("data").is_some(), "data missing: {}", body);
    }

    body
}
