//! Endpoints that surface injected configuration: plain environment
//! variables, ConfigMap values and (masked) Secret values.

use axum::{extract::State, Json};
use serde::Serialize;
use service_core::error::AppError;
use service_core::response::{success, timestamp, SuccessBody};
use utoipa::ToSchema;

use crate::services::environment::{
    EnvironmentSnapshot, CONFIG_MESSAGE, CURRENT_ENV, PORT, SECRET_KEY,
};
use crate::startup::AppState;

pub const CONFIG_MISSING_MESSAGE: &str = "ConfigMap未反映: CONFIG_MESSAGE が見つかりません";

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvInfo {
    #[schema(example = "8000")]
    pub port: String,
    #[schema(example = "development")]
    pub current_env: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigInfo {
    #[schema(example = "Hello from ConfigMap")]
    pub message: String,
    #[schema(format = DateTime)]
    pub timestamp: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretInfo {
    #[schema(example = "****MASKED****")]
    pub secret_key: String,
}

/// Show the port and environment name
#[utoipa::path(
    get,
    path = "/env",
    responses(
        (status = 200, description = "環境変数情報", body = crate::docs::EnvResponse)
    ),
    tag = "設定"
)]
pub async fn env(State(state): State<AppState>) -> Json<SuccessBody<EnvInfo>> {
    tracing::info!("Environment variables requested");
    Json(success(
        EnvInfo {
            port: state.env.get_value(PORT),
            current_env: state.env.get_value(CURRENT_ENV),
        },
        None,
    ))
}

/// Confirm the ConfigMap value reached the container
#[utoipa::path(
    get,
    path = "/config",
    responses(
        (status = 200, description = "ConfigMap設定情報", body = crate::docs::ConfigResponse),
        (status = 500, description = "ConfigMap未設定エラー", body = crate::docs::ErrorResponse)
    ),
    tag = "設定"
)]
pub async fn config(State(state): State<AppState>) -> Result<Json<SuccessBody<ConfigInfo>>, AppError> {
    let message = state.env.lookup(CONFIG_MESSAGE).ok_or_else(|| {
        AppError::ConfigurationMissing(CONFIG_MISSING_MESSAGE.to_string())
    })?;

    tracing::info!(config_message = %message, "ConfigMap value confirmed");

    Ok(Json(success(
        ConfigInfo {
            message,
            timestamp: timestamp(),
        },
        None,
    )))
}

/// Confirm the Secret reached the container without revealing it
#[utoipa::path(
    get,
    path = "/secret",
    responses(
        (status = 200, description = "Secret設定情報", body = crate::docs::SecretResponse)
    ),
    tag = "設定"
)]
pub async fn secret(State(state): State<AppState>) -> Json<SuccessBody<SecretInfo>> {
    let secret_key = state.env.get_masked(SECRET_KEY);
    tracing::info!(state = %secret_key, "Secret presence checked");
    Json(success(SecretInfo { secret_key }, None))
}

/// Combined view of every injected value
#[utoipa::path(
    get,
    path = "/env-check",
    responses(
        (status = 200, description = "環境変数情報", body = crate::docs::EnvCheckResponse)
    ),
    tag = "設定"
)]
pub async fn env_check(State(state): State<AppState>) -> Json<SuccessBody<EnvironmentSnapshot>> {
    tracing::info!("ConfigMap/Secret check requested");
    Json(success(state.env.snapshot(), None))
}
