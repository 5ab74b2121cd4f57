use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use service_core::response::{acknowledged, timestamp, SuccessBody};
use std::time::Duration;
use utoipa::ToSchema;

use crate::startup::AppState;

pub const DELAY_COMPLETE_MESSAGE: &str = "遅延レスポンス完了";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(format = DateTime)]
    pub timestamp: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: timestamp(),
        }
    }
}

/// Liveness check
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "正常稼働中", body = HealthStatus)
    ),
    tag = "ヘルスチェック"
)]
pub async fn root() -> Json<HealthStatus> {
    tracing::info!("Health check received on /");
    Json(HealthStatus::ok())
}

/// Kubernetes liveness probe
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "正常稼働中", body = HealthStatus)
    ),
    tag = "ヘルスチェック"
)]
pub async fn healthz() -> Json<HealthStatus> {
    tracing::info!("Health check received on /healthz");
    Json(HealthStatus::ok())
}

/// Probe stub that always answers 200 with an empty body
#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "常に200を返す")
    ),
    tag = "設定"
)]
pub async fn status() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe check that answers after a fixed delay
#[utoipa::path(
    get,
    path = "/delay",
    responses(
        (status = 200, description = "遅延レスポンス完了", body = crate::docs::DelayResponse)
    ),
    tag = "設定"
)]
pub async fn delay(State(state): State<AppState>) -> Json<SuccessBody<()>> {
    let delay_ms = state.config.delay_ms;
    tracing::info!(delay_ms, "Starting delayed response");

    // Only this response waits; the runtime keeps serving other requests.
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    Json(acknowledged(DELAY_COMPLETE_MESSAGE))
}
