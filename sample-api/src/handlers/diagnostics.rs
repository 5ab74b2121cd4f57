use service_core::error::AppError;

pub const FORCED_ERROR_MESSAGE: &str = "これはテスト用の強制サーバーエラーです";

/// Always fails, exercising the generic error boundary
#[utoipa::path(
    get,
    path = "/error-test",
    responses(
        (status = 500, description = "テスト用エラー", body = crate::docs::ErrorResponse)
    ),
    tag = "テスト"
)]
pub async fn error_test() -> Result<(), AppError> {
    tracing::error!("Raising a deliberate server error");
    Err(AppError::Internal(anyhow::anyhow!(FORCED_ERROR_MESSAGE)))
}
