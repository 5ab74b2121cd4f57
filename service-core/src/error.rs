use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::failure;

/// Message returned for any fault that is not reported at its point of occurrence.
pub const INTERNAL_ERROR_MESSAGE: &str = "サーバー内部エラーが発生しました";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Production restricted: {0}")]
    ProductionRestricted(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(anyhow::Error::new(err))
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ProductionRestricted(_) => StatusCode::FORBIDDEN,
            AppError::ConfigurationMissing(_)
            | AppError::Internal(_)
            | AppError::Config(_)
            | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (error_message, detail) = match self {
            AppError::Validation(msg) => {
                tracing::warn!(error = %msg, "Request validation failed");
                (msg, None)
            }
            AppError::ConfigurationMissing(msg) => {
                tracing::error!(error = %msg, "Required configuration is missing");
                (msg, None)
            }
            AppError::ProductionRestricted(msg) => {
                tracing::warn!(error = %msg, "Rejected request in production mode");
                (msg, None)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Unhandled error");
                (INTERNAL_ERROR_MESSAGE.to_string(), Some(err.to_string()))
            }
            AppError::Config(err) => {
                tracing::error!(error = %err, "Configuration error");
                ("Configuration error".to_string(), Some(err.to_string()))
            }
            AppError::Io(err) => {
                tracing::error!(error = %err, "I/O error");
                (INTERNAL_ERROR_MESSAGE.to_string(), Some(err.to_string()))
            }
        };

        (status, Json(failure(error_message, detail))).into_response()
    }
}
