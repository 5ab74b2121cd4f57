use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// JSON body extractor that runs `validator` rules after deserializing.
///
/// Both a malformed body and a failed rule are reported as
/// [`AppError::Validation`] carrying the payload type's message, so callers
/// always see a 400 with the same wording.
pub struct ValidatedJson<T>(pub T);

/// Message reported when the body cannot be parsed or fails validation.
pub trait ValidationMessage {
    fn validation_message() -> &'static str;
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + ValidationMessage + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            AppError::Validation(T::validation_message().to_string())
        })?;

        value.validate().map_err(|e| {
            tracing::debug!(error = %e, "Request body failed validation");
            AppError::Validation(T::validation_message().to_string())
        })?;

        Ok(ValidatedJson(value))
    }
}
