//! Request body extraction

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use validator::Validate;

/// JSON body that has been deserialized and validated.
///
/// Malformed bodies are rejected as `InvalidFormat`, failed field checks
/// through `From<ValidationErrors>`, both in the unified error envelope.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::with_message(ErrorCode::InvalidFormat, rejection.body_text())
            })?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
