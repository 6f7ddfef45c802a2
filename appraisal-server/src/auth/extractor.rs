//! Bearer token extractor
//!
//! Validates the `Authorization: Bearer` token and resolves its subject
//! against the user store.

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::error::{AppError, ErrorCode};

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ServiceError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(header) => JwtService::extract_from_header(header)
                .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
            None => {
                tracing::warn!(uri = %parts.uri, "Missing authorization header");
                return Err(AppError::unauthorized().into());
            }
        };

        let claims = state.jwt.validate_token(token).map_err(|e| {
            tracing::warn!(error = %e, uri = %parts.uri, "Token rejected");
            match e {
                JwtError::ExpiredToken => AppError::token_expired(),
                _ => AppError::invalid_token("Could not validate credentials"),
            }
        })?;

        let user = db::users::find_by_email(&state.pool, &claims.sub)
            .await?
            .ok_or_else(|| {
                tracing::warn!(subject = %claims.sub, "Token subject no longer exists");
                AppError::invalid_token("Could not validate credentials")
            })?;

        if !user.can_login() {
            tracing::warn!(user_id = user.user_id, "Disabled account presented a token");
            return Err(AppError::new(ErrorCode::AccountDisabled).into());
        }

        let current = CurrentUser::from(user);
        parts.extensions.insert(current.clone());
        Ok(current)
    }
}
