//! Authentication endpoints: login, token renewal, current profile

use axum::extract::State;
use axum::{Form, Json};
use shared::error::{AppError, ErrorCode};
use shared::models::{LoginForm, TokenResponse, UserResponse};

use super::{ApiResult, normalize_email};
use crate::auth::{CurrentUser, verify_password};
use crate::db;
use crate::state::AppState;

/// POST /auth/token
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> ApiResult<TokenResponse> {
    let email = normalize_email(&form.username);
    let user = db::users::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!(email = %email, "Login for unknown user");
            AppError::invalid_credentials()
        })?;

    if !verify_password(&form.password, &user.password_hash) {
        tracing::warn!(user_id = user.user_id, "Login with wrong password");
        return Err(AppError::invalid_credentials().into());
    }

    if !user.can_login() {
        tracing::warn!(user_id = user.user_id, "Login to disabled account");
        return Err(AppError::new(ErrorCode::AccountDisabled).into());
    }

    let token = state.jwt.issue_access_token(&user.user_email, user.role)?;
    tracing::info!(user_id = user.user_id, role = %user.role, "User logged in");

    Ok(Json(TokenResponse::bearer(
        token,
        user.user_id,
        user.user_name,
        user.role,
        user.org_id,
    )))
}

/// POST /auth/renew
pub async fn renew(State(state): State<AppState>, user: CurrentUser) -> ApiResult<TokenResponse> {
    let token = state.jwt.issue_renewed_token(&user.email, user.role)?;
    tracing::info!(user_id = user.user_id, "Token renewed");

    Ok(Json(TokenResponse::bearer(
        token,
        user.user_id,
        user.user_name,
        user.role,
        user.org_id,
    )))
}

/// GET /auth/me
pub async fn me(State(state): State<AppState>, user: CurrentUser) -> ApiResult<UserResponse> {
    let profile = db::users::find_by_email(&state.pool, &user.email)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;
    Ok(Json(profile.into()))
}
