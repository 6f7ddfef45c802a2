//! User administration endpoints

use axum::Json;
use axum::extract::{Path, Query, State};
use shared::error::{AppError, ErrorCode};
use shared::models::{Role, UserCreate, UserListQuery, UserResponse, UserUpdate};

use super::extract::ValidatedJson;
use super::{ApiResult, normalize_email};
use crate::auth::{AllowedRoles, CurrentUser};
use crate::db;
use crate::db::users::{NewUser, UserPatch};
use crate::error::ServiceError;
use crate::state::AppState;

fn email_conflict(_: Option<&str>) -> AppError {
    AppError::new(ErrorCode::UserEmailExists)
}

/// POST /users
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(req): ValidatedJson<UserCreate>,
) -> ApiResult<UserResponse> {
    user.require_role(AllowedRoles::HR_ADMIN)?;
    if !user.role.can_create(req.role) {
        tracing::warn!(user_id = user.user_id, requested = %req.role, "Role not assignable");
        return Err(AppError::new(ErrorCode::RoleNotAssignable).into());
    }

    let org_id = match req.org_id {
        Some(org_id) => org_id,
        None => user.org()?,
    };
    user.require_org(org_id)?;

    db::organizations::find_by_id(&state.pool, org_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrganizationNotFound))?;

    let email = normalize_email(&req.user_email);
    if db::users::email_taken(&state.pool, &email, None).await? {
        return Err(AppError::new(ErrorCode::UserEmailExists).into());
    }

    let password_hash = state.password_policy.hash_password(&req.user_password)?;

    let created = db::users::insert(
        &state.pool,
        &NewUser {
            org_id,
            role: req.role,
            user_name: req.user_name.trim(),
            user_email: &email,
            user_mobile: &req.user_mobile,
            password_hash: &password_hash,
            user_dp: &req.user_dp,
        },
    )
    .await
    .map_err(|e| ServiceError::unique_violation_as(e, email_conflict))?;

    tracing::info!(
        user_id = created.user_id,
        org_id,
        role = %created.role,
        created_by = user.user_id,
        "User created"
    );
    Ok(Json(created.into()))
}

/// GET /users?role=
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<UserListQuery>,
) -> ApiResult<Vec<UserResponse>> {
    let users = db::users::list_by_org(&state.pool, user.org()?, query.role).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/managers
pub async fn list_managers(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Vec<UserResponse>> {
    let managers = db::users::list_by_org(&state.pool, user.org()?, Some(Role::Manager)).await?;
    Ok(Json(managers.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{user_id}
pub async fn get(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(user_id): Path<i64>,
) -> ApiResult<UserResponse> {
    let found = db::users::find_in_org(&state.pool, user_id, user.org()?)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;
    Ok(Json(found.into()))
}

/// PATCH /users/{user_id}: HR Admin, or the user themself
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(user_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<UserUpdate>,
) -> ApiResult<UserResponse> {
    if user.user_id != user_id && !user.is_hr_admin() {
        return Err(AppError::permission_denied("You can only update your own profile").into());
    }
    if req.is_active.is_some() && !user.is_hr_admin() {
        return Err(
            AppError::permission_denied("Only an HR Admin can change account status").into(),
        );
    }

    let org_id = user.org()?;
    db::users::find_in_org(&state.pool, user_id, org_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;

    let email = req.user_email.as_deref().map(normalize_email);
    if let Some(email) = email.as_deref()
        && db::users::email_taken(&state.pool, email, Some(user_id)).await?
    {
        return Err(AppError::new(ErrorCode::UserEmailExists).into());
    }

    let password_hash = req
        .user_password
        .as_deref()
        .map(|p| state.password_policy.hash_password(p))
        .transpose()?;

    let patch = UserPatch {
        user_name: req.user_name.as_deref().map(str::trim),
        user_email: email.as_deref(),
        user_mobile: req.user_mobile.as_deref(),
        password_hash: password_hash.as_deref(),
        user_dp: req.user_dp.as_deref(),
        is_active: req.is_active,
    };
    let updated = db::users::update(&state.pool, user_id, &patch)
        .await
        .map_err(|e| ServiceError::unique_violation_as(e, email_conflict))?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;

    tracing::info!(user_id, updated_by = user.user_id, "User updated");
    Ok(Json(updated.into()))
}

/// DELETE /users/{user_id} (soft delete)
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(user_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    user.require_role(AllowedRoles::HR_ADMIN)?;
    if user.user_id == user_id {
        return Err(AppError::permission_denied("You cannot delete your own account").into());
    }

    db::users::find_in_org(&state.pool, user_id, user.org()?)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))?;

    if !db::users::soft_delete(&state.pool, user_id).await? {
        return Err(AppError::new(ErrorCode::UserNotFound).into());
    }

    tracing::info!(user_id, deleted_by = user.user_id, "User deleted");
    Ok(Json(serde_json::json!({ "message": "User deleted successfully" })))
}
