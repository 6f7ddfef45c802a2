//! Performance parameter endpoints

use axum::Json;
use axum::extract::{Path, State};
use shared::error::{AppError, ErrorCode};
use shared::models::{ParameterCreate, ParameterUpdate, PerformanceParameter};

use super::ApiResult;
use super::extract::ValidatedJson;
use crate::auth::{AllowedRoles, CurrentUser};
use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

fn check_bounds(min_rating: i32, max_rating: i32) -> Result<(), AppError> {
    if min_rating > max_rating {
        return Err(AppError::new(ErrorCode::ParameterRangeInvalid)
            .with_detail("min_rating", min_rating)
            .with_detail("max_rating", max_rating));
    }
    Ok(())
}

fn not_found(parameter_id: i64) -> AppError {
    AppError::new(ErrorCode::ParameterNotFound).with_detail("parameter_id", parameter_id)
}

/// POST /parameters
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(req): ValidatedJson<ParameterCreate>,
) -> ApiResult<PerformanceParameter> {
    user.require_role(AllowedRoles::HR_ADMIN)?;
    check_bounds(req.min_rating, req.max_rating)?;

    let parameter =
        db::parameters::insert(&state.pool, req.name.trim(), req.min_rating, req.max_rating)
            .await?;

    tracing::info!(
        parameter_id = parameter.parameter_id,
        created_by = user.user_id,
        "Performance parameter created"
    );
    Ok(Json(parameter))
}

/// GET /parameters
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Vec<PerformanceParameter>> {
    Ok(Json(db::parameters::list(&state.pool).await?))
}

/// GET /parameters/{parameter_id}
pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(parameter_id): Path<i64>,
) -> ApiResult<PerformanceParameter> {
    let parameter = db::parameters::find_by_id(&state.pool, parameter_id)
        .await?
        .ok_or_else(|| not_found(parameter_id))?;
    Ok(Json(parameter))
}

/// PATCH /parameters/{parameter_id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(parameter_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<ParameterUpdate>,
) -> ApiResult<PerformanceParameter> {
    user.require_role(AllowedRoles::HR_ADMIN)?;

    let mut parameter = db::parameters::find_by_id(&state.pool, parameter_id)
        .await?
        .ok_or_else(|| not_found(parameter_id))?;

    if let Some(name) = req.name.as_deref() {
        parameter.name = name.trim().to_string();
    }
    parameter.min_rating = req.min_rating.unwrap_or(parameter.min_rating);
    parameter.max_rating = req.max_rating.unwrap_or(parameter.max_rating);
    check_bounds(parameter.min_rating, parameter.max_rating)?;

    let updated = db::parameters::update(&state.pool, &parameter)
        .await?
        .ok_or_else(|| not_found(parameter_id))?;

    tracing::info!(parameter_id, updated_by = user.user_id, "Performance parameter updated");
    Ok(Json(updated))
}

/// DELETE /parameters/{parameter_id}; refused while ratings reference it
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(parameter_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    user.require_role(AllowedRoles::HR_ADMIN)?;

    if !db::parameters::exists(&state.pool, parameter_id).await? {
        return Err(not_found(parameter_id).into());
    }
    if db::ratings::exist_for_parameter(&state.pool, parameter_id).await? {
        return Err(AppError::new(ErrorCode::ParameterHasRatings)
            .with_detail("parameter_id", parameter_id)
            .into());
    }

    // A rating inserted since the check above trips the RESTRICT foreign key
    let deleted = db::parameters::delete(&state.pool, parameter_id)
        .await
        .map_err(|e| {
            ServiceError::foreign_key_violation_as(e, AppError::new(ErrorCode::ParameterHasRatings))
        })?;
    if !deleted {
        return Err(not_found(parameter_id).into());
    }

    tracing::info!(parameter_id, deleted_by = user.user_id, "Performance parameter deleted");
    Ok(Json(serde_json::json!({ "message": "Parameter deleted successfully" })))
}
