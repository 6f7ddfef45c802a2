//! Rating session endpoints
//!
//! Sessions are shared by every organization. Status is derived from the
//! date range each time a session is written.

use axum::Json;
use axum::extract::{Path, State};
use chrono::NaiveDate;
use shared::error::{AppError, ErrorCode};
use shared::models::{RatingSession, SessionCreate, SessionStatus, SessionUpdate};
use shared::util::today;

use super::ApiResult;
use super::extract::ValidatedJson;
use crate::auth::{AllowedRoles, CurrentUser};
use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

fn check_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if end < start {
        return Err(AppError::new(ErrorCode::SessionDateRangeInvalid)
            .with_detail("start_date", start.to_string())
            .with_detail("end_date", end.to_string()));
    }
    Ok(())
}

fn not_found(session_id: i64) -> AppError {
    AppError::new(ErrorCode::SessionNotFound).with_detail("session_id", session_id)
}

/// POST /sessions
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    ValidatedJson(req): ValidatedJson<SessionCreate>,
) -> ApiResult<RatingSession> {
    user.require_role(AllowedRoles::HR_ADMIN)?;
    check_range(req.start_date, req.end_date)?;

    let status = SessionStatus::determine(req.start_date, req.end_date, today());
    let session = db::sessions::insert(
        &state.pool,
        req.session_name.trim(),
        req.start_date,
        req.end_date,
        status,
    )
    .await?;

    tracing::info!(
        session_id = session.session_id,
        status = ?session.status,
        created_by = user.user_id,
        "Rating session created"
    );
    Ok(Json(session))
}

/// GET /sessions
pub async fn list(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Vec<RatingSession>> {
    Ok(Json(db::sessions::list(&state.pool).await?))
}

/// GET /sessions/{session_id}
pub async fn get(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(session_id): Path<i64>,
) -> ApiResult<RatingSession> {
    let session = db::sessions::find_by_id(&state.pool, session_id)
        .await?
        .ok_or_else(|| not_found(session_id))?;
    Ok(Json(session))
}

/// PATCH /sessions/{session_id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(session_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<SessionUpdate>,
) -> ApiResult<RatingSession> {
    user.require_role(AllowedRoles::HR_ADMIN)?;

    let mut tx = state.pool.begin().await?;
    let mut session = db::sessions::lock_by_id(&mut *tx, session_id)
        .await?
        .ok_or_else(|| not_found(session_id))?;

    if let Some(name) = req.session_name.as_deref() {
        session.session_name = name.trim().to_string();
    }
    if let Some(start) = req.start_date {
        session.start_date = start;
    }
    if let Some(end) = req.end_date {
        session.end_date = end;
    }
    check_range(session.start_date, session.end_date)?;
    session.status = SessionStatus::determine(session.start_date, session.end_date, today());

    let updated = db::sessions::update(&mut *tx, &session)
        .await?
        .ok_or_else(|| not_found(session_id))?;
    tx.commit().await?;

    tracing::info!(session_id, status = ?updated.status, updated_by = user.user_id, "Rating session updated");
    Ok(Json(updated))
}

/// DELETE /sessions/{session_id}; refused while ratings reference it
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(session_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    user.require_role(AllowedRoles::HR_ADMIN)?;

    let mut tx = state.pool.begin().await?;
    db::sessions::lock_by_id(&mut *tx, session_id)
        .await?
        .ok_or_else(|| not_found(session_id))?;

    if db::ratings::exist_for_session(&mut *tx, session_id).await? {
        return Err(AppError::new(ErrorCode::SessionHasRatings)
            .with_detail("session_id", session_id)
            .into());
    }

    db::sessions::delete(&mut *tx, session_id)
        .await
        .map_err(|e| {
            ServiceError::foreign_key_violation_as(e, AppError::new(ErrorCode::SessionHasRatings))
        })?;
    tx.commit().await?;

    tracing::info!(session_id, deleted_by = user.user_id, "Rating session deleted");
    Ok(Json(serde_json::json!({ "message": "Session deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_check_range() {
        assert!(check_range(date(2024, 1, 1), date(2024, 1, 31)).is_ok());
        assert!(check_range(date(2024, 1, 1), date(2024, 1, 1)).is_ok());

        let err = check_range(date(2024, 2, 1), date(2024, 1, 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionDateRangeInvalid);
        assert!(err.details.unwrap().contains_key("end_date"));
    }
}
