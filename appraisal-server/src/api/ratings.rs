//! Rating workflow endpoints
//!
//! A submission is all-or-nothing: every entry is checked and inserted inside
//! one transaction, and the first failing entry aborts the batch.

use std::collections::HashSet;

use axum::Json;
use axum::extract::{Path, State};
use shared::error::{AppError, ErrorCode};
use shared::models::{PerformanceRating, RatingSubmission, RatingSubmitted, RosterEntry};

use super::ApiResult;
use super::extract::ValidatedJson;
use crate::auth::{AllowedRoles, CurrentUser};
use crate::db;
use crate::error::ServiceResult;
use crate::state::AppState;

async fn require_session(state: &AppState, session_id: i64) -> ServiceResult<()> {
    db::sessions::find_by_id(&state.pool, session_id)
        .await?
        .ok_or_else(|| session_not_found(session_id))?;
    Ok(())
}

fn session_not_found(session_id: i64) -> AppError {
    AppError::new(ErrorCode::SessionNotFound).with_detail("session_id", session_id)
}

/// POST /ratings/sessions/{session_id}
pub async fn submit(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(session_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<RatingSubmission>,
) -> ApiResult<RatingSubmitted> {
    user.require_role(AllowedRoles::RATERS)?;
    if req.entry_count() == 0 {
        return Err(AppError::new(ErrorCode::RatingBatchEmpty).into());
    }

    let mut tx = state.pool.begin().await?;

    db::sessions::find_by_id(&mut *tx, session_id)
        .await?
        .ok_or_else(|| session_not_found(session_id))?;

    let mut known_parameters = HashSet::new();
    let mut submitted = 0usize;

    for employee_ratings in &req.ratings {
        let emp_id = employee_ratings.emp_id;
        let employee = db::employees::find_by_id(&mut *tx, emp_id)
            .await?
            .ok_or_else(|| {
                AppError::new(ErrorCode::EmployeeNotFound).with_detail("emp_id", emp_id)
            })?;

        if employee.manager_id != Some(user.user_id) {
            tracing::warn!(
                user_id = user.user_id,
                emp_id,
                session_id,
                "Rating refused: caller does not manage employee"
            );
            return Err(AppError::new(ErrorCode::NotEmployeeManager)
                .with_detail("emp_id", emp_id)
                .into());
        }

        for entry in &employee_ratings.ratings {
            if !known_parameters.contains(&entry.parameter_id) {
                if !db::parameters::exists(&mut *tx, entry.parameter_id).await? {
                    return Err(AppError::new(ErrorCode::ParameterNotFound)
                        .with_detail("parameter_id", entry.parameter_id)
                        .into());
                }
                known_parameters.insert(entry.parameter_id);
            }

            db::ratings::insert(
                &mut *tx,
                session_id,
                emp_id,
                entry.parameter_id,
                entry.rating,
                entry.comments.as_deref(),
            )
            .await?;
            submitted += 1;
        }
    }

    tx.commit().await?;

    tracing::info!(
        session_id,
        user_id = user.user_id,
        employees = req.ratings.len(),
        submitted,
        "Ratings submitted"
    );
    Ok(Json(RatingSubmitted {
        message: "Ratings submitted successfully".to_string(),
        submitted,
    }))
}

/// GET /ratings/sessions/{session_id}/employees
pub async fn roster(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(session_id): Path<i64>,
) -> ApiResult<Vec<RosterEntry>> {
    user.require_role(AllowedRoles::RATERS)?;
    require_session(&state, session_id).await?;

    let employees = db::employees::list_by_manager(&state.pool, user.user_id).await?;
    let parameters = db::parameters::list(&state.pool).await?;

    let roster = employees
        .into_iter()
        .map(|employee| RosterEntry {
            employee,
            parameters: parameters.clone(),
        })
        .collect();
    Ok(Json(roster))
}

/// GET /ratings/sessions/{session_id}
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(session_id): Path<i64>,
) -> ApiResult<Vec<PerformanceRating>> {
    user.require_role(AllowedRoles::RATERS)?;
    require_session(&state, session_id).await?;

    let ratings = if user.is_hr_admin() {
        db::ratings::list_for_session_by_org(&state.pool, session_id, user.org()?).await?
    } else {
        db::ratings::list_for_session_by_manager(&state.pool, session_id, user.user_id).await?
    };
    Ok(Json(ratings))
}
