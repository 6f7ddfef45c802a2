//! Organization endpoints
//!
//! - `POST /organizations`: signup of an organization and its HR Admin, auto-login
//! - `GET /organizations/{org_id}`: profile, members of the organization only
//! - `PATCH /organizations/{org_id}`: partial update by the organization's HR Admin

use axum::Json;
use axum::extract::{Path, State};
use shared::error::{AppError, ErrorCode};
use shared::models::{
    OrganizationCreate, OrganizationCreated, OrganizationResponse, OrganizationUpdate, Role,
    TokenResponse,
};

use super::extract::ValidatedJson;
use super::{ApiResult, normalize_email};
use crate::auth::{AllowedRoles, CurrentUser};
use crate::db;
use crate::db::organizations::NewOrganization;
use crate::db::users::{NewUser, UserPatch};
use crate::error::ServiceError;
use crate::state::AppState;

fn org_conflict(constraint: Option<&str>) -> AppError {
    match constraint {
        Some(c) if c.contains("mobile") => AppError::new(ErrorCode::OrganizationMobileExists),
        _ => AppError::new(ErrorCode::OrganizationEmailExists),
    }
}

/// POST /organizations
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<OrganizationCreate>,
) -> ApiResult<OrganizationCreated> {
    let email = normalize_email(&req.org_email);

    if db::organizations::email_taken(&state.pool, &email, None).await? {
        return Err(AppError::new(ErrorCode::OrganizationEmailExists).into());
    }
    if db::organizations::mobile_taken(&state.pool, &req.org_mobile_number, None).await? {
        return Err(AppError::new(ErrorCode::OrganizationMobileExists).into());
    }
    // The HR Admin signs in with the organization email
    if db::users::email_taken(&state.pool, &email, None).await? {
        return Err(AppError::new(ErrorCode::UserEmailExists).into());
    }

    let password_hash = state.password_policy.hash_password(&req.password)?;
    let org_logo = req
        .org_logo
        .as_deref()
        .map(str::trim)
        .filter(|logo| !logo.is_empty())
        .unwrap_or(&state.default_logo_url[..]);

    let mut tx = state.pool.begin().await?;

    let org = db::organizations::insert(
        &mut *tx,
        &NewOrganization {
            org_name: req.org_name.trim(),
            org_email: &email,
            org_mobile_number: &req.org_mobile_number,
            org_address: &req.org_address,
            org_pincode: &req.org_pincode,
            org_city: &req.org_city,
            org_state: &req.org_state,
            org_country: &req.org_country,
            org_logo,
            password_hash: &password_hash,
            full_name: req.full_name.trim(),
        },
    )
    .await
    .map_err(|e| ServiceError::unique_violation_as(e, org_conflict))?;

    let admin = db::users::insert(
        &mut *tx,
        &NewUser {
            org_id: org.org_id,
            role: Role::HrAdmin,
            user_name: &org.full_name,
            user_email: &org.org_email,
            user_mobile: &org.org_mobile_number,
            password_hash: &org.password_hash,
            user_dp: "",
        },
    )
    .await
    .map_err(|e| {
        ServiceError::unique_violation_as(e, |_| AppError::new(ErrorCode::UserEmailExists))
    })?;

    // Signed before commit so a signing failure leaves nothing behind
    let token = state.jwt.issue_access_token(&admin.user_email, admin.role)?;

    tx.commit().await?;

    tracing::info!(
        org_id = org.org_id,
        user_id = admin.user_id,
        "Organization provisioned"
    );

    Ok(Json(OrganizationCreated {
        token: TokenResponse::bearer(
            token,
            admin.user_id,
            admin.user_name,
            admin.role,
            admin.org_id,
        ),
        org_logo: org.org_logo,
    }))
}

/// GET /organizations/{org_id}
pub async fn get(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(org_id): Path<i64>,
) -> ApiResult<OrganizationResponse> {
    user.require_org(org_id)?;

    let org = db::organizations::find_by_id(&state.pool, org_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrganizationNotFound))?;
    Ok(Json(org.into()))
}

/// PATCH /organizations/{org_id}
///
/// Name, email, mobile and password changes are mirrored onto the
/// organization's HR Admin account in the same transaction.
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(org_id): Path<i64>,
    ValidatedJson(req): ValidatedJson<OrganizationUpdate>,
) -> ApiResult<OrganizationResponse> {
    user.require_role(AllowedRoles::HR_ADMIN)?;
    user.require_org(org_id)?;

    let password_hash = req
        .password
        .as_deref()
        .map(|p| state.password_policy.hash_password(p))
        .transpose()?;
    let data = OrganizationUpdate {
        org_email: req.org_email.as_deref().map(normalize_email),
        password: None,
        ..req
    };

    let mut tx = state.pool.begin().await?;

    db::organizations::find_by_id(&mut *tx, org_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrganizationNotFound))?;

    if let Some(email) = data.org_email.as_deref()
        && db::organizations::email_taken(&mut *tx, email, Some(org_id)).await?
    {
        return Err(AppError::new(ErrorCode::OrganizationEmailExists).into());
    }
    if let Some(mobile) = data.org_mobile_number.as_deref()
        && db::organizations::mobile_taken(&mut *tx, mobile, Some(org_id)).await?
    {
        return Err(AppError::new(ErrorCode::OrganizationMobileExists).into());
    }

    let admin = db::users::find_org_admin(&mut *tx, org_id).await?;
    if let (Some(admin), Some(email)) = (&admin, data.org_email.as_deref())
        && db::users::email_taken(&mut *tx, email, Some(admin.user_id)).await?
    {
        return Err(AppError::new(ErrorCode::UserEmailExists).into());
    }

    let org = db::organizations::update(&mut *tx, org_id, &data, password_hash.as_deref())
        .await
        .map_err(|e| ServiceError::unique_violation_as(e, org_conflict))?
        .ok_or_else(|| AppError::new(ErrorCode::OrganizationNotFound))?;

    if let Some(admin) = admin {
        let patch = UserPatch {
            user_name: data.full_name.as_deref(),
            user_email: data.org_email.as_deref(),
            user_mobile: data.org_mobile_number.as_deref(),
            password_hash: password_hash.as_deref(),
            ..Default::default()
        };
        db::users::update(&mut *tx, admin.user_id, &patch)
            .await
            .map_err(|e| {
                ServiceError::unique_violation_as(e, |_| AppError::new(ErrorCode::UserEmailExists))
            })?;
    }

    tx.commit().await?;

    tracing::info!(org_id, user_id = user.user_id, "Organization updated");
    Ok(Json(org.into()))
}
