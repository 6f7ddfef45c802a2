use shared::models::{Role, User};
use sqlx::PgExecutor;

/// Columns of a new user row
#[derive(Debug)]
pub struct NewUser<'a> {
    pub org_id: i64,
    pub role: Role,
    pub user_name: &'a str,
    pub user_email: &'a str,
    pub user_mobile: &'a str,
    pub password_hash: &'a str,
    pub user_dp: &'a str,
}

/// Partial user update; `None` fields keep their stored value
#[derive(Debug, Default)]
pub struct UserPatch<'a> {
    pub user_name: Option<&'a str>,
    pub user_email: Option<&'a str>,
    pub user_mobile: Option<&'a str>,
    pub password_hash: Option<&'a str>,
    pub user_dp: Option<&'a str>,
    pub is_active: Option<bool>,
}

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    user: &NewUser<'_>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO users (
            org_id, role, user_name, user_email, user_mobile, password_hash, user_dp
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(user.org_id)
    .bind(user.role)
    .bind(user.user_name)
    .bind(user.user_email)
    .bind(user.user_mobile)
    .bind(user.password_hash)
    .bind(user.user_dp)
    .fetch_one(executor)
    .await
}

/// Lookup by email, including deactivated and deleted accounts
pub async fn find_by_email<'e>(
    executor: impl PgExecutor<'e>,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE user_email = $1")
        .bind(email)
        .fetch_optional(executor)
        .await
}

/// Whether any other user, deleted ones included, holds `email`
pub async fn email_taken<'e>(
    executor: impl PgExecutor<'e>,
    email: &str,
    exclude_user: Option<i64>,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM users
                        WHERE user_email = $1 AND user_id IS DISTINCT FROM $2)",
    )
    .bind(email)
    .bind(exclude_user)
    .fetch_one(executor)
    .await
}

/// A live (not soft-deleted) user of `org_id`
pub async fn find_in_org<'e>(
    executor: impl PgExecutor<'e>,
    user_id: i64,
    org_id: i64,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM users WHERE user_id = $1 AND org_id = $2 AND NOT is_deleted",
    )
    .bind(user_id)
    .bind(org_id)
    .fetch_optional(executor)
    .await
}

/// Live users of `org_id`, optionally restricted to one role
pub async fn list_by_org<'e>(
    executor: impl PgExecutor<'e>,
    org_id: i64,
    role: Option<Role>,
) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT * FROM users
        WHERE org_id = $1 AND NOT is_deleted
          AND ($2::user_role IS NULL OR role = $2)
        ORDER BY user_id
        "#,
    )
    .bind(org_id)
    .bind(role)
    .fetch_all(executor)
    .await
}

/// The organization's HR Admin account created at signup
pub async fn find_org_admin<'e>(
    executor: impl PgExecutor<'e>,
    org_id: i64,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT * FROM users
        WHERE org_id = $1 AND role = $2 AND NOT is_deleted
        ORDER BY user_id
        LIMIT 1
        "#,
    )
    .bind(org_id)
    .bind(Role::HrAdmin)
    .fetch_optional(executor)
    .await
}

pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    user_id: i64,
    patch: &UserPatch<'_>,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE users SET
            user_name = COALESCE($1, user_name),
            user_email = COALESCE($2, user_email),
            user_mobile = COALESCE($3, user_mobile),
            password_hash = COALESCE($4, password_hash),
            user_dp = COALESCE($5, user_dp),
            is_active = COALESCE($6, is_active)
        WHERE user_id = $7 AND NOT is_deleted
        RETURNING *
        "#,
    )
    .bind(patch.user_name)
    .bind(patch.user_email)
    .bind(patch.user_mobile)
    .bind(patch.password_hash)
    .bind(patch.user_dp)
    .bind(patch.is_active)
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

/// Flag the user as deleted; returns `false` if no live row matched
pub async fn soft_delete<'e>(
    executor: impl PgExecutor<'e>,
    user_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET is_deleted = TRUE WHERE user_id = $1 AND NOT is_deleted")
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
