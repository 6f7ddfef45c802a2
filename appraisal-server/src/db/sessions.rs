use chrono::NaiveDate;
use shared::models::{RatingSession, SessionStatus};
use sqlx::PgExecutor;

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    session_name: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: SessionStatus,
) -> Result<RatingSession, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO rating_sessions (session_name, start_date, end_date, status)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(session_name)
    .bind(start_date)
    .bind(end_date)
    .bind(status)
    .fetch_one(executor)
    .await
}

pub async fn find_by_id<'e>(
    executor: impl PgExecutor<'e>,
    session_id: i64,
) -> Result<Option<RatingSession>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM rating_sessions WHERE session_id = $1")
        .bind(session_id)
        .fetch_optional(executor)
        .await
}

/// Row lock held until the surrounding transaction ends
pub async fn lock_by_id<'e>(
    executor: impl PgExecutor<'e>,
    session_id: i64,
) -> Result<Option<RatingSession>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM rating_sessions WHERE session_id = $1 FOR UPDATE")
        .bind(session_id)
        .fetch_optional(executor)
        .await
}

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<RatingSession>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM rating_sessions ORDER BY start_date DESC, session_id DESC")
        .fetch_all(executor)
        .await
}

/// Overwrite every column; callers merge the patch and recompute `status`
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    session: &RatingSession,
) -> Result<Option<RatingSession>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE rating_sessions
        SET session_name = $1, start_date = $2, end_date = $3, status = $4
        WHERE session_id = $5
        RETURNING *
        "#,
    )
    .bind(&session.session_name)
    .bind(session.start_date)
    .bind(session.end_date)
    .bind(session.status)
    .bind(session.session_id)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, session_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM rating_sessions WHERE session_id = $1")
        .bind(session_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
