use shared::models::PerformanceRating;
use sqlx::PgExecutor;

/// Append one rating row; duplicates for the same triple are kept
pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    session_id: i64,
    emp_id: i64,
    parameter_id: i64,
    rating: i32,
    comments: Option<&str>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO performance_ratings (session_id, emp_id, parameter_id, rating, comments)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING rating_id
        "#,
    )
    .bind(session_id)
    .bind(emp_id)
    .bind(parameter_id)
    .bind(rating)
    .bind(comments)
    .fetch_one(executor)
    .await
}

pub async fn exist_for_session<'e>(
    executor: impl PgExecutor<'e>,
    session_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM performance_ratings WHERE session_id = $1)")
        .bind(session_id)
        .fetch_one(executor)
        .await
}

pub async fn exist_for_parameter<'e>(
    executor: impl PgExecutor<'e>,
    parameter_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM performance_ratings WHERE parameter_id = $1)")
        .bind(parameter_id)
        .fetch_one(executor)
        .await
}

/// Ratings of the session restricted to employees whose manager belongs to `org_id`
pub async fn list_for_session_by_org<'e>(
    executor: impl PgExecutor<'e>,
    session_id: i64,
    org_id: i64,
) -> Result<Vec<PerformanceRating>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT r.* FROM performance_ratings r
        JOIN employees e ON e.emp_id = r.emp_id
        JOIN users m ON m.user_id = e.manager_id
        WHERE r.session_id = $1 AND m.org_id = $2
        ORDER BY r.emp_id, r.rating_id
        "#,
    )
    .bind(session_id)
    .bind(org_id)
    .fetch_all(executor)
    .await
}

/// Ratings of the session restricted to employees managed by `manager_id`
pub async fn list_for_session_by_manager<'e>(
    executor: impl PgExecutor<'e>,
    session_id: i64,
    manager_id: i64,
) -> Result<Vec<PerformanceRating>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT r.* FROM performance_ratings r
        JOIN employees e ON e.emp_id = r.emp_id
        WHERE r.session_id = $1 AND e.manager_id = $2
        ORDER BY r.emp_id, r.rating_id
        "#,
    )
    .bind(session_id)
    .bind(manager_id)
    .fetch_all(executor)
    .await
}
