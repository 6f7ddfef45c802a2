use shared::models::PerformanceParameter;
use sqlx::PgExecutor;

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    name: &str,
    min_rating: i32,
    max_rating: i32,
) -> Result<PerformanceParameter, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO performance_parameters (name, min_rating, max_rating)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(min_rating)
    .bind(max_rating)
    .fetch_one(executor)
    .await
}

pub async fn find_by_id<'e>(
    executor: impl PgExecutor<'e>,
    parameter_id: i64,
) -> Result<Option<PerformanceParameter>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM performance_parameters WHERE parameter_id = $1")
        .bind(parameter_id)
        .fetch_optional(executor)
        .await
}

pub async fn exists<'e>(executor: impl PgExecutor<'e>, parameter_id: i64) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM performance_parameters WHERE parameter_id = $1)",
    )
    .bind(parameter_id)
    .fetch_one(executor)
    .await
}

pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
) -> Result<Vec<PerformanceParameter>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM performance_parameters ORDER BY parameter_id")
        .fetch_all(executor)
        .await
}

/// Overwrite every column; callers merge the patch first
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    parameter: &PerformanceParameter,
) -> Result<Option<PerformanceParameter>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE performance_parameters
        SET name = $1, min_rating = $2, max_rating = $3
        WHERE parameter_id = $4
        RETURNING *
        "#,
    )
    .bind(&parameter.name)
    .bind(parameter.min_rating)
    .bind(parameter.max_rating)
    .bind(parameter.parameter_id)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e>(executor: impl PgExecutor<'e>, parameter_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM performance_parameters WHERE parameter_id = $1")
        .bind(parameter_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
