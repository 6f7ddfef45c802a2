use shared::models::Employee;
use sqlx::PgExecutor;

pub async fn find_by_id<'e>(
    executor: impl PgExecutor<'e>,
    emp_id: i64,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees WHERE emp_id = $1")
        .bind(emp_id)
        .fetch_optional(executor)
        .await
}

/// Employees whose manager is the user `manager_id`
pub async fn list_by_manager<'e>(
    executor: impl PgExecutor<'e>,
    manager_id: i64,
) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM employees WHERE manager_id = $1 ORDER BY employee_name, emp_id")
        .bind(manager_id)
        .fetch_all(executor)
        .await
}
