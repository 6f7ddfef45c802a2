use shared::models::{Organization, OrganizationUpdate};
use sqlx::PgExecutor;

/// Columns of a new organization row
#[derive(Debug)]
pub struct NewOrganization<'a> {
    pub org_name: &'a str,
    pub org_email: &'a str,
    pub org_mobile_number: &'a str,
    pub org_address: &'a str,
    pub org_pincode: &'a str,
    pub org_city: &'a str,
    pub org_state: &'a str,
    pub org_country: &'a str,
    pub org_logo: &'a str,
    pub password_hash: &'a str,
    pub full_name: &'a str,
}

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    org: &NewOrganization<'_>,
) -> Result<Organization, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO organizations (
            org_name, org_email, org_mobile_number, org_address, org_pincode,
            org_city, org_state, org_country, org_logo, password_hash, full_name
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING *
        "#,
    )
    .bind(org.org_name)
    .bind(org.org_email)
    .bind(org.org_mobile_number)
    .bind(org.org_address)
    .bind(org.org_pincode)
    .bind(org.org_city)
    .bind(org.org_state)
    .bind(org.org_country)
    .bind(org.org_logo)
    .bind(org.password_hash)
    .bind(org.full_name)
    .fetch_one(executor)
    .await
}

pub async fn find_by_id<'e>(
    executor: impl PgExecutor<'e>,
    org_id: i64,
) -> Result<Option<Organization>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM organizations WHERE org_id = $1")
        .bind(org_id)
        .fetch_optional(executor)
        .await
}

/// Whether another organization already uses `email`
pub async fn email_taken<'e>(
    executor: impl PgExecutor<'e>,
    email: &str,
    exclude_org: Option<i64>,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM organizations
                        WHERE org_email = $1 AND org_id IS DISTINCT FROM $2)",
    )
    .bind(email)
    .bind(exclude_org)
    .fetch_one(executor)
    .await
}

/// Whether another organization already uses `mobile`
pub async fn mobile_taken<'e>(
    executor: impl PgExecutor<'e>,
    mobile: &str,
    exclude_org: Option<i64>,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM organizations
                        WHERE org_mobile_number = $1 AND org_id IS DISTINCT FROM $2)",
    )
    .bind(mobile)
    .bind(exclude_org)
    .fetch_one(executor)
    .await
}

/// Partial update; `None` fields keep their stored value
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    org_id: i64,
    data: &OrganizationUpdate,
    password_hash: Option<&str>,
) -> Result<Option<Organization>, sqlx::Error> {
    sqlx::query_as(
        r#"
        UPDATE organizations SET
            org_name = COALESCE($1, org_name),
            org_email = COALESCE($2, org_email),
            org_mobile_number = COALESCE($3, org_mobile_number),
            org_address = COALESCE($4, org_address),
            org_pincode = COALESCE($5, org_pincode),
            org_city = COALESCE($6, org_city),
            org_state = COALESCE($7, org_state),
            org_country = COALESCE($8, org_country),
            org_logo = COALESCE($9, org_logo),
            password_hash = COALESCE($10, password_hash),
            full_name = COALESCE($11, full_name)
        WHERE org_id = $12
        RETURNING *
        "#,
    )
    .bind(&data.org_name)
    .bind(&data.org_email)
    .bind(&data.org_mobile_number)
    .bind(&data.org_address)
    .bind(&data.org_pincode)
    .bind(&data.org_city)
    .bind(&data.org_state)
    .bind(&data.org_country)
    .bind(&data.org_logo)
    .bind(password_hash)
    .bind(&data.full_name)
    .bind(org_id)
    .fetch_optional(executor)
    .await
}
