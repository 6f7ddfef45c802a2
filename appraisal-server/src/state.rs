//! Application state

use std::sync::Arc;

use chrono::Duration;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::auth::jwt::{JwtConfig, JwtService};
use crate::auth::password::PasswordPolicy;
use crate::auth::rate_limit::RateLimiter;
use crate::config::Config;

use crate::error::BoxError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Bearer token issuer / validator
    pub jwt: JwtService,
    /// Argon2 cost for newly hashed passwords
    pub password_policy: PasswordPolicy,
    /// Logo stored for organizations that sign up without one
    pub default_logo_url: Arc<str>,
    /// Rate limiter for login/signup routes
    pub rate_limiter: RateLimiter,
}

impl AppState {
    /// Connect to PostgreSQL, run migrations and build the state
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self::with_pool(pool, config))
    }

    /// Build the state around an existing pool
    pub fn with_pool(pool: PgPool, config: &Config) -> Self {
        let jwt = JwtService::with_config(JwtConfig {
            secret: config.jwt_secret.clone(),
            access_ttl: Duration::minutes(config.access_token_ttl_minutes),
            renewed_ttl: Duration::hours(config.renewed_token_ttl_hours),
        });

        Self {
            pool,
            jwt,
            password_policy: config.password_policy,
            default_logo_url: Arc::from(config.default_logo_url.as_str()),
            rate_limiter: RateLimiter::with_trusted_proxy(config.trust_forwarded_for),
        }
    }
}
