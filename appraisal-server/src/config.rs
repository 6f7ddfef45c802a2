//! Server configuration

use crate::auth::password::PasswordPolicy;

use crate::error::BoxError;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Upper bound of the connection pool
    pub db_max_connections: u32,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// HS256 signing secret for bearer tokens
    pub jwt_secret: String,
    /// Lifetime of tokens issued at login and signup
    pub access_token_ttl_minutes: i64,
    /// Lifetime of tokens issued by `/auth/renew`
    pub renewed_token_ttl_hours: i64,
    /// Logo stored for organizations that sign up without one
    pub default_logo_url: String,
    /// Argon2 cost for newly hashed passwords
    pub password_policy: PasswordPolicy,
    /// Rate-limit clients by `X-Forwarded-For` (reverse proxy deployments)
    pub trust_forwarded_for: bool,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Parse an optional env var, falling back to `default` when unset.
    fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, BoxError> {
        match std::env::var(name) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse()
                .map_err(|_| format!("{name} has an invalid value: {raw}").into()),
            _ => Ok(default),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let defaults = PasswordPolicy::default();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            db_max_connections: Self::parse_or("DB_MAX_CONNECTIONS", 10)?,
            http_port: Self::parse_or("HTTP_PORT", 8080)?,
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            environment,
            access_token_ttl_minutes: Self::parse_or("ACCESS_TOKEN_TTL_MINUTES", 480)?,
            renewed_token_ttl_hours: Self::parse_or("RENEWED_TOKEN_TTL_HOURS", 24)?,
            default_logo_url: std::env::var("DEFAULT_LOGO_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "https://example.com/default_logo.png".into()),
            password_policy: PasswordPolicy {
                memory_kib: Self::parse_or("PASSWORD_MEMORY_KIB", defaults.memory_kib)?,
                iterations: Self::parse_or("PASSWORD_ITERATIONS", defaults.iterations)?,
                parallelism: Self::parse_or("PASSWORD_PARALLELISM", defaults.parallelism)?,
            },
            trust_forwarded_for: Self::parse_or("TRUST_FORWARDED_FOR", false)?,
        })
    }
}
