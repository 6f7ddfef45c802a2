//! Bearer token service
//!
//! Issues and validates the HS256 tokens carried in `Authorization: Bearer`.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use shared::models::Role;
use thiserror::Error;

/// Token lifetimes and signing secret
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime of tokens issued at login and signup
    pub access_ttl: Duration,
    /// Lifetime of tokens issued on renewal
    pub renewed_ttl: Duration,
}

/// Claims carried in every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User email
    pub sub: String,
    pub role: Role,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiration (Unix seconds)
    pub exp: i64,
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token expired")]
    ExpiredToken,

    #[error("invalid signature")]
    InvalidSignature,

    #[error("token generation failed: {0}")]
    GenerationFailed(String),
}

#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_ttl", &self.config.access_ttl)
            .field("renewed_ttl", &self.config.renewed_ttl)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Sign a token for `email` with `role` that expires after `ttl`
    pub fn issue_token(&self, email: &str, role: Role, ttl: Duration) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    pub fn issue_access_token(&self, email: &str, role: Role) -> Result<String, JwtError> {
        self.issue_token(email, role, self.config.access_ttl)
    }

    pub fn issue_renewed_token(&self, email: &str, role: Role) -> Result<String, JwtError> {
        self.issue_token(email, role, self.config.renewed_ttl)
    }

    /// Verify signature and expiry (no leeway) and decode the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ").map(str::trim).filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: secret.to_string(),
            access_ttl: Duration::hours(8),
            renewed_ttl: Duration::hours(24),
        })
    }

    #[test]
    fn test_round_trip() {
        let jwt = service("test-secret");
        let token = jwt.issue_access_token("a@b.com", Role::HrAdmin).unwrap();
        let claims = jwt.validate_token(&token).unwrap();

        assert_eq!(claims.sub, "a@b.com");
        assert_eq!(claims.role, Role::HrAdmin);
        assert_eq!(claims.exp - claims.iat, 8 * 3600);
    }

    #[test]
    fn test_renewed_lifetime() {
        let jwt = service("test-secret");
        let token = jwt.issue_renewed_token("m@b.com", Role::Manager).unwrap();
        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_expired_token() {
        let jwt = service("test-secret");
        let token = jwt
            .issue_token("a@b.com", Role::Member, Duration::seconds(-30))
            .unwrap();
        assert!(matches!(
            jwt.validate_token(&token),
            Err(JwtError::ExpiredToken)
        ));
    }

    #[test]
    fn test_wrong_secret() {
        let token = service("secret-a")
            .issue_access_token("a@b.com", Role::Member)
            .unwrap();
        assert!(matches!(
            service("secret-b").validate_token(&token),
            Err(JwtError::InvalidSignature)
        ));
    }

    #[test]
    fn test_garbage_token() {
        assert!(matches!(
            service("s").validate_token("not.a.token"),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
        assert_eq!(JwtService::extract_from_header("Bearer "), None);
    }
}
