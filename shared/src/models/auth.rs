//! Authentication payloads

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Form-encoded login request (`username` carries the email)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Issued bearer token with the identity it belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: i64,
    pub user_name: String,
    pub role: Role,
    pub org_id: Option<i64>,
}

impl TokenResponse {
    pub fn bearer(
        access_token: String,
        user_id: i64,
        user_name: String,
        role: Role,
        org_id: Option<i64>,
    ) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user_id,
            user_name,
            role,
            org_id,
        }
    }
}

/// Signup response: the HR Admin's token plus the organization logo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationCreated {
    #[serde(flatten)]
    pub token: TokenResponse,
    pub org_logo: String,
}
