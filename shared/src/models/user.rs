//! User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::role::Role;
use super::validate::validate_user_mobile;

/// User row
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub user_id: i64,
    pub org_id: Option<i64>,
    pub role: Role,
    pub user_name: String,
    pub user_email: String,
    pub user_mobile: String,
    pub password_hash: String,
    pub user_dp: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub is_deleted: bool,
}

impl User {
    /// Deleted or deactivated accounts cannot authenticate
    pub fn can_login(&self) -> bool {
        self.is_active && !self.is_deleted
    }
}

/// User response (without password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub org_id: Option<i64>,
    pub role: Role,
    pub user_name: String,
    pub user_email: String,
    pub user_mobile: String,
    pub user_dp: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            org_id: user.org_id,
            role: user.role,
            user_name: user.user_name,
            user_email: user.user_email,
            user_mobile: user.user_mobile,
            user_dp: user.user_dp,
            created_at: user.created_at,
            is_active: user.is_active,
        }
    }
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    /// Defaults to the caller's organization
    pub org_id: Option<i64>,
    pub role: Role,
    #[validate(length(min = 1, max = 255))]
    pub user_name: String,
    #[validate(email, length(max = 255))]
    pub user_email: String,
    #[validate(custom(function = "validate_user_mobile"))]
    pub user_mobile: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub user_password: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub user_dp: String,
}

/// Update user payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserUpdate {
    #[validate(length(min = 1, max = 255))]
    pub user_name: Option<String>,
    #[validate(email, length(max = 255))]
    pub user_email: Option<String>,
    #[validate(custom(function = "validate_user_mobile"))]
    pub user_mobile: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub user_password: Option<String>,
    #[validate(length(max = 500))]
    pub user_dp: Option<String>,
    /// HR Admin only
    pub is_active: Option<bool>,
}

/// `GET /users` query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserListQuery {
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            user_id: 1,
            org_id: Some(1),
            role: Role::Manager,
            user_name: "Ravi".into(),
            user_email: "ravi@acme.test".into(),
            user_mobile: "9876543210".into(),
            password_hash: "$argon2id$...".into(),
            user_dp: String::new(),
            created_at: Utc::now(),
            is_active: true,
            is_deleted: false,
        }
    }

    #[test]
    fn test_can_login() {
        let mut u = user();
        assert!(u.can_login());
        u.is_active = false;
        assert!(!u.can_login());
        u.is_active = true;
        u.is_deleted = true;
        assert!(!u.can_login());
    }

    #[test]
    fn test_response_omits_password() {
        let json = serde_json::to_value(UserResponse::from(user())).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "Manager");
    }

    #[test]
    fn test_create_validation() {
        let create: UserCreate = serde_json::from_value(serde_json::json!({
            "role": "Member",
            "user_name": "Meera",
            "user_email": "meera@acme.test",
            "user_mobile": "12345",
            "user_password": "long enough"
        }))
        .unwrap();
        assert!(create.org_id.is_none());
        let errors = create.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_mobile"));
    }

    #[test]
    fn test_update_caps_picture_length() {
        let update = UserUpdate {
            user_dp: Some("p".repeat(501)),
            ..Default::default()
        };
        let errors = update.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_dp"));
    }
}
