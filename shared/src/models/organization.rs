//! Organization Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate::validate_org_mobile;

/// Organization row
#[derive(Debug, Clone)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Organization {
    pub org_id: i64,
    pub org_name: String,
    pub org_email: String,
    pub org_mobile_number: String,
    pub org_address: String,
    pub org_pincode: String,
    pub org_city: String,
    pub org_state: String,
    pub org_country: String,
    pub org_logo: String,
    pub password_hash: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

/// Organization response (without password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationResponse {
    pub org_id: i64,
    pub org_name: String,
    pub org_email: String,
    pub org_mobile_number: String,
    pub org_address: String,
    pub org_pincode: String,
    pub org_city: String,
    pub org_state: String,
    pub org_country: String,
    pub org_logo: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Organization> for OrganizationResponse {
    fn from(org: Organization) -> Self {
        Self {
            org_id: org.org_id,
            org_name: org.org_name,
            org_email: org.org_email,
            org_mobile_number: org.org_mobile_number,
            org_address: org.org_address,
            org_pincode: org.org_pincode,
            org_city: org.org_city,
            org_state: org.org_state,
            org_country: org.org_country,
            org_logo: org.org_logo,
            full_name: org.full_name,
            created_at: org.created_at,
        }
    }
}

/// Organization signup payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrganizationCreate {
    #[validate(length(min = 1, max = 1000))]
    pub org_name: String,
    #[validate(custom(function = "validate_org_mobile"))]
    pub org_mobile_number: String,
    #[validate(email, length(max = 255))]
    pub org_email: String,
    #[serde(default)]
    pub org_address: String,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub org_pincode: String,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub org_city: String,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub org_state: String,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub org_country: String,
    /// Falls back to the configured placeholder logo
    #[validate(length(max = 500))]
    pub org_logo: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
}

/// Update organization payload
///
/// `full_name`, `org_email`, `org_mobile_number` and `password` are mirrored
/// onto the organization's HR Admin account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrganizationUpdate {
    #[validate(length(min = 1, max = 1000))]
    pub org_name: Option<String>,
    #[validate(custom(function = "validate_org_mobile"))]
    pub org_mobile_number: Option<String>,
    #[validate(email, length(max = 255))]
    pub org_email: Option<String>,
    pub org_address: Option<String>,
    #[validate(length(max = 20))]
    pub org_pincode: Option<String>,
    #[validate(length(max = 20))]
    pub org_city: Option<String>,
    #[validate(length(max = 20))]
    pub org_state: Option<String>,
    #[validate(length(max = 20))]
    pub org_country: Option<String>,
    #[validate(length(max = 500))]
    pub org_logo: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> OrganizationCreate {
        serde_json::from_value(serde_json::json!({
            "org_name": "Acme",
            "org_mobile_number": "9876543210",
            "org_email": "a@b.com",
            "password": "correct horse",
            "full_name": "Asha Rao"
        }))
        .unwrap()
    }

    #[test]
    fn test_signup_defaults() {
        let org = signup();
        assert!(org.validate().is_ok());
        assert_eq!(org.org_address, "");
        assert!(org.org_logo.is_none());
    }

    #[test]
    fn test_signup_rejects_bad_mobile() {
        let mut org = signup();
        org.org_mobile_number = "1234567890".to_string();
        let errors = org.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("org_mobile_number"));
    }

    #[test]
    fn test_signup_rejects_bad_email_and_short_password() {
        let mut org = signup();
        org.org_email = "not-an-email".to_string();
        org.password = "short".to_string();
        let errors = org.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("org_email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_signup_caps_logo_and_email_length() {
        let mut org = signup();
        org.org_logo = Some(format!("https://cdn.test/{}", "a".repeat(500)));
        org.org_email = format!("{}@acme.test", "a".repeat(250));
        let errors = org.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("org_logo"));
        assert!(fields.contains_key("org_email"));
    }

    #[test]
    fn test_update_validates_present_fields_only() {
        assert!(OrganizationUpdate::default().validate().is_ok());

        let update = OrganizationUpdate {
            org_mobile_number: Some("5555555555".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
