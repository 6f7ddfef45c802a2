//! Authentication and authorization

pub mod extractor;
pub mod jwt;
pub mod password;
pub mod rate_limit;

pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use password::{PasswordPolicy, verify_password};

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Role, User};

/// Roles admitted by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedRoles {
    /// Any authenticated user
    Any,
    Only(&'static [Role]),
}

impl AllowedRoles {
    pub const HR_ADMIN: AllowedRoles = AllowedRoles::Only(&[Role::HrAdmin]);
    pub const RATERS: AllowedRoles = AllowedRoles::Only(&[Role::Manager, Role::HrAdmin]);

    pub fn permits(&self, role: Role) -> bool {
        match self {
            AllowedRoles::Any => true,
            AllowedRoles::Only(roles) => roles.contains(&role),
        }
    }
}

/// The authenticated caller, resolved from the bearer token
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: i64,
    pub org_id: Option<i64>,
    pub role: Role,
    pub user_name: String,
    pub email: String,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            org_id: user.org_id,
            role: user.role,
            user_name: user.user_name,
            email: user.user_email,
        }
    }
}

impl CurrentUser {
    pub fn is_hr_admin(&self) -> bool {
        self.role == Role::HrAdmin
    }

    /// Reject callers whose role is not in `allowed`
    pub fn require_role(&self, allowed: AllowedRoles) -> AppResult<()> {
        if allowed.permits(self.role) {
            return Ok(());
        }
        tracing::warn!(
            user_id = self.user_id,
            role = %self.role,
            "Role not permitted for this action"
        );
        let message = match allowed {
            AllowedRoles::Only(roles) => {
                let names: Vec<&str> = roles.iter().map(Role::as_str).collect();
                format!("Requires role: {}", names.join(" or "))
            }
            AllowedRoles::Any => ErrorCode::RoleRequired.message().to_string(),
        };
        Err(AppError::with_message(ErrorCode::RoleRequired, message))
    }

    /// Reject access to another organization's data
    pub fn require_org(&self, org_id: i64) -> AppResult<()> {
        if self.org_id == Some(org_id) {
            return Ok(());
        }
        tracing::warn!(
            user_id = self.user_id,
            target_org = org_id,
            "Cross-organization access denied"
        );
        Err(AppError::permission_denied(
            "You are not authorized to access this organization",
        ))
    }

    /// The caller's organization, for callers detached from one
    pub fn org(&self) -> AppResult<i64> {
        self.org_id
            .ok_or_else(|| AppError::permission_denied("User is not assigned to an organization"))
    }
}
