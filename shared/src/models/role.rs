//! Role Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization role of a user (and the job role recorded on an employee)
///
/// Stored as the Postgres enum `user_role`; the wire and database spelling of
/// `HrAdmin` is `"HR Admin"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "user_role"))]
pub enum Role {
    Member,
    Manager,
    #[serde(rename = "HR Admin")]
    #[cfg_attr(feature = "db", sqlx(rename = "HR Admin"))]
    HrAdmin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Member, Role::Manager, Role::HrAdmin];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Manager => "Manager",
            Role::HrAdmin => "HR Admin",
        }
    }

    /// Whether a user holding this role may create an account with `target`.
    ///
    /// HR Admins may create any role. Managers and Members may only create
    /// Members.
    pub fn can_create(&self, target: Role) -> bool {
        match self {
            Role::HrAdmin => true,
            Role::Manager | Role::Member => target == Role::Member,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hr_admin_creates_any_role() {
        for target in Role::ALL {
            assert!(Role::HrAdmin.can_create(target));
        }
    }

    #[test]
    fn test_manager_and_member_create_members_only() {
        for creator in [Role::Manager, Role::Member] {
            assert!(creator.can_create(Role::Member));
            assert!(!creator.can_create(Role::Manager));
            assert!(!creator.can_create(Role::HrAdmin));
        }
    }

    #[test]
    fn test_serde_spelling() {
        assert_eq!(
            serde_json::to_string(&Role::HrAdmin).unwrap(),
            "\"HR Admin\""
        );
        let role: Role = serde_json::from_str("\"Manager\"").unwrap();
        assert_eq!(role, Role::Manager);
        assert!(serde_json::from_str::<Role>("\"hr_admin\"").is_err());
    }

    #[test]
    fn test_display_matches_wire_name() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
        }
    }
}
