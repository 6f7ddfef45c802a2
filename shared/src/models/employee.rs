//! Employee Model

use serde::{Deserialize, Serialize};

use super::parameter::PerformanceParameter;
use super::role::Role;

/// Employee row (the person being rated)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub emp_id: i64,
    pub employee_code: String,
    pub employee_name: String,
    pub designation: String,
    pub role: Role,
    /// Managing user (`users.user_id`)
    pub manager_id: Option<i64>,
    pub department_id: Option<i64>,
    pub project_id: Option<i64>,
}

/// A report of the calling manager with the parameters to rate them on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(flatten)]
    pub employee: Employee,
    pub parameters: Vec<PerformanceParameter>,
}
