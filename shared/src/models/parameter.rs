//! Performance Parameter Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Performance parameter row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PerformanceParameter {
    pub parameter_id: i64,
    pub name: String,
    pub min_rating: i32,
    pub max_rating: i32,
}

/// Create parameter payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParameterCreate {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub min_rating: i32,
    pub max_rating: i32,
}

/// Update parameter payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ParameterUpdate {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub min_rating: Option<i32>,
    pub max_rating: Option<i32>,
}
