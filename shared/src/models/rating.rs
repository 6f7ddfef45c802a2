//! Performance Rating Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Performance rating row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PerformanceRating {
    pub rating_id: i64,
    pub emp_id: i64,
    pub parameter_id: i64,
    pub session_id: i64,
    pub rating: i32,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One parameter score inside a submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParameterRating {
    pub parameter_id: i64,
    pub rating: i32,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub comments: Option<String>,
}

/// All scores for one employee inside a submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeeRatings {
    pub emp_id: i64,
    #[validate(nested)]
    pub ratings: Vec<ParameterRating>,
}

/// `POST /ratings/sessions/{session_id}` body
///
/// Entries are validated one by one; an empty batch is rejected by the
/// handler with its own error code.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RatingSubmission {
    #[validate(nested)]
    pub ratings: Vec<EmployeeRatings>,
}

impl RatingSubmission {
    /// Number of rating rows this submission produces
    pub fn entry_count(&self) -> usize {
        self.ratings.iter().map(|e| e.ratings.len()).sum()
    }
}

/// Acknowledgement of a stored submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingSubmitted {
    pub message: String,
    pub submitted: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_shape() {
        let body: RatingSubmission = serde_json::from_str(
            r#"{"ratings":[
                {"emp_id":1,"ratings":[{"parameter_id":1,"rating":4,"comments":"solid"},{"parameter_id":2,"rating":3}]},
                {"emp_id":2,"ratings":[]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(body.entry_count(), 2);
        assert!(body.ratings[0].ratings[1].comments.is_none());
    }

    #[test]
    fn test_long_comment_fails_validation() {
        let mut body: RatingSubmission = serde_json::from_str(
            r#"{"ratings":[{"emp_id":1,"ratings":[{"parameter_id":1,"rating":4,"comments":"ok"}]}]}"#,
        )
        .unwrap();
        assert!(body.validate().is_ok());

        body.ratings[0].ratings[0].comments = Some("x".repeat(256));
        let errors = body.validate().unwrap_err();
        assert!(errors.errors().contains_key("ratings"));
    }
}
