//! Rating Session Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lifecycle status of a rating session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "session_status"))]
pub enum SessionStatus {
    New,
    Active,
    Closed,
}

impl SessionStatus {
    /// Derive the status of a session spanning `start..=end` as of `today`.
    ///
    /// The start day itself still reads as `New`.
    pub fn determine(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> Self {
        if today == start {
            SessionStatus::New
        } else if start <= today && today <= end {
            SessionStatus::Active
        } else if today > end {
            SessionStatus::Closed
        } else {
            SessionStatus::New
        }
    }
}

/// Rating session row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RatingSession {
    pub session_id: i64,
    pub session_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SessionStatus,
}

/// Create session payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionCreate {
    #[validate(length(min = 1, max = 255))]
    pub session_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Update session payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SessionUpdate {
    #[validate(length(min = 1, max = 255))]
    pub session_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_start_day_is_new() {
        assert_eq!(
            SessionStatus::determine(d(2024, 1, 1), d(2024, 1, 1), d(2024, 1, 1)),
            SessionStatus::New
        );
        assert_eq!(
            SessionStatus::determine(d(2024, 1, 1), d(2024, 12, 31), d(2024, 1, 1)),
            SessionStatus::New
        );
    }

    #[test]
    fn test_within_range_is_active() {
        assert_eq!(
            SessionStatus::determine(d(2024, 1, 1), d(2024, 12, 31), d(2024, 6, 1)),
            SessionStatus::Active
        );
        assert_eq!(
            SessionStatus::determine(d(2024, 1, 1), d(2024, 12, 31), d(2024, 12, 31)),
            SessionStatus::Active
        );
    }

    #[test]
    fn test_after_end_is_closed() {
        assert_eq!(
            SessionStatus::determine(d(2024, 1, 1), d(2024, 1, 31), d(2024, 2, 1)),
            SessionStatus::Closed
        );
    }

    #[test]
    fn test_before_start_is_new() {
        assert_eq!(
            SessionStatus::determine(d(2024, 3, 1), d(2024, 3, 31), d(2024, 2, 1)),
            SessionStatus::New
        );
    }

    #[test]
    fn test_serialize_status() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Active).unwrap(),
            "\"Active\""
        );
    }

    #[test]
    fn test_session_dates_use_iso_format() {
        let create: SessionCreate = serde_json::from_str(
            r#"{"session_name":"H1 2024","start_date":"2024-01-01","end_date":"2024-06-30"}"#,
        )
        .unwrap();
        assert_eq!(create.start_date, d(2024, 1, 1));
        assert!(create.validate().is_ok());
    }
}
