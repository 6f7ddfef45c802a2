//! Unified error codes for the appraisal backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Organization errors
//! - 4xxx: User errors
//! - 5xxx: Rating session errors
//! - 6xxx: Performance parameter errors
//! - 7xxx: Rating / employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values on the wire so clients can
/// branch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// Too many requests from this client
    TooManyRequests = 9,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is deactivated or deleted
    AccountDisabled = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Caller may not create or assign the requested role
    RoleNotAssignable = 2003,

    // ==================== 3xxx: Organization ====================
    /// Organization not found
    OrganizationNotFound = 3001,
    /// Organization email already registered
    OrganizationEmailExists = 3002,
    /// Organization mobile number already registered
    OrganizationMobileExists = 3003,
    /// Mobile number format is invalid
    InvalidMobileNumber = 3004,

    // ==================== 4xxx: User ====================
    /// User not found
    UserNotFound = 4001,
    /// User email already in use
    UserEmailExists = 4002,

    // ==================== 5xxx: Rating Session ====================
    /// Rating session not found
    SessionNotFound = 5001,
    /// Session end date precedes its start date
    SessionDateRangeInvalid = 5002,
    /// Session still has ratings attached
    SessionHasRatings = 5003,

    // ==================== 6xxx: Performance Parameter ====================
    /// Performance parameter not found
    ParameterNotFound = 6001,
    /// Parameter minimum exceeds its maximum
    ParameterRangeInvalid = 6002,
    /// Parameter still has ratings attached
    ParameterHasRatings = 6003,

    // ==================== 7xxx: Rating / Employee ====================
    /// Employee not found
    EmployeeNotFound = 7001,
    /// Caller is not the employee's manager
    NotEmployeeManager = 7002,
    /// Rating submission contains no ratings
    RatingBatchEmpty = 7003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",
            ErrorCode::TooManyRequests => "Too many requests, try again later",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::AccountDisabled => "Account is disabled",

            // Permission
            ErrorCode::PermissionDenied => "You are not authorized to perform this action",
            ErrorCode::RoleRequired => "Specific role is required",
            ErrorCode::RoleNotAssignable => "You cannot create users with this role",

            // Organization
            ErrorCode::OrganizationNotFound => "Organization not found",
            ErrorCode::OrganizationEmailExists => "Email already exists",
            ErrorCode::OrganizationMobileExists => "Phone number already exists",
            ErrorCode::InvalidMobileNumber => "Mobile number must be 10 digits and start with 6-9",

            // User
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UserEmailExists => "Email is already in use by another user",

            // Session
            ErrorCode::SessionNotFound => "Session not found",
            ErrorCode::SessionDateRangeInvalid => "Session end date must not precede its start date",
            ErrorCode::SessionHasRatings => "Session has submitted ratings",

            // Parameter
            ErrorCode::ParameterNotFound => "Performance parameter not found",
            ErrorCode::ParameterRangeInvalid => "Minimum rating must not exceed maximum rating",
            ErrorCode::ParameterHasRatings => "Performance parameter has submitted ratings",

            // Rating
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::NotEmployeeManager => "You are not the manager of this employee",
            ErrorCode::RatingBatchEmpty => "No ratings submitted",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            9 => Ok(ErrorCode::TooManyRequests),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::AccountDisabled),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::RoleNotAssignable),

            // Organization
            3001 => Ok(ErrorCode::OrganizationNotFound),
            3002 => Ok(ErrorCode::OrganizationEmailExists),
            3003 => Ok(ErrorCode::OrganizationMobileExists),
            3004 => Ok(ErrorCode::InvalidMobileNumber),

            // User
            4001 => Ok(ErrorCode::UserNotFound),
            4002 => Ok(ErrorCode::UserEmailExists),

            // Session
            5001 => Ok(ErrorCode::SessionNotFound),
            5002 => Ok(ErrorCode::SessionDateRangeInvalid),
            5003 => Ok(ErrorCode::SessionHasRatings),

            // Parameter
            6001 => Ok(ErrorCode::ParameterNotFound),
            6002 => Ok(ErrorCode::ParameterRangeInvalid),
            6003 => Ok(ErrorCode::ParameterHasRatings),

            // Rating
            7001 => Ok(ErrorCode::EmployeeNotFound),
            7002 => Ok(ErrorCode::NotEmployeeManager),
            7003 => Ok(ErrorCode::RatingBatchEmpty),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[ErrorCode] = &[
        ErrorCode::Success,
        ErrorCode::Unknown,
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::InvalidRequest,
        ErrorCode::InvalidFormat,
        ErrorCode::RequiredField,
        ErrorCode::ValueOutOfRange,
        ErrorCode::TooManyRequests,
        ErrorCode::NotAuthenticated,
        ErrorCode::InvalidCredentials,
        ErrorCode::TokenExpired,
        ErrorCode::TokenInvalid,
        ErrorCode::AccountDisabled,
        ErrorCode::PermissionDenied,
        ErrorCode::RoleRequired,
        ErrorCode::RoleNotAssignable,
        ErrorCode::OrganizationNotFound,
        ErrorCode::OrganizationEmailExists,
        ErrorCode::OrganizationMobileExists,
        ErrorCode::InvalidMobileNumber,
        ErrorCode::UserNotFound,
        ErrorCode::UserEmailExists,
        ErrorCode::SessionNotFound,
        ErrorCode::SessionDateRangeInvalid,
        ErrorCode::SessionHasRatings,
        ErrorCode::ParameterNotFound,
        ErrorCode::ParameterRangeInvalid,
        ErrorCode::ParameterHasRatings,
        ErrorCode::EmployeeNotFound,
        ErrorCode::NotEmployeeManager,
        ErrorCode::RatingBatchEmpty,
        ErrorCode::InternalError,
        ErrorCode::DatabaseError,
        ErrorCode::ConfigError,
    ];

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::TokenExpired.code(), 1003);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::OrganizationEmailExists.code(), 3002);
        assert_eq!(ErrorCode::UserEmailExists.code(), 4002);
        assert_eq!(ErrorCode::SessionNotFound.code(), 5001);
        assert_eq!(ErrorCode::ParameterNotFound.code(), 6001);
        assert_eq!(ErrorCode::NotEmployeeManager.code(), 7002);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::NotFound.is_success());
    }

    #[test]
    fn test_try_from_covers_every_variant() {
        for code in ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(*code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(8001), Err(InvalidErrorCode(8001)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::SessionHasRatings).unwrap();
        assert_eq!(json, "5003");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("1004").unwrap();
        assert_eq!(code, ErrorCode::TokenInvalid);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("12345");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::UserNotFound), "4001");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(
            ErrorCode::InvalidMobileNumber.message(),
            "Mobile number must be 10 digits and start with 6-9"
        );
        for code in ALL {
            assert!(!code.message().is_empty());
        }
    }
}
