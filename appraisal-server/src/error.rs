//! Unified service-layer error type
//!
//! `ServiceError` bridges DB-layer errors (`sqlx::Error`, `BoxError`) and the
//! API-layer error (`AppError`) so handlers can propagate both with `?`.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Service-layer error
///
/// - `Db`: Database/infrastructure errors (logged, mapped to InternalError)
/// - `App`: Business-rule errors (passed through to the client)
#[derive(Debug)]
pub enum ServiceError {
    Db(BoxError),
    App(AppError),
}

impl ServiceError {
    /// Map a unique-constraint violation through `conflict`, anything else to `Db`.
    ///
    /// `conflict` receives the violated constraint name. Covers rows raced in
    /// between an explicit uniqueness check and the write.
    pub fn unique_violation_as(
        err: sqlx::Error,
        conflict: impl FnOnce(Option<&str>) -> AppError,
    ) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return ServiceError::App(conflict(db_err.constraint()));
        }
        ServiceError::Db(err.into())
    }

    /// Map a foreign-key violation to `conflict`, anything else to `Db`.
    pub fn foreign_key_violation_as(err: sqlx::Error, conflict: AppError) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_foreign_key_violation()
        {
            return ServiceError::App(conflict);
        }
        ServiceError::Db(err.into())
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<argon2::password_hash::Error> for ServiceError {
    fn from(e: argon2::password_hash::Error) -> Self {
        ServiceError::Db(format!("password hashing failed: {e}").into())
    }
}

impl From<crate::auth::jwt::JwtError> for ServiceError {
    fn from(e: crate::auth::jwt::JwtError) -> Self {
        ServiceError::Db(e.into())
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(e: validator::ValidationErrors) -> Self {
        ServiceError::App(e.into())
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_db_error_is_not_echoed() {
        let err = ServiceError::from(sqlx::Error::PoolTimedOut);
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::InternalError);
        assert_eq!(app.message, "Internal server error");
        assert_eq!(app.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_app_error_passes_through() {
        let err = ServiceError::from(AppError::new(ErrorCode::SessionNotFound));
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::SessionNotFound);
    }

    #[test]
    fn test_non_unique_error_stays_internal() {
        let err = ServiceError::unique_violation_as(sqlx::Error::RowNotFound, |_| {
            AppError::new(ErrorCode::UserEmailExists)
        });
        assert!(matches!(err, ServiceError::Db(_)));

        let err = ServiceError::foreign_key_violation_as(
            sqlx::Error::PoolClosed,
            AppError::new(ErrorCode::SessionHasRatings),
        );
        assert!(matches!(err, ServiceError::Db(_)));
    }

    #[test]
    fn test_into_response_status() {
        let response = ServiceError::from(AppError::new(ErrorCode::NotEmployeeManager)).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
