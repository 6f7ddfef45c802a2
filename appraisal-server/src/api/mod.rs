//! HTTP API
//!
//! | Route | Access |
//! |-------|--------|
//! | `GET /health` | public |
//! | `POST /organizations` | public, rate limited |
//! | `POST /auth/token` | public, rate limited |
//! | `POST /auth/renew`, `GET /auth/me` | authenticated |
//! | `/organizations/{id}` | members of the organization; PATCH by its HR Admin |
//! | `/users` | members of the organization; writes by HR Admin |
//! | `/sessions`, `/parameters` | authenticated reads; writes by HR Admin |
//! | `/ratings/sessions/{id}` | Manager or HR Admin |

pub mod auth;
pub mod extract;
pub mod health;
pub mod organization;
pub mod parameters;
pub mod ratings;
pub mod sessions;
pub mod users;

use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use tower_http::trace::TraceLayer;

use crate::auth::rate_limit::{login_rate_limit, signup_rate_limit};
use crate::error::ServiceError;
use crate::state::AppState;

pub type ApiResult<T> = Result<Json<T>, ServiceError>;

/// Emails are matched case-insensitively by storing them lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let signup = Router::new()
        .route("/organizations", post(organization::create))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            signup_rate_limit,
        ));

    let login = Router::new()
        .route("/auth/token", post(auth::login))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            login_rate_limit,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/auth/renew", post(auth::renew))
        .route("/auth/me", get(auth::me))
        .route(
            "/organizations/{org_id}",
            get(organization::get).patch(organization::update),
        )
        .route("/users", get(users::list).post(users::create))
        .route("/users/managers", get(users::list_managers))
        .route(
            "/users/{user_id}",
            get(users::get).patch(users::update).delete(users::delete),
        )
        .route("/sessions", get(sessions::list).post(sessions::create))
        .route(
            "/sessions/{session_id}",
            get(sessions::get)
                .patch(sessions::update)
                .delete(sessions::delete),
        )
        .route("/parameters", get(parameters::list).post(parameters::create))
        .route(
            "/parameters/{parameter_id}",
            get(parameters::get)
                .patch(parameters::update)
                .delete(parameters::delete),
        )
        .route(
            "/ratings/sessions/{session_id}",
            get(ratings::list).post(ratings::submit),
        )
        .route(
            "/ratings/sessions/{session_id}/employees",
            get(ratings::roster),
        )
        .merge(signup)
        .merge(login)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Asha@Acme.Test "), "asha@acme.test");
    }
}
