//! Data models
//!
//! Shared between the appraisal server and any Rust client of its API.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (PostgreSQL BIGSERIAL).

pub mod auth;
pub mod employee;
pub mod organization;
pub mod parameter;
pub mod rating;
pub mod role;
pub mod session;
pub mod user;
pub mod validate;

// Re-exports
pub use auth::*;
pub use employee::*;
pub use organization::*;
pub use parameter::*;
pub use rating::*;
pub use role::*;
pub use session::*;
pub use user::*;
