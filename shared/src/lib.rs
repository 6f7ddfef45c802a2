//! Shared types for the appraisal backend
//!
//! Domain vocabulary used by the server and by any Rust client of its API:
//! the unified error system, role and session-status enums, row models and
//! request payloads.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use models::{Role, SessionStatus};
