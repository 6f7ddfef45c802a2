//! appraisal-server: performance appraisal backend
//!
//! Organizations sign up with an HR Admin account, define rating sessions and
//! performance parameters, and managers rate their reports. JWT bearer auth,
//! PostgreSQL storage.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use config::Config;
pub use state::AppState;
