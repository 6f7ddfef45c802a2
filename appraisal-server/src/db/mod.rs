//! Database access layer
//!
//! Each function runs a single statement against any `PgExecutor`, so callers
//! pass `&state.pool` for one-off reads or `&mut *tx` inside a transaction.

pub mod employees;
pub mod organizations;
pub mod parameters;
pub mod ratings;
pub mod sessions;
pub mod users;
