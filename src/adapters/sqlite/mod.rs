//! SQLite adapters - Database implementations for repository ports.
//!
//! This module provides:
//! - `connect_pool` - Process-wide connection pool from `DatabaseConfig`
//! - `apply_schema` - Idempotent creation of the `sessions` table
//! - `SqliteSessionRepository` - `SessionRepository` backed by the pool

mod pool;
mod schema;
mod session_repository;

pub use pool::connect_pool;
pub use schema::apply_schema;
pub use session_repository::SqliteSessionRepository;
