//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `sqlite` - SQLite-backed session repository

pub mod http;
pub mod sqlite;
