//! Session domain module.
//!
//! A session is a named record wrapping an opaque JSON configuration.
//! Sessions are created, read and hard-deleted; they are never updated.

mod aggregate;
mod config;
mod errors;

pub use aggregate::{NewSession, Session};
pub use config::SessionConfig;
pub use errors::SessionError;
