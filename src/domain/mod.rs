//! Domain layer containing the session entity and its vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors)
//! - `session` - Session entity, opaque config, and session errors

pub mod foundation;
pub mod session;
