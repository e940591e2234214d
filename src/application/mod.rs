//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create, delete) mutate the store; query handlers
//! (list, get) are read-only.

pub mod handlers;

pub use handlers::session::{
    CreateSessionCommand, CreateSessionHandler, DeleteSessionCommand, DeleteSessionHandler,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler,
};
