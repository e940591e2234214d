//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateSessionRequest, DeleteSessionResponse, ErrorResponse, SessionResponse,
    SESSION_NOT_FOUND,
};
pub use handlers::SessionAppState;
pub use routes::session_routes;
