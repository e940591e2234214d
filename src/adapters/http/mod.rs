//! HTTP adapters - REST API implementations.
//!
//! - `session` - Session CRUD endpoints, DTOs and error mapping
//! - `router` - Application router with CORS, tracing and timeout layers

pub mod router;
pub mod session;

pub use router::{api_router, cors_layer};
pub use session::SessionAppState;
