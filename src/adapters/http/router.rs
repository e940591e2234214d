//! Top-level HTTP router with cross-cutting layers.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::session::{session_routes, SessionAppState};

/// Open CORS policy: any origin, method and header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Builds the complete application.
///
/// # Routes
///
/// - `/api/sessions` - Session CRUD (see [`session_routes`])
pub fn api_router(state: SessionAppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest("/api/sessions", session_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
