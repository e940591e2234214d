//! HTTP routes for session endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_session, delete_session, get_session, list_sessions, SessionAppState,
};

/// Creates the session router.
///
/// # Routes
///
/// - `POST /` - Create a session
/// - `GET /` - List sessions, newest first
/// - `GET /:id` - Get one session
/// - `DELETE /:id` - Delete one session
pub fn session_routes() -> Router<SessionAppState> {
    Router::new()
        .route("/", get(list_sessions).post(create_session))
        .route("/:id", get(get_session).delete(delete_session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::sqlite::{apply_schema, connect_pool, SqliteSessionRepository};
    use crate::config::DatabaseConfig;

    async fn app() -> Router {
        let pool = connect_pool(&DatabaseConfig::in_memory()).await.unwrap();
        apply_schema(&pool).await.unwrap();
        let state = SessionAppState::new(Arc::new(SqliteSessionRepository::new(pool)));
        session_routes().with_state(state)
    }

    #[tokio::test]
    async fn list_route_is_mounted() {
        let response = app()
            .await
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn get_route_is_mounted() {
        let response = app()
            .await
            .oneshot(Request::builder().uri("/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unsupported_method_is_rejected() {
        let response = app()
            .await
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri("/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
