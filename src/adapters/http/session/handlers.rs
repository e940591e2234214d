//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::session::{
    CreateSessionCommand, CreateSessionHandler, DeleteSessionCommand, DeleteSessionHandler,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler,
};
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

use super::dto::{CreateSessionRequest, DeleteSessionResponse, ErrorResponse, SessionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for session endpoints.
///
/// Cloned per request; the repository (and its pool) is shared behind an Arc.
#[derive(Clone)]
pub struct SessionAppState {
    pub repository: Arc<dyn SessionRepository>,
}

impl SessionAppState {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub fn create_handler(&self) -> CreateSessionHandler {
        CreateSessionHandler::new(self.repository.clone())
    }

    pub fn list_handler(&self) -> ListSessionsHandler {
        ListSessionsHandler::new(self.repository.clone())
    }

    pub fn get_handler(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.repository.clone())
    }

    pub fn delete_handler(&self) -> DeleteSessionHandler {
        DeleteSessionHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Create a new session
pub async fn create_session(
    State(state): State<SessionAppState>,
    payload: Result<Json<CreateSessionRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection.status(), rejection.body_text()),
    };

    let cmd = CreateSessionCommand {
        name: req.name,
        config: req.config,
    };

    match state.create_handler().handle(cmd).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions - List all sessions, newest first
pub async fn list_sessions(State(state): State<SessionAppState>) -> Response {
    match state.list_handler().handle().await {
        Ok(sessions) => {
            let response: Vec<SessionResponse> =
                sessions.into_iter().map(SessionResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/sessions/:id - Get a single session
pub async fn get_session(
    State(state): State<SessionAppState>,
    session_id: Result<Path<i64>, PathRejection>,
) -> Response {
    let session_id = match session_id {
        Ok(Path(id)) => SessionId::from_i64(id),
        Err(rejection) => return rejection_response(rejection.status(), rejection.body_text()),
    };

    match state.get_handler().handle(GetSessionQuery { session_id }).await {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// DELETE /api/sessions/:id - Hard-delete a session
pub async fn delete_session(
    State(state): State<SessionAppState>,
    session_id: Result<Path<i64>, PathRejection>,
) -> Response {
    let session_id = match session_id {
        Ok(Path(id)) => SessionId::from_i64(id),
        Err(rejection) => return rejection_response(rejection.status(), rejection.body_text()),
    };

    match state
        .delete_handler()
        .handle(DeleteSessionCommand { session_id })
        .await
    {
        Ok(()) => (StatusCode::OK, Json(DeleteSessionResponse::ok())).into_response(),
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn rejection_response(status: StatusCode, detail: String) -> Response {
    tracing::debug!(%status, %detail, "Rejected malformed request");
    (status, Json(ErrorResponse::new(detail))).into_response()
}

fn handle_session_error(error: SessionError) -> Response {
    match error {
        SessionError::NotFound(_) => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::not_found())).into_response()
        }
        SessionError::ValidationFailed { message, .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(message)),
        )
            .into_response(),
        SessionError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Session store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal()),
            )
                .into_response()
        }
    }
}
