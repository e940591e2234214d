//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::session::{Session, SessionConfig};

/// Fixed detail returned for unknown session ids.
pub const SESSION_NOT_FOUND: &str = "Session not found";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new session.
///
/// `config` is required but may be any JSON value, including `null`.
/// Its text is captured verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    pub name: String,
    pub config: SessionConfig,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Session as returned by every read and by create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: i64,
    pub name: String,
    pub config: SessionConfig,
    /// ISO-8601 UTC, or empty when the row has no creation time.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        let id = session.id().as_i64();
        let name = session.name().to_string();
        let created_at = session
            .created_at()
            .map(|ts| ts.to_iso8601())
            .unwrap_or_default();

        Self {
            id,
            name,
            config: session.into_config(),
            created_at,
        }
    }
}

/// Response for a successful delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteSessionResponse {
    pub ok: bool,
}

impl DeleteSessionResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Standard error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(SESSION_NOT_FOUND)
    }

    pub fn internal() -> Self {
        Self::new("Internal server error")
    }
}
