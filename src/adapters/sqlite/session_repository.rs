//! SQLite implementation of SessionRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::session::{NewSession, Session, SessionConfig};
use crate::ports::SessionRepository;

/// SQLite implementation of SessionRepository.
#[derive(Clone)]
pub struct SqliteSessionRepository {
    pool: SqlitePool,
}

impl SqliteSessionRepository {
    /// Creates a new SqliteSessionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn insert(&self, session: &NewSession) -> Result<Session, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO sessions (name, config, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, config, created_at
            "#,
        )
        .bind(session.name())
        .bind(session.config().as_str())
        // Fixed-width text keeps lexical and chronological order identical.
        .bind(session.created_at().to_iso8601())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert session", e))?;

        let session = row_to_session(row)?;
        tracing::debug!(session_id = %session.id(), "Inserted session row");
        Ok(session)
    }

    async fn list_all(&self) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, config, created_at
            FROM sessions
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list sessions", e))?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query("SELECT id, name, config, created_at FROM sessions WHERE id = ?1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch session", e))?;

        row.map(row_to_session).transpose()
    }

    async fn delete_by_id(&self, id: &SessionId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete session", e))?;

        let deleted = result.rows_affected() > 0;
        tracing::debug!(session_id = %id, deleted, "Delete session row");
        Ok(deleted)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Row mapping
// ════════════════════════════════════════════════════════════════════════════

fn row_to_session(row: SqliteRow) -> Result<Session, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;

    let name: String = row
        .try_get("name")
        .map_err(|e| DomainError::database("Failed to get name", e))?;

    let config_text: String = row
        .try_get("config")
        .map_err(|e| DomainError::database("Failed to get config", e))?;

    let created_at: Option<DateTime<Utc>> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database("Failed to get created_at", e))?;

    // A row whose config no longer parses is corrupt, not a client error.
    let config = SessionConfig::parse(&config_text).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Corrupt config in session {}: {}", id, e),
        )
    })?;

    Ok(Session::reconstitute(
        SessionId::from_i64(id),
        name,
        config,
        created_at.map(Timestamp::from_datetime),
    ))
}
