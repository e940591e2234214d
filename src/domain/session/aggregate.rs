//! Session entity.
//!
//! A session is a named snapshot of a client's layout configuration. The
//! store assigns its id; the service assigns its creation time.

use crate::domain::foundation::{SessionId, Timestamp, ValidationError};

use super::config::SessionConfig;

/// A session that has not been persisted yet.
///
/// # Invariants
///
/// - `name` is non-empty after trimming whitespace
/// - `created_at` is fixed here and never changes afterwards
#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    name: String,
    config: SessionConfig,
    created_at: Timestamp,
}

impl NewSession {
    /// Create a new session draft stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is blank
    pub fn new(name: impl Into<String>, config: SessionConfig) -> Result<Self, ValidationError> {
        let name = name.into();
        Session::validate_name(&name)?;

        Ok(Self {
            name,
            config,
            created_at: Timestamp::now(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// A persisted session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Store-assigned identifier.
    id: SessionId,

    /// Free-form display name. Not unique.
    name: String,

    /// Opaque client configuration.
    config: SessionConfig,

    /// Creation time. `None` only for rows written by another writer
    /// that left the column null.
    created_at: Option<Timestamp>,
}

impl Session {
    /// Reconstitute a session from persistence (no validation).
    pub fn reconstitute(
        id: SessionId,
        name: String,
        config: SessionConfig,
        created_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            name,
            config,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the session name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the stored configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns when the session was created, if known.
    pub fn created_at(&self) -> Option<&Timestamp> {
        self.created_at.as_ref()
    }

    /// Consumes the session, yielding its configuration.
    pub fn into_config(self) -> SessionConfig {
        self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_name(name: &str) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(())
    }
}
