//! Session repository port.
//!
//! Defines the contract for persisting and retrieving sessions.
//! Implementations handle the actual database operations.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{NewSession, Session};
use async_trait::async_trait;

/// Repository port for session persistence.
///
/// Every operation touches at most one row, so implementations rely on the
/// store's per-statement atomicity and need no transactions.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session and return it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, session: &NewSession) -> Result<Session, DomainError>;

    /// All sessions, newest first.
    async fn list_all(&self) -> Result<Vec<Session>, DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Hard-delete a session.
    ///
    /// Returns `true` if a row existed and was removed.
    async fn delete_by_id(&self, id: &SessionId) -> Result<bool, DomainError>;
}
