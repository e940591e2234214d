//! ListSessionsHandler - Query handler for listing all sessions.

use std::sync::Arc;

use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Handler for listing sessions, newest first.
pub struct ListSessionsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Session>, SessionError> {
        let sessions = self.repository.list_all().await?;
        tracing::debug!(count = sessions.len(), "Listed sessions");
        Ok(sessions)
    }
}
