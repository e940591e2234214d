//! CreateSessionHandler - Command handler for creating new sessions.

use std::sync::Arc;

use crate::domain::session::{NewSession, Session, SessionConfig, SessionError};
use crate::ports::SessionRepository;

/// Command to create a new session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub name: String,
    pub config: SessionConfig,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<Session, SessionError> {
        let draft = NewSession::new(cmd.name, cmd.config)?;

        let session = self.repository.insert(&draft).await?;

        tracing::info!(
            session_id = %session.id(),
            name = %session.name(),
            "Session created"
        );

        Ok(session)
    }
}
