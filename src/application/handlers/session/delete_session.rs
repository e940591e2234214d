//! DeleteSessionHandler - Command handler for hard-deleting sessions.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

/// Command to delete a session.
#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub session_id: SessionId,
}

/// Handler for deleting sessions.
pub struct DeleteSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl DeleteSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteSessionCommand) -> Result<(), SessionError> {
        if !self.repository.delete_by_id(&cmd.session_id).await? {
            return Err(SessionError::not_found(cmd.session_id));
        }

        tracing::info!(session_id = %cmd.session_id, "Session deleted");
        Ok(())
    }
}
