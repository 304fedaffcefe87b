//! Failure of a single request against a [`crate::RecordSource`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The server answered with a non-2xx status.
    #[error("{message} ({status})")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// A response arrived but its body was not what we expected.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl SourceError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SourceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Failure of a mutation that is followed by a list reload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The create, update or delete itself failed; nothing changed.
    #[error(transparent)]
    Mutation(SourceError),
    /// The mutation went through but the list could not be reloaded.
    #[error(transparent)]
    Reload(SourceError),
}
