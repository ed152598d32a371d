use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Ways a single decision request can fail. All of them are recovered by
/// retrying and finally by a fallback action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("no response within {0:?}")]
    Timeout(Duration),
    #[error("unusable response: {0}")]
    Parse(String),
}

/// Text-in, text-out decision service for non-human seats.
///
/// The reply is expected to contain a JSON object such as
/// `{"action": "raise", "amount": 20}`; anything around it is ignored.
#[async_trait]
pub trait Collaborator: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CollaboratorError>;

    fn name(&self) -> &str;
}
