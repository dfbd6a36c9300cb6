use thiserror::Error;

use crate::transport::TransportError;

/// Session-level failures. Precondition failures are rejected synchronously
/// before any network call; transport failures are classified on the way
/// in so callers can prompt for login on `Unauthenticated` without
/// inspecting the transport layer.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("message text is empty")]
    EmptyMessage,

    #[error("a send is already in flight")]
    SendInFlight,

    #[error("no active conversation")]
    NoConversation,

    #[error("no message with id {0}")]
    UnknownMessage(String),

    #[error("authentication required")]
    Unauthenticated,

    #[error(transparent)]
    Transport(TransportError),
}

impl From<TransportError> for SessionError {
    fn from(err: TransportError) -> Self {
        if err.is_unauthenticated() {
            Self::Unauthenticated
        } else {
            Self::Transport(err)
        }
    }
}
