use async_trait::async_trait;
use thiserror::Error;

use scholia_core::models::{Conversation, ConversationPage};

/// Failure of a backend call, classified only as far as the UI needs:
/// "authentication required" is distinct, everything else is generic.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("authentication required")]
    Unauthenticated,

    #[error("backend error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}

/// The seam to the conversation backend.
///
/// Every operation returns the full, authoritative [`Conversation`] — the
/// session adopts it wholesale rather than patching local state.
#[async_trait]
pub trait Transport: Send + Sync {
    /// The user's active conversation.
    async fn active_conversation(&self) -> Result<Conversation, TransportError>;

    /// Start a new conversation and make it active.
    async fn create_conversation(&self) -> Result<Conversation, TransportError>;

    /// A specific conversation by id.
    async fn conversation(&self, conversation_id: &str) -> Result<Conversation, TransportError>;

    /// Send one user message; the response contains the confirmed user
    /// message and the generated assistant reply.
    async fn send_message(
        &self,
        conversation_id: &str,
        text: &str,
    ) -> Result<Conversation, TransportError>;

    /// One page of conversation history.
    async fn list_conversations(&self) -> Result<ConversationPage, TransportError>;
}
