//! The conversation session state machine.
//!
//! One `ConversationSession` owns one conversation's client state. Sends
//! are optimistic: the outgoing message is appended immediately with
//! `Pending` status, then reconciled against the server's authoritative
//! copy on success or flagged `Failed` for explicit retry. The `sending`
//! flag is a cooperative guard — the runtime is event-driven, but without
//! it a caller could double-submit before the first response lands.

use std::sync::{Mutex, MutexGuard};

use tracing::{info, warn};

use scholia_core::models::{Conversation, ConversationPage, DeliveryStatus, Message};

use crate::error::SessionError;
use crate::transport::{Transport, TransportError};

#[derive(Debug, Default)]
struct SessionState {
    conversation: Option<Conversation>,
    sending: bool,
}

/// Client-side owner of the currently displayed conversation.
///
/// Methods take `&self`; state lives behind a mutex that is locked only for
/// synchronous reads and updates, never across an await.
pub struct ConversationSession<T> {
    transport: T,
    state: Mutex<SessionState>,
}

impl<T: Transport> ConversationSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Snapshot of the current conversation, if one is loaded.
    pub fn conversation(&self) -> Option<Conversation> {
        self.lock().conversation.clone()
    }

    /// Whether a send or retry is outstanding.
    pub fn is_sending(&self) -> bool {
        self.lock().sending
    }

    /// Load the user's active conversation, replacing the current one.
    /// On failure the current state is left untouched.
    pub async fn load_active(&self) -> Result<(), SessionError> {
        let conversation = self.transport.active_conversation().await?;
        info!(
            conversation_id = %conversation.id,
            messages = conversation.messages.len(),
            "loaded active conversation"
        );
        self.lock().conversation = Some(conversation);
        Ok(())
    }

    /// Start a fresh conversation and make it the current one.
    pub async fn create(&self) -> Result<(), SessionError> {
        let conversation = self.transport.create_conversation().await?;
        info!(conversation_id = %conversation.id, "created conversation");
        self.lock().conversation = Some(conversation);
        Ok(())
    }

    /// Switch to a conversation from history. Rejected while a send is
    /// outstanding — switching mid-send would race the reconciliation.
    pub async fn switch_to(&self, conversation_id: &str) -> Result<(), SessionError> {
        if self.is_sending() {
            return Err(SessionError::SendInFlight);
        }
        let conversation = self.transport.conversation(conversation_id).await?;
        info!(conversation_id = %conversation.id, "switched conversation");
        self.lock().conversation = Some(conversation);
        Ok(())
    }

    /// Send one user message.
    ///
    /// The message is appended with `Pending` status before the network
    /// call. On success the server's conversation replaces local state; on
    /// failure the entry is flagged `Failed` and kept for [`Self::retry`].
    pub async fn send(&self, text: &str) -> Result<(), SessionError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SessionError::EmptyMessage);
        }

        let (conversation_id, local_id) = {
            let mut state = self.lock();
            if state.sending {
                return Err(SessionError::SendInFlight);
            }
            let Some(conversation) = state.conversation.as_mut() else {
                return Err(SessionError::NoConversation);
            };

            let message = Message::local(trimmed);
            let local_id = message.id.clone();
            let conversation_id = conversation.id.clone();
            conversation.messages.push(message);
            state.sending = true;
            (conversation_id, local_id)
        };

        info!(conversation_id = %conversation_id, local_id = %local_id, "sending message");
        let result = self.transport.send_message(&conversation_id, trimmed).await;
        self.finish_send(&local_id, result)
    }

    /// Retry a failed message, re-sending its stored content.
    ///
    /// The text comes from the message itself rather than the caller, so a
    /// retry always re-sends exactly what is rendered.
    pub async fn retry(&self, local_id: &str) -> Result<(), SessionError> {
        let (conversation_id, text) = {
            let mut state = self.lock();
            if state.sending {
                return Err(SessionError::SendInFlight);
            }
            let Some(conversation) = state.conversation.as_mut() else {
                return Err(SessionError::NoConversation);
            };
            let conversation_id = conversation.id.clone();

            let Some(message) = conversation.messages.iter_mut().find(|m| m.id == local_id)
            else {
                return Err(SessionError::UnknownMessage(local_id.to_string()));
            };
            message.status = DeliveryStatus::Pending;
            let text = message.content.clone();
            state.sending = true;
            (conversation_id, text)
        };

        info!(conversation_id = %conversation_id, local_id = %local_id, "retrying message");
        let result = self.transport.send_message(&conversation_id, &text).await;
        self.finish_send(local_id, result)
    }

    /// One page of conversation history, for the sidebar.
    pub async fn list_conversations(&self) -> Result<ConversationPage, SessionError> {
        Ok(self.transport.list_conversations().await?)
    }

    /// Apply the outcome of a send-family transport call.
    fn finish_send(
        &self,
        local_id: &str,
        result: Result<Conversation, TransportError>,
    ) -> Result<(), SessionError> {
        let mut state = self.lock();
        state.sending = false;

        match result {
            Ok(mut server) => {
                // The server copy is authoritative; the entry just confirmed
                // is dropped in its favor. Unresolved entries from earlier
                // sends keep their retry affordance at the tail.
                if let Some(previous) = state.conversation.take() {
                    for message in previous.messages {
                        if message.is_local() && message.id != local_id && message.is_unresolved()
                        {
                            server.messages.push(message);
                        }
                    }
                }
                state.conversation = Some(server);
                Ok(())
            }
            Err(err) => {
                warn!(local_id = %local_id, error = %err, "send failed");
                if let Some(conversation) = state.conversation.as_mut() {
                    if let Some(message) =
                        conversation.messages.iter_mut().find(|m| m.id == local_id)
                    {
                        message.status = DeliveryStatus::Failed;
                    }
                }
                Err(err.into())
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // Updates under the lock never panic, so a poisoned lock still
        // holds consistent state.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
