use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::message::Message;

/// A conversation between the user and the assistant.
///
/// `messages` is in chronological append order; rendering follows array
/// order. After every successful send the backend returns the full
/// conversation and the client adopts it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// One page of a conversation listing, in the backend's pagination envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<Conversation>,
}
