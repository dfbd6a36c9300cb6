use std::sync::atomic::{AtomicI64, Ordering};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Prefix of client-assigned ids for optimistic messages. The backend never
/// issues ids with this prefix, so it doubles as the "not yet confirmed"
/// marker.
pub const LOCAL_ID_PREFIX: &str = "local-";

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Client-side delivery state of a message. Never sent to the backend;
/// server-confirmed messages are always `Sent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeliveryStatus {
    Pending,
    #[default]
    Sent,
    Failed,
}

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Server-assigned id, or `local-<millis>` for optimistic entries.
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    #[serde(default)]
    pub tokens_used: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
    #[serde(skip)]
    pub status: DeliveryStatus,
}

impl Message {
    /// Synthesize an optimistic user message with a fresh local id.
    pub fn local(content: impl Into<String>) -> Self {
        Self {
            id: format!("{LOCAL_ID_PREFIX}{}", next_local_millis()),
            role: MessageRole::User,
            content: content.into(),
            tokens_used: None,
            timestamp: None,
            status: DeliveryStatus::Pending,
        }
    }

    /// Whether this message carries a client-assigned id.
    pub fn is_local(&self) -> bool {
        self.id.starts_with(LOCAL_ID_PREFIX)
    }

    /// Whether this message is still pending or has failed — i.e. it has no
    /// server-confirmed counterpart yet.
    pub fn is_unresolved(&self) -> bool {
        matches!(self.status, DeliveryStatus::Pending | DeliveryStatus::Failed)
    }
}

/// Current time in unix milliseconds, bumped past the last value handed out
/// so back-to-back local ids never collide within a process.
fn next_local_millis() -> i64 {
    static LAST: AtomicI64 = AtomicI64::new(0);

    let now = Timestamp::now().as_millisecond();
    let mut last = LAST.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST.compare_exchange(last, candidate, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return candidate,
            Err(observed) => last = observed,
        }
    }
}
