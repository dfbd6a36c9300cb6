//! scholia-session
//!
//! Client-side ownership of "the conversation currently shown to the
//! user": loading and switching conversations, optimistic sends with
//! per-message delivery status, and explicit retry. Talks to the backend
//! through the [`transport::Transport`] seam so the state machine is
//! testable without a network.

pub mod error;
pub mod session;
pub mod transport;

pub use error::SessionError;
pub use session::ConversationSession;
pub use transport::{Transport, TransportError};
