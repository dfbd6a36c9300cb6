pub mod conversation;
pub mod message;

pub use conversation::{Conversation, ConversationPage};
pub use message::{DeliveryStatus, LOCAL_ID_PREFIX, Message, MessageRole};
