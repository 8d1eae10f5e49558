//! Conversations and the store that owns them.

mod index;
mod model;

pub use index::{ConversationIndex, Outcome, SkipReason};
pub use model::{Conversation, ConversationId, Direction, Message, MessageId, Person, PersonId};
