//! In-memory conversation store.

use std::cmp::Reverse;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::model::{Conversation, ConversationId, Direction, Message};
use crate::{Error, Result};

/// Why a mutation was not performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The message text was empty.
    EmptyText,
    /// No conversation has the requested identifier.
    ConversationNotFound,
    /// The conversation has no message with the requested identifier.
    MessageNotFound,
}

impl SkipReason {
    /// Get human-readable description.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyText => "Message text is empty",
            Self::ConversationNotFound => "Conversation not found",
            Self::MessageNotFound => "Message not found",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Result of a mutation that can be skipped for an ordinary reason.
///
/// Stale references are common in a UI, so "not found" is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// The mutation happened.
    Applied(T),
    /// Nothing changed.
    Skipped(SkipReason),
}

impl<T> Outcome<T> {
    /// Returns the value if the mutation was applied.
    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::Skipped(_) => None,
        }
    }

    /// Returns the skip reason, if any.
    pub const fn skipped(&self) -> Option<SkipReason> {
        match self {
            Self::Applied(_) => None,
            Self::Skipped(reason) => Some(*reason),
        }
    }

    /// Returns true if the mutation happened.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Owns every conversation and funnels all writes.
///
/// Reads hand out clones so callers never alias the stored state.
#[derive(Debug, Clone, Default)]
pub struct ConversationIndex {
    conversations: Vec<Conversation>,
}

impl ConversationIndex {
    /// Builds an index from initial conversations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateConversation`] if two conversations share a person.
    pub fn new(conversations: Vec<Conversation>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(conversations.len());
        for conversation in &conversations {
            if !seen.insert(conversation.id()) {
                return Err(Error::DuplicateConversation(conversation.id()));
            }
        }
        debug!("Conversation index built with {} conversations", conversations.len());
        Ok(Self { conversations })
    }

    /// Adds a conversation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateConversation`] if the person already has one.
    pub fn insert(&mut self, conversation: Conversation) -> Result<()> {
        let id = conversation.id();
        if self.find(id).is_some() {
            return Err(Error::DuplicateConversation(id));
        }
        self.conversations.push(conversation);
        Ok(())
    }

    /// Number of conversations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    /// Returns true if there are no conversations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Iterates conversations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Conversation> {
        self.conversations.iter()
    }

    /// Looks up a conversation.
    #[must_use]
    pub fn get(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id() == id)
    }

    fn find(&self, id: ConversationId) -> Option<usize> {
        self.conversations.iter().position(|c| c.id() == id)
    }

    /// Returns conversations ordered by last activity, most recent first.
    ///
    /// Conversations without messages sort last; ties keep insertion order.
    /// A non-empty `query` keeps only people whose name contains it,
    /// ignoring case.
    #[must_use]
    pub fn sorted_filtered(&self, query: &str) -> Vec<Conversation> {
        let mut sorted: Vec<&Conversation> = self.conversations.iter().collect();
        sorted.sort_by_key(|c| Reverse(c.last_activity()));

        sorted
            .into_iter()
            .filter(|c| query.is_empty() || c.person.matches(query))
            .cloned()
            .collect()
    }

    /// Overwrites the unread flag. Unknown ids are ignored.
    pub fn set_unread(&mut self, id: ConversationId, value: bool) {
        match self.find(id) {
            Some(index) => {
                self.conversations[index].has_unread = value;
                debug!("Conversation {id} unread={value}");
            }
            None => debug!("set_unread ignored, no conversation {id}"),
        }
    }

    /// Flips the unread flag, returning the new value.
    pub fn toggle_unread(&mut self, id: ConversationId) -> Option<bool> {
        let index = self.find(id)?;
        let value = !self.conversations[index].has_unread;
        self.conversations[index].has_unread = value;
        debug!("Conversation {id} unread={value}");
        Some(value)
    }

    /// Marks a conversation read and returns a snapshot of it.
    pub fn open(&mut self, id: ConversationId) -> Option<Conversation> {
        let index = self.find(id)?;
        self.conversations[index].has_unread = false;
        Some(self.conversations[index].clone())
    }

    /// Appends a sent message stamped with the current time.
    pub fn append_sent_message(&mut self, id: ConversationId, text: &str) -> Outcome<Message> {
        self.append_sent_message_at(id, text, Utc::now())
    }

    /// Appends a sent message stamped with `at`.
    ///
    /// The stored timestamp never precedes the conversation's last message.
    pub fn append_sent_message_at(
        &mut self,
        id: ConversationId,
        text: &str,
        at: DateTime<Utc>,
    ) -> Outcome<Message> {
        if text.is_empty() {
            debug!("Send skipped for {id}: empty text");
            return Outcome::Skipped(SkipReason::EmptyText);
        }
        let Some(index) = self.find(id) else {
            warn!("Send skipped, no conversation {id}");
            return Outcome::Skipped(SkipReason::ConversationNotFound);
        };

        let conversation = &mut self.conversations[index];
        let date = conversation.last_activity().map_or(at, |last| last.max(at));
        let message = Message::new(text, Direction::Sent, date);
        conversation.messages.push(message.clone());
        debug!("Message {} appended to {id}", message.id);
        Outcome::Applied(message)
    }

    /// Replaces a message in place, keeping its position.
    pub fn replace_message(&mut self, id: ConversationId, edited: Message) -> Outcome<Message> {
        let Some(index) = self.find(id) else {
            warn!("Edit skipped, no conversation {id}");
            return Outcome::Skipped(SkipReason::ConversationNotFound);
        };

        let conversation = &mut self.conversations[index];
        let Some(position) = conversation.position_of(edited.id) else {
            warn!("Edit skipped, no message {} in {id}", edited.id);
            return Outcome::Skipped(SkipReason::MessageNotFound);
        };

        conversation.messages[position] = edited.clone();
        debug!("Message {} replaced at {position} in {id}", edited.id);
        Outcome::Applied(edited)
    }
}
