//! Conversation data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub Uuid);

impl PersonId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a conversation.
///
/// Always derived from the person the conversation is with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(pub Uuid);

impl From<PersonId> for ConversationId {
    fn from(id: PersonId) -> Self {
        Self(id.0)
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A conversation partner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: String,
    avatar: Option<String>,
}

impl Person {
    /// Creates a person with a fresh identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, avatar: Option<String>) -> Self {
        Self::with_id(PersonId::new(), name, avatar)
    }

    /// Creates a person with a known identifier.
    #[must_use]
    pub fn with_id(id: PersonId, name: impl Into<String>, avatar: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar,
        }
    }

    /// Returns the person's identifier.
    #[must_use]
    pub const fn id(&self) -> PersonId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar reference, if any.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Checks if the name contains `query` (case-insensitive).
    ///
    /// An empty query matches everyone.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Which side of the conversation wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Written by the local user.
    Sent,
    /// Written by the other person.
    Received,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier, preserved across edits.
    pub id: MessageId,
    /// When the message was created.
    pub date: DateTime<Utc>,
    /// Message body.
    pub text: String,
    /// Sent or received.
    pub direction: Direction,
}

impl Message {
    /// Creates a message with a fresh identifier.
    #[must_use]
    pub fn new(text: impl Into<String>, direction: Direction, date: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::new(),
            date,
            text: text.into(),
            direction,
        }
    }

    /// Creates a message stamped with the current time.
    #[must_use]
    pub fn now(text: impl Into<String>, direction: Direction) -> Self {
        Self::new(text, direction, Utc::now())
    }

    /// Returns a copy of this message with its text replaced.
    #[must_use]
    pub fn edited(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}

/// One person plus their message history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// The other participant.
    pub person: Person,
    /// Messages in insertion (chronological) order.
    pub messages: Vec<Message>,
    /// Whether the conversation has unseen content.
    pub has_unread: bool,
}

impl Conversation {
    /// Creates a read conversation.
    #[must_use]
    pub const fn new(person: Person, messages: Vec<Message>) -> Self {
        Self {
            person,
            messages,
            has_unread: false,
        }
    }

    /// Sets the initial unread flag.
    #[must_use]
    pub fn unread(mut self, has_unread: bool) -> Self {
        self.has_unread = has_unread;
        self
    }

    /// Returns the conversation identifier (derived from the person).
    #[must_use]
    pub const fn id(&self) -> ConversationId {
        ConversationId(self.person.id().0)
    }

    /// Returns the most recent message.
    #[must_use]
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the timestamp used to order conversations.
    #[must_use]
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.last_message().map(|m| m.date)
    }

    /// Returns a single-line preview of the last message.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        let Some(message) = self.last_message() else {
            return String::new();
        };
        let line = message.text.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.chars().count() <= max_chars {
            return line;
        }
        let mut truncated: String = line.chars().take(max_chars.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }

    /// Returns the position of a message by identifier.
    #[must_use]
    pub fn position_of(&self, id: MessageId) -> Option<usize> {
        self.messages.iter().position(|m| m.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_conversation_id_derives_from_person() {
        let person = Person::new("Robert Smith", None);
        let id = person.id();
        let conversation = Conversation::new(person, vec![]);
        assert_eq!(conversation.id(), ConversationId::from(id));
    }

    #[test]
    fn test_person_matches_case_insensitive() {
        let person = Person::new("Robert Smith", None);
        assert!(person.matches("rob"));
        assert!(person.matches("SMITH"));
        assert!(person.matches(""));
        assert!(!person.matches("xyz"));
    }

    #[test]
    fn test_edited_preserves_identity() {
        let message = Message::new("hello", Direction::Sent, at(9));
        let edited = message.edited("hello there");
        assert_eq!(edited.id, message.id);
        assert_eq!(edited.date, message.date);
        assert_eq!(edited.direction, Direction::Sent);
        assert_eq!(edited.text, "hello there");
    }

    #[test]
    fn test_last_activity() {
        let person = Person::new("Daniel Moris", None);
        let empty = Conversation::new(person.clone(), vec![]);
        assert_eq!(empty.last_activity(), None);

        let conversation = Conversation::new(
            person,
            vec![
                Message::new("a", Direction::Received, at(8)),
                Message::new("b", Direction::Sent, at(11)),
            ],
        );
        assert_eq!(conversation.last_activity(), Some(at(11)));
    }

    #[test]
    fn test_preview_collapses_and_truncates() {
        let conversation = Conversation::new(
            Person::new("Daniel Moris", None),
            vec![Message::new("one\ntwo   three", Direction::Sent, at(9))],
        );
        assert_eq!(conversation.preview(40), "one two three");
        assert_eq!(conversation.preview(5), "one …");
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&Direction::Received).unwrap();
        assert_eq!(json, "\"received\"");
    }
}
