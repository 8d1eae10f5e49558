//! Demonstration conversations.

use chrono::{DateTime, Duration, Utc};

use crate::{Conversation, ConversationIndex, Direction, Message, Person, Result};

const OFFER: &str = "Hi Daniel, my name is Eleni, I am a professional cleaner with 10 years of \
                     experience. I can come to you tomorrow morning. 2 bedroom apartment costs 30 \
                     euros and takes about 3 hours. Is it okay for you?";
const EXTRAS: &str = "I can also wash terrace, windows and balcony for extra 20 euros if needed.";
const ACCEPT: &str = "Hi Eleni, sounds good for me, tomorrow morning is perfect.";
const CHANGE: &str = "My plans have changed, so I've changed the terms of order, could you \
                      reduce the cost please?";

/// Builds the demo conversations with messages dated relative to `now`.
#[must_use]
pub fn conversations(now: DateTime<Utc>) -> Vec<Conversation> {
    let three_days_ago = now - Duration::days(3);
    let yesterday = now - Duration::days(1);

    vec![
        Conversation::new(
            Person::new("Daniel Moris", Some("daniel.moris".to_string())),
            vec![
                Message::new(OFFER, Direction::Sent, three_days_ago),
                Message::new(EXTRAS, Direction::Sent, three_days_ago),
                Message::new(ACCEPT, Direction::Received, three_days_ago),
                Message::new(CHANGE, Direction::Received, three_days_ago),
            ],
        ),
        Conversation::new(
            Person::new("Robert Smith", None),
            vec![
                Message::new(OFFER, Direction::Sent, three_days_ago),
                Message::new(EXTRAS, Direction::Sent, three_days_ago),
                Message::new(ACCEPT, Direction::Received, yesterday),
                Message::new(CHANGE, Direction::Received, yesterday),
            ],
        )
        .unread(true),
    ]
}

/// Builds an index seeded with the demo conversations.
///
/// # Errors
///
/// Returns an error if the sample data violates the one-conversation-per-person rule.
pub fn index(now: DateTime<Utc>) -> Result<ConversationIndex> {
    ConversationIndex::new(conversations(now))
}
