//! # parley-core
//!
//! Core logic for the `Parley` chat demo.
//!
//! This crate provides:
//! - Domain models (people, messages, conversations)
//! - **Conversation Index** - owned store with sorted/filtered views and
//!   send/edit/unread mutations
//! - **Thread Sectioner** - calendar-day grouping of a conversation's messages
//! - Descriptive day labels for section headers
//! - Composer state for the message input
//! - Sample conversations for the demo
//! - Persisted application settings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod composer;
pub mod conversation;
mod error;
pub mod sample;
pub mod settings;
pub mod thread;

pub use composer::Composer;
pub use conversation::{
    Conversation, ConversationId, ConversationIndex, Direction, Message, MessageId, Outcome,
    Person, PersonId, SkipReason,
};
pub use error::{Error, Result};
pub use settings::AppSettings;
pub use thread::{
    DateStyle, Section, calendar_day_distance, descriptive_label, section_messages,
};
