//! Error types for the core library.

use thiserror::Error;

use crate::ConversationId;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A conversation for the same person already exists.
    #[error("Duplicate conversation: {0}")]
    DuplicateConversation(ConversationId),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
