//! Message input model for the thread view.

use tracing::debug;

use crate::{ConversationId, ConversationIndex, Message, MessageId};

/// State of the message input field.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    text: String,
    /// Message being edited, as it was when editing started.
    editing: Option<Message>,
}

impl Composer {
    /// Creates an empty composer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current input text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Updates the input text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns true when there is something to submit.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.text.is_empty()
    }

    /// Returns the message being edited.
    #[must_use]
    pub const fn editing(&self) -> Option<&Message> {
        self.editing.as_ref()
    }

    /// Starts editing `message`, preloading its text.
    pub fn open_editing(&mut self, message: &Message) {
        self.text.clone_from(&message.text);
        self.editing = Some(message.clone());
    }

    /// Leaves edit mode and clears the input.
    pub fn cancel_editing(&mut self) {
        self.text.clear();
        self.editing = None;
    }

    /// Sends or saves the edit, depending on the mode.
    ///
    /// On success the input is cleared and the id of the message to scroll
    /// to is returned. On failure the input is left untouched.
    pub fn submit(
        &mut self,
        index: &mut ConversationIndex,
        conversation: ConversationId,
    ) -> Option<MessageId> {
        if self.text.is_empty() {
            return None;
        }

        let outcome = match self.editing.as_ref() {
            Some(original) => index.replace_message(conversation, original.edited(&self.text)),
            None => index.append_sent_message(conversation, &self.text),
        };

        match outcome.applied() {
            Some(message) => {
                self.text.clear();
                self.editing = None;
                Some(message.id)
            }
            None => {
                debug!("Composer submit had no effect on {conversation}");
                None
            }
        }
    }
}
