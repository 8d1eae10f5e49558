//! Plain-text views.

mod conversation_list;
mod thread;

pub use conversation_list::view_conversation_list;
pub use thread::view_thread;
