//! Command-line commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Browse and edit the demo conversations.
#[derive(Debug, Parser)]
#[command(name = "parley", version, about)]
pub struct Cli {
    /// Settings file (defaults to the user config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Action to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Actions on the conversation list and threads.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List conversations, most recent first.
    List {
        /// Only show people whose name contains this text.
        #[arg(short, long, default_value = "")]
        query: String,
        /// Print the list as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Open a conversation and print its thread.
    Show {
        /// Name (or part of it) of the person.
        name: String,
    },
    /// Send a message, then print the thread.
    Send {
        /// Name (or part of it) of the person.
        name: String,
        /// Message text.
        text: String,
    },
    /// Edit a message by its position, then print the thread.
    Edit {
        /// Name (or part of it) of the person.
        name: String,
        /// Zero-based position of the message in the thread.
        position: usize,
        /// Replacement text.
        text: String,
    },
    /// Toggle the unread marker, then print the list.
    Unread {
        /// Name (or part of it) of the person.
        name: String,
    },
}
