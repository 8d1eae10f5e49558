//! `Parley` - terminal front-end for the chat demo.
//!
//! Seeds the conversation index with sample data on every run and drives it
//! through the same operations a graphical client would use.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod command;
mod view;

use anyhow::{Context, bail};
use chrono::{Local, Utc};
use clap::Parser;
use parley_core::{AppSettings, Composer, Conversation, ConversationIndex, sample};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use command::{Cli, Command};
use view::{view_conversation_list, view_thread};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parley=info,parley_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings_path = match cli.config {
        Some(path) => path,
        None => AppSettings::default_path()?,
    };
    let settings = AppSettings::load(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path.display()))?;
    debug!("Using settings {settings:?}");

    let now = Utc::now();
    let mut index = sample::index(now)?;
    info!("Loaded {} sample conversations", index.len());

    let output = match cli.command {
        Command::List { query, json } => {
            let conversations = index.sorted_filtered(&query);
            if json {
                serde_json::to_string_pretty(&conversations)? + "\n"
            } else {
                view_conversation_list(&conversations, &settings, &now, &Local)
            }
        }
        Command::Show { name } => {
            let id = find(&index, &name)?.id();
            let conversation = index.open(id).context("conversation disappeared")?;
            view_thread(&conversation, &settings, &now, &Local)
        }
        Command::Send { name, text } => {
            let id = find(&index, &name)?.id();
            let mut composer = Composer::new();
            composer.set_text(text);
            if composer.submit(&mut index, id).is_none() {
                bail!("message not sent: text is empty");
            }
            let conversation = index.open(id).context("conversation disappeared")?;
            view_thread(&conversation, &settings, &now, &Local)
        }
        Command::Edit {
            name,
            position,
            text,
        } => {
            let conversation = find(&index, &name)?;
            let id = conversation.id();
            let message = conversation
                .messages
                .get(position)
                .cloned()
                .with_context(|| format!("no message at position {position}"))?;

            let mut composer = Composer::new();
            composer.open_editing(&message);
            composer.set_text(text);
            if composer.submit(&mut index, id).is_none() {
                bail!("message not edited: text is empty");
            }
            let conversation = index.open(id).context("conversation disappeared")?;
            view_thread(&conversation, &settings, &now, &Local)
        }
        Command::Unread { name } => {
            let id = find(&index, &name)?.id();
            let unread = index.toggle_unread(id).context("conversation disappeared")?;
            info!("Marked {name} as {}", if unread { "unread" } else { "read" });
            view_conversation_list(&index.sorted_filtered(""), &settings, &now, &Local)
        }
    };

    print!("{output}");
    Ok(())
}

/// Finds the most recent conversation whose person matches `name`.
fn find(index: &ConversationIndex, name: &str) -> anyhow::Result<Conversation> {
    index
        .sorted_filtered(name)
        .into_iter()
        .next()
        .with_context(|| format!("no conversation matches \"{name}\""))
}
