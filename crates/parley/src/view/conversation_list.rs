//! Conversation list view.

use std::fmt::Write;

use chrono::{DateTime, TimeZone, Utc};
use parley_core::{AppSettings, Conversation, descriptive_label};

const NAME_WIDTH: usize = 24;

/// Renders one row per conversation: marker, name, date, then a preview line.
pub fn view_conversation_list<Tz>(
    conversations: &[Conversation],
    settings: &AppSettings,
    now: &DateTime<Utc>,
    tz: &Tz,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if conversations.is_empty() {
        return "No conversations\n".to_string();
    }

    let mut out = String::new();
    for conversation in conversations {
        let marker = if settings.show_unread_marker && conversation.has_unread {
            '●'
        } else {
            ' '
        };
        let date = conversation
            .last_activity()
            .map(|date| descriptive_label(&date, now, tz, settings.date_style))
            .unwrap_or_default();

        let _ = writeln!(
            out,
            "{marker} {:<NAME_WIDTH$} {date}",
            conversation.person.name()
        );
        let _ = writeln!(out, "  {}", conversation.preview(settings.preview_length));
    }
    out
}
