//! Conversation thread view.

use std::fmt::Write;

use chrono::{DateTime, TimeZone, Utc};
use parley_core::{AppSettings, Conversation, Direction, descriptive_label, section_messages};

/// Renders a thread grouped into same-day sections.
///
/// Messages are numbered by their position in the conversation so they can
/// be addressed by the `edit` command.
pub fn view_thread<Tz>(
    conversation: &Conversation,
    settings: &AppSettings,
    now: &DateTime<Utc>,
    tz: &Tz,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    let _ = writeln!(out, "{}", conversation.person.name());

    let sections = section_messages(&conversation.messages, tz);
    if sections.is_empty() {
        let _ = writeln!(out, "\n  (no messages yet)");
        return out;
    }

    let mut position = 0;
    for section in &sections {
        if let Some(first) = section.first() {
            let label = descriptive_label(&first.date, now, tz, settings.date_style);
            let _ = writeln!(out, "\n── {label} ──");
        }
        for message in &section.messages {
            let author = match message.direction {
                Direction::Sent => "You",
                Direction::Received => conversation.person.name(),
            };
            let time = message.date.with_timezone(tz).format("%H:%M");
            let _ = writeln!(out, "[{position}] {time} {author}: {}", message.text);
            position += 1;
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Duration;
    use parley_core::{Message, Person};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 15, 0, 0).unwrap()
    }

    #[test]
    fn test_sections_with_headers() {
        let conversation = Conversation::new(
            Person::new("Robert Smith", None),
            vec![
                Message::new("Hello", Direction::Sent, now() - Duration::days(1)),
                Message::new("Hi", Direction::Received, now() - Duration::days(1)),
                Message::new("Deal", Direction::Sent, now()),
            ],
        );
        let out = view_thread(&conversation, &AppSettings::default(), &now(), &Utc);

        let expected = "Robert Smith\n\
                        \n── Yesterday ──\n\
                        [0] 15:00 You: Hello\n\
                        [1] 15:00 Robert Smith: Hi\n\
                        \n── Today ──\n\
                        [2] 15:00 You: Deal\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_empty_thread() {
        let conversation = Conversation::new(Person::new("Robert Smith", None), vec![]);
        let out = view_thread(&conversation, &AppSettings::default(), &now(), &Utc);
        assert_eq!(out, "Robert Smith\n\n  (no messages yet)\n");
    }
}
