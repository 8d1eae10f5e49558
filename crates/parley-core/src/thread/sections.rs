//! Calendar-day grouping of a message thread.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::Message;

/// A contiguous run of messages that share a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Calendar day of the first message, in the grouping timezone.
    pub day: NaiveDate,
    /// Messages in original order. Never empty.
    pub messages: Vec<Message>,
}

impl Section {
    fn start<Tz: TimeZone>(message: &Message, tz: &Tz) -> Self {
        Self {
            day: message.date.with_timezone(tz).date_naive(),
            messages: vec![message.clone()],
        }
    }

    /// Returns the first message, used as the section's date header.
    #[must_use]
    pub fn first(&self) -> Option<&Message> {
        self.messages.first()
    }
}

/// Whole calendar days from `from` to `to` in `tz`.
///
/// Both timestamps are normalized to their local day first, so two
/// instants two hours apart across midnight are one day apart.
#[must_use]
pub fn calendar_day_distance<Tz: TimeZone>(
    from: &DateTime<Utc>,
    to: &DateTime<Utc>,
    tz: &Tz,
) -> i64 {
    let from_day = from.with_timezone(tz).date_naive();
    let to_day = to.with_timezone(tz).date_naive();
    to_day.signed_duration_since(from_day).num_days()
}

/// Groups messages into same-day sections.
///
/// Each message is compared with the first message of the open section;
/// one or more days later starts a new section. An empty thread yields no
/// sections.
#[must_use]
pub fn section_messages<Tz: TimeZone>(messages: &[Message], tz: &Tz) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut open: Option<Section> = None;

    for message in messages {
        let same_day = open
            .as_ref()
            .and_then(Section::first)
            .is_some_and(|first| calendar_day_distance(&first.date, &message.date, tz) < 1);

        if same_day {
            if let Some(section) = open.as_mut() {
                section.messages.push(message.clone());
            }
        } else if let Some(done) = open.replace(Section::start(message, tz)) {
            sections.push(done);
        }
    }

    sections.extend(open);
    sections
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Direction;
    use chrono::{Duration, FixedOffset};

    fn day(offset: i64, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, hour, 0, 0).unwrap() + Duration::days(offset)
    }

    fn message_at(date: DateTime<Utc>) -> Message {
        Message::new("text", Direction::Received, date)
    }

    fn sizes(sections: &[Section]) -> Vec<usize> {
        sections.iter().map(|s| s.messages.len()).collect()
    }

    #[test]
    fn test_distance_ignores_hours_within_day() {
        let distance = calendar_day_distance(&day(0, 1), &day(0, 21), &Utc);
        assert_eq!(distance, 0);
    }

    #[test]
    fn test_distance_across_midnight() {
        let late = Utc.with_ymd_and_hms(2026, 3, 10, 23, 0, 0).unwrap();
        let early = Utc.with_ymd_and_hms(2026, 3, 11, 1, 0, 0).unwrap();
        assert_eq!(calendar_day_distance(&late, &early, &Utc), 1);
        assert_eq!(calendar_day_distance(&early, &late, &Utc), -1);
    }

    #[test]
    fn test_distance_uses_timezone() {
        // 21:30 and 23:30 UTC are the same UTC day but straddle midnight at UTC+2.
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let a = Utc.with_ymd_and_hms(2026, 3, 10, 21, 30, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2026, 3, 10, 23, 30, 0).unwrap();
        assert_eq!(calendar_day_distance(&a, &b, &Utc), 0);
        assert_eq!(calendar_day_distance(&a, &b, &tz), 1);
    }

    #[test]
    fn test_groups_by_day() {
        let messages = vec![
            message_at(day(0, 9)),
            message_at(day(0, 18)),
            message_at(day(1, 9)),
            message_at(day(3, 9)),
        ];
        let sections = section_messages(&messages, &Utc);
        assert_eq!(sizes(&sections), vec![2, 1, 1]);
        assert_eq!(sections[0].messages[..], messages[..2]);
        assert_eq!(sections[1].day, day(1, 9).date_naive());
        assert_eq!(sections[2].day, day(3, 9).date_naive());
    }

    #[test]
    fn test_single_message() {
        let messages = vec![message_at(day(0, 9))];
        let sections = section_messages(&messages, &Utc);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].messages, messages);
    }

    #[test]
    fn test_empty_thread_has_no_sections() {
        assert!(section_messages(&[], &Utc).is_empty());
    }

    #[test]
    fn test_close_messages_across_midnight_split() {
        let messages = vec![
            message_at(Utc.with_ymd_and_hms(2026, 3, 10, 23, 0, 0).unwrap()),
            message_at(Utc.with_ymd_and_hms(2026, 3, 11, 1, 0, 0).unwrap()),
        ];
        assert_eq!(sizes(&section_messages(&messages, &Utc)), vec![1, 1]);
    }

    #[test]
    fn test_out_of_order_message_stays_in_open_section() {
        let messages = vec![message_at(day(1, 9)), message_at(day(0, 9))];
        assert_eq!(sizes(&section_messages(&messages, &Utc)), vec![2]);
    }
}
