//! Descriptive day labels for section headers and list rows.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::sections::calendar_day_distance;

/// How dates older than a few days are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// Numeric date, e.g. `3/5/26`.
    #[default]
    Short,
    /// Abbreviated month, e.g. `Mar 5, 2026`.
    Medium,
}

impl DateStyle {
    const fn pattern(self) -> &'static str {
        match self {
            Self::Short => "%-m/%-d/%y",
            Self::Medium => "%b %-d, %Y",
        }
    }
}

/// Labels `date` relative to `now`.
///
/// "Today", "Yesterday", the weekday name for two to four days ago, and a
/// formatted date otherwise (including dates after `now`).
#[must_use]
pub fn descriptive_label<Tz>(
    date: &DateTime<Utc>,
    now: &DateTime<Utc>,
    tz: &Tz,
    style: DateStyle,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let local = date.with_timezone(tz);
    match calendar_day_distance(date, now, tz) {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=4 => local.format("%A").to_string(),
        _ => local.format(style.pattern()).to_string(),
    }
}
