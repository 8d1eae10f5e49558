//! Thread presentation: same-day sections and their header labels.

mod labels;
mod sections;

pub use labels::{DateStyle, descriptive_label};
pub use sections::{Section, calendar_day_distance, section_messages};
