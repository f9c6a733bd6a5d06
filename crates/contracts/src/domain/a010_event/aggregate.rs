use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::entity::school_scoped_entity;
use crate::system::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Holiday,
    Exam,
    Meeting,
    Celebration,
    Sports,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub school_id: String,
    pub title: String,
    pub title_te: String,
    pub kind: EventKind,
    pub date: NaiveDate,
    pub description: String,
}

school_scoped_entity!(Event);

impl Event {
    pub fn display_title(&self, locale: Locale) -> &str {
        match locale {
            Locale::Te if !self.title_te.is_empty() => &self.title_te,
            _ => &self.title,
        }
    }
}

/// Events on or after `today`, soonest first.
pub fn upcoming(events: &[Event], today: NaiveDate) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = events.iter().filter(|e| e.date >= today).collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming
}
