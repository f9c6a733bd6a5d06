use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::entity::school_scoped_entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub school_id: String,
    /// `None` addresses everyone in the school
    pub user_id: Option<String>,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

school_scoped_entity!(Notification);

impl Notification {
    pub fn is_for(&self, user_id: &str, school_id: Option<&str>) -> bool {
        match &self.user_id {
            Some(target) => target == user_id,
            None => school_id == Some(self.school_id.as_str()),
        }
    }
}

pub fn unread_count(
    notifications: &[Notification],
    user_id: &str,
    school_id: Option<&str>,
) -> usize {
    notifications
        .iter()
        .filter(|n| !n.read && n.is_for(user_id, school_id))
        .count()
}

pub fn mark_all_read(notifications: &mut [Notification], user_id: &str, school_id: Option<&str>) {
    for n in notifications.iter_mut().filter(|n| n.is_for(user_id, school_id)) {
        n.read = true;
    }
}
