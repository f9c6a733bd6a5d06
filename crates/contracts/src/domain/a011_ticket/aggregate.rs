use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::entity::school_scoped_entity;
use crate::domain::common::new_local_id;
use crate::shared::error::TicketError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            TicketStatus::Open => "ticket.open",
            TicketStatus::InProgress => "ticket.in_progress",
            TicketStatus::Resolved => "ticket.resolved",
            TicketStatus::Closed => "ticket.closed",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TicketStatus::Open | TicketStatus::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "low",
            TicketPriority::Medium => "medium",
            TicketPriority::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketComment {
    pub id: String,
    pub ticket_id: String,
    pub author_id: String,
    pub author_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub school_id: String,
    pub raised_by: String,
    pub subject: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<TicketComment>,
}

school_scoped_entity!(Ticket);

impl Ticket {
    pub fn new(
        school_id: impl Into<String>,
        raised_by: impl Into<String>,
        subject: impl Into<String>,
        description: impl Into<String>,
        priority: TicketPriority,
    ) -> Self {
        Self {
            id: new_local_id("tkt"),
            school_id: school_id.into(),
            raised_by: raised_by.into(),
            subject: subject.into(),
            description: description.into(),
            status: TicketStatus::Open,
            priority,
            created_at: Utc::now(),
            comments: Vec::new(),
        }
    }

    /// Closed tickets accept no further comments.
    pub fn add_comment(
        &mut self,
        author_id: &str,
        author_name: &str,
        message: &str,
    ) -> Result<&TicketComment, TicketError> {
        if self.status == TicketStatus::Closed {
            return Err(TicketError::Closed(self.id.clone()));
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(TicketError::EmptyComment);
        }
        self.comments.push(TicketComment {
            id: new_local_id("cmt"),
            ticket_id: self.id.clone(),
            author_id: author_id.to_string(),
            author_name: author_name.to_string(),
            message: message.to_string(),
            created_at: Utc::now(),
        });
        Ok(&self.comments[self.comments.len() - 1])
    }

    pub fn set_status(&mut self, status: TicketStatus) {
        log::info!("ticket {}: {:?} -> {:?}", self.id, self.status, status);
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket() -> Ticket {
        Ticket::new("sch-001", "usr-002", "Projector broken", "Room 12", TicketPriority::Medium)
    }

    #[test]
    fn test_new_ticket_is_open() {
        let t = ticket();
        assert_eq!(t.status, TicketStatus::Open);
        assert!(t.id.starts_with("tkt-"));
        assert!(t.comments.is_empty());
    }

    #[test]
    fn test_comment_is_trimmed_and_linked() {
        let mut t = ticket();
        let id = t.id.clone();
        let c = t.add_comment("usr-001", "Anil Kumar", "  looking into it ").unwrap();
        assert_eq!(c.message, "looking into it");
        assert_eq!(c.ticket_id, id);
    }

    #[test]
    fn test_closed_ticket_rejects_comments() {
        let mut t = ticket();
        t.set_status(TicketStatus::Closed);
        let err = t.add_comment("usr-001", "Anil Kumar", "reopen?").unwrap_err();
        assert_eq!(err, TicketError::Closed(t.id.clone()));
    }

    #[test]
    fn test_empty_comment_rejected() {
        let mut t = ticket();
        assert_eq!(t.add_comment("usr-001", "Anil", "   ").unwrap_err(), TicketError::EmptyComment);
    }
}
