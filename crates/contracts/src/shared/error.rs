use thiserror::Error;

use crate::domain::a007_timetable::Weekday;

/// Login failures. The login page shows a single generic message for both.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("one-time code must be exactly {expected} digits")]
    InvalidOtp { expected: usize },
    #[error("no user is registered for phone {0}")]
    UnknownPhone(String),
}

impl AuthError {
    /// Translation key of the message shown to the user.
    pub fn message_key(&self) -> &'static str {
        "login.error.invalid"
    }
}

/// Required-field and format checks on onboarding forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must contain at least 10 digits")]
    InvalidPhone(&'static str),
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
}

impl ValidationError {
    /// Name of the offending form field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required(field) => field,
            ValidationError::InvalidPhone(field) => field,
            ValidationError::OutOfRange { field, .. } => field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    #[error("period {period} is outside 1..={max}")]
    PeriodOutOfRange { period: u8, max: u8 },
    #[error("{0} is not a school day")]
    NotSchoolDay(Weekday),
    #[error("{day} period {period} is already assigned to {subject}")]
    SlotTaken {
        day: Weekday,
        period: u8,
        subject: String,
    },
    #[error("entry belongs to {found}, timetable is for {expected}")]
    WrongClass { expected: String, found: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("ticket {0} is closed")]
    Closed(String),
    #[error("comment is empty")]
    EmptyComment,
}
