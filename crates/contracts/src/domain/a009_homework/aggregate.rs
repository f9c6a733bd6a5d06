use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::entity::school_scoped_entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homework {
    pub id: String,
    pub school_id: String,
    pub class_id: String,
    pub subject: String,
    pub title: String,
    pub description: String,
    pub assigned_on: NaiveDate,
    pub due_date: NaiveDate,
    pub assigned_by: String,
}

school_scoped_entity!(Homework);

impl Homework {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }
}
