use serde::{Deserialize, Serialize};

use crate::domain::common::entity::school_scoped_entity;

/// One section of one grade, e.g. 8-A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSection {
    pub id: String,
    pub school_id: String,
    /// 1..=12
    pub grade: u8,
    pub section: String,
    pub room: String,
    pub class_teacher_id: Option<String>,
    pub capacity: u32,
}

school_scoped_entity!(ClassSection);

impl ClassSection {
    /// "8-A"
    pub fn label(&self) -> String {
        format!("{}-{}", self.grade, self.section)
    }
}
