use serde::{Deserialize, Serialize};

use crate::domain::common::entity::school_scoped_entity;
use crate::system::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub school_id: String,
    pub employee_id: String,
    pub name: String,
    pub name_te: String,
    pub phone: String,
    pub email: String,
    pub subjects: Vec<String>,
    pub qualification: String,
    /// Class this teacher is class teacher of
    pub class_teacher_of: Option<String>,
}

school_scoped_entity!(Teacher);

impl Teacher {
    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Te if !self.name_te.is_empty() => &self.name_te,
            _ => &self.name,
        }
    }

    pub fn teaches(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s.eq_ignore_ascii_case(subject))
    }
}
