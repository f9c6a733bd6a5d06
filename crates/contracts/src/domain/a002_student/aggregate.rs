use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::entity::school_scoped_entity;
use crate::system::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub school_id: String,
    pub name: String,
    pub name_te: String,
    pub roll_number: String,
    pub class_id: String,
    pub section: String,
    pub date_of_birth: Option<NaiveDate>,
    pub guardian_name: String,
    pub guardian_phone: String,
    /// Bus route the student rides, if any
    pub bus_route: Option<String>,
}

school_scoped_entity!(Student);

impl Student {
    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Te if !self.name_te.is_empty() => &self.name_te,
            _ => &self.name,
        }
    }

    pub fn uses_transport(&self) -> bool {
        self.bus_route.is_some()
    }
}

pub fn in_class<'a>(students: &'a [Student], class_id: &str) -> Vec<&'a Student> {
    students.iter().filter(|s| s.class_id == class_id).collect()
}
