use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a002_student::Student;
use crate::domain::common::new_local_id;
use crate::shared::error::ValidationError;
use crate::usecases::common::{optional, require, require_phone};

/// Raw input of the student onboarding form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentOnboardingForm {
    pub name: String,
    pub name_te: String,
    pub class_id: String,
    pub section: String,
    pub roll_number: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    /// `YYYY-MM-DD`, may be blank
    pub date_of_birth: String,
    /// May be blank
    pub bus_route: String,
}

impl StudentOnboardingForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("class_id", &self.class_id)?;
        require("section", &self.section)?;
        require("roll_number", &self.roll_number)?;
        require("guardian_name", &self.guardian_name)?;
        require_phone("guardian_phone", &self.guardian_phone)?;
        Ok(())
    }

    /// Blank or unparsable dates are dropped.
    fn parsed_date_of_birth(&self) -> Option<NaiveDate> {
        let raw = optional(&self.date_of_birth)?;
        match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(e) => {
                log::warn!("ignoring date of birth {:?}: {}", raw, e);
                None
            }
        }
    }

    pub fn into_student(self, school_id: &str) -> Result<Student, ValidationError> {
        self.validate()?;
        Ok(Student {
            id: new_local_id("stu"),
            school_id: school_id.to_string(),
            date_of_birth: self.parsed_date_of_birth(),
            bus_route: optional(&self.bus_route),
            name: self.name.trim().to_string(),
            name_te: self.name_te.trim().to_string(),
            roll_number: self.roll_number.trim().to_string(),
            class_id: self.class_id.trim().to_string(),
            section: self.section.trim().to_uppercase(),
            guardian_name: self.guardian_name.trim().to_string(),
            guardian_phone: self.guardian_phone.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> StudentOnboardingForm {
        StudentOnboardingForm {
            name: "Arjun Reddy".into(),
            name_te: String::new(),
            class_id: "cls-008-a".into(),
            section: "a".into(),
            roll_number: "14".into(),
            guardian_name: "Suresh Reddy".into(),
            guardian_phone: "9000011111".into(),
            date_of_birth: "2012-06-15".into(),
            bus_route: " ".into(),
        }
    }

    #[test]
    fn test_guardian_phone_checked() {
        let form = StudentOnboardingForm {
            guardian_phone: "".into(),
            ..filled()
        };
        assert_eq!(
            form.validate(),
            Err(ValidationError::Required("guardian_phone"))
        );
    }

    #[test]
    fn test_into_student() {
        let student = filled().into_student("sch-001").unwrap();
        assert_eq!(student.section, "A");
        assert_eq!(student.date_of_birth, NaiveDate::from_ymd_opt(2012, 6, 15));
        assert_eq!(student.bus_route, None);
        assert!(!student.uses_transport());
    }

    #[test]
    fn test_bad_date_is_dropped() {
        let form = StudentOnboardingForm {
            date_of_birth: "15/06/2012".into(),
            ..filled()
        };
        let student = form.into_student("sch-001").unwrap();
        assert_eq!(student.date_of_birth, None);
    }
}
