use serde::{Deserialize, Serialize};

use crate::domain::a003_teacher::Teacher;
use crate::domain::common::new_local_id;
use crate::shared::error::ValidationError;
use crate::usecases::common::{optional, require, require_phone};

/// Raw input of the teacher onboarding form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherOnboardingForm {
    pub name: String,
    pub name_te: String,
    pub phone: String,
    pub email: String,
    /// Comma separated, e.g. "Mathematics, Physics"
    pub subjects: String,
    pub qualification: String,
    pub employee_id: String,
}

impl TeacherOnboardingForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require_phone("phone", &self.phone)?;
        require("email", &self.email)?;
        if self.subject_list().is_empty() {
            return Err(ValidationError::Required("subjects"));
        }
        Ok(())
    }

    pub fn subject_list(&self) -> Vec<String> {
        self.subjects
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validated teacher for `school_id`. A blank employee id gets a
    /// generated one.
    pub fn into_teacher(self, school_id: &str) -> Result<Teacher, ValidationError> {
        self.validate()?;
        let id = new_local_id("tch");
        let employee_id = optional(&self.employee_id).unwrap_or_else(|| id.to_uppercase());
        Ok(Teacher {
            subjects: self.subject_list(),
            id,
            school_id: school_id.to_string(),
            employee_id,
            name: self.name.trim().to_string(),
            name_te: self.name_te.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            qualification: self.qualification.trim().to_string(),
            class_teacher_of: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TeacherOnboardingForm {
        TeacherOnboardingForm {
            name: " Lakshmi Devi ".into(),
            name_te: "లక్ష్మి దేవి".into(),
            phone: "+91 9876500001".into(),
            email: "lakshmi@example.org".into(),
            subjects: "Mathematics, ,Physics".into(),
            qualification: "M.Sc, B.Ed".into(),
            employee_id: String::new(),
        }
    }

    #[test]
    fn test_blank_form_reports_first_missing_field() {
        let form = TeacherOnboardingForm::default();
        assert_eq!(form.validate(), Err(ValidationError::Required("name")));
    }

    #[test]
    fn test_short_phone_is_rejected() {
        let form = TeacherOnboardingForm {
            phone: "98765".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ValidationError::InvalidPhone("phone")));
    }

    #[test]
    fn test_subjects_required() {
        let form = TeacherOnboardingForm {
            subjects: " , ".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ValidationError::Required("subjects")));
    }

    #[test]
    fn test_into_teacher() {
        let teacher = filled().into_teacher("sch-002").unwrap();
        assert_eq!(teacher.school_id, "sch-002");
        assert_eq!(teacher.name, "Lakshmi Devi");
        assert_eq!(teacher.subjects, vec!["Mathematics", "Physics"]);
        assert!(teacher.id.starts_with("tch-"));
        assert_eq!(teacher.employee_id, teacher.id.to_uppercase());
    }
}
