use serde::{Deserialize, Serialize};

use crate::domain::a004_class_section::ClassSection;
use crate::shared::error::ValidationError;
use crate::usecases::common::{optional, require};

const DEFAULT_CAPACITY: u32 = 40;

/// Raw input of the class onboarding form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassOnboardingForm {
    /// 1..=12
    pub grade: String,
    pub section: String,
    pub room: String,
    pub class_teacher_id: String,
    /// Blank means the default of 40
    pub capacity: String,
}

impl ClassOnboardingForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.grade()?;
        require("section", &self.section)?;
        require("room", &self.room)?;
        self.capacity()?;
        Ok(())
    }

    fn grade(&self) -> Result<u8, ValidationError> {
        let raw = require("grade", &self.grade)?;
        raw.parse::<u8>()
            .ok()
            .filter(|g| (1..=12).contains(g))
            .ok_or(ValidationError::OutOfRange {
                field: "grade",
                min: 1,
                max: 12,
            })
    }

    fn capacity(&self) -> Result<u32, ValidationError> {
        let Some(raw) = optional(&self.capacity) else {
            return Ok(DEFAULT_CAPACITY);
        };
        raw.parse::<u32>()
            .ok()
            .filter(|c| (1..=100).contains(c))
            .ok_or(ValidationError::OutOfRange {
                field: "capacity",
                min: 1,
                max: 100,
            })
    }

    /// Class ids follow the `cls-008-a` pattern.
    pub fn into_class(self, school_id: &str) -> Result<ClassSection, ValidationError> {
        self.validate()?;
        let grade = self.grade()?;
        let section = self.section.trim().to_uppercase();
        Ok(ClassSection {
            id: format!("cls-{:03}-{}", grade, section.to_lowercase()),
            school_id: school_id.to_string(),
            grade,
            section,
            room: self.room.trim().to_string(),
            class_teacher_id: optional(&self.class_teacher_id),
            capacity: self.capacity()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ClassOnboardingForm {
        ClassOnboardingForm {
            grade: "8".into(),
            section: "b".into(),
            room: "R-204".into(),
            class_teacher_id: String::new(),
            capacity: String::new(),
        }
    }

    #[test]
    fn test_grade_range() {
        for grade in ["0", "13", "eight"] {
            let form = ClassOnboardingForm {
                grade: grade.into(),
                ..filled()
            };
            assert_eq!(
                form.validate(),
                Err(ValidationError::OutOfRange {
                    field: "grade",
                    min: 1,
                    max: 12
                })
            );
        }
    }

    #[test]
    fn test_into_class() {
        let class = filled().into_class("sch-001").unwrap();
        assert_eq!(class.id, "cls-008-b");
        assert_eq!(class.label(), "8-B");
        assert_eq!(class.capacity, 40);
        assert_eq!(class.class_teacher_id, None);
    }
}
