use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::common::entity::school_scoped_entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: String,
    pub school_id: String,
    pub student_id: String,
    pub class_id: String,
    pub subject: String,
    /// e.g. "Unit Test 2", "Half Yearly"
    pub exam: String,
    pub marks_obtained: f32,
    pub max_marks: f32,
}

school_scoped_entity!(Grade);

impl Grade {
    /// `None` when `max_marks` is not positive.
    pub fn percentage(&self) -> Option<f32> {
        (self.max_marks > 0.0).then(|| self.marks_obtained / self.max_marks * 100.0)
    }

    pub fn letter(&self) -> Option<&'static str> {
        self.percentage().map(letter_for)
    }
}

pub fn letter_for(percentage: f32) -> &'static str {
    match percentage {
        p if p >= 90.0 => "A+",
        p if p >= 80.0 => "A",
        p if p >= 70.0 => "B",
        p if p >= 60.0 => "C",
        p if p >= 50.0 => "D",
        _ => "F",
    }
}

/// Mean percentage per subject, ordered by subject name.
pub fn subject_averages<'a, I>(grades: I) -> BTreeMap<String, f32>
where
    I: IntoIterator<Item = &'a Grade>,
{
    let mut sums: BTreeMap<String, (f32, u32)> = BTreeMap::new();
    for grade in grades {
        if let Some(p) = grade.percentage() {
            let entry = sums.entry(grade.subject.clone()).or_insert((0.0, 0));
            entry.0 += p;
            entry.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(subject, (sum, n))| (subject, sum / n as f32))
        .collect()
}

/// Mean percentage across all gradable records.
pub fn overall_average<'a, I>(grades: I) -> Option<f32>
where
    I: IntoIterator<Item = &'a Grade>,
{
    let percentages: Vec<f32> = grades.into_iter().filter_map(Grade::percentage).collect();
    (!percentages.is_empty()).then(|| percentages.iter().sum::<f32>() / percentages.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(subject: &str, marks: f32, max: f32) -> Grade {
        Grade {
            id: "grd-x".to_string(),
            school_id: "sch-001".to_string(),
            student_id: "stu-001".to_string(),
            class_id: "cls-008-a".to_string(),
            subject: subject.to_string(),
            exam: "Unit Test 1".to_string(),
            marks_obtained: marks,
            max_marks: max,
        }
    }

    #[test]
    fn test_letter_boundaries() {
        assert_eq!(letter_for(90.0), "A+");
        assert_eq!(letter_for(89.9), "A");
        assert_eq!(letter_for(70.0), "B");
        assert_eq!(letter_for(50.0), "D");
        assert_eq!(letter_for(49.9), "F");
    }

    #[test]
    fn test_zero_max_marks_is_ungraded() {
        let g = grade("Telugu", 10.0, 0.0);
        assert_eq!(g.percentage(), None);
        assert_eq!(g.letter(), None);
    }

    #[test]
    fn test_subject_averages() {
        let grades = vec![
            grade("Mathematics", 45.0, 50.0),
            grade("Mathematics", 35.0, 50.0),
            grade("Science", 60.0, 100.0),
            grade("Telugu", 1.0, 0.0),
        ];
        let avgs = subject_averages(&grades);
        assert_eq!(avgs.len(), 2);
        assert!((avgs["Mathematics"] - 80.0).abs() < 1e-4);
        assert!((avgs["Science"] - 60.0).abs() < 1e-4);
        assert!((overall_average(&grades).unwrap() - 73.333_336).abs() < 1e-3);
    }
}
