use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a002_student::Student;
use crate::domain::common::entity::school_scoped_entity;
use crate::domain::common::new_local_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
        AttendanceStatus::Excused,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "attendance.present",
            AttendanceStatus::Absent => "attendance.absent",
            AttendanceStatus::Late => "attendance.late",
            AttendanceStatus::Excused => "attendance.excused",
        }
    }

    /// Late arrivals count as attended.
    pub fn counts_as_attended(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub school_id: String,
    pub student_id: String,
    pub class_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

school_scoped_entity!(AttendanceRecord);

/// Share of records counted as attended, in percent. `None` without records.
pub fn attendance_rate<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let (attended, total) = records.into_iter().fold((0u32, 0u32), |(a, t), r| {
        (a + u32::from(r.status.counts_as_attended()), t + 1)
    });
    (total > 0).then(|| f64::from(attended) * 100.0 / f64::from(total))
}

/// Records of one class on one day.
pub fn for_class_on<'a>(
    records: &'a [AttendanceRecord],
    class_id: &str,
    date: NaiveDate,
) -> Vec<&'a AttendanceRecord> {
    records
        .iter()
        .filter(|r| r.class_id == class_id && r.date == date)
        .collect()
}

/// Sets the status of a student on a day, adding the record if the day has
/// not been taken yet.
pub fn mark(
    records: &mut Vec<AttendanceRecord>,
    student: &Student,
    date: NaiveDate,
    status: AttendanceStatus,
) {
    match records
        .iter_mut()
        .find(|r| r.student_id == student.id && r.date == date)
    {
        Some(record) => record.status = status,
        None => records.push(AttendanceRecord {
            id: new_local_id("att"),
            school_id: student.school_id.clone(),
            student_id: student.id.clone(),
            class_id: student.class_id.clone(),
            date,
            status,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: "att-x".to_string(),
            school_id: "sch-001".to_string(),
            student_id: "stu-001".to_string(),
            class_id: "cls-008-a".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 11, 18).unwrap(),
            status,
        }
    }

    #[test]
    fn test_rate_counts_late_as_attended() {
        let records = vec![
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Late),
            record(AttendanceStatus::Absent),
            record(AttendanceStatus::Excused),
        ];
        assert_eq!(attendance_rate(&records), Some(50.0));
    }

    #[test]
    fn test_rate_empty_is_none() {
        assert_eq!(attendance_rate(&Vec::new()), None);
    }

    #[test]
    fn test_mark_updates_then_inserts() {
        let student = crate::fixtures::sample_data().students[0].clone();
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut records = Vec::new();
        mark(&mut records, &student, day, AttendanceStatus::Absent);
        mark(&mut records, &student, day, AttendanceStatus::Late);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, AttendanceStatus::Late);
        assert_eq!(records[0].class_id, student.class_id);

        mark(&mut records, &student, day.succ_opt().unwrap(), AttendanceStatus::Present);
        assert_eq!(records.len(), 2);
        assert_eq!(for_class_on(&records, &student.class_id, day).len(), 1);
    }
}
