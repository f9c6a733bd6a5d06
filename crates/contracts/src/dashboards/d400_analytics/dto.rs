use serde::{Deserialize, Serialize};

use crate::domain::a001_school::{ComplianceStatus, School};
use crate::domain::a002_student::Student;
use crate::domain::a003_teacher::Teacher;
use crate::domain::a005_attendance::{attendance_rate, AttendanceRecord};
use crate::domain::a006_grade::{overall_average, Grade};
use crate::domain::a011_ticket::Ticket;
use crate::domain::common::for_school;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceBreakdown {
    pub compliant: usize,
    pub pending: usize,
    pub non_compliant: usize,
}

impl ComplianceBreakdown {
    pub fn count(&self, status: ComplianceStatus) -> usize {
        match status {
            ComplianceStatus::Compliant => self.compliant,
            ComplianceStatus::Pending => self.pending,
            ComplianceStatus::NonCompliant => self.non_compliant,
        }
    }
}

/// Super admin view across all tenants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformSummary {
    pub school_count: usize,
    pub active_users: u64,
    pub compliance: ComplianceBreakdown,
}

impl PlatformSummary {
    pub fn from_schools(schools: &[School]) -> Self {
        let mut compliance = ComplianceBreakdown::default();
        for school in schools {
            match school.compliance_status {
                ComplianceStatus::Compliant => compliance.compliant += 1,
                ComplianceStatus::Pending => compliance.pending += 1,
                ComplianceStatus::NonCompliant => compliance.non_compliant += 1,
            }
        }
        Self {
            school_count: schools.len(),
            active_users: schools.iter().map(|s| u64::from(s.active_users)).sum(),
            compliance,
        }
    }

    /// Share of compliant schools in percent, `None` for an empty platform.
    pub fn compliance_rate(&self) -> Option<f64> {
        (self.school_count > 0)
            .then(|| self.compliance.compliant as f64 * 100.0 / self.school_count as f64)
    }
}

/// Headline numbers of one school
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolSummary {
    pub school_id: String,
    pub students: usize,
    pub teachers: usize,
    /// Percent, `None` without attendance records
    pub attendance_rate: Option<f64>,
    /// Percent, `None` without grades
    pub grade_average: Option<f32>,
    pub open_tickets: usize,
}

impl SchoolSummary {
    /// Counts only records of `school_id`; other tenants' rows are ignored.
    pub fn compute(
        school_id: &str,
        students: &[Student],
        teachers: &[Teacher],
        attendance: &[AttendanceRecord],
        grades: &[Grade],
        tickets: &[Ticket],
    ) -> Self {
        Self {
            school_id: school_id.to_string(),
            students: for_school(students, school_id).len(),
            teachers: for_school(teachers, school_id).len(),
            attendance_rate: attendance_rate(for_school(attendance, school_id)),
            grade_average: overall_average(for_school(grades, school_id)),
            open_tickets: for_school(tickets, school_id)
                .into_iter()
                .filter(|t| t.status.is_open())
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_platform_summary() {
        let schools = fixtures::schools();
        let summary = PlatformSummary::from_schools(&schools);
        assert_eq!(summary.school_count, schools.len());
        let total = summary.compliance.compliant
            + summary.compliance.pending
            + summary.compliance.non_compliant;
        assert_eq!(total, schools.len());
        assert_eq!(
            summary.active_users,
            schools.iter().map(|s| u64::from(s.active_users)).sum::<u64>()
        );
    }

    #[test]
    fn test_empty_platform() {
        let summary = PlatformSummary::from_schools(&[]);
        assert_eq!(summary.school_count, 0);
        assert_eq!(summary.compliance_rate(), None);
    }

    #[test]
    fn test_school_summary_is_tenant_scoped() {
        let data = fixtures::sample_data();
        let summary = SchoolSummary::compute(
            "sch-001",
            &data.students,
            &data.teachers,
            &data.attendance,
            &data.grades,
            &data.tickets,
        );
        let expected_students = data
            .students
            .iter()
            .filter(|s| s.school_id == "sch-001")
            .count();
        assert_eq!(summary.students, expected_students);
        assert!(summary.students < data.students.len());
        assert!(summary.attendance_rate.is_some());
        assert!(summary.grade_average.is_some());
    }

    #[test]
    fn test_unknown_school_is_empty() {
        let data = fixtures::sample_data();
        let summary = SchoolSummary::compute(
            "sch-404",
            &data.students,
            &data.teachers,
            &data.attendance,
            &data.grades,
            &data.tickets,
        );
        assert_eq!(summary.students, 0);
        assert_eq!(summary.attendance_rate, None);
        assert_eq!(summary.grade_average, None);
    }
}
