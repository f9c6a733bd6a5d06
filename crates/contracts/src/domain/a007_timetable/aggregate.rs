use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::a004_class_section::ClassSection;
use crate::shared::config::TimetableConfig;
use crate::shared::error::TimetableError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Weekday::Monday => "weekday.monday",
            Weekday::Tuesday => "weekday.tuesday",
            Weekday::Wednesday => "weekday.wednesday",
            Weekday::Thursday => "weekday.thursday",
            Weekday::Friday => "weekday.friday",
            Weekday::Saturday => "weekday.saturday",
        }
    }

    /// `None` for Sunday.
    pub fn from_chrono(day: chrono::Weekday) -> Option<Weekday> {
        match day {
            chrono::Weekday::Mon => Some(Weekday::Monday),
            chrono::Weekday::Tue => Some(Weekday::Tuesday),
            chrono::Weekday::Wed => Some(Weekday::Wednesday),
            chrono::Weekday::Thu => Some(Weekday::Thursday),
            chrono::Weekday::Fri => Some(Weekday::Friday),
            chrono::Weekday::Sat => Some(Weekday::Saturday),
            chrono::Weekday::Sun => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub id: String,
    pub class_id: String,
    pub section: String,
    pub day: Weekday,
    /// 1-based
    pub period: u8,
    pub subject: String,
    pub teacher_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    pub school_id: String,
    pub class_id: String,
    pub section: String,
    pub periods_per_day: u8,
    pub days: Vec<Weekday>,
    entries: Vec<TimetableEntry>,
}

impl Timetable {
    pub fn new(
        school_id: impl Into<String>,
        class_id: impl Into<String>,
        section: impl Into<String>,
        config: &TimetableConfig,
    ) -> Self {
        Self {
            school_id: school_id.into(),
            class_id: class_id.into(),
            section: section.into(),
            periods_per_day: config.periods_per_day,
            days: config.school_days.clone(),
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    pub fn slot(&self, day: Weekday, period: u8) -> Option<&TimetableEntry> {
        self.entries
            .iter()
            .find(|e| e.day == day && e.period == period)
    }

    /// Places `entry` in its slot. The slot must be free, within the day and
    /// on a school day, and the entry must be for this class/section.
    pub fn assign(&mut self, entry: TimetableEntry) -> Result<(), TimetableError> {
        if entry.class_id != self.class_id || entry.section != self.section {
            return Err(TimetableError::WrongClass {
                expected: format!("{}/{}", self.class_id, self.section),
                found: format!("{}/{}", entry.class_id, entry.section),
            });
        }
        if entry.period == 0 || entry.period > self.periods_per_day {
            return Err(TimetableError::PeriodOutOfRange {
                period: entry.period,
                max: self.periods_per_day,
            });
        }
        if !self.days.contains(&entry.day) {
            return Err(TimetableError::NotSchoolDay(entry.day));
        }
        if let Some(existing) = self.slot(entry.day, entry.period) {
            return Err(TimetableError::SlotTaken {
                day: entry.day,
                period: entry.period,
                subject: existing.subject.clone(),
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Frees a slot, returning what was there.
    pub fn clear_slot(&mut self, day: Weekday, period: u8) -> Option<TimetableEntry> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.day == day && e.period == period)?;
        Some(self.entries.remove(pos))
    }

    /// One row per school day, one cell per period.
    pub fn grid(&self) -> Vec<(Weekday, Vec<Option<&TimetableEntry>>)> {
        self.days
            .iter()
            .map(|&day| {
                let cells = (1..=self.periods_per_day)
                    .map(|period| self.slot(day, period))
                    .collect();
                (day, cells)
            })
            .collect()
    }

    pub fn entries_for_teacher<'a>(
        &'a self,
        teacher_id: &'a str,
    ) -> impl Iterator<Item = &'a TimetableEntry> {
        self.entries.iter().filter(move |e| e.teacher_id == teacher_id)
    }

    /// Same class laid out on `config`'s days and periods. Entries that no
    /// longer fit the grid are dropped.
    pub fn conformed_to(&self, config: &TimetableConfig) -> Timetable {
        let mut table = Timetable::new(
            self.school_id.clone(),
            self.class_id.clone(),
            self.section.clone(),
            config,
        );
        for entry in &self.entries {
            if let Err(e) = table.assign(entry.clone()) {
                log::debug!("dropping {} from {}: {}", entry.id, self.class_id, e);
            }
        }
        table
    }
}

/// Timetable of `class`, created empty on `config` when the class has none.
pub fn timetable_for_class<'a>(
    timetables: &'a mut Vec<Timetable>,
    class: &ClassSection,
    config: &TimetableConfig,
) -> &'a mut Timetable {
    let pos = match timetables.iter().position(|tt| tt.class_id == class.id) {
        Some(pos) => pos,
        None => {
            log::info!("starting empty timetable for {}", class.id);
            timetables.push(Timetable::new(
                class.school_id.clone(),
                class.id.clone(),
                class.section.clone(),
                config,
            ));
            timetables.len() - 1
        }
    };
    &mut timetables[pos]
}

/// A teacher booked into more than one class for the same slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherClash {
    pub teacher_id: String,
    pub day: Weekday,
    pub period: u8,
    pub class_ids: Vec<String>,
}

pub fn teacher_clashes(timetables: &[Timetable]) -> Vec<TeacherClash> {
    let mut slots: HashMap<(&str, Weekday, u8), Vec<String>> = HashMap::new();
    for tt in timetables {
        for e in &tt.entries {
            slots
                .entry((e.teacher_id.as_str(), e.day, e.period))
                .or_default()
                .push(format!("{}/{}", e.class_id, e.section));
        }
    }

    let mut clashes: Vec<TeacherClash> = slots
        .into_iter()
        .filter(|(_, classes)| classes.len() > 1)
        .map(|((teacher_id, day, period), class_ids)| TeacherClash {
            teacher_id: teacher_id.to_string(),
            day,
            period,
            class_ids,
        })
        .collect();
    clashes.sort_by(|a, b| {
        (&a.teacher_id, a.day, a.period).cmp(&(&b.teacher_id, b.day, b.period))
    });
    clashes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: Weekday, period: u8, subject: &str, teacher: &str) -> TimetableEntry {
        TimetableEntry {
            id: format!("tte-{}-{}", day, period),
            class_id: "cls-008-a".to_string(),
            section: "A".to_string(),
            day,
            period,
            subject: subject.to_string(),
            teacher_id: teacher.to_string(),
        }
    }

    fn timetable() -> Timetable {
        Timetable::new("sch-001", "cls-008-a", "A", &TimetableConfig::default())
    }

    #[test]
    fn test_grid_dimensions() {
        let tt = timetable();
        let grid = tt.grid();
        assert_eq!(grid.len(), 6);
        assert!(grid.iter().all(|(_, cells)| cells.len() == 8));
    }

    #[test]
    fn test_occupied_slot_rejected() {
        let mut tt = timetable();
        tt.assign(entry(Weekday::Monday, 1, "Mathematics", "tch-001")).unwrap();
        let err = tt
            .assign(entry(Weekday::Monday, 1, "Science", "tch-002"))
            .unwrap_err();
        assert_eq!(
            err,
            TimetableError::SlotTaken {
                day: Weekday::Monday,
                period: 1,
                subject: "Mathematics".to_string()
            }
        );
        assert_eq!(tt.entries().len(), 1);
    }

    #[test]
    fn test_period_bounds() {
        let mut tt = timetable();
        assert!(matches!(
            tt.assign(entry(Weekday::Friday, 0, "PE", "tch-003")),
            Err(TimetableError::PeriodOutOfRange { period: 0, max: 8 })
        ));
        assert!(matches!(
            tt.assign(entry(Weekday::Friday, 9, "PE", "tch-003")),
            Err(TimetableError::PeriodOutOfRange { period: 9, max: 8 })
        ));
        assert!(tt.assign(entry(Weekday::Friday, 8, "PE", "tch-003")).is_ok());
    }

    #[test]
    fn test_wrong_class_rejected() {
        let mut tt = timetable();
        let mut e = entry(Weekday::Tuesday, 2, "English", "tch-004");
        e.section = "B".to_string();
        assert!(matches!(tt.assign(e), Err(TimetableError::WrongClass { .. })));
    }

    #[test]
    fn test_non_school_day_rejected() {
        let config = TimetableConfig {
            periods_per_day: 6,
            school_days: vec![Weekday::Monday, Weekday::Tuesday],
        };
        let mut tt = Timetable::new("sch-001", "cls-008-a", "A", &config);
        assert_eq!(
            tt.assign(entry(Weekday::Saturday, 1, "Art", "tch-005")),
            Err(TimetableError::NotSchoolDay(Weekday::Saturday))
        );
    }

    #[test]
    fn test_clear_slot_frees_it() {
        let mut tt = timetable();
        tt.assign(entry(Weekday::Wednesday, 3, "Hindi", "tch-006")).unwrap();
        let removed = tt.clear_slot(Weekday::Wednesday, 3).unwrap();
        assert_eq!(removed.subject, "Hindi");
        assert!(tt.slot(Weekday::Wednesday, 3).is_none());
        assert!(tt.assign(entry(Weekday::Wednesday, 3, "Telugu", "tch-007")).is_ok());
    }

    #[test]
    fn test_teacher_clash_across_classes() {
        let mut a = timetable();
        a.assign(entry(Weekday::Monday, 2, "Mathematics", "tch-001")).unwrap();
        let mut b = Timetable::new("sch-001", "cls-009-a", "A", &TimetableConfig::default());
        let mut e = entry(Weekday::Monday, 2, "Mathematics", "tch-001");
        e.class_id = "cls-009-a".to_string();
        b.assign(e).unwrap();

        let clashes = teacher_clashes(&[a, b]);
        assert_eq!(clashes.len(), 1);
        assert_eq!(clashes[0].teacher_id, "tch-001");
        assert_eq!(clashes[0].class_ids.len(), 2);
    }

    #[test]
    fn test_conformed_to_shrinks_grid() {
        let mut tt = timetable();
        tt.assign(entry(Weekday::Monday, 2, "Mathematics", "tch-001")).unwrap();
        tt.assign(entry(Weekday::Monday, 7, "Art", "tch-005")).unwrap();
        tt.assign(entry(Weekday::Saturday, 1, "PE", "tch-003")).unwrap();

        let config = TimetableConfig {
            periods_per_day: 6,
            school_days: Weekday::ALL[..5].to_vec(),
        };
        let short = tt.conformed_to(&config);
        let grid = short.grid();
        assert_eq!(grid.len(), 5);
        assert!(grid.iter().all(|(_, cells)| cells.len() == 6));
        assert_eq!(short.entries().len(), 1);
        assert!(short.slot(Weekday::Monday, 2).is_some());
    }

    #[test]
    fn test_timetable_for_class_creates_missing() {
        let class = ClassSection {
            id: "cls-010-a".to_string(),
            school_id: "sch-001".to_string(),
            grade: 10,
            section: "A".to_string(),
            room: "R-10".to_string(),
            class_teacher_id: None,
            capacity: 40,
        };
        let config = TimetableConfig {
            periods_per_day: 5,
            school_days: vec![Weekday::Monday, Weekday::Tuesday],
        };
        let mut all = vec![timetable()];

        let created = timetable_for_class(&mut all, &class, &config);
        assert_eq!(created.periods_per_day, 5);
        created
            .assign(TimetableEntry {
                class_id: "cls-010-a".to_string(),
                ..entry(Weekday::Tuesday, 5, "Science", "tch-002")
            })
            .unwrap();
        assert_eq!(all.len(), 2);

        // Existing timetables are reused, not duplicated
        let again = timetable_for_class(&mut all, &class, &config);
        assert_eq!(again.entries().len(), 1);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_weekday_from_chrono() {
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Mon), Some(Weekday::Monday));
        assert_eq!(Weekday::from_chrono(chrono::Weekday::Sun), None);
    }
}
