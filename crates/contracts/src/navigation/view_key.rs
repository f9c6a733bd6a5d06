use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of screens the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKey {
    #[default]
    Dashboard,
    Attendance,
    Grades,
    Teachers,
    Classes,
    Tickets,
    Events,
    Fleet,
    Students,
    Timetable,
    Homework,
    Schools,
    ManageOnboardings,
    Analytics,
    OnboardTeacher,
    OnboardStudent,
    OnboardClass,
    OnboardFleetManager,
    OnboardDriver,
}

impl ViewKey {
    pub const ALL: [ViewKey; 19] = [
        ViewKey::Dashboard,
        ViewKey::Attendance,
        ViewKey::Grades,
        ViewKey::Teachers,
        ViewKey::Classes,
        ViewKey::Tickets,
        ViewKey::Events,
        ViewKey::Fleet,
        ViewKey::Students,
        ViewKey::Timetable,
        ViewKey::Homework,
        ViewKey::Schools,
        ViewKey::ManageOnboardings,
        ViewKey::Analytics,
        ViewKey::OnboardTeacher,
        ViewKey::OnboardStudent,
        ViewKey::OnboardClass,
        ViewKey::OnboardFleetManager,
        ViewKey::OnboardDriver,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewKey::Dashboard => "dashboard",
            ViewKey::Attendance => "attendance",
            ViewKey::Grades => "grades",
            ViewKey::Teachers => "teachers",
            ViewKey::Classes => "classes",
            ViewKey::Tickets => "tickets",
            ViewKey::Events => "events",
            ViewKey::Fleet => "fleet",
            ViewKey::Students => "students",
            ViewKey::Timetable => "timetable",
            ViewKey::Homework => "homework",
            ViewKey::Schools => "schools",
            ViewKey::ManageOnboardings => "manage-onboardings",
            ViewKey::Analytics => "analytics",
            ViewKey::OnboardTeacher => "onboard-teacher",
            ViewKey::OnboardStudent => "onboard-student",
            ViewKey::OnboardClass => "onboard-class",
            ViewKey::OnboardFleetManager => "onboard-fleet-manager",
            ViewKey::OnboardDriver => "onboard-driver",
        }
    }

    /// `None` for anything outside the closed set.
    pub fn parse(key: &str) -> Option<ViewKey> {
        ViewKey::ALL.into_iter().find(|v| v.as_str() == key)
    }

    /// Translation key of the screen title.
    pub fn label_key(self) -> &'static str {
        match self {
            ViewKey::Dashboard => "nav.dashboard",
            ViewKey::Attendance => "nav.attendance",
            ViewKey::Grades => "nav.grades",
            ViewKey::Teachers => "nav.teachers",
            ViewKey::Classes => "nav.classes",
            ViewKey::Tickets => "nav.tickets",
            ViewKey::Events => "nav.events",
            ViewKey::Fleet => "nav.fleet",
            ViewKey::Students => "nav.students",
            ViewKey::Timetable => "nav.timetable",
            ViewKey::Homework => "nav.homework",
            ViewKey::Schools => "nav.schools",
            ViewKey::ManageOnboardings => "nav.manage_onboardings",
            ViewKey::Analytics => "nav.analytics",
            ViewKey::OnboardTeacher => "nav.onboard_teacher",
            ViewKey::OnboardStudent => "nav.onboard_student",
            ViewKey::OnboardClass => "nav.onboard_class",
            ViewKey::OnboardFleetManager => "nav.onboard_fleet_manager",
            ViewKey::OnboardDriver => "nav.onboard_driver",
        }
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::i18n::{Locale, Translator};
    use std::collections::HashSet;

    #[test]
    fn test_eighteen_views_besides_dashboard() {
        let keys: HashSet<&str> = ViewKey::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(keys.len(), 19);
        assert!(keys.contains("dashboard"));
    }

    #[test]
    fn test_parse_roundtrips_and_rejects_unknown() {
        for view in ViewKey::ALL {
            assert_eq!(ViewKey::parse(view.as_str()), Some(view));
        }
        assert_eq!(ViewKey::parse("Dashboard"), None);
        assert_eq!(ViewKey::parse("onboard_teacher"), None);
        assert_eq!(ViewKey::parse(""), None);
    }

    #[test]
    fn test_serde_matches_as_str() {
        for view in ViewKey::ALL {
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{}\"", view.as_str()));
        }
    }

    #[test]
    fn test_every_view_has_a_label() {
        let tr = Translator::new(Locale::En);
        for view in ViewKey::ALL {
            assert_ne!(tr.t(view.label_key()), view.label_key(), "{view}");
        }
    }
}
