use super::view_key::ViewKey;
use crate::system::auth::Role;

const SUPER_ADMIN: &[ViewKey] = &[
    ViewKey::Dashboard,
    ViewKey::Schools,
    ViewKey::ManageOnboardings,
    ViewKey::Analytics,
    ViewKey::Tickets,
];

const SCHOOL_LEADERSHIP: &[ViewKey] = &[
    ViewKey::Dashboard,
    ViewKey::Students,
    ViewKey::Teachers,
    ViewKey::Classes,
    ViewKey::Attendance,
    ViewKey::Grades,
    ViewKey::Timetable,
    ViewKey::Homework,
    ViewKey::Events,
    ViewKey::Fleet,
    ViewKey::Tickets,
    ViewKey::Analytics,
];

const CLASS_TEACHER: &[ViewKey] = &[
    ViewKey::Dashboard,
    ViewKey::Students,
    ViewKey::Attendance,
    ViewKey::Grades,
    ViewKey::Timetable,
    ViewKey::Homework,
    ViewKey::Events,
    ViewKey::Tickets,
];

const SUBJECT_TEACHER: &[ViewKey] = &[
    ViewKey::Dashboard,
    ViewKey::Grades,
    ViewKey::Timetable,
    ViewKey::Homework,
    ViewKey::Events,
    ViewKey::Tickets,
];

const FLEET_MANAGER: &[ViewKey] = &[
    ViewKey::Dashboard,
    ViewKey::Fleet,
    ViewKey::OnboardDriver,
    ViewKey::Events,
    ViewKey::Tickets,
];

const FAMILY_AND_DRIVERS: &[ViewKey] = &[ViewKey::Dashboard, ViewKey::Events, ViewKey::Tickets];

/// Sidebar entries for a role. Presentation only: dispatch does not consult it.
pub fn menu_for(role: Role) -> &'static [ViewKey] {
    match role {
        Role::SuperAdmin => SUPER_ADMIN,
        Role::Principal | Role::VicePrincipal => SCHOOL_LEADERSHIP,
        Role::ClassTeacher => CLASS_TEACHER,
        Role::SubjectTeacher => SUBJECT_TEACHER,
        Role::FleetManager => FLEET_MANAGER,
        Role::Parent | Role::Driver => FAMILY_AND_DRIVERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_starts_with_dashboard() {
        for role in Role::ALL {
            assert_eq!(menu_for(role).first(), Some(&ViewKey::Dashboard), "{role}");
        }
    }

    #[test]
    fn test_onboarding_views_reached_from_screens_not_menu() {
        // teacher/student onboarding is launched from dashboards or manage-onboardings
        for role in Role::ALL {
            assert!(!menu_for(role).contains(&ViewKey::OnboardTeacher));
            assert!(!menu_for(role).contains(&ViewKey::OnboardStudent));
        }
    }

    #[test]
    fn test_only_super_admin_manages_schools() {
        for role in Role::ALL {
            assert_eq!(
                menu_for(role).contains(&ViewKey::Schools),
                role == Role::SuperAdmin
            );
        }
    }
}
