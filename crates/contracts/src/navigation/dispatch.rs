use serde::{Deserialize, Serialize};

use super::state::{NavigationOrigin, NavigationState};
use super::view_key::ViewKey;
use crate::system::auth::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardKind {
    SuperAdmin,
    Principal,
    ClassTeacher,
    Teacher,
    FleetManager,
}

/// What the shell renders. One variant per non-dashboard view key, except
/// `analytics`, which splits by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Dashboard(DashboardKind),
    SuperAdminAnalytics,
    SchoolAnalytics,
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
    OnboardTeacher { school_id: Option<String> },
    OnboardStudent { school_id: Option<String> },
    OnboardClass,
    OnboardFleetManager,
    OnboardDriver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedView {
    pub screen: Screen,
    /// `None` on the dashboard itself
    pub back: Option<ViewKey>,
}

pub fn dashboard_for(role: Role) -> DashboardKind {
    match role {
        Role::SuperAdmin => DashboardKind::SuperAdmin,
        Role::Principal | Role::VicePrincipal => DashboardKind::Principal,
        Role::ClassTeacher => DashboardKind::ClassTeacher,
        Role::SubjectTeacher => DashboardKind::Teacher,
        Role::FleetManager => DashboardKind::FleetManager,
        Role::Parent | Role::Driver => DashboardKind::Principal,
    }
}

/// Same mapping for a raw role string; unknown roles get the principal
/// dashboard.
pub fn dashboard_for_key(role: &str) -> DashboardKind {
    Role::parse(role)
        .map(dashboard_for)
        .unwrap_or(DashboardKind::Principal)
}

pub fn back_target(view: ViewKey, origin: &NavigationOrigin) -> Option<ViewKey> {
    match view {
        ViewKey::Dashboard => None,
        ViewKey::OnboardTeacher | ViewKey::OnboardStudent => Some(match origin {
            NavigationOrigin::ManageOnboardings { .. } => ViewKey::ManageOnboardings,
            NavigationOrigin::Dashboard => ViewKey::Dashboard,
        }),
        _ => Some(ViewKey::Dashboard),
    }
}

pub fn resolve(role: Role, state: &NavigationState) -> ResolvedView {
    resolve_view(role, state.current_view(), state.origin())
}

pub fn resolve_view(role: Role, view: ViewKey, origin: &NavigationOrigin) -> ResolvedView {
    let school_id = || origin.school_id().map(str::to_string);
    let screen = match view {
        ViewKey::Dashboard => Screen::Dashboard(dashboard_for(role)),
        ViewKey::Attendance => Screen::Attendance,
        ViewKey::Grades => Screen::Grades,
        ViewKey::Teachers => Screen::Teachers,
        ViewKey::Classes => Screen::Classes,
        ViewKey::Tickets => Screen::Tickets,
        ViewKey::Events => Screen::Events,
        ViewKey::Fleet => Screen::Fleet,
        ViewKey::Students => Screen::Students,
        ViewKey::Timetable => Screen::Timetable,
        ViewKey::Homework => Screen::Homework,
        ViewKey::Schools => Screen::Schools,
        ViewKey::ManageOnboardings => Screen::ManageOnboardings,
        ViewKey::Analytics => match role {
            Role::SuperAdmin => Screen::SuperAdminAnalytics,
            _ => Screen::SchoolAnalytics,
        },
        ViewKey::OnboardTeacher => Screen::OnboardTeacher {
            school_id: school_id(),
        },
        ViewKey::OnboardStudent => Screen::OnboardStudent {
            school_id: school_id(),
        },
        ViewKey::OnboardClass => Screen::OnboardClass,
        ViewKey::OnboardFleetManager => Screen::OnboardFleetManager,
        ViewKey::OnboardDriver => Screen::OnboardDriver,
    };

    ResolvedView {
        screen,
        back: back_target(view, origin),
    }
}

/// Resolves a raw key. Keys outside the closed set render the dashboard.
pub fn resolve_key(role: Role, key: &str, origin: &NavigationOrigin) -> ResolvedView {
    match ViewKey::parse(key) {
        Some(view) => resolve_view(role, view, origin),
        None => {
            log::debug!("no screen for view key {:?}, rendering dashboard", key);
            resolve_view(role, ViewKey::Dashboard, origin)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_manage(school_id: &str) -> NavigationOrigin {
        NavigationOrigin::ManageOnboardings {
            school_id: school_id.to_string(),
        }
    }

    #[test]
    fn test_dashboard_mapping() {
        assert_eq!(dashboard_for(Role::SuperAdmin), DashboardKind::SuperAdmin);
        assert_eq!(dashboard_for(Role::Principal), DashboardKind::Principal);
        assert_eq!(dashboard_for(Role::VicePrincipal), DashboardKind::Principal);
        assert_eq!(dashboard_for(Role::ClassTeacher), DashboardKind::ClassTeacher);
        assert_eq!(dashboard_for(Role::SubjectTeacher), DashboardKind::Teacher);
        assert_eq!(dashboard_for(Role::FleetManager), DashboardKind::FleetManager);
        assert_eq!(dashboard_for(Role::Parent), DashboardKind::Principal);
        assert_eq!(dashboard_for(Role::Driver), DashboardKind::Principal);
    }

    #[test]
    fn test_unknown_role_string_gets_principal_dashboard() {
        assert_eq!(dashboard_for_key("librarian"), DashboardKind::Principal);
        assert_eq!(dashboard_for_key(""), DashboardKind::Principal);
        assert_eq!(dashboard_for_key("fleet_manager"), DashboardKind::FleetManager);
    }

    #[test]
    fn test_unknown_keys_render_dashboard_for_every_role() {
        let origin = NavigationOrigin::Dashboard;
        for role in Role::ALL {
            let dashboard = resolve_view(role, ViewKey::Dashboard, &origin);
            for key in ["", "settings", "Dashboard", "onboard_teacher", "analytics "] {
                assert_eq!(resolve_key(role, key, &origin), dashboard, "{role} {key:?}");
            }
        }
    }

    #[test]
    fn test_known_keys_are_not_dashboard() {
        let origin = NavigationOrigin::Dashboard;
        for role in Role::ALL {
            for view in ViewKey::ALL.into_iter().filter(|v| *v != ViewKey::Dashboard) {
                let resolved = resolve_key(role, view.as_str(), &origin);
                assert!(!matches!(resolved.screen, Screen::Dashboard(_)), "{view}");
                assert!(resolved.back.is_some(), "{view}");
            }
        }
    }

    #[test]
    fn test_analytics_splits_by_role() {
        let origin = NavigationOrigin::Dashboard;
        assert_eq!(
            resolve_view(Role::SuperAdmin, ViewKey::Analytics, &origin).screen,
            Screen::SuperAdminAnalytics
        );
        assert_eq!(
            resolve_view(Role::Principal, ViewKey::Analytics, &origin).screen,
            Screen::SchoolAnalytics
        );
        assert_eq!(
            resolve_view(Role::ClassTeacher, ViewKey::Analytics, &origin).screen,
            Screen::SchoolAnalytics
        );
    }

    #[test]
    fn test_onboarding_back_targets() {
        for view in [ViewKey::OnboardTeacher, ViewKey::OnboardStudent] {
            assert_eq!(
                back_target(view, &from_manage("school42")),
                Some(ViewKey::ManageOnboardings)
            );
            assert_eq!(
                back_target(view, &NavigationOrigin::Dashboard),
                Some(ViewKey::Dashboard)
            );
        }
        // other onboarding screens always return to the dashboard
        assert_eq!(
            back_target(ViewKey::OnboardDriver, &from_manage("school42")),
            Some(ViewKey::Dashboard)
        );
        assert_eq!(back_target(ViewKey::Dashboard, &NavigationOrigin::Dashboard), None);
    }

    #[test]
    fn test_onboarding_screen_carries_school() {
        let mut nav = NavigationState::default();
        nav.navigate(ViewKey::OnboardStudent, Some("sch-002".to_string()));
        let resolved = resolve(Role::SuperAdmin, &nav);
        assert_eq!(
            resolved.screen,
            Screen::OnboardStudent {
                school_id: Some("sch-002".to_string())
            }
        );
        assert_eq!(resolved.back, Some(ViewKey::ManageOnboardings));

        nav.navigate(ViewKey::OnboardStudent, None);
        let resolved = resolve(Role::Principal, &nav);
        assert_eq!(resolved.screen, Screen::OnboardStudent { school_id: None });
        assert_eq!(resolved.back, Some(ViewKey::Dashboard));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let nav = NavigationState::new(ViewKey::Dashboard);
        for role in Role::ALL {
            assert_eq!(resolve(role, &nav), resolve(role, &nav));
        }
    }
}
