use serde::{Deserialize, Serialize};

use super::dispatch::back_target;
use super::view_key::ViewKey;

/// Where a navigation was launched from. Chosen by the caller at
/// navigation time; it decides the back target of onboarding screens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationOrigin {
    #[default]
    Dashboard,
    ManageOnboardings { school_id: String },
}

impl NavigationOrigin {
    pub fn from_school(school_id: Option<String>) -> Self {
        match school_id {
            Some(school_id) => NavigationOrigin::ManageOnboardings { school_id },
            None => NavigationOrigin::Dashboard,
        }
    }

    pub fn school_id(&self) -> Option<&str> {
        match self {
            NavigationOrigin::Dashboard => None,
            NavigationOrigin::ManageOnboardings { school_id } => Some(school_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    current_view: ViewKey,
    origin: NavigationOrigin,
}

impl NavigationState {
    pub fn new(initial: ViewKey) -> Self {
        Self {
            current_view: initial,
            origin: NavigationOrigin::Dashboard,
        }
    }

    pub fn current_view(&self) -> ViewKey {
        self.current_view
    }

    pub fn origin(&self) -> &NavigationOrigin {
        &self.origin
    }

    pub fn selected_school_for_onboarding(&self) -> Option<&str> {
        self.origin.school_id()
    }

    /// Navigates to `view`. The selected school is replaced by `school_id`,
    /// so omitting it clears any school chosen by an earlier navigation.
    pub fn navigate(&mut self, view: ViewKey, school_id: Option<String>) {
        self.navigate_with(view, NavigationOrigin::from_school(school_id));
    }

    pub fn navigate_with(&mut self, view: ViewKey, origin: NavigationOrigin) {
        log::info!("navigate {} -> {} ({:?})", self.current_view, view, origin);
        self.origin = origin;
        self.current_view = view;
    }

    /// Raw-key entry point; keys outside the closed set go to the dashboard.
    pub fn navigate_key(&mut self, key: &str, school_id: Option<String>) {
        let view = ViewKey::parse(key).unwrap_or_else(|| {
            log::debug!("unknown view key {:?}, falling back to dashboard", key);
            ViewKey::Dashboard
        });
        self.navigate(view, school_id);
    }

    /// Single-level back: the hardcoded target of the current screen.
    pub fn back_target(&self) -> Option<ViewKey> {
        back_target(self.current_view, &self.origin)
    }

    /// Follows [`NavigationState::back_target`]; returns false on the dashboard.
    pub fn go_back(&mut self) -> bool {
        match self.back_target() {
            Some(target) => {
                self.navigate(target, None);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_dashboard() {
        let nav = NavigationState::default();
        assert_eq!(nav.current_view(), ViewKey::Dashboard);
        assert_eq!(nav.selected_school_for_onboarding(), None);
    }

    #[test]
    fn test_school_is_cleared_when_omitted() {
        let mut nav = NavigationState::default();
        nav.navigate(ViewKey::OnboardTeacher, Some("school42".to_string()));
        assert_eq!(nav.selected_school_for_onboarding(), Some("school42"));
        nav.navigate(ViewKey::Students, None);
        assert_eq!(nav.current_view(), ViewKey::Students);
        assert_eq!(nav.selected_school_for_onboarding(), None);
    }

    #[test]
    fn test_school_is_overwritten() {
        let mut nav = NavigationState::default();
        nav.navigate(ViewKey::OnboardStudent, Some("sch-001".to_string()));
        nav.navigate(ViewKey::OnboardTeacher, Some("sch-002".to_string()));
        assert_eq!(nav.selected_school_for_onboarding(), Some("sch-002"));
    }

    #[test]
    fn test_back_from_manage_onboardings_flow() {
        let mut nav = NavigationState::default();
        nav.navigate(ViewKey::OnboardTeacher, Some("school42".to_string()));
        assert!(nav.go_back());
        assert_eq!(nav.current_view(), ViewKey::ManageOnboardings);
        assert_eq!(nav.selected_school_for_onboarding(), None);
    }

    #[test]
    fn test_back_from_principal_flow() {
        let mut nav = NavigationState::default();
        nav.navigate(ViewKey::OnboardTeacher, None);
        assert!(nav.go_back());
        assert_eq!(nav.current_view(), ViewKey::Dashboard);
    }

    #[test]
    fn test_no_back_from_dashboard() {
        let mut nav = NavigationState::default();
        assert!(!nav.go_back());
        assert_eq!(nav.current_view(), ViewKey::Dashboard);
    }

    #[test]
    fn test_unknown_key_goes_to_dashboard() {
        let mut nav = NavigationState::new(ViewKey::Fleet);
        nav.navigate_key("reports", Some("sch-001".to_string()));
        assert_eq!(nav.current_view(), ViewKey::Dashboard);
        nav.navigate_key("timetable", None);
        assert_eq!(nav.current_view(), ViewKey::Timetable);
    }

    #[test]
    fn test_origin_serializes_tagged() {
        let origin = NavigationOrigin::ManageOnboardings {
            school_id: "sch-003".to_string(),
        };
        let json = serde_json::to_value(&origin).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "manage_onboardings", "school_id": "sch-003"})
        );
    }
}
