//! Super admin hub for onboarding staff and students into any school.

use serde::{Deserialize, Serialize};

use crate::navigation::{NavigationOrigin, ViewKey};
use crate::usecases::common::UseCaseMetadata;

pub struct ManageOnboardings;

impl UseCaseMetadata for ManageOnboardings {
    fn usecase_index() -> &'static str {
        "u506"
    }

    fn usecase_name() -> &'static str {
        "manage_onboardings"
    }

    fn view_key() -> ViewKey {
        ViewKey::ManageOnboardings
    }
}

/// Flows that can be launched for a chosen school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingKind {
    Teacher,
    Student,
}

impl OnboardingKind {
    pub const ALL: [OnboardingKind; 2] = [OnboardingKind::Teacher, OnboardingKind::Student];

    pub fn view_key(&self) -> ViewKey {
        match self {
            OnboardingKind::Teacher => ViewKey::OnboardTeacher,
            OnboardingKind::Student => ViewKey::OnboardStudent,
        }
    }

    /// Where to navigate to start this flow for `school_id`. Back from the
    /// form returns to this hub.
    pub fn launch(&self, school_id: &str) -> (ViewKey, NavigationOrigin) {
        (
            self.view_key(),
            NavigationOrigin::ManageOnboardings {
                school_id: school_id.to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavigationState;

    #[test]
    fn test_launch_returns_to_hub() {
        let mut nav = NavigationState::default();
        let (view, origin) = OnboardingKind::Student.launch("sch-002");
        nav.navigate_with(view, origin);
        assert_eq!(nav.current_view(), ViewKey::OnboardStudent);
        assert_eq!(nav.selected_school_for_onboarding(), Some("sch-002"));
        assert_eq!(nav.back_target(), Some(ViewKey::ManageOnboardings));
    }

    #[test]
    fn test_full_name() {
        assert_eq!(ManageOnboardings::full_name(), "u506_manage_onboardings");
        assert_eq!(ManageOnboardings::title_key(), "nav.manage_onboardings");
    }
}
