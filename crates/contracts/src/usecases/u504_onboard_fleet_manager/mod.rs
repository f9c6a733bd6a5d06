pub mod request;

pub use request::FleetManagerOnboardingForm;

use crate::navigation::ViewKey;
use crate::usecases::common::UseCaseMetadata;

pub struct OnboardFleetManager;

impl UseCaseMetadata for OnboardFleetManager {
    fn usecase_index() -> &'static str {
        "u504"
    }

    fn usecase_name() -> &'static str {
        "onboard_fleet_manager"
    }

    fn view_key() -> ViewKey {
        ViewKey::OnboardFleetManager
    }
}
