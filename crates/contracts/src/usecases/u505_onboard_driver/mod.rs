pub mod request;

pub use request::DriverOnboardingForm;

use crate::navigation::ViewKey;
use crate::usecases::common::UseCaseMetadata;

pub struct OnboardDriver;

impl UseCaseMetadata for OnboardDriver {
    fn usecase_index() -> &'static str {
        "u505"
    }

    fn usecase_name() -> &'static str {
        "onboard_driver"
    }

    fn view_key() -> ViewKey {
        ViewKey::OnboardDriver
    }
}
