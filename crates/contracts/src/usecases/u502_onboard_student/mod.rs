pub mod request;

pub use request::StudentOnboardingForm;

use crate::navigation::ViewKey;
use crate::usecases::common::UseCaseMetadata;

pub struct OnboardStudent;

impl UseCaseMetadata for OnboardStudent {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "onboard_student"
    }

    fn view_key() -> ViewKey {
        ViewKey::OnboardStudent
    }
}
