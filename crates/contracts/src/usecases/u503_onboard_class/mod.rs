pub mod request;

pub use request::ClassOnboardingForm;

use crate::navigation::ViewKey;
use crate::usecases::common::UseCaseMetadata;

pub struct OnboardClass;

impl UseCaseMetadata for OnboardClass {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "onboard_class"
    }

    fn view_key() -> ViewKey {
        ViewKey::OnboardClass
    }
}
