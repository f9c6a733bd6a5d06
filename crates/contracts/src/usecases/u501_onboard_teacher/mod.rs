pub mod request;

pub use request::TeacherOnboardingForm;

use crate::navigation::ViewKey;
use crate::usecases::common::UseCaseMetadata;

pub struct OnboardTeacher;

impl UseCaseMetadata for OnboardTeacher {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "onboard_teacher"
    }

    fn view_key() -> ViewKey {
        ViewKey::OnboardTeacher
    }
}
