use crate::navigation::ViewKey;

/// Identifies a use case and the screen it is launched on
pub trait UseCaseMetadata {
    /// Index, e.g. "u501"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "onboard_teacher"
    fn usecase_name() -> &'static str;

    /// Screen hosting the use case
    fn view_key() -> ViewKey;

    /// Full name such as "u501_onboard_teacher"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }

    /// Translation key of the screen title
    fn title_key() -> &'static str {
        Self::view_key().label_key()
    }
}
