pub mod card_animated;
pub mod form_field;
pub mod quick_actions;
pub mod stat_card;

pub use card_animated::CardAnimated;
pub use form_field::{FormField, SuccessBar, ValidationBar};
pub use quick_actions::QuickActions;
pub use stat_card::{format_percent, StatCard};
