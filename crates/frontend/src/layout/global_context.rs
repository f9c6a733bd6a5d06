use contracts::navigation::{NavigationOrigin, NavigationState, ViewKey};
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

/// Shell-wide state: the current screen and sidebar visibility.
///
/// The wrapped [`NavigationState`] is the only navigation store; every
/// screen change goes through one of the methods below.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub nav: RwSignal<NavigationState>,
    pub left_open: RwSignal<bool>,
    pub config: StoredValue<AppConfig>,
}

impl AppGlobalContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            nav: RwSignal::new(NavigationState::default()),
            left_open: RwSignal::new(true),
            config: StoredValue::new(config.clone()),
        }
    }

    /// Tracked read of the current view.
    pub fn current_view(&self) -> ViewKey {
        self.nav.with(|nav| nav.current_view())
    }

    pub fn navigate(&self, view: ViewKey) {
        self.nav.update(|nav| nav.navigate(view, None));
    }

    pub fn navigate_with(&self, view: ViewKey, origin: NavigationOrigin) {
        self.nav.update(|nav| nav.navigate_with(view, origin));
    }

    pub fn go_back(&self) {
        self.nav.update(|nav| {
            nav.go_back();
        });
    }

    /// Back to the dashboard with no selected school, used on logout.
    pub fn reset(&self) {
        self.nav.set(NavigationState::default());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}
