use contracts::system::i18n::{Locale, Translator};
use leptos::prelude::*;

#[component]
pub fn I18nProvider(locale: Locale, children: Children) -> impl IntoView {
    provide_context(RwSignal::new(Translator::new(locale)));

    children()
}

pub fn use_i18n() -> RwSignal<Translator> {
    use_context::<RwSignal<Translator>>().expect("I18nProvider not found in component tree")
}

/// Reactive label for a dictionary key; re-renders when the language flips.
pub fn tr(key: &'static str) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
    let i18n = use_i18n();
    move || i18n.with(|t| t.t(key))
}

/// [`tr`] as a `Signal<String>` for component props.
pub fn tr_signal(key: &'static str) -> Signal<String> {
    let i18n = use_i18n();
    Signal::derive(move || i18n.with(|t| t.t(key).to_string()))
}
