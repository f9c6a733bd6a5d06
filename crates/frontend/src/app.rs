use crate::app_shell::AppShell;
use crate::domain::a001_school::store::SchoolDirectoryProvider;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::AuthProvider;
use crate::system::i18n::context::I18nProvider;
use contracts::shared::config::{load_config, AppConfig};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("embedded configuration rejected, using defaults: {:#}", e);
        AppConfig::default()
    });

    // Navigation and shell state for the whole app.
    provide_context(AppGlobalContext::new(&config));

    view! {
        <ConfigProvider>
            <I18nProvider locale=config.ui.default_locale>
                <SchoolDirectoryProvider>
                    <AuthProvider auth=config.auth.clone()>
                        <AppShell />
                    </AuthProvider>
                </SchoolDirectoryProvider>
            </I18nProvider>
        </ConfigProvider>
    }
}
