//! Top bar: brand, sidebar toggle, language switch, notifications, user and
//! logout.

pub mod notifications;

use crate::domain::a001_school::store::use_schools;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::i18n::context::use_i18n;
use leptos::prelude::*;
use notifications::NotificationsButton;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_auth();
    let i18n = use_i18n();
    let schools = use_schools();

    // Brand of the user's school; the super admin sees the platform title.
    let brand = move || {
        let school_id = session.with(|s| s.user().and_then(|u| u.school_id.clone()));
        let locale = i18n.with(|t| t.locale());
        school_id
            .and_then(|id| {
                schools.with(|dir| {
                    dir.get_school_by_id(&id)
                        .map(|s| (s.display_name(locale).to_string(), s.brand_color.clone()))
                })
            })
            .unwrap_or_else(|| {
                let title = ctx.config.with_value(|c| c.ui.app_title.clone());
                (title, "var(--color-primary)".to_string())
            })
    };

    let user_label = move || {
        let locale = i18n.with(|t| t.locale());
        session.with(|s| {
            s.user()
                .map(|u| {
                    let role = i18n.with(|t| t.t(u.role.label_key()));
                    format!("{} · {}", u.display_name(locale), role)
                })
                .unwrap_or_default()
        })
    };

    let logout = move |_| {
        do_logout(session);
        ctx.reset();
    };

    view! {
        <div class="top-header" style:border-bottom-color=move || brand().1>
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title" style:color=move || brand().1>
                    {move || brand().0}
                </span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    title=move || i18n.with(|t| t.t("common.language"))
                    on:click=move |_| i18n.update(|t| t.toggle_language())
                >
                    {icon("globe")}
                    <span>{move || i18n.with(|t| t.locale().toggled().native_name())}</span>
                </button>

                <NotificationsButton />

                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_label}</span>
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=logout
                    title=move || i18n.with(|t| t.t("common.logout"))
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
