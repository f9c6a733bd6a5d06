use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::render_screen;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use crate::system::i18n::context::use_i18n;
use contracts::navigation::resolve;
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

/// Renders whatever the navigation store currently points at, with a back
/// link above every screen except the dashboard.
#[component]
pub fn ScreenHost() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_auth();
    let i18n = use_i18n();

    let resolved = Memo::new(move |_| {
        let role = session.with(|s| s.role())?;
        Some(ctx.nav.with(|nav| resolve(role, nav)))
    });

    let back_link = move || {
        let target = resolved.with(|r| r.as_ref().and_then(|r| r.back))?;
        Some(view! {
            <button class="screen__back" on:click=move |_| ctx.go_back()>
                {icon("arrow-left")}
                <span>
                    {move || i18n.with(|t| t.t("common.back"))}
                    " · "
                    {move || i18n.with(|t| t.t(target.label_key()))}
                </span>
            </button>
        })
    };

    view! {
        <div class="screen">
            {back_link}
            {move || {
                match resolved.get() {
                    Some(r) => {
                        log!("rendering screen {:?}", r.screen);
                        render_screen(r.screen)
                    }
                    None => ().into_any(),
                }
            }}
        </div>
    }
}
