use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::{icon, view_icon};
use crate::system::i18n::context::use_i18n;
use contracts::navigation::ViewKey;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Row of shortcut buttons on a dashboard.
#[component]
pub fn QuickActions(views: Vec<ViewKey>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();

    view! {
        <section class="quick-actions">
            <h3 class="quick-actions__title">
                {move || i18n.with(|t| t.t("dashboard.quick_actions"))}
            </h3>
            <div class="quick-actions__buttons">
                {views.into_iter().map(|view| view! {
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctx.navigate(view)
                    >
                        {icon(view_icon(view))}
                        {move || i18n.with(|t| t.t(view.label_key()))}
                    </Button>
                }).collect_view()}
            </div>
        </section>
    }
}
