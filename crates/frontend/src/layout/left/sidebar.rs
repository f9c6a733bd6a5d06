//! Sidebar with the role's menu entries.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::{icon, view_icon};
use crate::system::auth::context::use_auth;
use crate::system::i18n::context::use_i18n;
use contracts::navigation::{menu_for, ViewKey};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_auth();
    let i18n = use_i18n();

    let items = move || {
        session
            .with(|s| s.role())
            .map(|role| menu_for(role).to_vec())
            .unwrap_or_default()
    };

    view! {
        <div class="app-sidebar__content">
            <For
                each=items
                key=|view| *view
                children=move |view: ViewKey| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.current_view() == view
                            on:click=move |_| ctx.navigate(view)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(view_icon(view))}
                                <span>{move || i18n.with(|t| t.t(view.label_key()))}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
