//! Application shell: the auth gate and the main layout behind it.

use crate::layout::center::ScreenHost;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ScreenHost /> }.into_any()
        />
    }
}

/// Shows `LoginPage` until a session exists, then the main layout.
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_auth();

    view! {
        <Show
            when=move || session.with(|s| s.is_authenticated())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
