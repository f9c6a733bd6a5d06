use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use crate::system::i18n::context::use_i18n;
use contracts::domain::a012_notification::{mark_all_read, unread_count, Notification};
use contracts::fixtures;
use leptos::prelude::*;
use thaw::{Badge, BadgeColor, Button, ButtonAppearance, ButtonSize};

/// Bell with an unread counter and a drop-down list of the user's
/// notifications. Read state is kept for the session only.
#[component]
pub fn NotificationsButton() -> impl IntoView {
    let session = use_auth();
    let i18n = use_i18n();
    let notifications = RwSignal::new(fixtures::sample_data().notifications.clone());
    let open = RwSignal::new(false);

    let audience = move || {
        session.with(|s| {
            s.user()
                .map(|u| (u.id.clone(), u.school_id.clone()))
                .unwrap_or_default()
        })
    };

    let unread = move || {
        let (user_id, school_id) = audience();
        notifications.with(|list| unread_count(list, &user_id, school_id.as_deref()))
    };

    let visible = move || {
        let (user_id, school_id) = audience();
        notifications.with(|list| {
            list.iter()
                .filter(|n| n.is_for(&user_id, school_id.as_deref()))
                .cloned()
                .collect::<Vec<Notification>>()
        })
    };

    let read_all = move |_| {
        let (user_id, school_id) = audience();
        notifications.update(|list| mark_all_read(list, &user_id, school_id.as_deref()));
    };

    view! {
        <div class="notifications">
            <button
                class="top-header__icon-btn"
                title=move || i18n.with(|t| t.t("common.notifications"))
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("bell")}
                <Show when=move || { unread() > 0 }>
                    <Badge color=BadgeColor::Danger>{move || unread().to_string()}</Badge>
                </Show>
            </button>

            <Show when=move || open.get()>
                <div class="notifications__panel">
                    <div class="notifications__header">
                        <strong>{move || i18n.with(|t| t.t("common.notifications"))}</strong>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=read_all
                        >
                            {move || i18n.with(|t| t.t("notification.mark_all_read"))}
                        </Button>
                    </div>
                    {move || {
                        let items = visible();
                        if items.is_empty() {
                            return view! {
                                <p class="notifications__empty">
                                    {move || i18n.with(|t| t.t("common.no_data"))}
                                </p>
                            }
                            .into_any();
                        }
                        items
                            .into_iter()
                            .map(|n| {
                                view! {
                                    <div
                                        class="notifications__item"
                                        class:notifications__item--unread=!n.read
                                    >
                                        <div class="notifications__title">{n.title}</div>
                                        <div class="notifications__message">{n.message}</div>
                                        <div class="notifications__time">
                                            {format_timestamp(n.created_at)}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
