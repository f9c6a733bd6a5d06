use crate::shared::date_utils::{format_date, today};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::scope::visible_to;
use crate::system::auth::context::current_school_id;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a010_event::{upcoming, Event, EventKind};
use contracts::fixtures;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, Card};

pub(crate) fn kind_key(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Holiday => "event.holiday",
        EventKind::Exam => "event.exam",
        EventKind::Meeting => "event.meeting",
        EventKind::Celebration => "event.celebration",
        EventKind::Sports => "event.sports",
    }
}

fn kind_color(kind: EventKind) -> BadgeColor {
    match kind {
        EventKind::Holiday => BadgeColor::Success,
        EventKind::Exam => BadgeColor::Danger,
        EventKind::Meeting => BadgeColor::Informative,
        EventKind::Celebration => BadgeColor::Important,
        EventKind::Sports => BadgeColor::Warning,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EventList() -> impl IntoView {
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let school_id = untrack(current_school_id);
    let events = StoredValue::new(visible_to(
        school_id.as_deref(),
        &fixtures::sample_data().events,
    ));
    let only_upcoming = RwSignal::new(true);

    let rows = Signal::derive(move || {
        let only_upcoming = only_upcoming.get();
        events.with_value(|all| {
            if only_upcoming {
                upcoming(all, today()).into_iter().cloned().collect::<Vec<Event>>()
            } else {
                let mut list = all.clone();
                list.sort_by_key(|e| e.date);
                list
            }
        })
    });

    view! {
        <PageFrame page_id="a010_event--list" category=PAGE_CAT_LIST>
            <PageHeader title=tr_signal("nav.events")>
                <Button
                    appearance=Signal::derive(move || {
                        if only_upcoming.get() { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                    })
                    on_click=move |_| only_upcoming.update(|v| *v = !*v)
                >
                    {move || t("event.upcoming")}
                </Button>
            </PageHeader>

            <div class="page__content event-list">
                <Show
                    when=move || rows.with(|r| !r.is_empty())
                    fallback=move || view! { <p class="page__empty">{move || t("common.no_data")}</p> }
                >
                    {move || rows.get().into_iter().map(|event| {
                        let kind = event.kind;
                        let title = {
                            let event = event.clone();
                            move || event.display_title(i18n.with(|t| t.locale())).to_string()
                        };
                        view! {
                            <Card class="event-card">
                                <div class="event-card__date">{format_date(event.date)}</div>
                                <div class="event-card__title">{title}</div>
                                <Badge appearance=BadgeAppearance::Tint color=kind_color(kind)>
                                    {move || t(kind_key(kind))}
                                </Badge>
                                <p class="text-muted">{event.description.clone()}</p>
                            </Card>
                        }
                    }).collect_view()}
                </Show>
            </div>
        </PageFrame>
    }
}
