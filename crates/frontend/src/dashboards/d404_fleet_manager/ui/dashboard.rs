use crate::shared::components::{QuickActions, StatCard};
use crate::shared::date_utils::{format_time, today};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::current_user;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a008_fleet::{trips_on, TripStatus};
use contracts::domain::common::for_school;
use contracts::fixtures;
use contracts::navigation::ViewKey;
use leptos::prelude::*;

#[component]
pub fn FleetManagerDashboard() -> impl IntoView {
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let user = untrack(current_user);
    let name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let school_id = user.and_then(|u| u.school_id).unwrap_or_default();

    let data = fixtures::sample_data();
    let buses = for_school(&data.buses, &school_id).len();
    let drivers = for_school(&data.drivers, &school_id).len();
    let school_trips: Vec<_> = for_school(&data.trips, &school_id).into_iter().cloned().collect();
    let todays = trips_on(&school_trips, today());
    let trips_today = todays.len();
    let delayed: Vec<(String, String)> = school_trips
        .iter()
        .filter(|trip| trip.status == TripStatus::Delayed)
        .map(|trip| (trip.route_name.clone(), format_time(trip.departure)))
        .collect();

    let welcome = Signal::derive(move || format!("{}, {}", t("dashboard.welcome"), name));

    view! {
        <PageFrame page_id="d404_fleet_manager--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=welcome />

            <div class="stat-grid">
                <StatCard icon_name="bus" label=tr_signal("fleet.buses") value=Signal::stored(buses.to_string()) />
                <StatCard icon_name="user" label=tr_signal("fleet.drivers") value=Signal::stored(drivers.to_string()) delay_ms=80 />
                <StatCard icon_name="clock" label=tr_signal("dashboard.trips_today") value=Signal::stored(trips_today.to_string()) delay_ms=160 />
            </div>

            <QuickActions views=vec![ViewKey::Fleet, ViewKey::OnboardDriver] />

            <section class="dashboard-panel">
                <h3>{move || t("trip.delayed")}</h3>
                {if delayed.is_empty() {
                    view! { <p class="page__empty">{move || t("common.no_data")}</p> }.into_any()
                } else {
                    view! {
                        <ul class="dashboard-panel__list">
                            {delayed.into_iter().map(|(route, departure)| view! {
                                <li>{route} " · " <span class="text-muted">{departure}</span></li>
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }}
            </section>
        </PageFrame>
    }
}
