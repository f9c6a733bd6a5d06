//! Fleet board: buses, drivers and the day's trips.

use crate::shared::date_utils::{format_date, format_time, parse_input_date};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::scope::visible_to;
use crate::system::auth::context::use_auth;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a008_fleet::{trips_on, BusTrip, TripKind, TripStatus};
use contracts::fixtures;
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, ButtonSize, Table, TableBody,
    TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

fn status_color(status: TripStatus) -> BadgeColor {
    match status {
        TripStatus::Scheduled => BadgeColor::Informative,
        TripStatus::InProgress => BadgeColor::Brand,
        TripStatus::Completed => BadgeColor::Success,
        TripStatus::Delayed => BadgeColor::Danger,
    }
}

fn kind_key(kind: TripKind) -> &'static str {
    match kind {
        TripKind::Pickup => "trip.pickup",
        TripKind::Drop => "trip.drop",
    }
}

#[component]
pub fn FleetBoard() -> impl IntoView {
    let session = use_auth();
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let school_id = session.with_untracked(|s| s.user().and_then(|u| u.school_id.clone()));

    let data = fixtures::sample_data();
    let buses = StoredValue::new(visible_to(school_id.as_deref(), &data.buses));
    let drivers = StoredValue::new(visible_to(school_id.as_deref(), &data.drivers));
    let trips = RwSignal::new(visible_to(school_id.as_deref(), &data.trips));

    // Empty means every scheduled day
    let date_value = RwSignal::new(String::new());

    let visible_trips = Signal::derive(move || {
        let date = parse_input_date(&date_value.get());
        trips.with(|all| {
            let mut list: Vec<BusTrip> = match date {
                Some(d) => trips_on(all, d).into_iter().cloned().collect(),
                None => all.clone(),
            };
            list.sort_by_key(|trip| (trip.date, trip.departure));
            list
        })
    });

    let driver_name = move |id: &str| {
        drivers.with_value(|all| {
            all.iter()
                .find(|d| d.id == id)
                .map(|d| d.name.clone())
                .unwrap_or_else(|| "-".to_string())
        })
    };

    let update_trip = move |trip_id: String, delay: bool| {
        trips.update(|all| {
            if let Some(trip) = all.iter_mut().find(|trip| trip.id == trip_id) {
                if delay {
                    trip.mark_delayed();
                } else {
                    trip.advance();
                }
                log::info!("trip {} is now {:?}", trip.id, trip.status);
            }
        });
    };

    let active_count =
        move || trips.with(|all| all.iter().filter(|t| t.status.is_active()).count());

    view! {
        <PageFrame page_id="a008_fleet--list" category=PAGE_CAT_LIST>
            <PageHeader title=tr_signal("nav.fleet")>
                <input
                    type="date"
                    class="date-input"
                    prop:value=move || date_value.get()
                    on:change=move |ev| date_value.set(event_target_value(&ev))
                />
                <span class="page__summary">
                    {move || t("fleet.active_trips")} ": " {active_count}
                </span>
            </PageHeader>

            <div class="page__content">
                <h3>{move || t("fleet.trips")}</h3>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{move || t("common.date")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("fleet.route")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("fleet.driver")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("fleet.departure")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("fleet.students_onboard")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("common.status")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("common.actions")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible_trips.get()
                            key=|trip| (trip.id.clone(), trip.status)
                            children=move |trip| {
                                let advance_id = trip.id.clone();
                                let delay_id = trip.id.clone();
                                let status = trip.status;
                                let kind = trip.kind;
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{format_date(trip.date)}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {trip.route_name.clone()} " · " {move || t(kind_key(kind))}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{driver_name(&trip.driver_id)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_time(trip.departure)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{trip.students_onboard}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
                                                {move || t(status.label_key())}
                                            </Badge>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Primary
                                                disabled=status == TripStatus::Completed
                                                on_click=move |_| update_trip(advance_id.clone(), false)
                                            >
                                                {move || t("trip.advance")}
                                            </Button>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                disabled=status == TripStatus::Completed
                                                on_click=move |_| update_trip(delay_id.clone(), true)
                                            >
                                                {move || t("trip.delayed")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <div class="page__content--split">
                    <div>
                        <h3>{move || t("fleet.buses")}</h3>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>{move || t("fleet.bus")}</TableHeaderCell>
                                    <TableHeaderCell>{move || t("fleet.route")}</TableHeaderCell>
                                    <TableHeaderCell>{move || t("class.strength")}</TableHeaderCell>
                                    <TableHeaderCell>{move || t("fleet.driver")}</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {buses.with_value(|all| all.iter().map(|bus| {
                                    let driver = bus
                                        .driver_id
                                        .as_deref()
                                        .map(driver_name)
                                        .unwrap_or_else(|| "-".to_string());
                                    let registration = bus.registration.clone();
                                    let route_name = bus.route_name.clone();
                                    let capacity = bus.capacity;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{registration}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{route_name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{capacity}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{driver}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }).collect_view())}
                            </TableBody>
                        </Table>
                    </div>
                    <div>
                        <h3>{move || t("fleet.drivers")}</h3>
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>{move || t("common.name")}</TableHeaderCell>
                                    <TableHeaderCell>{move || t("common.phone")}</TableHeaderCell>
                                    <TableHeaderCell>{move || t("fleet.license")}</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {drivers.with_value(|all| all.iter().map(|d| {
                                    let name = d.name.clone();
                                    let phone = d.phone.clone();
                                    let license_number = d.license_number.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{phone}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{license_number}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }).collect_view())}
                            </TableBody>
                        </Table>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delayed_trips_stand_out() {
        assert!(matches!(status_color(TripStatus::Delayed), BadgeColor::Danger));
        assert_eq!(kind_key(TripKind::Drop), "trip.drop");
    }
}
