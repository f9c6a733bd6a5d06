use crate::domain::a001_school::store::use_schools;
use crate::domain::a001_school::ui::list::compliance_color;
use crate::shared::components::{format_percent, QuickActions, StatCard};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::current_user;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::dashboards::d400_analytics::PlatformSummary;
use contracts::fixtures;
use contracts::navigation::ViewKey;
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

/// Platform overview for the super admin.
#[component]
pub fn SuperAdminDashboard() -> impl IntoView {
    let directory = use_schools();
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let summary =
        Memo::new(move |_| directory.with(|dir| PlatformSummary::from_schools(dir.schools())));
    let open_tickets = fixtures::sample_data()
        .tickets
        .iter()
        .filter(|tk| tk.status.is_open())
        .count();

    let name = untrack(current_user).map(|u| u.name).unwrap_or_default();
    let welcome = Signal::derive(move || format!("{}, {}", t("dashboard.welcome"), name));

    view! {
        <PageFrame page_id="d400_super_admin--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=welcome />

            <div class="stat-grid">
                <StatCard
                    icon_name="building"
                    label=tr_signal("dashboard.total_schools")
                    value=Signal::derive(move || summary.get().school_count.to_string())
                />
                <StatCard
                    icon_name="users"
                    label=tr_signal("school.active_users")
                    value=Signal::derive(move || summary.get().active_users.to_string())
                    delay_ms=80
                />
                <StatCard
                    icon_name="award"
                    label=tr_signal("compliance.compliant")
                    value=Signal::derive(move || format_percent(summary.get().compliance_rate()))
                    delay_ms=160
                />
                <StatCard
                    icon_name="life-buoy"
                    label=tr_signal("dashboard.open_tickets")
                    value=Signal::derive(move || open_tickets.to_string())
                    delay_ms=240
                />
            </div>

            <QuickActions views=vec![
                ViewKey::Schools,
                ViewKey::ManageOnboardings,
                ViewKey::Analytics,
                ViewKey::Tickets,
            ] />

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>{move || t("common.name")}</TableHeaderCell>
                        <TableHeaderCell>{move || t("school.principal")}</TableHeaderCell>
                        <TableHeaderCell>{move || t("school.active_users")}</TableHeaderCell>
                        <TableHeaderCell>{move || t("school.compliance")}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || directory.with(|dir| dir.schools().iter().map(|school| {
                        let status = school.compliance_status;
                        let school_name = school.name.clone();
                        let principal_name = school.principal_name.clone();
                        let active_users = school.active_users;
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{school_name}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{principal_name}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{active_users}</TableCellLayout></TableCell>
                                <TableCell>
                                    <Badge appearance=BadgeAppearance::Tint color=compliance_color(status)>
                                        {move || t(status.label_key())}
                                    </Badge>
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view())}
                </TableBody>
            </Table>
        </PageFrame>
    }
}
