use crate::domain::a001_school::store::use_schools;
use crate::shared::components::{format_percent, StatCard};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::dashboards::d400_analytics::{PlatformSummary, SchoolSummary};
use contracts::domain::a001_school::ComplianceStatus;
use contracts::fixtures;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

/// Share of `part` in `total` as a CSS width.
fn bar_width(part: usize, total: usize) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.0}%", part as f64 / total as f64 * 100.0)
}

/// Cross-school analytics for the super admin.
#[component]
pub fn SuperAdminAnalytics() -> impl IntoView {
    let directory = use_schools();
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let summary =
        Memo::new(move |_| directory.with(|dir| PlatformSummary::from_schools(dir.schools())));

    let per_school = Memo::new(move |_| {
        let data = fixtures::sample_data();
        directory.with(|dir| {
            dir.schools()
                .iter()
                .map(|school| {
                    (
                        school.name.clone(),
                        SchoolSummary::compute(
                            &school.id,
                            &data.students,
                            &data.teachers,
                            &data.attendance,
                            &data.grades,
                            &data.tickets,
                        ),
                    )
                })
                .collect::<Vec<_>>()
        })
    });

    view! {
        <PageFrame page_id="d405_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=tr_signal("nav.analytics") />

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
            </div>

            <section class="dashboard-panel">
                <h3>{move || t("school.compliance")}</h3>
                {move || {
                    let summary = summary.get();
                    let total = summary.school_count;
                    [
                        (ComplianceStatus::Compliant, "compliance-bar--ok"),
                        (ComplianceStatus::Pending, "compliance-bar--pending"),
                        (ComplianceStatus::NonCompliant, "compliance-bar--bad"),
                    ]
                    .into_iter()
                    .map(|(status, class)| {
                        let count = summary.compliance.count(status);
                        view! {
                            <div class="compliance-row">
                                <span class="compliance-row__label">{t(status.label_key())}</span>
                                <div class="compliance-bar">
                                    <div
                                        class=format!("compliance-bar__fill {}", class)
                                        style:width=bar_width(count, total)
                                    ></div>
                                </div>
                                <span class="compliance-row__count">{count}</span>
                            </div>
                        }
                    })
                    .collect_view()
                }}
            </section>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>{move || t("common.name")}</TableHeaderCell>
                        <TableHeaderCell>{move || t("dashboard.total_students")}</TableHeaderCell>
                        <TableHeaderCell>{move || t("dashboard.total_teachers")}</TableHeaderCell>
                        <TableHeaderCell>{move || t("attendance.rate")}</TableHeaderCell>
                        <TableHeaderCell>{move || t("grades.average")}</TableHeaderCell>
                        <TableHeaderCell>{move || t("dashboard.open_tickets")}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || per_school.get().into_iter().map(|(name, s)| view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{s.students}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{s.teachers}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{format_percent(s.attendance_rate)}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{format_percent(s.grade_average.map(f64::from))}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{s.open_tickets}</TableCellLayout></TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(1, 4), "25%");
        assert_eq!(bar_width(3, 3), "100%");
        assert_eq!(bar_width(0, 0), "0%");
    }
}
