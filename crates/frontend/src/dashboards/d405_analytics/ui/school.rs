use crate::shared::components::{format_percent, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::current_school_id;
use crate::system::i18n::context::{tr_signal, use_i18n};
use chrono::NaiveDate;
use contracts::dashboards::d400_analytics::SchoolSummary;
use contracts::domain::a005_attendance::{attendance_rate, AttendanceRecord};
use contracts::domain::a006_grade::subject_averages;
use contracts::domain::common::for_school;
use contracts::fixtures;
use leptos::prelude::*;
use std::collections::BTreeMap;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

/// Attendance rate per calendar day, oldest first.
fn daily_attendance(records: &[&AttendanceRecord]) -> Vec<(NaiveDate, Option<f64>)> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&AttendanceRecord>> = BTreeMap::new();
    for record in records {
        by_day.entry(record.date).or_default().push(*record);
    }
    by_day
        .into_iter()
        .map(|(day, day_records)| (day, attendance_rate(day_records)))
        .collect()
}

/// Analytics of the logged-in user's school.
#[component]
pub fn SchoolAnalytics() -> impl IntoView {
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let school_id = untrack(current_school_id).unwrap_or_default();
    let data = fixtures::sample_data();
    let summary = SchoolSummary::compute(
        &school_id,
        &data.students,
        &data.teachers,
        &data.attendance,
        &data.grades,
        &data.tickets,
    );
    let averages = subject_averages(for_school(&data.grades, &school_id));
    let daily = daily_attendance(&for_school(&data.attendance, &school_id));

    view! {
        <PageFrame page_id="d405_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=tr_signal("nav.analytics") />

            <div class="stat-grid">
                <StatCard icon_name="graduation-cap" label=tr_signal("dashboard.total_students") value=Signal::stored(summary.students.to_string()) />
                <StatCard icon_name="users" label=tr_signal("dashboard.total_teachers") value=Signal::stored(summary.teachers.to_string()) delay_ms=80 />
                <StatCard icon_name="check-square" label=tr_signal("attendance.rate") value=Signal::stored(format_percent(summary.attendance_rate)) delay_ms=160 />
                <StatCard icon_name="award" label=tr_signal("grades.average") value=Signal::stored(format_percent(summary.grade_average.map(f64::from))) delay_ms=240 />
                <StatCard icon_name="life-buoy" label=tr_signal("dashboard.open_tickets") value=Signal::stored(summary.open_tickets.to_string()) delay_ms=320 />
            </div>

            <div class="page__content--split">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{move || t("grades.subject")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("grades.average")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {averages.into_iter().map(|(subject, avg)| view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{subject}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_percent(Some(f64::from(avg)))}</TableCellLayout></TableCell>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{move || t("common.date")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("attendance.rate")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {daily.into_iter().map(|(day, rate)| view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{format_date(day)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_percent(rate)}</TableCellLayout></TableCell>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_attendance_is_ordered_by_day() {
        let data = fixtures::sample_data();
        let records = for_school(&data.attendance, "sch-001");
        let daily = daily_attendance(&records);
        assert!(!daily.is_empty());
        assert!(daily.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(daily.iter().all(|(_, rate)| rate.is_some()));
    }
}
