use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{QuickActions, StatCard};
use crate::shared::date_utils::today;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::current_user;
use crate::system::i18n::context::{tr_signal, use_i18n};
use chrono::Datelike;
use contracts::domain::a007_timetable::{TimetableEntry, Weekday};
use contracts::fixtures;
use contracts::navigation::ViewKey;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow};

/// Subject teacher overview: the week's periods across all classes.
#[component]
pub fn TeacherDashboard() -> impl IntoView {
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let user = untrack(current_user);
    let name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let phone = user.map(|u| u.phone).unwrap_or_default();

    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let timetables = ctx.config.with_value(|c| fixtures::timetables(&c.timetable));

    let data = fixtures::sample_data();
    // Staff logins and teacher records share the phone number
    let teacher = data.teachers.iter().find(|tch| tch.phone == phone);
    let mut week: Vec<TimetableEntry> = teacher
        .map(|tch| {
            timetables
                .iter()
                .flat_map(|tt| tt.entries_for_teacher(&tch.id))
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    week.sort_by_key(|e| (e.day, e.period));

    let weekday = Weekday::from_chrono(today().weekday());
    let today_count = week.iter().filter(|e| Some(e.day) == weekday).count();
    let week_count = week.len();
    let subjects = teacher
        .map(|tch| tch.subjects.join(", "))
        .unwrap_or_else(|| "-".to_string());

    let class_label = |class_id: &str| {
        data.classes
            .iter()
            .find(|c| c.id == class_id)
            .map(|c| c.label())
            .unwrap_or_else(|| class_id.to_string())
    };

    let welcome = Signal::derive(move || format!("{}, {}", t("dashboard.welcome"), name));

    view! {
        <PageFrame page_id="d403_teacher--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=welcome />

            <div class="stat-grid">
                <StatCard icon_name="clock" label=tr_signal("dashboard.periods_today") value=Signal::stored(today_count.to_string()) />
                <StatCard icon_name="calendar" label=tr_signal("dashboard.periods_week") value=Signal::stored(week_count.to_string()) delay_ms=80 />
                <StatCard icon_name="book" label=tr_signal("teacher.subjects") value=Signal::stored(subjects) delay_ms=160 />
            </div>

            <QuickActions views=vec![
                ViewKey::Timetable,
                ViewKey::Grades,
                ViewKey::Homework,
                ViewKey::Students,
            ] />

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>{move || t("timetable.day")}</TableHeaderCell>
                        <TableHeaderCell>{move || t("timetable.period")}</TableHeaderCell>
                        <TableHeaderCell>{move || t("common.class")}</TableHeaderCell>
                        <TableHeaderCell>{move || t("grades.subject")}</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {week.into_iter().map(|entry| {
                        let day = entry.day;
                        let class = class_label(&entry.class_id);
                        let row_class = if Some(day) == weekday { "row--selected" } else { "" };
                        view! {
                            <TableRow class=row_class>
                                <TableCell>{move || t(day.label_key())}</TableCell>
                                <TableCell>{entry.period}</TableCell>
                                <TableCell>{class}</TableCell>
                                <TableCell>{entry.subject}</TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </PageFrame>
    }
}
