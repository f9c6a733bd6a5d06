use crate::shared::components::{format_percent, QuickActions, StatCard};
use crate::shared::date_utils::{format_date, today};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::current_user;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a002_student::in_class;
use contracts::domain::a005_attendance::attendance_rate;
use contracts::domain::a006_grade::overall_average;
use contracts::domain::a009_homework::Homework;
use contracts::fixtures;
use contracts::navigation::ViewKey;
use leptos::prelude::*;

/// Overview of the class a class teacher is responsible for.
#[component]
pub fn ClassTeacherDashboard() -> impl IntoView {
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let user = untrack(current_user);
    let name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let class_id = user.and_then(|u| u.class_id).unwrap_or_default();

    let data = fixtures::sample_data();
    let class_label = data
        .classes
        .iter()
        .find(|c| c.id == class_id)
        .map(|c| c.label())
        .unwrap_or_else(|| class_id.clone());
    let students = in_class(&data.students, &class_id).len().to_string();
    let attendance = format_percent(attendance_rate(
        data.attendance.iter().filter(|r| r.class_id == class_id),
    ));
    let grades = format_percent(
        overall_average(data.grades.iter().filter(|g| g.class_id == class_id)).map(f64::from),
    );
    let now = today();
    let mut due: Vec<Homework> = data
        .homework
        .iter()
        .filter(|h| h.class_id == class_id && !h.is_overdue(now))
        .cloned()
        .collect();
    due.sort_by_key(|h| h.due_date);
    let pending = due.len().to_string();

    let title = Signal::derive(move || {
        format!("{}, {} · {}", t("dashboard.welcome"), name, class_label)
    });

    view! {
        <PageFrame page_id="d402_class_teacher--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=title />

            <div class="stat-grid">
                <StatCard icon_name="graduation-cap" label=tr_signal("dashboard.total_students") value=Signal::stored(students) />
                <StatCard icon_name="check-square" label=tr_signal("attendance.rate") value=Signal::stored(attendance) delay_ms=80 />
                <StatCard icon_name="award" label=tr_signal("grades.average") value=Signal::stored(grades) delay_ms=160 />
                <StatCard icon_name="book" label=tr_signal("homework.pending") value=Signal::stored(pending) delay_ms=240 />
            </div>

            <QuickActions views=vec![
                ViewKey::Attendance,
                ViewKey::Grades,
                ViewKey::Homework,
                ViewKey::Students,
                ViewKey::Timetable,
            ] />

            <section class="dashboard-panel">
                <h3>{move || t("homework.pending")}</h3>
                <ul class="dashboard-panel__list">
                    {due.into_iter().map(|h| view! {
                        <li>
                            <strong>{h.subject}</strong>
                            " · "
                            {h.title}
                            " · "
                            <span class="text-muted">{move || t("homework.due")} " " {format_date(h.due_date)}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>
        </PageFrame>
    }
}
