use crate::domain::a010_event::ui::list::kind_key;
use crate::shared::components::{format_percent, QuickActions, StatCard};
use crate::shared::date_utils::{format_date, today};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::current_user;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::dashboards::d400_analytics::SchoolSummary;
use contracts::domain::a010_event::upcoming;
use contracts::domain::common::for_school;
use contracts::fixtures;
use contracts::navigation::ViewKey;
use leptos::prelude::*;

/// School overview for the principal and vice principal.
#[component]
pub fn PrincipalDashboard() -> impl IntoView {
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let user = untrack(current_user);
    let name = user.as_ref().map(|u| u.name.clone()).unwrap_or_default();
    let school_id = user.and_then(|u| u.school_id).unwrap_or_default();

    let data = fixtures::sample_data();
    let summary = SchoolSummary::compute(
        &school_id,
        &data.students,
        &data.teachers,
        &data.attendance,
        &data.grades,
        &data.tickets,
    );
    let school_events: Vec<_> = for_school(&data.events, &school_id).into_iter().cloned().collect();
    let next_events: Vec<_> = upcoming(&school_events, today())
        .into_iter()
        .take(3)
        .cloned()
        .collect();

    let welcome = Signal::derive(move || format!("{}, {}", t("dashboard.welcome"), name));
    let students = summary.students.to_string();
    let teachers = summary.teachers.to_string();
    let attendance = format_percent(summary.attendance_rate);
    let grades = format_percent(summary.grade_average.map(f64::from));
    let tickets = summary.open_tickets.to_string();

    view! {
        <PageFrame page_id="d401_principal--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=welcome />

            <div class="stat-grid">
                <StatCard icon_name="graduation-cap" label=tr_signal("dashboard.total_students") value=Signal::stored(students) />
                <StatCard icon_name="users" label=tr_signal("dashboard.total_teachers") value=Signal::stored(teachers) delay_ms=80 />
                <StatCard icon_name="check-square" label=tr_signal("attendance.rate") value=Signal::stored(attendance) delay_ms=160 />
                <StatCard icon_name="award" label=tr_signal("grades.average") value=Signal::stored(grades) delay_ms=240 />
                <StatCard icon_name="life-buoy" label=tr_signal("dashboard.open_tickets") value=Signal::stored(tickets) delay_ms=320 />
            </div>

            <QuickActions views=vec![
                ViewKey::Students,
                ViewKey::Teachers,
                ViewKey::Classes,
                ViewKey::Timetable,
                ViewKey::OnboardTeacher,
                ViewKey::OnboardStudent,
            ] />

            <section class="dashboard-panel">
                <h3>{move || t("event.upcoming")}</h3>
                {if next_events.is_empty() {
                    view! { <p class="page__empty">{move || t("common.no_data")}</p> }.into_any()
                } else {
                    view! {
                        <ul class="dashboard-panel__list">
                            {next_events.into_iter().map(|event| {
                                let kind = event.kind;
                                let date = format_date(event.date);
                                view! {
                                    <li>
                                        <span class="text-muted">{date}</span>
                                        " · "
                                        {move || event.display_title(i18n.with(|t| t.locale())).to_string()}
                                        " · "
                                        {move || t(kind_key(kind))}
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }.into_any()
                }}
            </section>
        </PageFrame>
    }
}
