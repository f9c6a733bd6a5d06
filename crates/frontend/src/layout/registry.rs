//! Screen registry: the single place mapping a resolved [`Screen`] to its view.
//!
//! The match is exhaustive, so adding a screen without a view fails to build.

use crate::dashboards::d400_super_admin::SuperAdminDashboard;
use crate::dashboards::d401_principal::PrincipalDashboard;
use crate::dashboards::d402_class_teacher::ClassTeacherDashboard;
use crate::dashboards::d403_teacher::TeacherDashboard;
use crate::dashboards::d404_fleet_manager::FleetManagerDashboard;
use crate::dashboards::d405_analytics::{SchoolAnalytics, SuperAdminAnalytics};
use crate::domain::a001_school::ui::list::SchoolList;
use crate::domain::a002_student::ui::list::StudentList;
use crate::domain::a003_teacher::ui::list::TeacherList;
use crate::domain::a004_class_section::ui::list::ClassList;
use crate::domain::a005_attendance::ui::AttendanceRegister;
use crate::domain::a006_grade::ui::GradeBook;
use crate::domain::a007_timetable::ui::TimetableGrid;
use crate::domain::a008_fleet::ui::FleetBoard;
use crate::domain::a009_homework::ui::list::HomeworkList;
use crate::domain::a010_event::ui::list::EventList;
use crate::domain::a011_ticket::ui::list::TicketList;
use crate::usecases::u501_onboard_teacher::OnboardTeacherPage;
use crate::usecases::u502_onboard_student::OnboardStudentPage;
use crate::usecases::u503_onboard_class::OnboardClassPage;
use crate::usecases::u504_onboard_fleet_manager::OnboardFleetManagerPage;
use crate::usecases::u505_onboard_driver::OnboardDriverPage;
use crate::usecases::u506_manage_onboardings::ManageOnboardingsPage;
use contracts::navigation::{DashboardKind, Screen};
use leptos::prelude::*;

pub fn render_screen(screen: Screen) -> AnyView {
    match screen {
        // Dashboards (d400-d405)
        Screen::Dashboard(DashboardKind::SuperAdmin) => {
            view! { <SuperAdminDashboard /> }.into_any()
        }
        Screen::Dashboard(DashboardKind::Principal) => view! { <PrincipalDashboard /> }.into_any(),
        Screen::Dashboard(DashboardKind::ClassTeacher) => {
            view! { <ClassTeacherDashboard /> }.into_any()
        }
        Screen::Dashboard(DashboardKind::Teacher) => view! { <TeacherDashboard /> }.into_any(),
        Screen::Dashboard(DashboardKind::FleetManager) => {
            view! { <FleetManagerDashboard /> }.into_any()
        }
        Screen::SuperAdminAnalytics => view! { <SuperAdminAnalytics /> }.into_any(),
        Screen::SchoolAnalytics => view! { <SchoolAnalytics /> }.into_any(),

        // Domain screens (a001-a011)
        Screen::Schools => view! { <SchoolList /> }.into_any(),
        Screen::Students => view! { <StudentList /> }.into_any(),
        Screen::Teachers => view! { <TeacherList /> }.into_any(),
        Screen::Classes => view! { <ClassList /> }.into_any(),
        Screen::Attendance => view! { <AttendanceRegister /> }.into_any(),
        Screen::Grades => view! { <GradeBook /> }.into_any(),
        Screen::Timetable => view! { <TimetableGrid /> }.into_any(),
        Screen::Fleet => view! { <FleetBoard /> }.into_any(),
        Screen::Homework => view! { <HomeworkList /> }.into_any(),
        Screen::Events => view! { <EventList /> }.into_any(),
        Screen::Tickets => view! { <TicketList /> }.into_any(),

        // Onboarding use cases (u501-u506)
        Screen::ManageOnboardings => view! { <ManageOnboardingsPage /> }.into_any(),
        Screen::OnboardTeacher { school_id } => {
            view! { <OnboardTeacherPage school_id=school_id /> }.into_any()
        }
        Screen::OnboardStudent { school_id } => {
            view! { <OnboardStudentPage school_id=school_id /> }.into_any()
        }
        Screen::OnboardClass => view! { <OnboardClassPage /> }.into_any(),
        Screen::OnboardFleetManager => view! { <OnboardFleetManagerPage /> }.into_any(),
        Screen::OnboardDriver => view! { <OnboardDriverPage /> }.into_any(),
    }
}
