//! Daily attendance register for one class.

use crate::shared::date_utils::{input_date, parse_input_date, today};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::scope::visible_to;
use crate::system::auth::context::use_auth;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a002_student::{in_class, Student};
use contracts::domain::a005_attendance::{
    attendance_rate, for_class_on, mark, AttendanceRecord, AttendanceStatus,
};
use contracts::fixtures;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Select, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

#[component]
pub fn AttendanceRegister() -> impl IntoView {
    let session = use_auth();
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let (school_id, own_class) = session.with_untracked(|s| {
        let user = s.user();
        (
            user.and_then(|u| u.school_id.clone()),
            user.and_then(|u| u.class_id.clone()),
        )
    });

    let data = fixtures::sample_data();
    let classes = StoredValue::new(visible_to(school_id.as_deref(), &data.classes));
    let students = StoredValue::new(visible_to(school_id.as_deref(), &data.students));
    let records = RwSignal::new(visible_to(school_id.as_deref(), &data.attendance));

    let first_class = classes.with_value(|cs| cs.first().map(|c| c.id.clone()));
    let class_id = RwSignal::new(own_class.or(first_class).unwrap_or_default());
    let date_value = RwSignal::new(input_date(today()));

    let roster = Signal::derive(move || {
        let class_id = class_id.get();
        students.with_value(|all| {
            in_class(all, &class_id)
                .into_iter()
                .cloned()
                .collect::<Vec<Student>>()
        })
    });

    let selected_date = move || parse_input_date(&date_value.get()).unwrap_or_else(today);

    let day_records = Signal::derive(move || {
        let class_id = class_id.get();
        let date = selected_date();
        records.with(|all| {
            for_class_on(all, &class_id, date)
                .into_iter()
                .cloned()
                .collect::<Vec<AttendanceRecord>>()
        })
    });

    let rate_label = move || {
        day_records.with(|r| attendance_rate(r.iter()))
            .map(|rate| format!("{:.1}%", rate))
            .unwrap_or_else(|| "-".to_string())
    };

    let status_of = move |student_id: &str| {
        day_records.with(|r| {
            r.iter()
                .find(|rec| rec.student_id == student_id)
                .map(|rec| rec.status)
        })
    };

    let set_status = move |student: Student, status: AttendanceStatus| {
        let date = selected_date();
        log::debug!("attendance {} {} -> {:?}", student.id, date, status);
        records.update(|all| mark(all, &student, date, status));
    };

    view! {
        <PageFrame page_id="a005_attendance--list" category=PAGE_CAT_LIST>
            <PageHeader title=tr_signal("nav.attendance")>
                <Select value=class_id>
                    {classes.with_value(|cs| {
                        cs.iter()
                            .map(|c| view! { <option value=c.id.clone()>{c.label()}</option> })
                            .collect_view()
                    })}
                </Select>
                <input
                    type="date"
                    class="date-input"
                    prop:value=move || date_value.get()
                    on:change=move |ev| date_value.set(event_target_value(&ev))
                />
                <span class="page__summary">
                    {move || t("attendance.rate")} ": " {rate_label}
                </span>
            </PageHeader>

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{move || t("student.roll")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("common.name")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("common.status")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || roster.get().into_iter().map(|student| {
                            let student_id = student.id.clone();
                            let roll_number = student.roll_number.clone();
                            let student_name = student.name.clone();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{roll_number}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{student_name}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {AttendanceStatus::ALL.into_iter().map(|status| {
                                                let student = student.clone();
                                                let student_id = student_id.clone();
                                                view! {
                                                    <Button
                                                        size=ButtonSize::Small
                                                        appearance=Signal::derive(move || {
                                                            if status_of(&student_id) == Some(status) {
                                                                ButtonAppearance::Primary
                                                            } else {
                                                                ButtonAppearance::Subtle
                                                            }
                                                        })
                                                        on_click=move |_| set_status(student.clone(), status)
                                                    >
                                                        {move || t(status.label_key())}
                                                    </Button>
                                                }
                                            }).collect_view()}
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
