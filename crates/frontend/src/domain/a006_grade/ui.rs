//! Grade book with per-subject averages.

use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::scope::visible_to;
use crate::system::auth::context::use_auth;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a006_grade::{overall_average, subject_averages, Grade};
use contracts::fixtures;
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, Select, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

fn letter_color(letter: &str) -> BadgeColor {
    match letter {
        "A+" | "A" => BadgeColor::Success,
        "B" | "C" => BadgeColor::Informative,
        "D" => BadgeColor::Warning,
        _ => BadgeColor::Danger,
    }
}

#[component]
pub fn GradeBook() -> impl IntoView {
    let session = use_auth();
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let (school_id, own_class, own_subject) = session.with_untracked(|s| {
        let user = s.user();
        (
            user.and_then(|u| u.school_id.clone()),
            user.and_then(|u| u.class_id.clone()),
            user.and_then(|u| u.subject.clone()),
        )
    });

    let data = fixtures::sample_data();
    let classes = StoredValue::new(visible_to(school_id.as_deref(), &data.classes));
    let grades = StoredValue::new(visible_to(school_id.as_deref(), &data.grades));
    let students = StoredValue::new(visible_to(school_id.as_deref(), &data.students));

    let class_filter = RwSignal::new(own_class.unwrap_or_default());
    let subject_filter = RwSignal::new(own_subject.unwrap_or_default());

    let subjects = grades.with_value(|gs| {
        let mut subjects: Vec<String> = gs.iter().map(|g| g.subject.clone()).collect();
        subjects.sort();
        subjects.dedup();
        subjects
    });

    let rows = Signal::derive(move || {
        let class_id = class_filter.get();
        let subject = subject_filter.get();
        grades.with_value(|gs| {
            gs.iter()
                .filter(|g| class_id.is_empty() || g.class_id == class_id)
                .filter(|g| subject.is_empty() || g.subject == subject)
                .cloned()
                .collect::<Vec<Grade>>()
        })
    });

    let student_name = move |id: &str| {
        students.with_value(|all| {
            all.iter()
                .find(|s| s.id == id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| id.to_string())
        })
    };

    let average_label = move || {
        rows.with(|r| overall_average(r.iter()))
            .map(|avg| format!("{:.1}%", avg))
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <PageFrame page_id="a006_grade--list" category=PAGE_CAT_LIST>
            <PageHeader title=tr_signal("nav.grades")>
                <Select value=class_filter>
                    <option value="">{move || t("common.all")}</option>
                    {classes.with_value(|cs| {
                        cs.iter()
                            .map(|c| view! { <option value=c.id.clone()>{c.label()}</option> })
                            .collect_view()
                    })}
                </Select>
                <Select value=subject_filter>
                    <option value="">{move || t("common.all")}</option>
                    {subjects
                        .into_iter()
                        .map(|s| view! { <option value=s.clone()>{s.clone()}</option> })
                        .collect_view()}
                </Select>
                <span class="page__summary">
                    {move || t("grades.average")} ": " {average_label}
                </span>
            </PageHeader>

            <div class="page__content page__content--split">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{move || t("common.name")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("grades.subject")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("grades.exam")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("grades.marks")}</TableHeaderCell>
                            <TableHeaderCell>"%"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || rows.get().into_iter().map(|g| {
                            let letter = g.letter().unwrap_or("-");
                            let percentage = g
                                .percentage()
                                .map(|p| format!("{:.0}", p))
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{student_name(&g.student_id)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{g.subject.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{g.exam.clone()}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format!("{} / {}", g.marks_obtained, g.max_marks)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {percentage}
                                            <Badge appearance=BadgeAppearance::Tint color=letter_color(letter)>{letter}</Badge>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{move || t("grades.subject")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("grades.average")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || rows.with(|r| subject_averages(r.iter())).into_iter().map(|(subject, avg)| view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{subject}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format!("{:.1}%", avg)}</TableCellLayout></TableCell>
                            </TableRow>
                        }).collect_view()}
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
