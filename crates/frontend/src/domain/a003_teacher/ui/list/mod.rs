use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::scope::visible_to;
use crate::system::auth::context::current_school_id;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a003_teacher::Teacher;
use contracts::fixtures;
use contracts::navigation::ViewKey;
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, Input, Table, TableBody,
    TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

#[component]
#[allow(non_snake_case)]
pub fn TeacherList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let school_id = untrack(current_school_id);
    let teachers = StoredValue::new(visible_to(
        school_id.as_deref(),
        &fixtures::sample_data().teachers,
    ));
    let subject_query = RwSignal::new(String::new());

    let rows = Signal::derive(move || {
        let query = subject_query.get();
        let query = query.trim();
        teachers.with_value(|all| {
            all.iter()
                .filter(|t| query.is_empty() || t.teaches(query) || t.name.contains(query))
                .cloned()
                .collect::<Vec<Teacher>>()
        })
    });

    view! {
        <PageFrame page_id="a003_teacher--list" category=PAGE_CAT_LIST>
            <PageHeader title=tr_signal("nav.teachers")>
                <div style="width: 220px;">
                    <Input value=subject_query placeholder="Mathematics" />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(ViewKey::OnboardTeacher)
                >
                    {icon("plus")}
                    {move || t("nav.onboard_teacher")}
                </Button>
            </PageHeader>

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{move || t("teacher.employee_id")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("common.name")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("teacher.subjects")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("common.phone")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("common.email")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("teacher.class_teacher")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || rows.get().into_iter().map(|teacher| {
                            let name = {
                                let teacher = teacher.clone();
                                move || teacher.display_name(i18n.with(|t| t.locale())).to_string()
                            };
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{teacher.employee_id.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {teacher.subjects.clone().into_iter().map(|s| view! {
                                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                                    {s.clone()}
                                                </Badge>
                                            }).collect_view()}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{teacher.phone.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{teacher.email.clone()}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {teacher.class_teacher_of.clone().unwrap_or_else(|| "-".to_string())}
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
