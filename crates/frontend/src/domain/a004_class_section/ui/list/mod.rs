use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::scope::visible_to;
use crate::system::auth::context::current_school_id;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a002_student::in_class;
use contracts::fixtures;
use contracts::navigation::ViewKey;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

#[component]
#[allow(non_snake_case)]
pub fn ClassList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let school_id = untrack(current_school_id);
    let data = fixtures::sample_data();
    let mut classes = visible_to(school_id.as_deref(), &data.classes);
    classes.sort_by(|a, b| (a.grade, &a.section).cmp(&(b.grade, &b.section)));

    let rows = classes
        .into_iter()
        .map(|class| {
            let enrolled = in_class(&data.students, &class.id).len();
            let teacher = class
                .class_teacher_id
                .as_deref()
                .and_then(|id| data.teachers.iter().find(|t| t.id == id))
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "-".to_string());
            let label = class.label();
            let room = class.room.clone();
            let capacity_text = format!("{} / {}", enrolled, class.capacity);
            view! {
                <TableRow>
                    <TableCell><TableCellLayout><strong>{label}</strong></TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{room}</TableCellLayout></TableCell>
                    <TableCell><TableCellLayout>{teacher}</TableCellLayout></TableCell>
                    <TableCell>
                        <TableCellLayout>{capacity_text}</TableCellLayout>
                    </TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="a004_class_section--list" category=PAGE_CAT_LIST>
            <PageHeader title=tr_signal("nav.classes")>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(ViewKey::OnboardClass)
                >
                    {icon("plus")}
                    {move || t("nav.onboard_class")}
                </Button>
            </PageHeader>

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{move || t("common.class")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("class.room")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("teacher.class_teacher")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("class.strength")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
