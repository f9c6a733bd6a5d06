use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::scope::visible_to;
use crate::system::auth::context::use_auth;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a002_student::Student;
use contracts::domain::a004_class_section::ClassSection;
use contracts::fixtures;
use contracts::navigation::ViewKey;
use contracts::system::auth::Role;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Input, Select, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

pub fn class_label(classes: &[ClassSection], class_id: &str) -> String {
    classes
        .iter()
        .find(|c| c.id == class_id)
        .map(|c| c.label())
        .unwrap_or_else(|| class_id.to_string())
}

#[component]
#[allow(non_snake_case)]
pub fn StudentList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_auth();
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let (school_id, role, own_class) = session.with_untracked(|s| {
        let user = s.user();
        (
            user.and_then(|u| u.school_id.clone()),
            s.role(),
            user.and_then(|u| u.class_id.clone()),
        )
    });

    let data = fixtures::sample_data();
    let students = visible_to(school_id.as_deref(), &data.students);
    let classes = StoredValue::new(visible_to(school_id.as_deref(), &data.classes));
    let students = StoredValue::new(students);

    // Class teachers start on their own class.
    let class_filter = RwSignal::new(own_class.unwrap_or_default());
    let search_query = RwSignal::new(String::new());

    let rows = Signal::derive(move || {
        let class_id = class_filter.get();
        let query = search_query.get().to_lowercase();
        students.with_value(|all| {
            all.iter()
                .filter(|s| class_id.is_empty() || s.class_id == class_id)
                .filter(|s| {
                    query.is_empty()
                        || s.name.to_lowercase().contains(&query)
                        || s.roll_number.contains(&query)
                })
                .cloned()
                .collect::<Vec<Student>>()
        })
    });

    let can_onboard = matches!(role, Some(Role::Principal | Role::VicePrincipal));

    view! {
        <PageFrame page_id="a002_student--list" category=PAGE_CAT_LIST>
            <PageHeader title=tr_signal("nav.students")>
                <div style="width: 220px;">
                    <Input value=search_query placeholder="Search..." />
                </div>
                <Select value=class_filter>
                    <option value="">{move || t("common.all")}</option>
                    {classes.with_value(|cs| {
                        cs.iter()
                            .map(|c| view! { <option value=c.id.clone()>{c.label()}</option> })
                            .collect_view()
                    })}
                </Select>
                {can_onboard.then(|| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.navigate(ViewKey::OnboardStudent)
                    >
                        {icon("plus")}
                        {move || t("nav.onboard_student")}
                    </Button>
                })}
            </PageHeader>

            <div class="page__content">
                <Show
                    when=move || !rows.with(|r| r.is_empty())
                    fallback=move || view! { <p class="page__empty">{move || t("common.no_data")}</p> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>{move || t("student.roll")}</TableHeaderCell>
                                <TableHeaderCell>{move || t("common.name")}</TableHeaderCell>
                                <TableHeaderCell>{move || t("common.class")}</TableHeaderCell>
                                <TableHeaderCell>{move || t("student.guardian")}</TableHeaderCell>
                                <TableHeaderCell>{move || t("common.phone")}</TableHeaderCell>
                                <TableHeaderCell>{move || t("fleet.route")}</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|s| {
                                let label = classes.with_value(|cs| class_label(cs, &s.class_id));
                                let name = {
                                    let s = s.clone();
                                    move || s.display_name(i18n.with(|t| t.locale())).to_string()
                                };
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{s.roll_number.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{label}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{s.guardian_name.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{s.guardian_phone.clone()}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {s.bus_route.clone().unwrap_or_else(|| "-".to_string())}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_label_falls_back_to_id() {
        let classes = &fixtures::sample_data().classes;
        assert_eq!(class_label(classes, "cls-008-a"), "8-A");
        assert_eq!(class_label(classes, "cls-404"), "cls-404");
    }
}
