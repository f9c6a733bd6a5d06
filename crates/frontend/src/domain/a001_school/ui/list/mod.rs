use crate::domain::a001_school::store::use_schools;
use crate::domain::a001_school::ui::form::{SchoolForm, SchoolFormOutcome};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a001_school::{ComplianceStatus, School};
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, ButtonSize, Input, Table,
    TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

/// Which form, if any, is open above the table.
#[derive(Clone, PartialEq)]
enum Editing {
    Closed,
    New,
    Existing(School),
}

pub fn compliance_color(status: ComplianceStatus) -> BadgeColor {
    match status {
        ComplianceStatus::Compliant => BadgeColor::Success,
        ComplianceStatus::Pending => BadgeColor::Warning,
        ComplianceStatus::NonCompliant => BadgeColor::Danger,
    }
}

fn confirm_delete(name: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(&format!("Delete {}?", name)).ok())
        .unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn SchoolList() -> impl IntoView {
    let schools = use_schools();
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let search_query = RwSignal::new(String::new());
    let editing = RwSignal::new(Editing::Closed);

    let filtered = Signal::derive(move || {
        let query = search_query.get();
        schools.with(|dir| dir.search(&query).into_iter().cloned().collect::<Vec<_>>())
    });

    let on_submit = Callback::new(move |outcome: SchoolFormOutcome| {
        match outcome {
            SchoolFormOutcome::Created(school) => schools.update(|dir| dir.add_school(school)),
            SchoolFormOutcome::Updated(id, patch) => {
                schools.update(|dir| dir.update_school(&id, patch))
            }
        }
        editing.set(Editing::Closed);
    });
    let on_cancel = Callback::new(move |_| editing.set(Editing::Closed));

    view! {
        <PageFrame page_id="a001_school--list" category=PAGE_CAT_LIST>
            <PageHeader title=tr_signal("nav.schools")>
                <div style="width: 280px;">
                    <Input value=search_query placeholder="Search..." />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Editing::New)
                >
                    {icon("plus")}
                    {move || t("school.add")}
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || match editing.get() {
                    Editing::Closed => ().into_any(),
                    Editing::New => view! {
                        <SchoolForm school=None on_submit=on_submit on_cancel=on_cancel />
                    }
                    .into_any(),
                    Editing::Existing(school) => view! {
                        <SchoolForm school=Some(school) on_submit=on_submit on_cancel=on_cancel />
                    }
                    .into_any(),
                }}

                <Show
                    when=move || !filtered.with(|rows| rows.is_empty())
                    fallback=move || view! { <p class="page__empty">{move || t("common.no_data")}</p> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>{move || t("common.name")}</TableHeaderCell>
                                <TableHeaderCell>{move || t("school.principal")}</TableHeaderCell>
                                <TableHeaderCell>{move || t("common.phone")}</TableHeaderCell>
                                <TableHeaderCell>{move || t("school.active_users")}</TableHeaderCell>
                                <TableHeaderCell>{move || t("school.compliance")}</TableHeaderCell>
                                <TableHeaderCell>{move || t("common.actions")}</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || filtered.get()
                                key=|s| (s.id.clone(), s.name.clone(), s.compliance_status, s.active_users)
                                children=move |school: School| {
                                    let status = school.compliance_status;
                                    let id_for_delete = school.id.clone();
                                    let name_for_delete = school.name.clone();
                                    let for_edit = school.clone();
                                    let locale_name = {
                                        let school = school.clone();
                                        move || school.display_name(i18n.with(|t| t.locale())).to_string()
                                    };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span
                                                        class="school-swatch"
                                                        style:background=school.brand_color.clone()
                                                    ></span>
                                                    <strong>{locale_name}</strong>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{school.principal_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{school.principal_phone.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{school.active_users.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge appearance=BadgeAppearance::Tint color=compliance_color(status)>
                                                        {move || t(status.label_key())}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| editing.set(Editing::Existing(for_edit.clone()))
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| {
                                                            if confirm_delete(&name_for_delete) {
                                                                schools.update(|dir| dir.delete_school(&id_for_delete));
                                                            }
                                                        }
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </div>
        </PageFrame>
    }
}
