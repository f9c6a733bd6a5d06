use crate::domain::a001_school::store::use_schools;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a001_school::School;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u506_manage_onboardings::{ManageOnboardings, OnboardingKind};
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Input, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

/// Super admin hub: pick a school, then start a teacher or student
/// onboarding for it.
#[component]
pub fn ManageOnboardingsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let directory = use_schools();
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let query = RwSignal::new(String::new());
    let rows = Signal::derive(move || {
        let query = query.get();
        directory.with(|dir| dir.search(&query).into_iter().cloned().collect::<Vec<School>>())
    });

    let launch = move |kind: OnboardingKind, school_id: &str| {
        let (view, origin) = kind.launch(school_id);
        log::debug!("{}: {:?} for {}", ManageOnboardings::full_name(), kind, school_id);
        ctx.navigate_with(view, origin);
    };

    view! {
        <PageFrame page_id="u506_manage_onboardings--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title=tr_signal(ManageOnboardings::title_key())>
                <div style="width: 260px;">
                    <Input value=query placeholder=tr_signal("common.search") />
                </div>
            </PageHeader>

            <div class="page__content">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{move || t("common.name")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("school.principal")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("common.actions")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || rows.get().into_iter().map(|school| {
                            let name = {
                                let school = school.clone();
                                move || school.display_name(i18n.with(|t| t.locale())).to_string()
                            };
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{school.principal_name.clone()}</TableCellLayout></TableCell>
                                    <TableCell>
                                        {OnboardingKind::ALL.into_iter().map(|kind| {
                                            let school_id = school.id.clone();
                                            let label_key = kind.view_key().label_key();
                                            view! {
                                                <Button
                                                    size=ButtonSize::Small
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| launch(kind, &school_id)
                                                >
                                                    {icon("user-plus")}
                                                    {move || t(label_key)}
                                                </Button>
                                            }
                                        }).collect_view()}
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
