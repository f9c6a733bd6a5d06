use crate::shared::components::{FormField, SuccessBar, ValidationBar};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::i18n::context::{tr_signal, use_i18n};
use crate::usecases::target_school::{initial_target, TargetSchool};
use contracts::shared::error::ValidationError;
use contracts::system::auth::User;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u504_onboard_fleet_manager::{
    FleetManagerOnboardingForm, OnboardFleetManager,
};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input};

#[component]
pub fn OnboardFleetManagerPage() -> impl IntoView {
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let target = initial_target(None);
    let name = RwSignal::new(String::new());
    let name_te = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let staff_id = RwSignal::new(String::new());
    let error = RwSignal::new(None::<ValidationError>);
    let success = RwSignal::new(None::<String>);
    let accounts = RwSignal::new(Vec::<User>::new());

    let on_submit = move |_| {
        let school_id = target.get_untracked();
        if school_id.is_empty() {
            error.set(Some(ValidationError::Required("school")));
            return;
        }
        let form = FleetManagerOnboardingForm {
            name: name.get_untracked(),
            name_te: name_te.get_untracked(),
            phone: phone.get_untracked(),
            staff_id: staff_id.get_untracked(),
        };
        match form.into_user(&school_id) {
            Ok(user) => {
                log::info!(
                    "{}: account {} for {}",
                    OnboardFleetManager::full_name(),
                    user.id,
                    school_id
                );
                success.set(Some(format!("{}: {}", t("onboarding.success"), user.name)));
                error.set(None);
                accounts.update(|list| list.push(user));
                for field in [name, name_te, phone, staff_id] {
                    field.set(String::new());
                }
            }
            Err(e) => {
                log::warn!("{}: {}", OnboardFleetManager::full_name(), e);
                success.set(None);
                error.set(Some(e));
            }
        }
    };

    view! {
        <PageFrame page_id="u504_onboard_fleet_manager--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title=tr_signal(OnboardFleetManager::title_key()) />

            <div class="form-card">
                <TargetSchool target=target />
                <ValidationBar error=error />
                <SuccessBar message=success />

                <div class="form-grid">
                    <FormField label_key="common.name">
                        <Input value=name />
                    </FormField>
                    <FormField label_key="teacher.name_te">
                        <Input value=name_te />
                    </FormField>
                    <FormField label_key="common.phone">
                        <Input value=phone placeholder="+91 98765 43210" />
                    </FormField>
                    <FormField label_key="teacher.employee_id">
                        <Input value=staff_id />
                    </FormField>
                </div>

                <div class="form-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=on_submit>
                        {move || t("common.submit")}
                    </Button>
                </div>
            </div>

            <Show when=move || accounts.with(|list| !list.is_empty())>
                <section class="dashboard-panel">
                    <h3>{move || t("onboarding.recent")}</h3>
                    <ul class="dashboard-panel__list">
                        {move || accounts.get().into_iter().map(|u| {
                            let role_key = u.role.label_key();
                            view! {
                                <li>
                                    <strong>{u.name}</strong>
                                    " · " {u.phone}
                                    " · " {move || t(role_key)}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </section>
            </Show>
        </PageFrame>
    }
}
