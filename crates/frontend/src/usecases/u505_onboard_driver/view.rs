use crate::shared::components::{FormField, SuccessBar, ValidationBar};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::i18n::context::{tr_signal, use_i18n};
use crate::usecases::target_school::{initial_target, TargetSchool};
use contracts::domain::a008_fleet::{Bus, Driver};
use contracts::domain::common::for_school;
use contracts::fixtures;
use contracts::shared::error::ValidationError;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u505_onboard_driver::{DriverOnboardingForm, OnboardDriver};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input, Select};

#[component]
pub fn OnboardDriverPage() -> impl IntoView {
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let target = initial_target(None);
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let license_number = RwSignal::new(String::new());
    let bus_id = RwSignal::new(String::new());
    let error = RwSignal::new(None::<ValidationError>);
    let success = RwSignal::new(None::<String>);
    let drivers = RwSignal::new(Vec::<Driver>::new());

    let data = fixtures::sample_data();
    let buses = Memo::new(move |_| {
        let school_id = target.get();
        for_school(&data.buses, &school_id)
            .into_iter()
            .cloned()
            .collect::<Vec<Bus>>()
    });

    let on_submit = move |_| {
        let school_id = target.get_untracked();
        if school_id.is_empty() {
            error.set(Some(ValidationError::Required("school")));
            return;
        }
        let form = DriverOnboardingForm {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            license_number: license_number.get_untracked(),
            bus_id: bus_id.get_untracked(),
        };
        match form.into_driver(&school_id) {
            Ok(driver) => {
                log::info!("{}: {} registered", OnboardDriver::full_name(), driver.id);
                success.set(Some(format!("{}: {}", t("onboarding.success"), driver.name)));
                error.set(None);
                drivers.update(|list| list.push(driver));
                for field in [name, phone, license_number, bus_id] {
                    field.set(String::new());
                }
            }
            Err(e) => {
                log::warn!("{}: {}", OnboardDriver::full_name(), e);
                success.set(None);
                error.set(Some(e));
            }
        }
    };

    view! {
        <PageFrame page_id="u505_onboard_driver--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title=tr_signal(OnboardDriver::title_key()) />

            <div class="form-card">
                <TargetSchool target=target />
                <ValidationBar error=error />
                <SuccessBar message=success />

                <div class="form-grid">
                    <FormField label_key="common.name">
                        <Input value=name />
                    </FormField>
                    <FormField label_key="common.phone">
                        <Input value=phone placeholder="+91 98765 43210" />
                    </FormField>
                    <FormField label_key="fleet.license">
                        <Input value=license_number placeholder="TS09 20190012345" />
                    </FormField>
                    <FormField label_key="fleet.bus">
                        <Select value=bus_id>
                            <option value="">"-"</option>
                            {move || buses.get().into_iter().map(|bus| view! {
                                <option value=bus.id.clone()>{format!("{} · {}", bus.registration, bus.route_name)}</option>
                            }).collect_view()}
                        </Select>
                    </FormField>
                </div>

                <div class="form-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=on_submit>
                        {move || t("common.submit")}
                    </Button>
                </div>
            </div>

            <Show when=move || drivers.with(|list| !list.is_empty())>
                <section class="dashboard-panel">
                    <h3>{move || t("onboarding.recent")}</h3>
                    <ul class="dashboard-panel__list">
                        {move || drivers.get().into_iter().map(|d| view! {
                            <li>
                                <strong>{d.name}</strong>
                                " · " {d.license_number}
                                " · " {d.bus_id.unwrap_or_else(|| "-".to_string())}
                            </li>
                        }).collect_view()}
                    </ul>
                </section>
            </Show>
        </PageFrame>
    }
}
