use crate::shared::components::{FormField, SuccessBar, ValidationBar};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::i18n::context::{tr_signal, use_i18n};
use crate::usecases::target_school::{initial_target, TargetSchool};
use contracts::domain::a002_student::Student;
use contracts::domain::a004_class_section::ClassSection;
use contracts::domain::common::for_school;
use contracts::fixtures;
use contracts::shared::error::ValidationError;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_onboard_student::{OnboardStudent, StudentOnboardingForm};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input, Select};

#[derive(Clone, Copy)]
struct Fields {
    name: RwSignal<String>,
    name_te: RwSignal<String>,
    class_id: RwSignal<String>,
    roll_number: RwSignal<String>,
    guardian_name: RwSignal<String>,
    guardian_phone: RwSignal<String>,
    date_of_birth: RwSignal<String>,
    bus_route: RwSignal<String>,
}

impl Fields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            name_te: RwSignal::new(String::new()),
            class_id: RwSignal::new(String::new()),
            roll_number: RwSignal::new(String::new()),
            guardian_name: RwSignal::new(String::new()),
            guardian_phone: RwSignal::new(String::new()),
            date_of_birth: RwSignal::new(String::new()),
            bus_route: RwSignal::new(String::new()),
        }
    }

    /// The section is taken from the chosen class.
    fn to_form(self, classes: &[ClassSection]) -> StudentOnboardingForm {
        let class_id = self.class_id.get_untracked();
        let section = classes
            .iter()
            .find(|c| c.id == class_id)
            .map(|c| c.section.clone())
            .unwrap_or_default();
        StudentOnboardingForm {
            name: self.name.get_untracked(),
            name_te: self.name_te.get_untracked(),
            class_id,
            section,
            roll_number: self.roll_number.get_untracked(),
            guardian_name: self.guardian_name.get_untracked(),
            guardian_phone: self.guardian_phone.get_untracked(),
            date_of_birth: self.date_of_birth.get_untracked(),
            bus_route: self.bus_route.get_untracked(),
        }
    }

    fn clear(self) {
        for field in [
            self.name,
            self.name_te,
            self.roll_number,
            self.guardian_name,
            self.guardian_phone,
            self.date_of_birth,
            self.bus_route,
        ] {
            field.set(String::new());
        }
    }
}

/// Student admission form. `school_id` is set when launched from the manage
/// onboardings screen.
#[component]
pub fn OnboardStudentPage(school_id: Option<String>) -> impl IntoView {
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let target = initial_target(school_id);
    let fields = Fields::new();
    let error = RwSignal::new(None::<ValidationError>);
    let success = RwSignal::new(None::<String>);
    let onboarded = RwSignal::new(Vec::<Student>::new());

    let data = fixtures::sample_data();
    let classes = Memo::new(move |_| {
        let school_id = target.get();
        for_school(&data.classes, &school_id)
            .into_iter()
            .cloned()
            .collect::<Vec<ClassSection>>()
    });
    let routes = Memo::new(move |_| {
        let school_id = target.get();
        for_school(&data.buses, &school_id)
            .into_iter()
            .map(|bus| bus.route_name.clone())
            .collect::<Vec<String>>()
    });

    // A class from another school must not survive a school switch
    Effect::new(move |_| {
        let ids: Vec<String> = classes.with(|cs| cs.iter().map(|c| c.id.clone()).collect());
        if !ids.contains(&fields.class_id.get_untracked()) {
            fields.class_id.set(ids.into_iter().next().unwrap_or_default());
        }
    });

    let on_submit = move |_| {
        let school_id = target.get_untracked();
        if school_id.is_empty() {
            error.set(Some(ValidationError::Required("school")));
            return;
        }
        let form = classes.with_untracked(|cs| fields.to_form(cs));
        match form.into_student(&school_id) {
            Ok(student) => {
                log::info!(
                    "{}: {} admitted to {}",
                    OnboardStudent::full_name(),
                    student.id,
                    student.class_id
                );
                success.set(Some(format!("{}: {}", t("onboarding.success"), student.name)));
                error.set(None);
                onboarded.update(|list| list.push(student));
                fields.clear();
            }
            Err(e) => {
                log::warn!("{}: {}", OnboardStudent::full_name(), e);
                success.set(None);
                error.set(Some(e));
            }
        }
    };

    view! {
        <PageFrame page_id="u502_onboard_student--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title=tr_signal(OnboardStudent::title_key()) />

            <div class="form-card">
                <TargetSchool target=target />
                <ValidationBar error=error />
                <SuccessBar message=success />

                <div class="form-grid">
                    <FormField label_key="common.name">
                        <Input value=fields.name />
                    </FormField>
                    <FormField label_key="student.name_te">
                        <Input value=fields.name_te />
                    </FormField>
                    <FormField label_key="common.class">
                        <Select value=fields.class_id>
                            {move || classes.get().into_iter().map(|c| view! {
                                <option value=c.id.clone()>{c.label()}</option>
                            }).collect_view()}
                        </Select>
                    </FormField>
                    <FormField label_key="student.roll">
                        <Input value=fields.roll_number />
                    </FormField>
                    <FormField label_key="student.guardian">
                        <Input value=fields.guardian_name />
                    </FormField>
                    <FormField label_key="student.guardian_phone">
                        <Input value=fields.guardian_phone placeholder="+91 98765 43210" />
                    </FormField>
                    <FormField label_key="student.date_of_birth">
                        <input
                            type="date"
                            class="date-input"
                            prop:value=move || fields.date_of_birth.get()
                            on:change=move |ev| fields.date_of_birth.set(event_target_value(&ev))
                        />
                    </FormField>
                    <FormField label_key="student.bus_route">
                        <Select value=fields.bus_route>
                            <option value="">"-"</option>
                            {move || routes.get().into_iter().map(|route| view! {
                                <option value=route.clone()>{route.clone()}</option>
                            }).collect_view()}
                        </Select>
                    </FormField>
                </div>

                <div class="form-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=on_submit>
                        {move || t("common.submit")}
                    </Button>
                    <Button on_click=move |_| fields.clear()>
                        {move || t("common.cancel")}
                    </Button>
                </div>
            </div>

            <Show when=move || onboarded.with(|list| !list.is_empty())>
                <section class="dashboard-panel">
                    <h3>{move || t("onboarding.recent")}</h3>
                    <ul class="dashboard-panel__list">
                        {move || onboarded.get().into_iter().map(|stu| view! {
                            <li>
                                <strong>{stu.name}</strong>
                                " · " {stu.class_id}
                                " · " {stu.roll_number}
                            </li>
                        }).collect_view()}
                    </ul>
                </section>
            </Show>
        </PageFrame>
    }
}
