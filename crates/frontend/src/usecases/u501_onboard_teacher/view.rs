use crate::shared::components::{FormField, SuccessBar, ValidationBar};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::i18n::context::{tr_signal, use_i18n};
use crate::usecases::target_school::{initial_target, TargetSchool};
use contracts::domain::a003_teacher::Teacher;
use contracts::shared::error::ValidationError;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_onboard_teacher::{OnboardTeacher, TeacherOnboardingForm};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input};

#[derive(Clone, Copy)]
struct Fields {
    name: RwSignal<String>,
    name_te: RwSignal<String>,
    phone: RwSignal<String>,
    email: RwSignal<String>,
    subjects: RwSignal<String>,
    qualification: RwSignal<String>,
    employee_id: RwSignal<String>,
}

impl Fields {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            name_te: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            subjects: RwSignal::new(String::new()),
            qualification: RwSignal::new(String::new()),
            employee_id: RwSignal::new(String::new()),
        }
    }

    fn to_form(self) -> TeacherOnboardingForm {
        TeacherOnboardingForm {
            name: self.name.get_untracked(),
            name_te: self.name_te.get_untracked(),
            phone: self.phone.get_untracked(),
            email: self.email.get_untracked(),
            subjects: self.subjects.get_untracked(),
            qualification: self.qualification.get_untracked(),
            employee_id: self.employee_id.get_untracked(),
        }
    }

    fn clear(self) {
        for field in [
            self.name,
            self.name_te,
            self.phone,
            self.email,
            self.subjects,
            self.qualification,
            self.employee_id,
        ] {
            field.set(String::new());
        }
    }
}

/// Teacher onboarding form. `school_id` is set when launched from the
/// manage onboardings screen.
#[component]
pub fn OnboardTeacherPage(school_id: Option<String>) -> impl IntoView {
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let target = initial_target(school_id);
    let fields = Fields::new();
    let error = RwSignal::new(None::<ValidationError>);
    let success = RwSignal::new(None::<String>);
    let onboarded = RwSignal::new(Vec::<Teacher>::new());

    let on_submit = move |_| {
        let school_id = target.get_untracked();
        if school_id.is_empty() {
            error.set(Some(ValidationError::Required("school")));
            return;
        }
        match fields.to_form().into_teacher(&school_id) {
            Ok(teacher) => {
                log::info!(
                    "{}: {} onboarded into {}",
                    OnboardTeacher::full_name(),
                    teacher.id,
                    school_id
                );
                success.set(Some(format!("{}: {}", t("onboarding.success"), teacher.name)));
                error.set(None);
                onboarded.update(|list| list.push(teacher));
                fields.clear();
            }
            Err(e) => {
                log::warn!("{}: {}", OnboardTeacher::full_name(), e);
                success.set(None);
                error.set(Some(e));
            }
        }
    };

    view! {
        <PageFrame page_id="u501_onboard_teacher--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title=tr_signal(OnboardTeacher::title_key()) />

            <div class="form-card">
                <TargetSchool target=target />
                <ValidationBar error=error />
                <SuccessBar message=success />

                <div class="form-grid">
                    <FormField label_key="common.name">
                        <Input value=fields.name />
                    </FormField>
                    <FormField label_key="teacher.name_te">
                        <Input value=fields.name_te />
                    </FormField>
                    <FormField label_key="common.phone">
                        <Input value=fields.phone placeholder="+91 98765 43210" />
                    </FormField>
                    <FormField label_key="common.email">
                        <Input value=fields.email />
                    </FormField>
                    <FormField label_key="teacher.subjects">
                        <Input value=fields.subjects placeholder="Mathematics, Physics" />
                    </FormField>
                    <FormField label_key="teacher.qualification">
                        <Input value=fields.qualification />
                    </FormField>
                    <FormField label_key="teacher.employee_id">
                        <Input value=fields.employee_id />
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
                        {move || onboarded.get().into_iter().map(|tch| view! {
                            <li>
                                <strong>{tch.name}</strong>
                                " · " {tch.employee_id}
                                " · " {tch.subjects.join(", ")}
                            </li>
                        }).collect_view()}
                    </ul>
                </section>
            </Show>
        </PageFrame>
    }
}
