use crate::shared::components::{FormField, SuccessBar, ValidationBar};
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::i18n::context::{tr_signal, use_i18n};
use crate::usecases::target_school::{initial_target, TargetSchool};
use contracts::domain::a004_class_section::ClassSection;
use contracts::domain::a003_teacher::Teacher;
use contracts::domain::common::for_school;
use contracts::fixtures;
use contracts::shared::error::ValidationError;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u503_onboard_class::{ClassOnboardingForm, OnboardClass};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input, Select};

#[component]
pub fn OnboardClassPage() -> impl IntoView {
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let target = initial_target(None);
    let grade = RwSignal::new("1".to_string());
    let section = RwSignal::new(String::new());
    let room = RwSignal::new(String::new());
    let class_teacher_id = RwSignal::new(String::new());
    let capacity = RwSignal::new(String::new());
    let error = RwSignal::new(None::<ValidationError>);
    let success = RwSignal::new(None::<String>);
    let created = RwSignal::new(Vec::<ClassSection>::new());

    let data = fixtures::sample_data();
    let teachers = Memo::new(move |_| {
        let school_id = target.get();
        for_school(&data.teachers, &school_id)
            .into_iter()
            .cloned()
            .collect::<Vec<Teacher>>()
    });

    let on_submit = move |_| {
        let school_id = target.get_untracked();
        if school_id.is_empty() {
            error.set(Some(ValidationError::Required("school")));
            return;
        }
        let form = ClassOnboardingForm {
            grade: grade.get_untracked(),
            section: section.get_untracked(),
            room: room.get_untracked(),
            class_teacher_id: class_teacher_id.get_untracked(),
            capacity: capacity.get_untracked(),
        };
        match form.into_class(&school_id) {
            Ok(class) => {
                let duplicate = for_school(&data.classes, &school_id)
                    .iter()
                    .any(|c| c.id == class.id)
                    || created.with_untracked(|list| list.iter().any(|c| c.id == class.id));
                if duplicate {
                    log::warn!(
                        "{}: {} already exists in {}",
                        OnboardClass::full_name(),
                        class.id,
                        school_id
                    );
                }
                log::info!("{}: {} created", OnboardClass::full_name(), class.id);
                success.set(Some(format!("{}: {}", t("onboarding.success"), class.label())));
                error.set(None);
                created.update(|list| list.push(class));
                section.set(String::new());
                room.set(String::new());
            }
            Err(e) => {
                log::warn!("{}: {}", OnboardClass::full_name(), e);
                success.set(None);
                error.set(Some(e));
            }
        }
    };

    view! {
        <PageFrame page_id="u503_onboard_class--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title=tr_signal(OnboardClass::title_key()) />

            <div class="form-card">
                <TargetSchool target=target />
                <ValidationBar error=error />
                <SuccessBar message=success />

                <div class="form-grid">
                    <FormField label_key="class.grade">
                        <Select value=grade>
                            {(1..=12u8).map(|g| view! { <option value=g.to_string()>{g}</option> }).collect_view()}
                        </Select>
                    </FormField>
                    <FormField label_key="common.section">
                        <Input value=section placeholder="A" />
                    </FormField>
                    <FormField label_key="class.room">
                        <Input value=room />
                    </FormField>
                    <FormField label_key="teacher.class_teacher">
                        <Select value=class_teacher_id>
                            <option value="">"-"</option>
                            {move || teachers.get().into_iter().map(|tch| view! {
                                <option value=tch.id.clone()>{tch.name.clone()}</option>
                            }).collect_view()}
                        </Select>
                    </FormField>
                    <FormField label_key="class.strength">
                        <Input value=capacity placeholder="40" />
                    </FormField>
                </div>

                <div class="form-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=on_submit>
                        {move || t("common.submit")}
                    </Button>
                </div>
            </div>

            <Show when=move || created.with(|list| !list.is_empty())>
                <section class="dashboard-panel">
                    <h3>{move || t("onboarding.recent")}</h3>
                    <ul class="dashboard-panel__list">
                        {move || created.get().into_iter().map(|c| view! {
                            <li>
                                <strong>{c.label()}</strong>
                                " · " {c.room}
                                " · " {c.capacity}
                            </li>
                        }).collect_view()}
                    </ul>
                </section>
            </Show>
        </PageFrame>
    }
}
