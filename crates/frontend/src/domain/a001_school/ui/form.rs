use crate::system::i18n::context::use_i18n;
use contracts::domain::a001_school::{generate_school_id, ComplianceStatus, School, SchoolPatch};
use contracts::shared::error::ValidationError;
use contracts::usecases::common::{require, require_phone};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input, MessageBar, MessageBarIntent, Select};

/// Editable copy of a school's fields.
#[derive(Clone, Copy)]
struct SchoolFields {
    name: RwSignal<String>,
    name_te: RwSignal<String>,
    principal_name: RwSignal<String>,
    principal_phone: RwSignal<String>,
    principal_email: RwSignal<String>,
    address: RwSignal<String>,
    brand_color: RwSignal<String>,
    compliance: RwSignal<String>,
}

impl SchoolFields {
    fn from_school(school: Option<&School>) -> Self {
        let get = |f: fn(&School) -> String| RwSignal::new(school.map(f).unwrap_or_default());
        Self {
            name: get(|s| s.name.clone()),
            name_te: get(|s| s.name_te.clone()),
            principal_name: get(|s| s.principal_name.clone()),
            principal_phone: get(|s| s.principal_phone.clone()),
            principal_email: get(|s| s.principal_email.clone()),
            address: get(|s| s.address.clone()),
            brand_color: RwSignal::new(
                school
                    .map(|s| s.brand_color.clone())
                    .unwrap_or_else(|| "#1e6fd9".to_string()),
            ),
            compliance: RwSignal::new(
                school
                    .map(|s| s.compliance_status)
                    .unwrap_or_default()
                    .as_str()
                    .to_string(),
            ),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name.get_untracked())?;
        require("principal_name", &self.principal_name.get_untracked())?;
        require_phone("principal_phone", &self.principal_phone.get_untracked())?;
        Ok(())
    }

    fn compliance_status(&self) -> ComplianceStatus {
        ComplianceStatus::parse(&self.compliance.get_untracked()).unwrap_or_default()
    }

    fn to_new_school(self) -> School {
        School {
            id: generate_school_id(),
            name: self.name.get_untracked().trim().to_string(),
            name_te: self.name_te.get_untracked().trim().to_string(),
            logo: None,
            principal_name: self.principal_name.get_untracked().trim().to_string(),
            principal_phone: self.principal_phone.get_untracked().trim().to_string(),
            principal_email: self.principal_email.get_untracked().trim().to_string(),
            address: self.address.get_untracked().trim().to_string(),
            brand_color: self.brand_color.get_untracked(),
            active_users: 0,
            compliance_status: self.compliance_status(),
        }
    }

    fn to_patch(self) -> SchoolPatch {
        SchoolPatch {
            name: Some(self.name.get_untracked().trim().to_string()),
            name_te: Some(self.name_te.get_untracked().trim().to_string()),
            principal_name: Some(self.principal_name.get_untracked().trim().to_string()),
            principal_phone: Some(self.principal_phone.get_untracked().trim().to_string()),
            principal_email: Some(self.principal_email.get_untracked().trim().to_string()),
            address: Some(self.address.get_untracked().trim().to_string()),
            brand_color: Some(self.brand_color.get_untracked()),
            compliance_status: Some(self.compliance_status()),
            ..Default::default()
        }
    }
}

/// Result of a submitted school form
pub enum SchoolFormOutcome {
    Created(School),
    Updated(String, SchoolPatch),
}

/// Add/edit form. `school` is `None` when adding.
#[component]
pub fn SchoolForm(
    school: Option<School>,
    on_submit: Callback<SchoolFormOutcome>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));
    let fields = SchoolFields::from_school(school.as_ref());
    let editing_id = school.map(|s| s.id);
    let error = RwSignal::new(Option::<ValidationError>::None);

    let submit = move |_| {
        if let Err(e) = fields.validate() {
            log::debug!("school form rejected: {}", e);
            error.set(Some(e));
            return;
        }
        error.set(None);
        let outcome = match editing_id.clone() {
            Some(id) => SchoolFormOutcome::Updated(id, fields.to_patch()),
            None => SchoolFormOutcome::Created(fields.to_new_school()),
        };
        on_submit.run(outcome);
    };

    let field = move |label: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label>{move || t(label)}</label>
                <Input value=value />
            </div>
        }
    };

    view! {
        <div class="form-card">
            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    {move || t("onboarding.missing_field")} ": " {e.field()}
                </MessageBar>
            })}
            <div class="form-grid">
                {field("common.name", fields.name)}
                {field("school.name_te", fields.name_te)}
                {field("school.principal", fields.principal_name)}
                {field("common.phone", fields.principal_phone)}
                {field("common.email", fields.principal_email)}
                {field("common.address", fields.address)}
                {field("school.brand_color", fields.brand_color)}
                <div class="form-group">
                    <label>{move || t("school.compliance")}</label>
                    <Select value=fields.compliance>
                        {ComplianceStatus::ALL
                            .into_iter()
                            .map(|status| view! {
                                <option value=status.as_str()>{move || t(status.label_key())}</option>
                            })
                            .collect_view()}
                    </Select>
                </div>
            </div>
            <div class="form-actions">
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    {move || t("common.save")}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {move || t("common.cancel")}
                </Button>
            </div>
        </div>
    }
}
