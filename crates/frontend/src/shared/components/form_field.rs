//! Building blocks shared by the onboarding and edit forms.

use crate::system::i18n::context::use_i18n;
use contracts::shared::error::ValidationError;
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Translation key for a form field name reported by validation.
pub fn field_label_key(field: &'static str) -> &'static str {
    match field {
        "name" => "common.name",
        "phone" => "common.phone",
        "email" => "common.email",
        "address" => "common.address",
        "subjects" => "teacher.subjects",
        "class_id" => "common.class",
        "section" => "common.section",
        "roll_number" => "student.roll",
        "guardian_name" | "guardian_phone" => "student.guardian",
        "grade" => "class.grade",
        "room" => "class.room",
        "capacity" => "class.strength",
        "staff_id" => "teacher.employee_id",
        "license_number" => "fleet.license",
        "principal_name" => "school.principal",
        "school" => "login.select_school",
        other => other,
    }
}

fn message_key(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::Required(_) => "validation.required",
        ValidationError::InvalidPhone(_) => "validation.phone",
        ValidationError::OutOfRange { .. } => "validation.range",
    }
}

/// Labelled input row.
#[component]
pub fn FormField(label_key: &'static str, children: Children) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="form-field">
            <label class="form-field__label">{move || i18n.with(|t| t.t(label_key))}</label>
            {children()}
        </div>
    }
}

/// Warning bar for the last rejected submit, hidden when there is none.
#[component]
pub fn ValidationBar(error: RwSignal<Option<ValidationError>>) -> impl IntoView {
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    move || {
        error.get().map(|err| {
            let field_key = field_label_key(err.field());
            let text_key = message_key(&err);
            let range = match &err {
                ValidationError::OutOfRange { min, max, .. } => format!(" ({}-{})", min, max),
                _ => String::new(),
            };
            view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    {move || t(field_key)} ": " {move || t(text_key)} {range}
                </MessageBar>
            }
        })
    }
}

/// Confirmation after a successful submit.
#[component]
pub fn SuccessBar(message: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! { <MessageBar intent=MessageBarIntent::Success>{text}</MessageBar> }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fields_map_to_keys() {
        assert_eq!(field_label_key("guardian_phone"), "student.guardian");
        assert_eq!(field_label_key("capacity"), "class.strength");
        assert_eq!(field_label_key("unlisted"), "unlisted");
    }

    #[test]
    fn test_message_key_per_variant() {
        assert_eq!(message_key(&ValidationError::Required("name")), "validation.required");
        assert_eq!(message_key(&ValidationError::InvalidPhone("phone")), "validation.phone");
        assert_eq!(
            message_key(&ValidationError::OutOfRange { field: "grade", min: 1, max: 12 }),
            "validation.range"
        );
    }
}
