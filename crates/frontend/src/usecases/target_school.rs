//! School an onboarding form writes into.

use crate::domain::a001_school::store::use_schools;
use crate::system::auth::context::current_school_id;
use crate::system::i18n::context::use_i18n;
use leptos::prelude::*;
use thaw::Select;

/// Initial target: the school picked on the manage screen, else the user's
/// own school, else nothing (super admin opening the form directly).
pub fn initial_target(picked: Option<String>) -> RwSignal<String> {
    RwSignal::new(picked.or_else(|| untrack(current_school_id)).unwrap_or_default())
}

/// Shows the target school. Only a user without a school of their own may
/// change it.
#[component]
pub fn TargetSchool(target: RwSignal<String>) -> impl IntoView {
    let directory = use_schools();
    let i18n = use_i18n();
    let locked = untrack(current_school_id).is_some();

    let name = move || {
        let id = target.get();
        directory.with(|dir| {
            dir.get_school_by_id(&id)
                .map(|s| s.display_name(i18n.with(|t| t.locale())).to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="target-school">
            <span class="target-school__label">{move || i18n.with(|t| t.t("onboarding.for_school"))}</span>
            {if locked {
                view! { <strong>{name}</strong> }.into_any()
            } else {
                view! {
                    <Select value=target>
                        <option value="">"-"</option>
                        {move || directory.with(|dir| dir.schools().iter().map(|s| view! {
                            <option value=s.id.clone()>{s.name.clone()}</option>
                        }).collect_view())}
                    </Select>
                }.into_any()
            }}
        </div>
    }
}
