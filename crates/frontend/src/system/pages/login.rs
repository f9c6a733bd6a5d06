use crate::domain::a001_school::store::use_schools;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::{do_login, use_auth};
use crate::system::i18n::context::use_i18n;
use contracts::system::auth::test_users;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input, MessageBar, MessageBarIntent, Select};

/// Value of the school picker for platform staff without a school.
const PLATFORM: &str = "platform";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LoginStep {
    School,
    Phone,
    Otp,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_auth();
    let schools = use_schools();
    let i18n = use_i18n();

    let step = RwSignal::new(LoginStep::School);
    let school = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let error_key = RwSignal::new(Option::<&'static str>::None);

    let otp_length = ctx.config.with_value(|c| c.auth.otp_length);

    let on_school_next = move |_| {
        if school.with(|s| s.is_empty()) {
            error_key.set(Some("login.error.school_required"));
            return;
        }
        error_key.set(None);
        step.set(LoginStep::Phone);
    };

    // No code is actually sent; any well-formed code is accepted.
    let on_send_otp = move |_| {
        if phone.with(|p| p.trim().is_empty()) {
            error_key.set(Some("login.error.invalid"));
            return;
        }
        log::info!("one-time code requested for {}", phone.get_untracked().trim());
        error_key.set(None);
        step.set(LoginStep::Otp);
    };

    let on_verify = move |_| {
        let result = schools.with_untracked(|dir| {
            do_login(
                session,
                &phone.get_untracked(),
                &otp.get_untracked(),
                dir.schools(),
            )
        });
        match result {
            Ok(()) => {
                let picked = school.get_untracked();
                let home = session.with_untracked(|s| s.user().and_then(|u| u.school_id.clone()));
                if picked != PLATFORM && home.as_deref() != Some(picked.as_str()) {
                    log::warn!("user signed in from school {} but belongs to {:?}", picked, home);
                }
                ctx.reset();
            }
            Err(e) => {
                log::warn!("login failed: {}", e);
                error_key.set(Some(e.message_key()));
            }
        }
    };

    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    view! {
        <PageFrame page_id="sys_login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>{move || t("app.title")}</h1>
                    <p class="login-box__tagline">{move || t("app.tagline")}</p>
                    <h2>{move || t("login.title")}</h2>

                    <button
                        class="login-box__language"
                        on:click=move |_| i18n.update(|t| t.toggle_language())
                    >
                        {move || i18n.with(|t| t.locale().toggled().native_name())}
                    </button>

                    {move || error_key.get().map(|key| view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            {move || t(key)}
                        </MessageBar>
                    })}

                    {move || match step.get() {
                        LoginStep::School => view! {
                            <div class="form-group">
                                <label>{move || t("login.select_school")}</label>
                                <Select value=school>
                                    <option value="">"—"</option>
                                    <option value=PLATFORM>{move || t("role.super_admin")}</option>
                                    {move || {
                                        let locale = i18n.with(|t| t.locale());
                                        schools.with(|dir| {
                                            dir.schools()
                                                .iter()
                                                .map(|s| {
                                                    let id = s.id.clone();
                                                    let name = s.display_name(locale).to_string();
                                                    view! { <option value=id>{name}</option> }
                                                })
                                                .collect_view()
                                        })
                                    }}
                                </Select>
                            </div>
                            <Button appearance=ButtonAppearance::Primary on_click=on_school_next>
                                {move || t("login.send_otp")}
                            </Button>
                        }
                        .into_any(),
                        LoginStep::Phone => view! {
                            <div class="form-group">
                                <label>{move || t("login.phone")}</label>
                                <Input value=phone placeholder=t("login.phone_placeholder") />
                            </div>
                            <Button appearance=ButtonAppearance::Primary on_click=on_send_otp>
                                {move || t("login.send_otp")}
                            </Button>
                        }
                        .into_any(),
                        LoginStep::Otp => view! {
                            <div class="form-group">
                                <label>{move || t("login.otp")}</label>
                                <Input value=otp placeholder="0".repeat(otp_length) />
                                <small>{move || t("login.otp_hint")}</small>
                            </div>
                            <Button appearance=ButtonAppearance::Primary on_click=on_verify>
                                {move || t("login.verify")}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| {
                                    otp.set(String::new());
                                    step.set(LoginStep::Phone);
                                }
                            >
                                {move || t("login.change_phone")}
                            </Button>
                        }
                        .into_any(),
                    }}

                    <div class="login-info">
                        <p>{move || t("login.test_credentials")}</p>
                        <ul>
                            {test_users()
                                .iter()
                                .map(|u| {
                                    let role_key = u.role.label_key();
                                    let number = u.phone.clone();
                                    view! {
                                        <li
                                            class="login-info__item"
                                            on:click=move |_| phone.set(number.clone())
                                        >
                                            <strong>{u.phone.clone()}</strong>
                                            " · "
                                            {move || t(role_key)}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
