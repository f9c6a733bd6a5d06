use crate::shared::date_utils::{format_date, input_date, parse_input_date, today};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::scope::visible_to;
use crate::system::auth::context::{current_role, use_auth};
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a009_homework::Homework;
use contracts::domain::common::new_local_id;
use contracts::fixtures;
use contracts::system::auth::Role;
use contracts::usecases::common::require;
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, Input, MessageBar,
    MessageBarIntent, Select, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

#[component]
#[allow(non_snake_case)]
pub fn HomeworkList() -> impl IntoView {
    let session = use_auth();
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let (school_id, user_id, own_class, own_subject) = session.with_untracked(|s| {
        let user = s.user();
        (
            user.and_then(|u| u.school_id.clone()),
            user.map(|u| u.id.clone()).unwrap_or_default(),
            user.and_then(|u| u.class_id.clone()),
            user.and_then(|u| u.subject.clone()),
        )
    });
    let can_assign = move || {
        matches!(
            current_role(),
            Some(Role::ClassTeacher | Role::SubjectTeacher | Role::Principal)
        )
    };

    let data = fixtures::sample_data();
    let classes = StoredValue::new(visible_to(school_id.as_deref(), &data.classes));
    let items = RwSignal::new(visible_to(school_id.as_deref(), &data.homework));
    let class_filter = RwSignal::new(own_class.clone().unwrap_or_default());

    let rows = Signal::derive(move || {
        let class_id = class_filter.get();
        items.with(|all| {
            let mut list: Vec<Homework> = all
                .iter()
                .filter(|h| class_id.is_empty() || h.class_id == class_id)
                .cloned()
                .collect();
            list.sort_by_key(|h| h.due_date);
            list
        })
    });

    let class_label = move |id: &str| {
        classes.with_value(|all| {
            all.iter()
                .find(|c| c.id == id)
                .map(|c| c.label())
                .unwrap_or_else(|| id.to_string())
        })
    };

    // New assignment form
    let show_form = RwSignal::new(false);
    let form_class = RwSignal::new(own_class.unwrap_or_default());
    let form_subject = RwSignal::new(own_subject.unwrap_or_default());
    let form_title = RwSignal::new(String::new());
    let form_description = RwSignal::new(String::new());
    let form_due = RwSignal::new(input_date(today()));
    let error = RwSignal::new(None::<&'static str>);
    let author = StoredValue::new(user_id);

    let on_save = move |_| {
        let class_id = form_class.get_untracked();
        let Some(school_id) = classes.with_value(|all| {
            all.iter()
                .find(|c| c.id == class_id)
                .map(|c| c.school_id.clone())
        }) else {
            error.set(Some("common.class"));
            return;
        };
        let fields = require("subject", &form_subject.get_untracked())
            .and_then(|subject| Ok((subject, require("title", &form_title.get_untracked())?)));
        let (subject, title) = match fields {
            Ok(v) => v,
            Err(e) => {
                log::warn!("homework form: {}", e);
                error.set(Some(if e.field() == "subject" {
                    "grades.subject"
                } else {
                    "common.title"
                }));
                return;
            }
        };
        let Some(due_date) = parse_input_date(&form_due.get_untracked()) else {
            error.set(Some("homework.due"));
            return;
        };

        let homework = Homework {
            id: new_local_id("hw"),
            school_id,
            class_id,
            subject,
            title,
            description: form_description.get_untracked().trim().to_string(),
            assigned_on: today(),
            due_date,
            assigned_by: author.get_value(),
        };
        log::info!("homework {} assigned for {}", homework.id, homework.due_date);
        items.update(|all| all.push(homework));
        error.set(None);
        form_title.set(String::new());
        form_description.set(String::new());
        show_form.set(false);
    };

    view! {
        <PageFrame page_id="a009_homework--list" category=PAGE_CAT_LIST>
            <PageHeader title=tr_signal("nav.homework")>
                <Select value=class_filter>
                    <option value="">{move || t("common.all")}</option>
                    {classes.with_value(|cs| {
                        cs.iter()
                            .map(|c| view! { <option value=c.id.clone()>{c.label()}</option> })
                            .collect_view()
                    })}
                </Select>
                <Show when=can_assign>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_form.update(|v| *v = !*v)
                    >
                        {icon("plus")}
                        {move || t("homework.assign")}
                    </Button>
                </Show>
            </PageHeader>

            <div class="page__content">
                <Show when=move || show_form.get()>
                    <div class="form-card">
                        {move || error.get().map(|field| view! {
                            <MessageBar intent=MessageBarIntent::Warning>
                                {move || t("onboarding.missing_field")} ": " {move || t(field)}
                            </MessageBar>
                        })}
                        <div class="form-row">
                            <Select value=form_class>
                                {classes.with_value(|cs| {
                                    cs.iter()
                                        .map(|c| view! { <option value=c.id.clone()>{c.label()}</option> })
                                        .collect_view()
                                })}
                            </Select>
                            <Input value=form_subject placeholder=tr_signal("grades.subject") />
                            <input
                                type="date"
                                class="date-input"
                                prop:value=move || form_due.get()
                                on:change=move |ev| form_due.set(event_target_value(&ev))
                            />
                        </div>
                        <Input value=form_title placeholder=tr_signal("common.title") />
                        <Input value=form_description placeholder=tr_signal("common.description") />
                        <div class="form-actions">
                            <Button appearance=ButtonAppearance::Primary on_click=on_save>
                                {move || t("common.save")}
                            </Button>
                            <Button on_click=move |_| show_form.set(false)>
                                {move || t("common.cancel")}
                            </Button>
                        </div>
                    </div>
                </Show>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{move || t("common.class")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("grades.subject")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("common.title")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("homework.assigned_on")}</TableHeaderCell>
                            <TableHeaderCell>{move || t("homework.due")}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let now = today();
                            rows.get().into_iter().map(|h| {
                                let overdue = h.is_overdue(now);
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{class_label(&h.class_id)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{h.subject.clone()}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <div>{h.title.clone()}</div>
                                                <div class="text-muted">{h.description.clone()}</div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{format_date(h.assigned_on)}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {format_date(h.due_date)}
                                                {overdue.then(|| view! {
                                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                                                        {move || t("homework.overdue")}
                                                    </Badge>
                                                })}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }).collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>
        </PageFrame>
    }
}
