use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::scope::visible_to;
use crate::system::auth::context::use_auth;
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a011_ticket::{Ticket, TicketPriority, TicketStatus};
use contracts::fixtures;
use contracts::shared::error::TicketError;
use contracts::usecases::common::require;
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, ButtonSize, Card, Input,
    MessageBar, MessageBarIntent, Select, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

fn status_color(status: TicketStatus) -> BadgeColor {
    match status {
        TicketStatus::Open => BadgeColor::Warning,
        TicketStatus::InProgress => BadgeColor::Brand,
        TicketStatus::Resolved => BadgeColor::Success,
        TicketStatus::Closed => BadgeColor::Subtle,
    }
}

fn parse_status(value: &str) -> Option<TicketStatus> {
    TicketStatus::ALL.into_iter().find(|s| s.label_key() == value)
}

fn parse_priority(value: &str) -> TicketPriority {
    match value {
        "high" => TicketPriority::High,
        "low" => TicketPriority::Low,
        _ => TicketPriority::Medium,
    }
}

fn comment_error_key(error: &TicketError) -> &'static str {
    match error {
        TicketError::Closed(_) => "ticket.error.closed",
        TicketError::EmptyComment => "ticket.error.empty_comment",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TicketList() -> impl IntoView {
    let session = use_auth();
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let (school_id, author_id, author_name) = session.with_untracked(|s| {
        let user = s.user();
        (
            user.and_then(|u| u.school_id.clone()),
            user.map(|u| u.id.clone()).unwrap_or_default(),
            user.map(|u| u.name.clone()).unwrap_or_default(),
        )
    });
    let author = StoredValue::new((author_id, author_name));
    let own_school = StoredValue::new(school_id.clone());

    let tickets = RwSignal::new(visible_to(school_id.as_deref(), &fixtures::sample_data().tickets));
    let selected = RwSignal::new(None::<String>);
    let show_open_only = RwSignal::new(false);

    let rows = Signal::derive(move || {
        let open_only = show_open_only.get();
        tickets.with(|all| {
            let mut list: Vec<Ticket> = all
                .iter()
                .filter(|tk| !open_only || tk.status.is_open())
                .cloned()
                .collect();
            list.sort_by(|a, b| b.priority.cmp(&a.priority).then(b.created_at.cmp(&a.created_at)));
            list
        })
    });

    let current = Signal::derive(move || {
        let id = selected.get()?;
        tickets.with(|all| all.iter().find(|tk| tk.id == id).cloned())
    });

    // New ticket
    let show_form = RwSignal::new(false);
    let new_subject = RwSignal::new(String::new());
    let new_description = RwSignal::new(String::new());
    let new_priority = RwSignal::new("medium".to_string());
    let form_error = RwSignal::new(false);

    let on_create = move |_| {
        let subject = match require("subject", &new_subject.get_untracked()) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("ticket form: {}", e);
                form_error.set(true);
                return;
            }
        };
        // A super admin has no school; tickets they raise go to the first visible school.
        let school_id = own_school.get_value().or_else(|| {
            tickets.with_untracked(|all| all.first().map(|tk| tk.school_id.clone()))
        });
        let Some(school_id) = school_id else {
            form_error.set(true);
            return;
        };
        let ticket = Ticket::new(
            school_id,
            author.with_value(|(id, _)| id.clone()),
            subject,
            new_description.get_untracked().trim(),
            parse_priority(&new_priority.get_untracked()),
        );
        log::info!("ticket {} raised", ticket.id);
        let id = ticket.id.clone();
        tickets.update(|all| all.push(ticket));
        selected.set(Some(id));
        form_error.set(false);
        new_subject.set(String::new());
        new_description.set(String::new());
        show_form.set(false);
    };

    // Detail panel
    let comment = RwSignal::new(String::new());
    let comment_error = RwSignal::new(None::<&'static str>);
    let status_value = RwSignal::new(String::new());

    Effect::new(move |_| {
        if let Some(tk) = current.get() {
            status_value.set(tk.status.label_key().to_string());
        }
        comment_error.set(None);
    });

    let on_comment = move |_| {
        let Some(id) = selected.get_untracked() else {
            return;
        };
        let message = comment.get_untracked();
        let mut outcome = Ok(());
        tickets.update(|all| {
            if let Some(tk) = all.iter_mut().find(|tk| tk.id == id) {
                outcome = author
                    .with_value(|(author_id, author_name)| {
                        tk.add_comment(author_id, author_name, &message)
                    })
                    .map(|_| ());
            }
        });
        match outcome {
            Ok(()) => {
                comment.set(String::new());
                comment_error.set(None);
            }
            Err(e) => {
                log::warn!("comment rejected: {}", e);
                comment_error.set(Some(comment_error_key(&e)));
            }
        }
    };

    let on_status = move |_| {
        let (Some(id), Some(status)) = (
            selected.get_untracked(),
            parse_status(&status_value.get_untracked()),
        ) else {
            return;
        };
        tickets.update(|all| {
            if let Some(tk) = all.iter_mut().find(|tk| tk.id == id) {
                tk.set_status(status);
            }
        });
    };

    view! {
        <PageFrame page_id="a011_ticket--list" category=PAGE_CAT_LIST>
            <PageHeader title=tr_signal("nav.tickets")>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || show_open_only.get()
                        on:change=move |ev| show_open_only.set(event_target_checked(&ev))
                    />
                    {move || t("ticket.open_only")}
                </label>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| show_form.update(|v| *v = !*v)
                >
                    {icon("plus")}
                    {move || t("ticket.new")}
                </Button>
            </PageHeader>

            <div class="page__content">
                <Show when=move || show_form.get()>
                    <div class="form-card">
                        <Show when=move || form_error.get()>
                            <MessageBar intent=MessageBarIntent::Warning>
                                {move || t("onboarding.missing_field")} ": " {move || t("common.title")}
                            </MessageBar>
                        </Show>
                        <Input value=new_subject placeholder=tr_signal("common.title") />
                        <Input value=new_description placeholder=tr_signal("common.description") />
                        <div class="form-row">
                            <Select value=new_priority>
                                <option value="low">{move || t("ticket.priority.low")}</option>
                                <option value="medium">{move || t("ticket.priority.medium")}</option>
                                <option value="high">{move || t("ticket.priority.high")}</option>
                            </Select>
                            <Button appearance=ButtonAppearance::Primary on_click=on_create>
                                {move || t("common.submit")}
                            </Button>
                            <Button on_click=move |_| show_form.set(false)>
                                {move || t("common.cancel")}
                            </Button>
                        </div>
                    </div>
                </Show>

                <div class="page__content--split">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>{move || t("common.title")}</TableHeaderCell>
                                <TableHeaderCell>{move || t("ticket.priority")}</TableHeaderCell>
                                <TableHeaderCell>{move || t("common.status")}</TableHeaderCell>
                                <TableHeaderCell>{move || t("common.date")}</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|tk| {
                                let id = tk.id.clone();
                                let row_id = tk.id.clone();
                                let status = tk.status;
                                let priority_key = match tk.priority {
                                    TicketPriority::Low => "ticket.priority.low",
                                    TicketPriority::Medium => "ticket.priority.medium",
                                    TicketPriority::High => "ticket.priority.high",
                                };
                                view! {
                                    <TableRow
                                        class=Signal::derive(move || {
                                            if selected.get().as_deref() == Some(row_id.as_str()) {
                                                "row--selected".to_string()
                                            } else {
                                                String::new()
                                            }
                                        })
                                        on:click=move |_| selected.set(Some(id.clone()))
                                    >
                                        <TableCell><TableCellLayout>{tk.subject.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{move || t(priority_key)}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
                                                {move || t(status.label_key())}
                                            </Badge>
                                        </TableCell>
                                        <TableCell><TableCellLayout>{format_timestamp(tk.created_at)}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>

                    {move || current.get().map(|tk| view! {
                        <Card class="ticket-detail">
                            <h3>{tk.subject.clone()}</h3>
                            <p>{tk.description.clone()}</p>
                            <div class="form-row">
                                <Select value=status_value>
                                    {TicketStatus::ALL.into_iter().map(|s| view! {
                                        <option value=s.label_key()>{move || t(s.label_key())}</option>
                                    }).collect_view()}
                                </Select>
                                <Button size=ButtonSize::Small on_click=on_status>
                                    {move || t("common.save")}
                                </Button>
                            </div>

                            <h4>{move || t("ticket.comments")}</h4>
                            <ul class="ticket-comments">
                                {tk.comments.iter().map(|c| view! {
                                    <li>
                                        <strong>{c.author_name.clone()}</strong>
                                        " · "
                                        <span class="text-muted">{format_timestamp(c.created_at)}</span>
                                        <p>{c.message.clone()}</p>
                                    </li>
                                }).collect_view()}
                            </ul>

                            {move || comment_error.get().map(|key| view! {
                                <MessageBar intent=MessageBarIntent::Error>{move || t(key)}</MessageBar>
                            })}
                            <Input value=comment placeholder=tr_signal("ticket.comment") />
                            <Button appearance=ButtonAppearance::Primary on_click=on_comment>
                                {move || t("ticket.comment")}
                            </Button>
                        </Card>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_select_round_trips_label_keys() {
        for status in TicketStatus::ALL {
            assert_eq!(parse_status(status.label_key()), Some(status));
        }
        assert_eq!(parse_status("ticket.unknown"), None);
    }

    #[test]
    fn test_unknown_priority_defaults_to_medium() {
        assert_eq!(parse_priority("high"), TicketPriority::High);
        assert_eq!(parse_priority(""), TicketPriority::Medium);
    }

    #[test]
    fn test_comment_errors_have_keys() {
        assert_eq!(comment_error_key(&TicketError::EmptyComment), "ticket.error.empty_comment");
        assert_eq!(
            comment_error_key(&TicketError::Closed("tkt-003".into())),
            "ticket.error.closed"
        );
    }
}
