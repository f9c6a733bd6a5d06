//! Weekly timetable grid with slot assignment.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::scope::visible_to;
use crate::system::auth::context::{current_role, use_auth};
use crate::system::i18n::context::{tr_signal, use_i18n};
use contracts::domain::a007_timetable::{
    teacher_clashes, timetable_for_class, Timetable, TimetableEntry, Weekday,
};
use contracts::domain::common::new_local_id;
use contracts::fixtures;
use contracts::system::auth::Role;
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Input, MessageBar, MessageBarIntent, Select, Table,
    TableBody, TableCell, TableHeader, TableHeaderCell, TableRow,
};

fn parse_day(value: &str) -> Option<Weekday> {
    Weekday::ALL.into_iter().find(|d| d.as_str() == value)
}

#[component]
pub fn TimetableGrid() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_auth();
    let i18n = use_i18n();
    let t = move |key: &'static str| i18n.with(|t| t.t(key));

    let (school_id, own_class) = session.with_untracked(|s| {
        let user = s.user();
        (
            user.and_then(|u| u.school_id.clone()),
            user.and_then(|u| u.class_id.clone()),
        )
    });
    let can_edit = move || {
        matches!(
            current_role(),
            Some(Role::Principal | Role::VicePrincipal | Role::ClassTeacher)
        )
    };

    let config = StoredValue::new(ctx.config.with_value(|c| c.timetable.clone()));
    let school_days = config.with_value(|c| c.school_days.clone());

    let data = fixtures::sample_data();
    let teachers = StoredValue::new(visible_to(school_id.as_deref(), &data.teachers));
    let classes = StoredValue::new(visible_to(school_id.as_deref(), &data.classes));
    let timetables = RwSignal::new(
        config
            .with_value(fixtures::timetables)
            .into_iter()
            .filter(|tt| school_id.as_deref().map_or(true, |id| tt.school_id == id))
            .collect::<Vec<Timetable>>(),
    );

    let first_class = classes.with_value(|cs| cs.first().map(|c| c.id.clone()));
    let class_id = RwSignal::new(own_class.or(first_class).unwrap_or_default());

    let current = Signal::derive(move || {
        let class_id = class_id.get();
        timetables.with(|all| all.iter().find(|tt| tt.class_id == class_id).cloned())
    });

    let teacher_name = move |id: &str| {
        teachers.with_value(|all| {
            all.iter()
                .find(|t| t.id == id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| id.to_string())
        })
    };

    // Assignment form
    let first_day = school_days.first().copied().unwrap_or(Weekday::Monday);
    let day_value = RwSignal::new(first_day.as_str().to_string());
    let period_value = RwSignal::new("1".to_string());
    let subject_value = RwSignal::new(String::new());
    let teacher_value = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let clash_warning = RwSignal::new(None::<String>);

    let on_assign = move |_| {
        let Some(day) = parse_day(&day_value.get_untracked()) else {
            return;
        };
        let period = period_value.get_untracked().trim().parse::<u8>().unwrap_or(0);
        let subject = subject_value.get_untracked().trim().to_string();
        let teacher_id = teacher_value.get_untracked();
        if subject.is_empty() || teacher_id.is_empty() {
            error.set(Some(t("onboarding.missing_field").to_string()));
            return;
        }
        let class_id = class_id.get_untracked();
        let Some(class) = classes.with_value(|cs| cs.iter().find(|c| c.id == class_id).cloned())
        else {
            log::warn!("timetable assign for unknown class {}", class_id);
            error.set(Some(t("common.no_data").to_string()));
            return;
        };

        let config = config.get_value();
        let mut result = Ok(());
        timetables.update(|all| {
            let tt = timetable_for_class(all, &class, &config);
            let entry = TimetableEntry {
                id: new_local_id("tte"),
                class_id: tt.class_id.clone(),
                section: tt.section.clone(),
                day,
                period,
                subject,
                teacher_id,
            };
            result = tt.assign(entry);
        });

        match result {
            Ok(()) => {
                error.set(None);
                subject_value.set(String::new());
                let clashes = timetables.with_untracked(|all| teacher_clashes(all));
                clash_warning.set(clashes.first().map(|c| {
                    format!(
                        "{} · {} {} · {}",
                        teacher_name(&c.teacher_id),
                        c.day,
                        c.period,
                        c.class_ids.join(", ")
                    )
                }));
            }
            Err(e) => {
                log::warn!("timetable assign rejected: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let clear_slot = move |day: Weekday, period: u8| {
        let class_id = class_id.get_untracked();
        timetables.update(|all| {
            if let Some(tt) = all.iter_mut().find(|tt| tt.class_id == class_id) {
                if let Some(removed) = tt.clear_slot(day, period) {
                    log::info!("cleared {} {} period {}", class_id, day, removed.period);
                }
            }
        });
        clash_warning.set(None);
    };

    let school_days = StoredValue::new(school_days);

    view! {
        <PageFrame page_id="a007_timetable--list" category=PAGE_CAT_LIST>
            <PageHeader title=tr_signal("nav.timetable")>
                <Select value=class_id>
                    {classes.with_value(|cs| {
                        cs.iter()
                            .map(|c| view! { <option value=c.id.clone()>{c.label()}</option> })
                            .collect_view()
                    })}
                </Select>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|message| view! {
                    <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
                })}
                {move || clash_warning.get().map(|message| view! {
                    <MessageBar intent=MessageBarIntent::Warning>{message}</MessageBar>
                })}

                {move || match current.get() {
                    None => view! { <p class="page__empty">{t("common.no_data")}</p> }.into_any(),
                    Some(tt) => {
                        let periods = tt.periods_per_day;
                        let rows: Vec<(Weekday, Vec<Option<TimetableEntry>>)> = tt
                            .grid()
                            .into_iter()
                            .map(|(day, cells)| (day, cells.into_iter().map(|c| c.cloned()).collect()))
                            .collect();
                        view! {
                            <Table class="timetable">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>{t("timetable.day")}</TableHeaderCell>
                                        {(1..=periods).map(|p| view! {
                                            <TableHeaderCell>{format!("{} {}", t("timetable.period"), p)}</TableHeaderCell>
                                        }).collect_view()}
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {rows.into_iter().map(|(day, cells)| view! {
                                        <TableRow>
                                            <TableCell>{t(day.label_key())}</TableCell>
                                            {cells.into_iter().enumerate().map(|(i, cell)| {
                                                let period = i as u8 + 1;
                                                match cell {
                                                    Some(entry) => view! {
                                                        <TableCell class="timetable__slot">
                                                            <div class="timetable__subject">{entry.subject.clone()}</div>
                                                            <div class="timetable__teacher">{teacher_name(&entry.teacher_id)}</div>
                                                            <Show when=can_edit>
                                                                <Button
                                                                    size=ButtonSize::Small
                                                                    appearance=ButtonAppearance::Subtle
                                                                    on_click=move |_| clear_slot(day, period)
                                                                >
                                                                    "×"
                                                                </Button>
                                                            </Show>
                                                        </TableCell>
                                                    }.into_any(),
                                                    None => view! {
                                                        <TableCell class="timetable__slot timetable__slot--free">
                                                            {t("timetable.free")}
                                                        </TableCell>
                                                    }.into_any(),
                                                }
                                            }).collect_view()}
                                        </TableRow>
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        }.into_any()
                    }
                }}

                <Show when=can_edit>
                    <div class="form-row">
                        <Select value=day_value>
                            {school_days.with_value(|sd| sd.iter().copied().map(|d| view! {
                                <option value=d.as_str()>{move || t(d.label_key())}</option>
                            }).collect_view())}
                        </Select>
                        <Input value=period_value placeholder=tr_signal("timetable.period") />
                        <Input value=subject_value placeholder=tr_signal("grades.subject") />
                        <Select value=teacher_value>
                            <option value="">"-"</option>
                            {teachers.with_value(|ts| {
                                ts.iter()
                                    .map(|tch| view! { <option value=tch.id.clone()>{tch.name.clone()}</option> })
                                    .collect_view()
                            })}
                        </Select>
                        <Button appearance=ButtonAppearance::Primary on_click=on_assign>
                            {move || t("timetable.assign")}
                        </Button>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("wednesday"), Some(Weekday::Wednesday));
        assert_eq!(parse_day("sunday"), None);
    }
}
