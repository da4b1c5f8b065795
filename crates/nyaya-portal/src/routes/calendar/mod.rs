mod add_event;

use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdCheck, LdChevronLeft, LdChevronRight, LdClock, LdFileText, LdPlus, LdUsers,
};
use dioxus_free_icons::Icon;
use nyaya_types::{
    events_on, has_events, month_grid, AppConfig, CalendarCommand, CalendarEvent, CalendarState,
    CalendarView, EventType, RecordStore, ALL_FILTER,
};
use nyaya_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, FilterTab,
    FilterTabs, FormSelect, Input, PageActions, PageHeader, PageSubtitle, PageTitle,
};

use crate::format_helpers::{
    format_date_full, format_date_human, format_date_input, format_date_long, format_month_title,
    parse_date_input, status_badge_variant,
};
use add_event::AddEventSheet;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn Calendar() -> Element {
    let store = use_context::<RecordStore>();
    let config = use_context::<AppConfig>();
    let today = crate::today(&config);
    let mut state = use_signal(|| CalendarState::new(today));
    let mut adding = use_signal(|| false);

    let mut dispatch = move |command: CalendarCommand| {
        tracing::debug!(?command, "calendar updated");
        state.write().dispatch(command);
    };

    let current = state.read().clone();
    let filter_value = current.filter.map(|kind| kind.as_str()).unwrap_or(ALL_FILTER).to_string();
    let events = store.events();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./calendar.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Calendar" }
                    PageSubtitle { "Manage hearing schedules and important dates" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| adding.set(true),
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add Event"
                    }
                }
            }

            div { class: "calendar-toolbar",
                FilterTabs {
                    for view in CalendarView::ALL {
                        FilterTab {
                            key: "{view.as_str()}",
                            active: current.view == view,
                            onclick: move |_| dispatch(CalendarCommand::SetView(view)),
                            "{view.label()}"
                        }
                    }
                }
                div { class: "calendar-toolbar-controls",
                    Button {
                        variant: ButtonVariant::Outline,
                        aria_label: "Previous day",
                        onclick: move |_| dispatch(CalendarCommand::PrevDay),
                        Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| dispatch(CalendarCommand::Today(today)),
                        "Today"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        aria_label: "Next day",
                        onclick: move |_| dispatch(CalendarCommand::NextDay),
                        Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
                    }
                    Input {
                        input_type: "date",
                        value: format_date_input(current.selected),
                        on_input: move |evt: FormEvent| {
                            if let Some(date) = parse_date_input(&evt.value()) {
                                dispatch(CalendarCommand::Select(date));
                            }
                        },
                    }
                    FormSelect {
                        value: filter_value,
                        onchange: move |evt: Event<FormData>| {
                            dispatch(CalendarCommand::SetFilter(EventType::from_str_opt(&evt.value())));
                        },
                        option { value: ALL_FILTER, "All Events" }
                        for kind in EventType::ALL {
                            option { key: "{kind.as_str()}", value: kind.as_str(), "{kind.filter_label()}" }
                        }
                    }
                }
            }

            match current.view {
                CalendarView::Month => rsx! {
                    MonthView {
                        selected: current.selected,
                        today,
                        events: events.to_vec(),
                        on_select: move |date: NaiveDate| dispatch(CalendarCommand::Select(date)),
                        on_prev: move |_| dispatch(CalendarCommand::PrevMonth),
                        on_next: move |_| dispatch(CalendarCommand::NextMonth),
                    }
                },
                CalendarView::Day => rsx! {
                    Card {
                        CardHeader { CardTitle { "{format_date_long(current.selected)}" } }
                        CardContent {
                            EventAgenda {
                                events: current.day_view(events),
                                empty: "No events scheduled for this day.",
                                on_add: move |_| adding.set(true),
                            }
                        }
                    }
                },
                CalendarView::List => rsx! {
                    Card {
                        CardHeader { CardTitle { "Upcoming Events" } }
                        CardContent {
                            UpcomingList {
                                events: current.upcoming(events, today),
                                on_add: move |_| adding.set(true),
                            }
                        }
                    }
                },
            }
        }

        if adding() {
            AddEventSheet {
                date: current.selected,
                on_close: move |_| adding.set(false),
            }
        }
    }
}

#[component]
fn MonthView(
    selected: NaiveDate,
    today: NaiveDate,
    events: Vec<CalendarEvent>,
    on_select: EventHandler<NaiveDate>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let weeks = month_grid(selected.year(), selected.month());
    let selected_events = events_on(&events, selected);

    rsx! {
        Card {
            CardHeader {
                div { class: "month-header",
                    Button {
                        variant: ButtonVariant::Ghost,
                        aria_label: "Previous month",
                        onclick: move |_| on_prev.call(()),
                        Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
                    }
                    CardTitle { "{format_month_title(selected)}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        aria_label: "Next month",
                        onclick: move |_| on_next.call(()),
                        Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
                    }
                }
            }
            CardContent {
                div { class: "month-grid", role: "grid",
                    for name in WEEKDAYS {
                        div { key: "{name}", class: "month-weekday", "{name}" }
                    }
                    for (w, week) in weeks.iter().enumerate() {
                        for (d, cell) in week.iter().enumerate() {
                            match cell {
                                Some(date) => {
                                    let date = *date;
                                    rsx! {
                                        button {
                                            key: "{date}",
                                            r#type: "button",
                                            class: "month-day",
                                            "data-selected": date == selected,
                                            "data-today": date == today,
                                            "data-has-events": has_events(&events, date),
                                            onclick: move |_| on_select.call(date),
                                            "{date.day()}"
                                        }
                                    }
                                }
                                None => rsx! {
                                    div { key: "blank-{w}-{d}", class: "month-day month-day-blank" }
                                },
                            }
                        }
                    }
                }

                if !selected_events.is_empty() {
                    div { class: "month-events",
                        h3 { "Events for {format_date_full(selected)}" }
                        for event in selected_events.iter() {
                            div {
                                key: "{event.id}",
                                class: "event-card",
                                "data-type": event.event_type.as_str(),
                                div { class: "event-card-main",
                                    h4 { "{event.title}" }
                                    EventMeta { event: event.clone() }
                                }
                                EventTypeBadge { kind: event.event_type }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EventAgenda(events: Vec<CalendarEvent>, empty: &'static str, on_add: EventHandler<()>) -> Element {
    if events.is_empty() {
        return rsx! {
            EmptyCalendar { message: empty, on_add }
        };
    }

    rsx! {
        div { class: "event-agenda",
            for event in events.iter() {
                div {
                    key: "{event.id}",
                    class: "event-card event-card-detailed",
                    "data-type": event.event_type.as_str(),
                    "data-completed": event.completed,
                    div { class: "event-card-main",
                        div { class: "event-card-title",
                            h3 { "{event.title}" }
                            EventTypeBadge { kind: event.event_type }
                        }
                        EventMeta { event: event.clone() }
                        span { class: "event-meta-item",
                            Icon::<LdUsers> { icon: LdUsers, width: 14, height: 14 }
                            "{event.participants.len()} Participants"
                        }
                        p { class: "event-description", "{event.description}" }
                        if !event.participants.is_empty() {
                            h4 { class: "event-participants-heading", "Participants:" }
                            div { class: "event-participants",
                                for (i, participant) in event.participants.iter().enumerate() {
                                    span { key: "{i}", class: "event-participant", "{participant}" }
                                }
                            }
                        }
                    }
                    div { class: "event-completion",
                        span { class: "event-completion-mark", "data-completed": event.completed,
                            if event.completed {
                                Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 }
                            }
                        }
                        span { class: "muted", if event.completed { "Completed" } else { "Pending" } }
                    }
                }
            }
        }
    }
}

#[component]
fn UpcomingList(events: Vec<CalendarEvent>, on_add: EventHandler<()>) -> Element {
    if events.is_empty() {
        return rsx! {
            EmptyCalendar { message: "No upcoming events found.", on_add }
        };
    }

    rsx! {
        div { class: "event-list",
            for event in events.iter() {
                div { key: "{event.id}", class: "event-row",
                    div { class: "event-row-main",
                        div { class: "event-card-title",
                            span { class: "event-dot", "data-type": event.event_type.as_str() }
                            h3 { "{event.title}" }
                            EventTypeBadge { kind: event.event_type }
                        }
                        div { class: "muted event-row-sub",
                            if let Some(number) = &event.case_number {
                                span { "Case #{number}" }
                            }
                            span { "{event.location}" }
                        }
                    }
                    div { class: "event-row-when",
                        span { class: "event-meta-item",
                            Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                            "{format_date_human(event.date)}"
                        }
                        span { class: "event-meta-item",
                            Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                            "{event.time}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EventMeta(event: CalendarEvent) -> Element {
    rsx! {
        div { class: "event-meta",
            span { class: "event-meta-item",
                Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                "{event.time}"
            }
            span { class: "event-meta-item", "{event.location}" }
            if let Some(number) = &event.case_number {
                span { class: "event-meta-item",
                    Icon::<LdFileText> { icon: LdFileText, width: 14, height: 14 }
                    "Case #{number}"
                }
            }
        }
    }
}

#[component]
fn EventTypeBadge(kind: EventType) -> Element {
    rsx! {
        Badge { variant: status_badge_variant(kind.tone()), "{kind.label()}" }
    }
}

#[component]
fn EmptyCalendar(message: &'static str, on_add: EventHandler<()>) -> Element {
    rsx! {
        div { class: "empty-state",
            Icon::<LdCalendar> { icon: LdCalendar, width: 40, height: 40 }
            p { "{message}" }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_add.call(()),
                Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                "Add Event"
            }
        }
    }
}
