use chrono::NaiveDate;
use dioxus::prelude::*;
use nyaya_types::{save_event, ActionStatus, AppConfig, EventDraft, EventType, RELATED_CASE_OPTIONS};
use nyaya_ui::{
    Button, ButtonVariant, Form, FormGrid, FormSelect, Input, Sheet, SheetClose, SheetContent,
    SheetDescription, SheetFooter, SheetHeader, SheetSide, SheetTitle, Textarea,
};

use crate::delay::PlatformDelay;
use crate::format_helpers::format_date_input;

const NO_CASE: &str = "none";

fn blank_draft(date: NaiveDate) -> EventDraft {
    EventDraft {
        date: format_date_input(date),
        ..Default::default()
    }
}

/// "Add Event" form. Mounted on open, so each opening starts from a blank
/// draft on the selected date.
#[component]
pub(super) fn AddEventSheet(date: NaiveDate, on_close: EventHandler<()>) -> Element {
    let config = use_context::<AppConfig>();
    let delay = use_context::<PlatformDelay>();
    let mut draft = use_signal(|| blank_draft(date));
    let mut status = use_signal(ActionStatus::<()>::default);

    let mut close = move || {
        if status.write().reset() {
            on_close.call(());
        }
    };

    let handle_save = move |_: FormEvent| {
        if !status.write().begin() {
            return;
        }
        let config = config.clone();
        let snapshot = draft.read().clone();
        spawn(async move {
            let result = save_event(&delay, &config, snapshot).await;
            let saved = result.is_ok();
            status.write().finish(result);
            if saved {
                close();
            }
        });
    };

    let pending = status.read().is_pending();
    let error = status.read().error().map(str::to_string);
    let event_type = draft.read().event_type.map(|t| t.as_str()).unwrap_or_default().to_string();
    let related_case = draft
        .read()
        .related_case
        .clone()
        .unwrap_or_else(|| NO_CASE.to_string());

    rsx! {
        Sheet {
            open: true,
            on_close: move |_| close(),
            side: SheetSide::Right,
            SheetContent {
                SheetHeader {
                    SheetTitle { "Add New Calendar Event" }
                    SheetDescription { "Create a new event, hearing, or deadline in the system calendar." }
                    SheetClose { on_close: move |_| close(), disabled: pending }
                }

                Form {
                    onsubmit: handle_save,

                    div { class: "sheet-form",
                        if let Some(message) = error {
                            div { class: "form-error", "{message}" }
                        }
                        Input {
                            label: "Title",
                            placeholder: "Event title",
                            value: draft.read().title.clone(),
                            on_input: move |e: FormEvent| draft.write().title = e.value(),
                        }
                        FormGrid {
                            Input {
                                label: "Date",
                                input_type: "date",
                                value: draft.read().date.clone(),
                                on_input: move |e: FormEvent| draft.write().date = e.value(),
                            }
                            Input {
                                label: "Time",
                                input_type: "time",
                                value: draft.read().time.clone(),
                                on_input: move |e: FormEvent| draft.write().time = e.value(),
                            }
                        }
                        FormSelect {
                            label: "Type",
                            value: event_type,
                            onchange: move |e: Event<FormData>| {
                                draft.write().event_type = EventType::from_str_opt(&e.value());
                            },
                            option { value: "", disabled: true, "Select event type" }
                            for kind in EventType::ALL {
                                option { key: "{kind.as_str()}", value: kind.as_str(), "{kind.label()}" }
                            }
                        }
                        Input {
                            label: "Location",
                            placeholder: "Event location",
                            value: draft.read().location.clone(),
                            on_input: move |e: FormEvent| draft.write().location = e.value(),
                        }
                        FormSelect {
                            label: "Related Case",
                            value: related_case,
                            onchange: move |e: Event<FormData>| {
                                let value = e.value();
                                draft.write().related_case = (value != NO_CASE).then_some(value);
                            },
                            for (number, case_type) in RELATED_CASE_OPTIONS.iter() {
                                option { key: "{number}", value: *number, "{number} ({case_type})" }
                            }
                            option { value: NO_CASE, "None" }
                        }
                        Input {
                            label: "Participants",
                            placeholder: "Add participants",
                            value: draft.read().participants.clone(),
                            on_input: move |e: FormEvent| draft.write().participants = e.value(),
                        }
                        Textarea {
                            label: "Description",
                            placeholder: "Event details...",
                            rows: 3,
                            value: draft.read().description.clone(),
                            on_input: move |e: FormEvent| draft.write().description = e.value(),
                        }
                    }

                    SheetFooter {
                        div { class: "sheet-footer-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                disabled: pending,
                                onclick: move |_| close(),
                                "Cancel"
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                button_type: "submit",
                                disabled: pending,
                                if pending { "Saving..." } else { "Save Event" }
                            }
                        }
                    }
                }
            }
        }
    }
}
