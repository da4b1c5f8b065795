use dioxus::prelude::*;
use nyaya_types::{
    save_person, ActionStatus, AppConfig, Gender, PersonDraft, PersonType, DISTRICT_OPTIONS,
    PERSON_ID_TYPE_OPTIONS,
};
use nyaya_ui::{
    Button, ButtonVariant, Form, FormGrid, FormSelect, Input, Separator, Sheet, SheetClose,
    SheetContent, SheetDescription, SheetFooter, SheetHeader, SheetSide, SheetTitle, Textarea,
};

use crate::components::SelectOptionList;
use crate::delay::PlatformDelay;

/// "Add Person" form. Saving waits on the simulated delay, then closes.
#[component]
pub(super) fn AddPersonSheet(open: bool, on_close: EventHandler<()>) -> Element {
    let config = use_context::<AppConfig>();
    let delay = use_context::<PlatformDelay>();
    let mut draft = use_signal(PersonDraft::default);
    let mut status = use_signal(ActionStatus::<()>::default);

    let mut close = move || {
        if !status.write().reset() {
            return;
        }
        draft.set(PersonDraft::default());
        on_close.call(());
    };

    let handle_save = move |_: FormEvent| {
        if !status.write().begin() {
            return;
        }
        let config = config.clone();
        let snapshot = draft.read().clone();
        spawn(async move {
            let result = save_person(&delay, &config, snapshot).await;
            let saved = result.is_ok();
            status.write().finish(result);
            if saved {
                close();
            }
        });
    };

    let pending = status.read().is_pending();
    let error = status.read().error().map(str::to_string);
    let person_type = draft.read().person_type.map(|t| t.as_str()).unwrap_or_default().to_string();
    let gender = draft.read().gender.map(|g| g.as_str()).unwrap_or_default().to_string();

    rsx! {
        Sheet {
            open,
            on_close: move |_| close(),
            side: SheetSide::Right,
            SheetContent {
                SheetHeader {
                    SheetTitle { "Add New Person" }
                    SheetDescription { "Add a new person to the system. Fill out the details below." }
                    SheetClose { on_close: move |_| close(), disabled: pending }
                }

                Form {
                    onsubmit: handle_save,

                    div { class: "sheet-form",
                        if let Some(message) = error {
                            div { class: "form-error", "{message}" }
                        }
                        FormGrid {
                            Input {
                                label: "Full Name (English)",
                                placeholder: "Enter full name",
                                value: draft.read().name.clone(),
                                on_input: move |e: FormEvent| draft.write().name = e.value(),
                            }
                            Input {
                                class: "nepali-text",
                                label: "पूरा नाम",
                                placeholder: "पूरा नाम लेख्नुहोस्",
                                value: draft.read().nepali_name.clone(),
                                on_input: move |e: FormEvent| draft.write().nepali_name = e.value(),
                            }
                            FormSelect {
                                label: "Person Type",
                                value: person_type,
                                onchange: move |e: Event<FormData>| {
                                    draft.write().person_type = PersonType::from_str_opt(&e.value());
                                },
                                option { value: "", disabled: true, "Select type" }
                                for kind in PersonType::ALL {
                                    option { key: "{kind.as_str()}", value: kind.as_str(), "{kind.option_label()}" }
                                }
                            }
                            FormSelect {
                                label: "Gender",
                                value: gender,
                                onchange: move |e: Event<FormData>| {
                                    draft.write().gender = Gender::from_str_opt(&e.value());
                                },
                                option { value: "", disabled: true, "Select gender" }
                                for g in Gender::ALL {
                                    option { key: "{g.as_str()}", value: g.as_str(), "{g.label()}" }
                                }
                            }
                            Input {
                                label: "Age",
                                input_type: "number",
                                value: draft.read().age.clone(),
                                on_input: move |e: FormEvent| draft.write().age = e.value(),
                            }
                            FormSelect {
                                label: "ID Type",
                                value: draft.read().id_type.clone(),
                                onchange: move |e: Event<FormData>| draft.write().id_type = e.value(),
                                SelectOptionList { options: PERSON_ID_TYPE_OPTIONS, placeholder: "Select ID type" }
                            }
                            Input {
                                label: "ID Number",
                                placeholder: "Enter ID number",
                                value: draft.read().id_number.clone(),
                                on_input: move |e: FormEvent| draft.write().id_number = e.value(),
                            }
                            Input {
                                label: "Occupation",
                                placeholder: "Enter occupation",
                                value: draft.read().occupation.clone(),
                                on_input: move |e: FormEvent| draft.write().occupation = e.value(),
                            }
                        }

                        Separator {}

                        FormGrid {
                            Input {
                                label: "Contact Number",
                                input_type: "tel",
                                placeholder: "Enter contact number",
                                value: draft.read().contact.clone(),
                                on_input: move |e: FormEvent| draft.write().contact = e.value(),
                            }
                            Input {
                                label: "Email Address",
                                input_type: "email",
                                placeholder: "Enter email address",
                                value: draft.read().email.clone(),
                                on_input: move |e: FormEvent| draft.write().email = e.value(),
                            }
                            Input {
                                label: "Address",
                                placeholder: "Enter full address",
                                value: draft.read().address.clone(),
                                on_input: move |e: FormEvent| draft.write().address = e.value(),
                            }
                            FormSelect {
                                label: "District",
                                value: draft.read().district.clone(),
                                onchange: move |e: Event<FormData>| draft.write().district = e.value(),
                                SelectOptionList { options: DISTRICT_OPTIONS, placeholder: "Select district" }
                            }
                        }

                        Textarea {
                            label: "Additional Notes",
                            placeholder: "Any additional information...",
                            rows: 3,
                            value: draft.read().notes.clone(),
                            on_input: move |e: FormEvent| draft.write().notes = e.value(),
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
                                if pending { "Saving..." } else { "Save Person" }
                            }
                        }
                    }
                }
            }
        }
    }
}
