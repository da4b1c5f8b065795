use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowRight, LdPrinter, LdUpload};
use dioxus_free_icons::Icon;
use nyaya_types::{
    save_petition_draft, submit_petition, ActionStatus, AppConfig, PartyDraft, PetitionDraft,
    PetitionReceipt, PetitionStep, PetitionWizard, StepMarker, CASE_TYPE_OPTIONS,
    GENDER_OPTIONS, ID_TYPE_OPTIONS, POLICE_STATION_OPTIONS,
};
use nyaya_ui::{
    Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle, FormGrid,
    FormSelect, Input, PageHeader, PageSubtitle, PageTitle, Progress, Textarea,
};

use crate::components::SelectOptionList;
use crate::delay::PlatformDelay;
use crate::routes::Route;

/// Which party block of the draft a field group edits.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Party {
    Complainant,
    Defendant,
}

fn party_mut(draft: &mut PetitionDraft, party: Party) -> &mut PartyDraft {
    match party {
        Party::Complainant => &mut draft.complainant,
        Party::Defendant => &mut draft.defendant,
    }
}

#[component]
pub fn NewPetition() -> Element {
    let config = use_context::<AppConfig>();
    let delay = use_context::<PlatformDelay>();
    let mut wizard = use_signal(PetitionWizard::default);
    let mut draft = use_signal(PetitionDraft::default);
    let mut status = use_signal(ActionStatus::<PetitionReceipt>::default);

    let handle_submit = move |_| {
        if !status.write().begin() {
            return;
        }
        let config = config.clone();
        spawn(async move {
            let snapshot = draft.read().clone();
            let result = submit_petition(&delay, &config, snapshot).await;
            status.write().finish(result);
        });
    };

    let handle_reset = move |_| {
        draft.set(PetitionDraft::default());
        wizard.set(PetitionWizard::default());
        status.set(ActionStatus::Idle);
    };

    let current = wizard.read().step;
    let progress = wizard.read().progress_percent();
    let pending = status.read().is_pending();
    let receipt = status.read().completed().map(|r| {
        (
            r.short_reference(),
            r.complainant.clone(),
            r.submitted_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        )
    });
    let error = status.read().error().map(str::to_string);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./new_petition.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "New Petition" }
                    PageSubtitle { "Register a new petition or complaint case" }
                }
            }

            if let Some((reference, complainant, submitted_at)) = receipt {
                Card {
                    CardHeader { CardTitle { "Petition Submitted" } }
                    CardContent {
                        div { class: "form-success",
                            "Petition registered under reference "
                            strong { "{reference}" }
                        }
                        p { class: "muted", "Complainant: {complainant}. Submitted {submitted_at}." }
                    }
                    CardFooter {
                        div { class: "button-row",
                            Button { variant: ButtonVariant::Primary, onclick: handle_reset, "Register Another Petition" }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| {
                                    navigator().push(Route::Petitions {});
                                },
                                "View Petitions"
                            }
                        }
                    }
                }
            } else {
                Card {
                    CardHeader {
                        CardTitle {
                            span { class: "nepali-text petition-title-np", "नयाँ उजुरी दर्ता" }
                            " | New Petition Registration"
                        }
                    }
                    CardContent {
                        div { class: "petition-progress",
                            Progress { percent: progress }
                            div { class: "petition-steps",
                                for step in PetitionStep::ALL {
                                    StepBadge { key: "{step.as_str()}", step, marker: wizard.read().marker(step) }
                                }
                            }
                        }

                        if let Some(err) = error {
                            div { class: "form-error", "{err}" }
                        }

                        match current {
                            PetitionStep::Complainant => rsx! {
                                FormGrid {
                                    PartyFields { draft, party: Party::Complainant }
                                    FormSelect {
                                        label: "ID Type",
                                        value: draft.read().id_type.clone(),
                                        onchange: move |e: Event<FormData>| draft.write().id_type = e.value(),
                                        SelectOptionList { options: ID_TYPE_OPTIONS, placeholder: "Select ID type" }
                                    }
                                    Input {
                                        label: "ID Number",
                                        placeholder: "Enter ID number",
                                        value: draft.read().id_number.clone(),
                                        on_input: move |e: FormEvent| draft.write().id_number = e.value(),
                                    }
                                }
                            },
                            PetitionStep::Defendant => rsx! {
                                FormGrid {
                                    PartyFields { draft, party: Party::Defendant }
                                    Input {
                                        label: "Relationship to Complainant",
                                        placeholder: "e.g., Neighbor, Family member",
                                        value: draft.read().relationship.clone(),
                                        on_input: move |e: FormEvent| draft.write().relationship = e.value(),
                                    }
                                    Input {
                                        label: "Physical Description",
                                        placeholder: "Any identifying features",
                                        value: draft.read().physical_description.clone(),
                                        on_input: move |e: FormEvent| draft.write().physical_description = e.value(),
                                    }
                                }
                            },
                            PetitionStep::Case => rsx! {
                                FormGrid {
                                    Input {
                                        label: "Date of Incident",
                                        input_type: "date",
                                        value: draft.read().incident_date.clone(),
                                        on_input: move |e: FormEvent| draft.write().incident_date = e.value(),
                                    }
                                    FormSelect {
                                        label: "Case Type",
                                        value: draft.read().case_type.clone(),
                                        onchange: move |e: Event<FormData>| draft.write().case_type = e.value(),
                                        SelectOptionList { options: CASE_TYPE_OPTIONS, placeholder: "Select case type" }
                                    }
                                }
                                Input {
                                    label: "Incident Location",
                                    placeholder: "Where did the incident occur?",
                                    value: draft.read().incident_location.clone(),
                                    on_input: move |e: FormEvent| draft.write().incident_location = e.value(),
                                }
                                Textarea {
                                    label: "Case Description",
                                    placeholder: "Please provide details about what happened...",
                                    rows: 5,
                                    value: draft.read().description.clone(),
                                    on_input: move |e: FormEvent| draft.write().description = e.value(),
                                }
                            },
                            PetitionStep::Evidence => rsx! {
                                div { class: "petition-upload",
                                    Icon::<LdUpload> { icon: LdUpload, width: 28, height: 28 }
                                    p { "Evidence files are collected at the receiving station." }
                                    p { class: "muted", "Supported formats: JPEG, PNG, PDF, DOC (Max 10MB)" }
                                }
                                Textarea {
                                    label: "Witness Information (if any)",
                                    placeholder: "Names and contact details of witnesses...",
                                    rows: 3,
                                    value: draft.read().witnesses.clone(),
                                    on_input: move |e: FormEvent| draft.write().witnesses = e.value(),
                                }
                                FormGrid {
                                    FormSelect {
                                        label: "Reporting Police Station",
                                        value: draft.read().police_station.clone(),
                                        onchange: move |e: Event<FormData>| draft.write().police_station = e.value(),
                                        SelectOptionList { options: POLICE_STATION_OPTIONS, placeholder: "Select police station" }
                                    }
                                    Input {
                                        label: "Receiving Officer",
                                        placeholder: "Officer name",
                                        value: draft.read().receiving_officer.clone(),
                                        on_input: move |e: FormEvent| draft.write().receiving_officer = e.value(),
                                    }
                                }
                            },
                        }
                    }
                    CardFooter {
                        div { class: "petition-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                disabled: wizard.read().is_first() || pending,
                                onclick: move |_| wizard.write().back(),
                                "Back"
                            }
                            div { class: "button-row",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    disabled: pending,
                                    onclick: move |_| save_petition_draft(&draft.read()),
                                    Icon::<LdPrinter> { icon: LdPrinter, width: 16, height: 16 }
                                    "Save Draft"
                                }
                                if wizard.read().is_last() {
                                    Button {
                                        variant: ButtonVariant::Primary,
                                        disabled: pending,
                                        onclick: handle_submit,
                                        if pending { "Submitting..." } else { "Submit Petition" }
                                    }
                                } else {
                                    Button {
                                        variant: ButtonVariant::Primary,
                                        onclick: move |_| wizard.write().next(),
                                        "Next"
                                        Icon::<LdArrowRight> { icon: LdArrowRight, width: 16, height: 16 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StepBadge(step: PetitionStep, marker: StepMarker) -> Element {
    let state = match marker {
        StepMarker::Done => "done",
        StepMarker::Current => "current",
        StepMarker::Upcoming => "upcoming",
    };
    let number = step.index() + 1;

    rsx! {
        div { class: "petition-step", "data-state": state,
            div { class: "petition-step-dot",
                if marker == StepMarker::Done { "✓" } else { "{number}" }
            }
            span { class: "petition-step-label", "{step.label()}" }
            span { class: "petition-step-label nepali-text", "{step.nepali_label()}" }
        }
    }
}

/// Name, age, gender, address and contact for one party.
#[component]
fn PartyFields(mut draft: Signal<PetitionDraft>, party: Party) -> Element {
    let current = match party {
        Party::Complainant => draft.read().complainant.clone(),
        Party::Defendant => draft.read().defendant.clone(),
    };
    let contact_label = match party {
        Party::Complainant => "Contact Number",
        Party::Defendant => "Contact Number (if known)",
    };

    rsx! {
        Input {
            label: "Full Name (English)",
            placeholder: "Enter full name",
            value: current.name_en,
            on_input: move |e: FormEvent| party_mut(&mut draft.write(), party).name_en = e.value(),
        }
        Input {
            class: "nepali-text",
            label: "पूरा नाम",
            placeholder: "पूरा नाम लेख्नुहोस्",
            value: current.name_np,
            on_input: move |e: FormEvent| party_mut(&mut draft.write(), party).name_np = e.value(),
        }
        Input {
            label: "Age",
            input_type: "number",
            value: current.age,
            on_input: move |e: FormEvent| party_mut(&mut draft.write(), party).age = e.value(),
        }
        FormSelect {
            label: "Gender",
            value: current.gender,
            onchange: move |e: Event<FormData>| party_mut(&mut draft.write(), party).gender = e.value(),
            SelectOptionList { options: GENDER_OPTIONS, placeholder: "Select gender" }
        }
        Input {
            label: "Address",
            placeholder: "Enter address",
            value: current.address,
            on_input: move |e: FormEvent| party_mut(&mut draft.write(), party).address = e.value(),
        }
        Input {
            label: contact_label,
            placeholder: "Enter phone number",
            value: current.contact,
            on_input: move |e: FormEvent| party_mut(&mut draft.write(), party).contact = e.value(),
        }
    }
}
