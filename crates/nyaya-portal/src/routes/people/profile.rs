use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdFileText};
use dioxus_free_icons::Icon;
use nyaya_types::{activity_for, Person, RecordStore};
use nyaya_ui::{
    Avatar, AvatarFallback, Badge, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, DetailItem, DetailList, Sheet, SheetClose, SheetContent, SheetDescription,
    SheetHeader, SheetSide, SheetTitle, Timeline, TimelineItem,
};

use crate::components::CaseStatusBadge;
use crate::format_helpers::status_badge_variant;
use crate::routes::Route;

#[component]
pub(super) fn PersonProfileSheet(person: Person, on_close: EventHandler<()>) -> Element {
    let store = use_context::<RecordStore>();
    let related = store.related_cases_for(&person);
    let activity = activity_for(&person);

    let summary = format!("{}, {} years", person.gender.label(), person.age);
    let contact = if person.contact.is_empty() {
        "Not Available".to_string()
    } else {
        person.contact.clone()
    };

    rsx! {
        Sheet {
            open: true,
            on_close: move |_| on_close.call(()),
            side: SheetSide::Right,
            SheetContent { class: "person-profile",
                SheetHeader {
                    SheetTitle { "{person.name}" }
                    SheetDescription {
                        if let Some(nepali) = &person.nepali_name {
                            span { class: "nepali-text person-profile-nepali", "{nepali}" }
                        }
                        Badge { variant: status_badge_variant(person.person_type.tone()),
                            "{person.person_type.label()}"
                        }
                    }
                    SheetClose { on_close: move |_| on_close.call(()) }
                }

                div { class: "person-profile-summary",
                    div { class: "person-profile-avatar",
                        Avatar { AvatarFallback { "{person.initials()}" } }
                    }
                    Button { variant: ButtonVariant::Outline,
                        Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                        "Export Profile"
                    }
                }

                h4 { class: "person-profile-heading", "Personal Information" }
                DetailList {
                    DetailItem { label: "Gender / Age", value: summary }
                    DetailItem { label: "Address", value: person.address.clone() }
                    DetailItem { label: "Contact", value: contact }
                    if let Some(email) = &person.email {
                        DetailItem { label: "Email", value: email.clone() }
                    }
                }

                h4 { class: "person-profile-heading", "Identification" }
                DetailList {
                    DetailItem { label: "ID Type", value: person.id_type.clone() }
                    DetailItem { label: "ID Number", value: person.id_number.clone() }
                    DetailItem { label: "Occupation", value: person.occupation.clone() }
                }

                Card {
                    CardHeader { CardTitle { "Related Cases" } }
                    CardContent {
                        if related.is_empty() {
                            div { class: "empty-state",
                                Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 }
                                p { "No related cases found" }
                            }
                        }
                        for case in related.iter() {
                            div { key: "{case.case_id}", class: "related-case",
                                div {
                                    Link {
                                        to: Route::CaseDetail { id: case.case_id, tab: None },
                                        class: "row-link",
                                        "{case.case_number}"
                                    }
                                    div { class: "muted related-case-meta",
                                        "{case.case_type} • {case.filing_date}"
                                    }
                                }
                                div { class: "related-case-side",
                                    CaseStatusBadge { status: case.status }
                                    span { class: "related-case-role", "{case.role}" }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader { CardTitle { "Activity Timeline" } }
                    CardContent {
                        Timeline {
                            for (i, entry) in activity.iter().enumerate() {
                                TimelineItem {
                                    key: "{i}",
                                    title: entry.title.clone(),
                                    timestamp: entry.date.clone(),
                                    variant: status_badge_variant(entry.tone),
                                    "{entry.detail}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
