use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdDownload, LdFileText, LdPrinter};
use dioxus_free_icons::Icon;
use nyaya_types::{CaseDetail as CaseFile, CaseStatus, PartyContact, RecordStore, StatusAction};
use nyaya_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, DetailGrid, DetailItem, DetailList, PageHeader, PageSubtitle, PageTitle,
    TabContent, TabStrip, Tabs, Timeline, TimelineItem,
};

use crate::components::CaseStatusBadge;
use crate::format_helpers::status_badge_variant;
use crate::routes::Route;

/// `(value, label)` for each tab, in display order.
const CASE_TABS: [(&str, &str); 4] = [
    ("details", "Case Details"),
    ("timeline", "Timeline"),
    ("documents", "Documents"),
    ("actions", "Actions"),
];

const REPORT_BUTTONS: [&str; 3] = ["Print Case Summary", "Print Full Report", "Print Receipt"];

fn initial_tab(requested: Option<&str>) -> String {
    requested
        .and_then(|t| CASE_TABS.iter().find(|(value, _)| *value == t))
        .map(|(value, _)| *value)
        .unwrap_or(CASE_TABS[0].0)
        .to_string()
}

#[component]
pub fn CaseDetail(id: u32, tab: Option<String>) -> Element {
    let store = use_context::<RecordStore>();
    // Status changed from the actions tab, tagged with the case it belongs to.
    let mut status_override = use_signal(|| Option::<(u32, CaseStatus)>::None);

    let detail = match store.case_detail(id) {
        Ok(detail) => detail,
        Err(err) => {
            tracing::debug!(case_id = id, error = %err, "case lookup failed");
            return rsx! {
                div { class: "container",
                    PageHeader {
                        PageTitle { "Case not found" }
                    }
                    Card {
                        CardContent {
                            p { "No case with id {id} exists in the registry." }
                            Link { to: Route::Petitions {},
                                Button { variant: ButtonVariant::Secondary, "Back to Petitions" }
                            }
                        }
                    }
                }
            };
        }
    };

    let status = status_override()
        .filter(|(case_id, _)| *case_id == id)
        .map(|(_, status)| status)
        .unwrap_or(detail.record.status);
    let default_tab = initial_tab(tab.as_deref());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./case_detail.css") }

        div { class: "container",
            div {
                Link { to: Route::Dashboard {}, class: "back-link",
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                    "Back to Dashboard"
                }
                PageHeader {
                    div {
                        PageTitle { "Case Details" }
                        PageSubtitle { "View and manage case information" }
                    }
                }
            }

            Card {
                CardHeader {
                    div { class: "case-heading",
                        div {
                            CardTitle { "Case #{detail.record.case_number}" }
                            CardDescription {
                                "Filed on {detail.record.filing_date} | {detail.record.case_type}"
                            }
                        }
                        CaseStatusBadge { status }
                    }
                }
                CardContent {
                    Tabs { key: "{default_tab}", default_value: default_tab.clone(), horizontal: true,
                        TabStrip { tabs: CASE_TABS.to_vec() }
                        TabContent { value: "details", index: 0usize,
                            DetailsTab { detail: detail.clone() }
                        }
                        TabContent { value: "timeline", index: 1usize,
                            Timeline {
                                for (i, entry) in detail.timeline.iter().enumerate() {
                                    TimelineItem {
                                        key: "{i}",
                                        title: entry.title.clone(),
                                        timestamp: entry.timestamp.clone(),
                                        variant: status_badge_variant(entry.tone),
                                        p { "{entry.note}" }
                                    }
                                }
                            }
                        }
                        TabContent { value: "documents", index: 2usize,
                            DocumentsTab { detail: detail.clone() }
                        }
                        TabContent { value: "actions", index: 3usize,
                            div { class: "case-actions",
                                div { class: "case-action-panel",
                                    h3 { "Update Case Status" }
                                    for action in StatusAction::ALL {
                                        Button {
                                            key: "{action.label()}",
                                            variant: ButtonVariant::Outline,
                                            disabled: status == action.target(),
                                            onclick: move |_| {
                                                let target = action.target();
                                                tracing::info!(case_id = id, status = target.as_str(), "case status changed");
                                                status_override.set(Some((id, target)));
                                            },
                                            "{action.label()}"
                                        }
                                    }
                                }
                                div { class: "case-action-panel",
                                    h3 { "Case Reports" }
                                    for label in REPORT_BUTTONS {
                                        Button {
                                            key: "{label}",
                                            variant: ButtonVariant::Outline,
                                            Icon::<LdPrinter> { icon: LdPrinter, width: 16, height: 16 }
                                            "{label}"
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
}

#[component]
fn DetailsTab(detail: CaseFile) -> Element {
    rsx! {
        DetailGrid {
            PartyPanel { heading: "Petitioner Information", party: detail.petitioner.clone() }
            PartyPanel { heading: "Defendant Information", party: detail.defendant.clone() }
        }

        div { class: "case-description",
            h3 { "Case Description" }
            p { "{detail.description}" }
        }

        DetailGrid {
            DetailList {
                DetailItem { label: "Incident Location", value: detail.record.location.clone() }
            }
            DetailList {
                DetailItem { label: "Handling Officer", value: detail.officer.clone() }
            }
            DetailList {
                DetailItem { label: "Priority Level",
                    Badge { variant: BadgeVariant::Warning, "{detail.priority}" }
                }
            }
        }
    }
}

#[component]
fn PartyPanel(heading: String, party: PartyContact) -> Element {
    rsx! {
        div { class: "case-party",
            h3 { "{heading}" }
            DetailList {
                DetailItem { label: "Name", value: party.name }
                DetailItem { label: "Contact", value: party.contact }
                DetailItem { label: "Address", value: party.address }
                DetailItem { label: party.extra_label, value: party.extra_value }
            }
        }
    }
}

#[component]
fn DocumentsTab(detail: CaseFile) -> Element {
    rsx! {
        if detail.documents.is_empty() {
            p { class: "empty-state", "No documents have been attached to this case." }
        }
        div { class: "case-documents",
            for doc in detail.documents.iter() {
                div { key: "{doc.file_name}", class: "case-document",
                    div { class: "case-document-icon",
                        Icon::<LdFileText> { icon: LdFileText, width: 22, height: 22 }
                    }
                    div { class: "case-document-text",
                        span { class: "cell-strong", "{doc.file_name}" }
                        span { class: "muted", "Added {doc.added}" }
                    }
                    Button { variant: ButtonVariant::Ghost,
                        Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                    }
                }
            }
        }
        Button { variant: ButtonVariant::Outline, disabled: detail.documents.is_empty(),
            Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
            "Download All Documents"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_query_selects_known_tabs_only() {
        assert_eq!(initial_tab(Some("timeline")), "timeline");
        assert_eq!(initial_tab(Some("billing")), "details");
        assert_eq!(initial_tab(None), "details");
    }

    #[test]
    fn each_tab_query_gets_its_own_tab_key() {
        let keys: Vec<String> = CASE_TABS
            .iter()
            .map(|(value, _)| initial_tab(Some(value)))
            .collect();
        for (key, (value, _)) in keys.iter().zip(CASE_TABS.iter()) {
            assert_eq!(key, value);
        }
        assert_ne!(initial_tab(None), initial_tab(Some("documents")));
    }
}
