mod add_person;
mod profile;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdFileText, LdPlus, LdUsers, LdX};
use dioxus_free_icons::Icon;
use nyaya_types::{
    AppConfig, ListCommand, ListState, PersonField, PersonSortKey, PersonType, RecordStore,
    ALL_FILTER,
};
use nyaya_ui::{
    Avatar, AvatarFallback, Badge, Button, ButtonVariant, Card, CardContent, CardHeader,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, DataTableSortColumn, FilterTab, FilterTabs, Input, PageActions, PageHeader,
    PageSubtitle, PageTitle, Pagination, SearchBar,
};

use crate::format_helpers::{sort_indicator, status_badge_variant};
use crate::routes::Route;
use add_person::AddPersonSheet;
use profile::PersonProfileSheet;

type PeopleList = ListState<PersonField, PersonSortKey>;

/// Person registry. `?id=` opens that person's profile.
#[component]
pub fn People(id: Option<String>) -> Element {
    let store = use_context::<RecordStore>();
    let config = use_context::<AppConfig>();
    let mut list = use_signal(|| PeopleList::new(config.listing.page_size));
    let mut adding = use_signal(|| false);

    let mut dispatch = move |command: ListCommand<PersonField, PersonSortKey>| {
        let events = list.write().dispatch(command);
        tracing::debug!(?events, "people list updated");
    };

    let selected = id.as_deref().and_then(|raw| {
        let person = raw
            .parse::<u32>()
            .ok()
            .and_then(|pid| store.find_person(pid))
            .cloned();
        if person.is_none() {
            tracing::debug!(id = raw, "profile requested for unknown person");
        }
        person
    });

    let page = list.read().apply(store.people());
    let type_filter = list.read().filter(PersonField::Type).to_string();
    let query = list.read().query.clone();
    let columns = PersonSortKey::COLUMNS.len() + 2;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./people.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "People" }
                    PageSubtitle { "Manage complainants, defendants, witnesses, and legal representatives" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| adding.set(true),
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add Person"
                    }
                }
            }

            Card {
                CardHeader { class: "people-toolbar",
                    FilterTabs {
                        FilterTab {
                            active: type_filter == ALL_FILTER,
                            onclick: move |_| dispatch(ListCommand::SetFilter(PersonField::Type, ALL_FILTER.to_string())),
                            "All"
                        }
                        for kind in PersonType::ALL {
                            FilterTab {
                                key: "{kind.as_str()}",
                                active: type_filter == kind.as_str(),
                                onclick: move |_| dispatch(ListCommand::SetFilter(PersonField::Type, kind.as_str().to_string())),
                                "{kind.tab_label()}"
                            }
                        }
                    }
                    SearchBar {
                        Input {
                            value: query,
                            placeholder: "Search people...",
                            on_input: move |evt: FormEvent| dispatch(ListCommand::SetQuery(evt.value())),
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            aria_label: "Clear search",
                            onclick: move |_| dispatch(ListCommand::SetQuery(String::new())),
                            Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                        }
                    }
                }
                CardContent {
                    DataTable {
                        DataTableHeader {
                            for key in PersonSortKey::COLUMNS[..2].iter().copied() {
                                DataTableSortColumn {
                                    key: "{key.as_str()}",
                                    sort: sort_indicator(list.read().sort_direction(key)),
                                    on_sort: move |_| dispatch(ListCommand::ToggleSort(key)),
                                    "{key.label()}"
                                }
                            }
                            DataTableColumn { "Contact" }
                            for key in PersonSortKey::COLUMNS[2..].iter().copied() {
                                DataTableSortColumn {
                                    key: "{key.as_str()}",
                                    sort: sort_indicator(list.read().sort_direction(key)),
                                    on_sort: move |_| dispatch(ListCommand::ToggleSort(key)),
                                    "{key.label()}"
                                }
                            }
                            DataTableColumn { "Actions" }
                        }
                        DataTableBody {
                            if page.data.is_empty() {
                                DataTableEmpty { colspan: columns,
                                    div { class: "empty-state",
                                        Icon::<LdUsers> { icon: LdUsers, width: 40, height: 40 }
                                        p { "No people found matching your criteria" }
                                    }
                                }
                            }
                            for person in page.data.iter() {
                                {
                                    let pid = person.id;
                                    let contact = if person.contact.is_empty() { "N/A".to_string() } else { person.contact.clone() };
                                    rsx! {
                                        DataTableRow { key: "{pid}",
                                            onclick: move |_| {
                                                navigator().push(Route::People { id: Some(pid.to_string()) });
                                            },
                                            DataTableCell {
                                                div { class: "person-cell",
                                                    Avatar { AvatarFallback { "{person.initials()}" } }
                                                    div {
                                                        div { class: "cell-strong", "{person.name}" }
                                                        if let Some(nepali) = &person.nepali_name {
                                                            div { class: "muted nepali-text person-cell-sub", "{nepali}" }
                                                        }
                                                    }
                                                }
                                            }
                                            DataTableCell {
                                                Badge { variant: status_badge_variant(person.person_type.tone()),
                                                    "{person.person_type.label()}"
                                                }
                                            }
                                            DataTableCell { "{contact}" }
                                            DataTableCell { "{person.district}" }
                                            DataTableCell {
                                                span { class: "icon-cell",
                                                    Icon::<LdFileText> { icon: LdFileText, width: 14, height: 14 }
                                                    "{person.related_cases}"
                                                }
                                            }
                                            DataTableCell {
                                                span { class: "icon-cell",
                                                    Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                                                    "{person.last_activity}"
                                                }
                                            }
                                            DataTableCell {
                                                Button { variant: ButtonVariant::Ghost, "View" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    Pagination {
                        page: page.meta.page,
                        total_pages: page.meta.total_pages,
                        on_change: move |p: usize| dispatch(ListCommand::GoToPage(p)),
                    }
                }
            }
        }

        if let Some(person) = selected {
            PersonProfileSheet {
                person,
                on_close: move |_| {
                    navigator().push(Route::People { id: None });
                },
            }
        }

        AddPersonSheet {
            open: adding(),
            on_close: move |_| adding.set(false),
        }
    }
}
