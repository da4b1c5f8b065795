use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdFileText, LdFolder, LdSearch, LdUsers};
use dioxus_free_icons::Icon;
use nyaya_types::{
    run_search, ActionStatus, AppConfig, RecordStore, SearchResult, SearchResultKind,
    SearchState, SearchTab, SearchTarget, SearchView,
};
use nyaya_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, FilterTab,
    FilterTabs, Form, Input, PageHeader, PageSubtitle, PageTitle, SearchBar,
};

use crate::components::CaseStatusBadge;
use crate::delay::PlatformDelay;
use crate::format_helpers::status_badge_variant;
use crate::routes::Route;

/// Route for a result's link.
fn target_route(target: &SearchTarget) -> Route {
    match target {
        SearchTarget::Case { case_id, tab } => Route::CaseDetail {
            id: *case_id,
            tab: tab.clone(),
        },
        SearchTarget::Person { person_id } => Route::People {
            id: Some(person_id.to_string()),
        },
    }
}

/// Run the current query and tab. Blank queries and overlapping runs are
/// ignored. Reads use `peek` so calling this from an effect does not
/// subscribe it to the search state.
fn start_search(
    mut search: Signal<SearchState>,
    delay: PlatformDelay,
    config: AppConfig,
    index: Vec<SearchResult>,
) {
    let (query, tab) = {
        let state = search.peek();
        (state.query.trim().to_string(), state.tab)
    };
    if query.is_empty() {
        tracing::debug!("blank search ignored");
        return;
    }
    if !search.write().status.begin() {
        return;
    }

    spawn(async move {
        let result = run_search(&delay, &config, &index, &query, tab).await;
        let mut state = search.write();
        match result {
            Ok(Some(rows)) => {
                state.last_query = query;
                state.status.finish(Ok(rows));
            }
            Ok(None) => state.status = ActionStatus::Idle,
            Err(err) => {
                tracing::warn!(error = %err, "search failed");
                state.status.finish(Err(err));
            }
        }
    });
}

#[component]
pub fn Search(q: Option<String>) -> Element {
    let store = use_context::<RecordStore>();
    let config = use_context::<AppConfig>();
    let delay = use_context::<PlatformDelay>();
    let mut search = use_signal(SearchState::default);

    let index = store.search_index().to_vec();

    {
        let config = config.clone();
        let index = index.clone();
        use_effect(use_reactive(&q, move |q| {
            let Some(query) = q.filter(|query| !query.trim().is_empty()) else {
                return;
            };
            search.write().query = query;
            start_search(search, delay, config.clone(), index.clone());
        }));
    }

    let submit_config = config.clone();
    let submit_index = index.clone();
    let state = search.read().clone();
    let related: Vec<u32> = state.related_case_ids();
    let pending = state.status.is_pending();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search.css") }

        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Advanced Search" }
                    PageSubtitle { "Search across cases, people, and documents" }
                }
            }

            Card {
                CardContent {
                    FilterTabs {
                        for tab in SearchTab::ALL {
                            {
                                let config = config.clone();
                                let index = index.clone();
                                rsx! {
                                    FilterTab {
                                        key: "{tab.as_str()}",
                                        active: state.tab == tab,
                                        disabled: pending,
                                        onclick: move |_| {
                                            let rerun = search.write().select_tab(tab);
                                            if rerun {
                                                start_search(search, delay, config.clone(), index.clone());
                                            }
                                        },
                                        "{tab.label()}"
                                    }
                                }
                            }
                        }
                    }

                    Form {
                        class: "search-form",
                        onsubmit: move |_| start_search(search, delay, submit_config.clone(), submit_index.clone()),
                        SearchBar {
                            Input {
                                value: state.query.clone(),
                                placeholder: "Search by case number, name, location or keyword...",
                                on_input: move |evt: FormEvent| search.write().query = evt.value(),
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                button_type: "submit",
                                disabled: pending,
                                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                                "Search"
                            }
                        }
                    }

                    if let Some(line) = state.status_line() {
                        p { class: "muted search-status", "{line}" }
                    }

                    match state.view() {
                        SearchView::Idle => rsx! {
                            div { class: "empty-state",
                                Icon::<LdSearch> { icon: LdSearch, width: 48, height: 48 }
                                h3 { "Start searching" }
                                p { "Enter keywords to search across all cases, people, and documents in the system" }
                            }
                        },
                        SearchView::Loading => rsx! {
                            div { class: "empty-state",
                                div { class: "search-spinner" }
                                p { "Searching..." }
                            }
                        },
                        SearchView::Empty => rsx! {
                            div { class: "empty-state",
                                Icon::<LdFileText> { icon: LdFileText, width: 48, height: 48 }
                                h3 { "No results found" }
                                p { "We couldn't find any matches for \"{state.last_query}\"." }
                                p { "Try using different keywords or broadening your search." }
                            }
                        },
                        SearchView::Failed(message) => rsx! {
                            div { class: "form-error", "{message}" }
                        },
                        SearchView::Results(rows) => rsx! {
                            div { class: "search-results",
                                for result in rows.iter() {
                                    ResultCard { key: "{result.id}", result: result.clone() }
                                }
                            }
                        },
                    }
                }
            }

            if !related.is_empty() {
                Card {
                    CardHeader { CardTitle { "Related Cases" } }
                    CardContent {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Case #" }
                                DataTableColumn { "Petitioner" }
                                DataTableColumn { "Defendant" }
                                DataTableColumn { "Date Filed" }
                                DataTableColumn { "Type" }
                                DataTableColumn { "Status" }
                                DataTableColumn { "Actions" }
                            }
                            DataTableBody {
                                for id in related {
                                    match store.find_case(id) {
                                        Some(case) => rsx! {
                                            DataTableRow { key: "{id}",
                                                DataTableCell { span { class: "cell-strong", "{case.case_number}" } }
                                                DataTableCell { "{case.petitioner_name}" }
                                                DataTableCell { "{case.defendant_name}" }
                                                DataTableCell { "{case.filing_date}" }
                                                DataTableCell { "{case.case_type}" }
                                                DataTableCell { CaseStatusBadge { status: case.status } }
                                                DataTableCell {
                                                    Link { to: Route::CaseDetail { id, tab: None }, class: "row-link", "View" }
                                                }
                                            }
                                        },
                                        None => rsx! {
                                            DataTableRow { key: "{id}",
                                                DataTableCell { span { class: "cell-strong", "#{id}" } }
                                                DataTableCell { span { class: "muted", "Record unavailable" } }
                                                DataTableCell {}
                                                DataTableCell {}
                                                DataTableCell {}
                                                DataTableCell {}
                                                DataTableCell {}
                                            }
                                        },
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
fn ResultCard(result: SearchResult) -> Element {
    let route = target_route(&result.target);

    rsx! {
        div { class: "search-result",
            span { class: "search-result-icon",
                match result.kind {
                    SearchResultKind::Case => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 } },
                    SearchResultKind::Person => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
                    SearchResultKind::Document => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 20, height: 20 } },
                }
            }
            div { class: "search-result-body",
                div { class: "search-result-title",
                    Link { to: route, class: "row-link", "{result.title}" }
                    Badge { variant: status_badge_variant(result.kind.tone()), "{result.kind.label()}" }
                }
                p { class: "search-result-description", "{result.description}" }
                div { class: "muted search-result-meta",
                    Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                    span { "{result.date}" }
                    span { "•" }
                    span { "Relevance: {result.relevance}%" }
                }
            }
        }
    }
}
