use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdFileText, LdPlus};
use dioxus_free_icons::Icon;
use nyaya_types::{
    AppConfig, CaseField, CaseSortKey, CaseStatus, ListCommand, ListState, RecordStore, ALL_FILTER,
};
use nyaya_ui::{
    Button, ButtonVariant, Card, CardAction, CardContent, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
    DataTableSortColumn, FormSelect, Input, PageActions, PageHeader, PageSubtitle, PageTitle,
    Pagination, SearchBar,
};

use crate::components::CaseStatusBadge;
use crate::format_helpers::sort_indicator;
use crate::routes::Route;

type PetitionList = ListState<CaseField, CaseSortKey>;

#[component]
pub fn Petitions() -> Element {
    let store = use_context::<RecordStore>();
    let config = use_context::<AppConfig>();
    let mut list = use_signal(|| PetitionList::new(config.listing.page_size));

    let mut dispatch = move |command: ListCommand<CaseField, CaseSortKey>| {
        let events = list.write().dispatch(command);
        tracing::debug!(?events, "petition list updated");
    };

    let case_types = store.case_types();
    let page = list.read().apply(store.cases());
    let status_filter = list.read().filter(CaseField::Status).to_string();
    let type_filter = list.read().filter(CaseField::CaseType).to_string();
    let query = list.read().query.clone();
    let columns = CaseSortKey::COLUMNS.len() + 1;

    rsx! {
        div { class: "container",
            PageHeader {
                div {
                    PageTitle { "Petitions" }
                    PageSubtitle { "View and manage all registered petitions" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            navigator().push(Route::NewPetition {});
                        },
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "New Petition"
                    }
                }
            }

            Card {
                CardHeader { CardTitle { "Filters" } }
                CardContent {
                    SearchBar {
                        Input {
                            value: query,
                            placeholder: "Search by case #, name, or location",
                            on_input: move |evt: FormEvent| dispatch(ListCommand::SetQuery(evt.value())),
                        }
                        FormSelect {
                            value: status_filter,
                            onchange: move |evt: Event<FormData>| {
                                dispatch(ListCommand::SetFilter(CaseField::Status, evt.value()));
                            },
                            option { value: ALL_FILTER, "All Statuses" }
                            for status in CaseStatus::ALL {
                                option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                            }
                        }
                        FormSelect {
                            value: type_filter,
                            onchange: move |evt: Event<FormData>| {
                                dispatch(ListCommand::SetFilter(CaseField::CaseType, evt.value()));
                            },
                            option { value: ALL_FILTER, "All Types" }
                            for case_type in case_types.iter() {
                                option { key: "{case_type}", value: "{case_type}", "{case_type}" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| dispatch(ListCommand::ClearFilters),
                            "Clear Filters"
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "All Petitions" }
                    CardAction {
                        Button {
                            variant: ButtonVariant::Outline,
                            Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                            "Export"
                        }
                    }
                }
                CardContent {
                    DataTable {
                        DataTableHeader {
                            for key in CaseSortKey::COLUMNS {
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
                                        Icon::<LdFileText> { icon: LdFileText, width: 40, height: 40 }
                                        p { "No petitions found matching your filters" }
                                    }
                                }
                            }
                            for case in page.data.iter() {
                                DataTableRow { key: "{case.id}",
                                    DataTableCell { span { class: "cell-strong", "{case.case_number}" } }
                                    DataTableCell { "{case.petitioner_name}" }
                                    DataTableCell { "{case.defendant_name}" }
                                    DataTableCell { "{case.filing_date}" }
                                    DataTableCell { "{case.case_type}" }
                                    DataTableCell { CaseStatusBadge { status: case.status } }
                                    DataTableCell { "{case.location}" }
                                    DataTableCell {
                                        Link { to: Route::CaseDetail { id: case.id, tab: None }, class: "row-link", "View" }
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
    }
}
