use nyaya_types::{
    CaseField, CaseRecord, CaseSortKey, CaseStatus, ListCommand, ListState, Listable,
    SortDirection, ALL_FILTER,
};
use pretty_assertions::assert_eq;

use crate::common::test_store;

fn case_list() -> ListState<CaseField, CaseSortKey> {
    ListState::new(10)
}

fn numbers(rows: &[CaseRecord]) -> Vec<&str> {
    rows.iter().map(|c| c.case_number.as_str()).collect()
}

#[tokio::test]
async fn test_twelve_cases_span_two_pages() {
    let store = test_store();
    let mut list = case_list();

    let first = list.apply(store.cases());
    assert_eq!(first.meta.total, 12);
    assert_eq!(first.meta.total_pages, 2);
    assert_eq!(first.data.len(), 10);
    assert!(first.meta.has_next);
    assert!(!first.meta.has_prev);

    list.dispatch(ListCommand::GoToPage(2));
    let second = list.apply(store.cases());
    assert_eq!(numbers(&second.data), vec!["2081-CR-011", "2081-CR-012"]);
    assert!(!second.meta.has_next);
    assert!(second.meta.has_prev);
}

#[tokio::test]
async fn test_page_past_the_end_is_clamped() {
    let store = test_store();
    let mut list = case_list();
    list.dispatch(ListCommand::GoToPage(9));

    let page = list.apply(store.cases());
    assert_eq!(page.meta.page, 2);
    assert_eq!(page.data.len(), 2);
}

#[tokio::test]
async fn test_status_filter_keeps_only_pending() {
    let store = test_store();
    let mut list = case_list();
    list.dispatch(ListCommand::SetFilter(CaseField::Status, "pending".into()));

    let rows = list.filtered(store.cases());
    assert_eq!(
        numbers(&rows),
        vec!["2081-CR-001", "2081-CR-006", "2081-CR-007", "2081-CR-011"]
    );
}

#[tokio::test]
async fn test_all_filter_value_clears_the_filter() {
    let store = test_store();
    let mut list = case_list();
    list.dispatch(ListCommand::SetFilter(CaseField::CaseType, "Theft".into()));
    assert_eq!(list.filtered(store.cases()).len(), 3);

    list.dispatch(ListCommand::SetFilter(CaseField::CaseType, ALL_FILTER.into()));
    assert_eq!(list.filter(CaseField::CaseType), ALL_FILTER);
    assert_eq!(list.filtered(store.cases()).len(), 12);
}

#[tokio::test]
async fn test_query_is_case_insensitive_and_trimmed() {
    let store = test_store();
    let mut list = case_list();
    list.dispatch(ListCommand::SetQuery("  LALITPUR ".into()));

    let rows = list.filtered(store.cases());
    assert_eq!(numbers(&rows), vec!["2081-CR-003", "2081-CR-007"]);
}

#[tokio::test]
async fn test_query_and_filter_combine() {
    let store = test_store();
    let mut list = case_list();
    list.dispatch(ListCommand::SetQuery("kathmandu".into()));
    list.dispatch(ListCommand::SetFilter(CaseField::Status, "investigation".into()));

    let rows = list.filtered(store.cases());
    assert_eq!(
        numbers(&rows),
        vec!["2081-CR-002", "2081-CR-005", "2081-CR-009", "2081-CR-012"]
    );
}

#[tokio::test]
async fn test_no_match_yields_zero_pages() {
    let store = test_store();
    let mut list = case_list();
    list.dispatch(ListCommand::SetQuery("pokhara".into()));

    let page = list.apply(store.cases());
    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 0);
    assert_eq!(page.meta.total_pages, 0);
    assert_eq!(page.meta.page, 1);
}

#[tokio::test]
async fn test_second_toggle_reverses_sort() {
    let store = test_store();
    let mut list = case_list();

    list.dispatch(ListCommand::ToggleSort(CaseSortKey::Petitioner));
    assert_eq!(list.sort_direction(CaseSortKey::Petitioner), Some(SortDirection::Asc));
    let ascending = list.filtered(store.cases());
    assert_eq!(ascending[0].petitioner_name, "Anita Rai");

    list.dispatch(ListCommand::ToggleSort(CaseSortKey::Petitioner));
    assert_eq!(list.sort_direction(CaseSortKey::Petitioner), Some(SortDirection::Desc));
    let descending = list.filtered(store.cases());
    assert_eq!(descending[0].petitioner_name, "Sunita Gurung");

    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[tokio::test]
async fn test_new_sort_column_starts_ascending() {
    let mut list = case_list();
    list.dispatch(ListCommand::ToggleSort(CaseSortKey::Petitioner));
    list.dispatch(ListCommand::ToggleSort(CaseSortKey::Petitioner));
    list.dispatch(ListCommand::ToggleSort(CaseSortKey::FilingDate));

    assert_eq!(list.sort_direction(CaseSortKey::Petitioner), None);
    assert_eq!(list.sort_direction(CaseSortKey::FilingDate), Some(SortDirection::Asc));
}

#[tokio::test]
async fn test_filter_change_returns_to_first_page() {
    let mut list = case_list();
    list.dispatch(ListCommand::GoToPage(2));
    list.dispatch(ListCommand::SetFilter(CaseField::Status, "resolved".into()));
    assert_eq!(list.page, 1);

    list.dispatch(ListCommand::GoToPage(2));
    list.dispatch(ListCommand::ToggleSort(CaseSortKey::Status));
    assert_eq!(list.page, 2);
}

#[tokio::test]
async fn test_clear_filters_restores_everything() {
    let store = test_store();
    let mut list = case_list();
    list.dispatch(ListCommand::SetQuery("giri".into()));
    list.dispatch(ListCommand::SetFilter(CaseField::CaseType, "Fraud".into()));
    assert!(list.filtered(store.cases()).is_empty());

    list.dispatch(ListCommand::ClearFilters);
    assert_eq!(list.query, "");
    assert_eq!(list.filtered(store.cases()).len(), 12);
}

fn contains_query(record: &CaseRecord, needle: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[tokio::test]
async fn test_pages_join_back_into_filtered_rows() {
    let store = test_store();

    for status in [None, Some(CaseStatus::Investigation)] {
        for page_size in 1..=13 {
            for key in CaseSortKey::COLUMNS {
                for direction in [SortDirection::Asc, SortDirection::Desc] {
                    let mut list: ListState<CaseField, CaseSortKey> = ListState::new(page_size);
                    if let Some(status) = status {
                        list.dispatch(ListCommand::SetFilter(
                            CaseField::Status,
                            status.as_str().into(),
                        ));
                    }
                    list.dispatch(ListCommand::ToggleSort(key));
                    if direction == SortDirection::Desc {
                        list.dispatch(ListCommand::ToggleSort(key));
                    }
                    assert_eq!(list.sort_direction(key), Some(direction));

                    let expected = list.filtered(store.cases());
                    let first = list.apply(store.cases());
                    assert_eq!(first.meta.total, expected.len());
                    assert_eq!(first.meta.total_pages, expected.len().div_ceil(page_size));

                    let mut joined = Vec::new();
                    for page in 1..=first.meta.total_pages {
                        list.dispatch(ListCommand::GoToPage(page));
                        let slice = list.apply(store.cases());
                        assert_eq!(slice.meta.page, page);
                        assert!(slice.data.len() <= page_size);
                        joined.extend(slice.data);
                    }
                    assert_eq!(
                        joined, expected,
                        "status {status:?}, page size {page_size}, {key:?} {direction:?}"
                    );
                }
            }
        }
    }
}

#[tokio::test]
async fn test_descending_is_reverse_of_ascending_for_every_column() {
    let store = test_store();
    for key in CaseSortKey::COLUMNS {
        let mut list = case_list();
        list.dispatch(ListCommand::ToggleSort(key));
        let mut ascending = list.filtered(store.cases());
        list.dispatch(ListCommand::ToggleSort(key));
        let descending = list.filtered(store.cases());

        ascending.reverse();
        assert_eq!(descending, ascending, "{key:?}");
    }
}

#[tokio::test]
async fn test_query_results_are_exactly_the_matching_cases() {
    let store = test_store();
    for query in ["ram", "KATH", " giri ", "2081-cr-01", "lalitpur", "sh", "zzz"] {
        let mut list = case_list();
        list.dispatch(ListCommand::SetQuery(query.into()));
        let needle = query.trim().to_lowercase();
        let rows = list.filtered(store.cases());

        for row in &rows {
            assert!(contains_query(row, &needle), "{} for {query:?}", row.case_number);
        }
        let expected = store
            .cases()
            .iter()
            .filter(|c| contains_query(c, &needle))
            .count();
        assert_eq!(rows.len(), expected, "{query:?}");
    }
}

#[tokio::test]
async fn test_status_filter_returns_only_that_status() {
    let store = test_store();
    for status in CaseStatus::ALL {
        let mut list = case_list();
        list.dispatch(ListCommand::SetFilter(CaseField::Status, status.as_str().into()));
        let rows = list.filtered(store.cases());

        assert!(rows.iter().all(|c| c.status == status));
        let expected = store.cases().iter().filter(|c| c.status == status).count();
        assert_eq!(rows.len(), expected, "{status:?}");
    }
}
