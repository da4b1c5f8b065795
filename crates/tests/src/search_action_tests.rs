use nyaya_types::{
    run_search, ActionStatus, InstantDelay, SearchResult, SearchState, SearchTab, SearchTarget,
    SearchView,
};
use pretty_assertions::assert_eq;

use crate::common::{test_config, test_store};

fn titles(rows: &[SearchResult]) -> Vec<&str> {
    rows.iter().map(|r| r.title.as_str()).collect()
}

#[tokio::test]
async fn test_ramesh_finds_case_and_person() {
    let store = test_store();
    let rows = run_search(
        &InstantDelay,
        &test_config(),
        store.search_index(),
        "Ramesh",
        SearchTab::All,
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(titles(&rows), vec!["Case #2081-CR-001", "Ramesh Sharma"]);
    assert_eq!(rows[1].target, SearchTarget::Person { person_id: 1 });
}

#[tokio::test]
async fn test_blank_query_is_a_no_op() {
    let store = test_store();
    let outcome = run_search(
        &InstantDelay,
        &test_config(),
        store.search_index(),
        "   ",
        SearchTab::All,
    )
    .await
    .unwrap();

    assert_eq!(outcome, None);
}

#[tokio::test]
async fn test_tab_narrows_by_kind() {
    let store = test_store();
    let config = test_config();

    let cases = run_search(&InstantDelay, &config, store.search_index(), "babarmahal", SearchTab::Cases)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(titles(&cases), vec!["Case #2081-CR-001", "Case #2080-CR-112"]);

    let documents = run_search(
        &InstantDelay,
        &config,
        store.search_index(),
        "babarmahal",
        SearchTab::Documents,
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(titles(&documents), vec!["Land_Survey_Report_Babarmahal.pdf"]);

    let people = run_search(&InstantDelay, &config, store.search_index(), "babarmahal", SearchTab::People)
        .await
        .unwrap()
        .unwrap();
    assert!(people.is_empty());
}

#[tokio::test]
async fn test_state_moves_through_loading_to_results() {
    let store = test_store();
    let mut state = SearchState {
        query: "babarmahal".into(),
        ..Default::default()
    };
    assert_eq!(state.view(), SearchView::Idle);

    assert!(state.status.begin());
    assert_eq!(state.view(), SearchView::Loading);
    assert_eq!(state.status_line(), None);

    let outcome = run_search(
        &InstantDelay,
        &test_config(),
        store.search_index(),
        &state.query,
        state.tab,
    )
    .await
    .unwrap();
    state.last_query = state.query.clone();
    state.status.finish(Ok(outcome.unwrap_or_default()));

    assert!(matches!(state.view(), SearchView::Results(rows) if rows.len() == 3));
    assert_eq!(
        state.status_line().as_deref(),
        Some("3 results found for \"babarmahal\"")
    );
}

#[tokio::test]
async fn test_related_cases_skip_unknown_records() {
    let store = test_store();
    let rows = run_search(
        &InstantDelay,
        &test_config(),
        store.search_index(),
        "babarmahal",
        SearchTab::All,
    )
    .await
    .unwrap()
    .unwrap();
    let state = SearchState {
        status: ActionStatus::Completed(rows),
        ..Default::default()
    };

    let ids = state.related_case_ids();
    assert_eq!(ids, vec![1, 20]);
    assert!(store.find_case(1).is_some());
    assert!(store.find_case(20).is_none());
}

#[tokio::test]
async fn test_nothing_found_shows_empty_view() {
    let store = test_store();
    let rows = run_search(
        &InstantDelay,
        &test_config(),
        store.search_index(),
        "pokhara",
        SearchTab::All,
    )
    .await
    .unwrap()
    .unwrap();
    let state = SearchState {
        status: ActionStatus::Completed(rows),
        last_query: "pokhara".into(),
        ..Default::default()
    };

    assert_eq!(state.view(), SearchView::Empty);
    assert_eq!(
        state.status_line().as_deref(),
        Some("0 results found for \"pokhara\"")
    );
}

#[tokio::test]
async fn test_tab_switch_during_search_keeps_running_tab() {
    let store = test_store();
    let mut state = SearchState {
        query: "babarmahal".into(),
        ..Default::default()
    };

    assert!(state.status.begin());
    assert!(!state.select_tab(SearchTab::Documents));
    assert_eq!(state.tab, SearchTab::All);

    let rows = run_search(
        &InstantDelay,
        &test_config(),
        store.search_index(),
        &state.query,
        state.tab,
    )
    .await
    .unwrap()
    .unwrap_or_default();
    state.last_query = state.query.clone();
    state.status.finish(Ok(rows));
    assert!(matches!(state.view(), SearchView::Results(rows) if rows.len() == 3));

    assert!(state.select_tab(SearchTab::Documents));
    let rows = run_search(
        &InstantDelay,
        &test_config(),
        store.search_index(),
        &state.last_query,
        state.tab,
    )
    .await
    .unwrap()
    .unwrap_or_default();
    assert_eq!(titles(&rows), vec!["Land_Survey_Report_Babarmahal.pdf"]);
}
