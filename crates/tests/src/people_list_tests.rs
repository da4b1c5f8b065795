use nyaya_types::{
    ListCommand, ListState, Listable, Person, PersonField, PersonSortKey, PersonType,
};
use pretty_assertions::assert_eq;

use crate::common::test_store;

fn names(rows: &[Person]) -> Vec<&str> {
    rows.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn test_lawyer_tab_lists_both_advocates() {
    let store = test_store();
    let mut list: ListState<PersonField, PersonSortKey> = ListState::new(10);
    list.dispatch(ListCommand::SetFilter(
        PersonField::Type,
        PersonType::Lawyer.as_str().into(),
    ));

    assert_eq!(
        names(&list.filtered(store.people())),
        vec!["Binita Shrestha", "Prakash Thapa"]
    );
}

#[tokio::test]
async fn test_search_matches_nepali_name() {
    let store = test_store();
    let mut list: ListState<PersonField, PersonSortKey> = ListState::new(10);
    list.dispatch(ListCommand::SetQuery("सीता".into()));

    assert_eq!(names(&list.filtered(store.people())), vec!["Sita Tamang"]);
}

#[tokio::test]
async fn test_search_matches_id_number() {
    let store = test_store();
    let mut list: ListState<PersonField, PersonSortKey> = ListState::new(10);
    list.dispatch(ListCommand::SetQuery("L-12345".into()));

    assert_eq!(names(&list.filtered(store.people())), vec!["Prakash Thapa"]);
}

#[tokio::test]
async fn test_sort_by_case_count_descending() {
    let store = test_store();
    let mut list: ListState<PersonField, PersonSortKey> = ListState::new(10);
    list.dispatch(ListCommand::ToggleSort(PersonSortKey::Cases));
    list.dispatch(ListCommand::ToggleSort(PersonSortKey::Cases));

    let rows = list.filtered(store.people());
    assert_eq!(rows[0].name, "Prakash Thapa");
    assert_eq!(rows[1].name, "Binita Shrestha");
}

#[tokio::test]
async fn test_witness_filter_with_district_query() {
    let store = test_store();
    let mut list: ListState<PersonField, PersonSortKey> = ListState::new(10);
    list.dispatch(ListCommand::SetFilter(PersonField::Type, "witness".into()));
    list.dispatch(ListCommand::SetQuery("lalitpur".into()));

    assert_eq!(names(&list.filtered(store.people())), vec!["Sarita Gurung"]);
}

#[tokio::test]
async fn test_query_results_are_exactly_the_matching_people() {
    let store = test_store();
    for query in ["sharma", "SHRESTHA", "श्रेष्ठ", "+977 98", " patan ", "L-1", "nobody"] {
        let mut list: ListState<PersonField, PersonSortKey> = ListState::new(10);
        list.dispatch(ListCommand::SetQuery(query.into()));
        let needle = query.trim().to_lowercase();
        let matches = |p: &Person| {
            p.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        };

        let rows = list.filtered(store.people());
        assert!(rows.iter().all(matches), "{query:?}");
        assert_eq!(
            rows.len(),
            store.people().iter().filter(|&p| matches(p)).count(),
            "{query:?}"
        );
    }
}

#[tokio::test]
async fn test_type_tabs_partition_the_registry() {
    let store = test_store();
    let mut seen = 0;
    for kind in PersonType::ALL {
        let mut list: ListState<PersonField, PersonSortKey> = ListState::new(10);
        list.dispatch(ListCommand::SetFilter(PersonField::Type, kind.as_str().into()));
        let rows = list.filtered(store.people());

        assert!(rows.iter().all(|p| p.person_type == kind), "{kind:?}");
        seen += rows.len();
    }
    assert_eq!(seen, store.people().len());
}
