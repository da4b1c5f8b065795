use nyaya_types::RelatedCase;
use pretty_assertions::assert_eq;

use crate::common::test_store;

fn related(name: &str) -> Vec<RelatedCase> {
    let store = test_store();
    let person = store
        .people()
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("{name} missing from sample people"));
    store.related_cases_for(person)
}

fn summary(rows: &[RelatedCase]) -> Vec<(&str, &str)> {
    rows.iter()
        .map(|r| (r.case_number.as_str(), r.role.as_str()))
        .collect()
}

#[tokio::test]
async fn test_petitioner_is_linked_once() {
    assert_eq!(
        summary(&related("Ramesh Sharma")),
        vec![("2081-CR-001", "Complainant")]
    );
}

#[tokio::test]
async fn test_defendant_role_comes_from_case() {
    assert_eq!(
        summary(&related("Nirmala Giri")),
        vec![("2081-CR-005", "Defendant")]
    );
}

#[tokio::test]
async fn test_event_participants_are_linked_by_type() {
    assert_eq!(
        summary(&related("Prakash Thapa")),
        vec![("2081-CR-001", "Lawyer")]
    );
    assert_eq!(
        summary(&related("Sunil Maharjan")),
        vec![("2081-CR-003", "Witness")]
    );
}

#[tokio::test]
async fn test_unlinked_person_has_no_cases() {
    assert!(related("Binita Shrestha").is_empty());
}
