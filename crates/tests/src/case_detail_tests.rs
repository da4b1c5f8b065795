use nyaya_types::{AppErrorKind, CaseStatus};
use pretty_assertions::assert_eq;

use crate::common::test_store;

#[tokio::test]
async fn test_recorded_file_is_returned_for_case_one() {
    let detail = test_store().case_detail(1).unwrap();
    assert_eq!(detail.record.case_number, "2081-CR-001");
    assert_eq!(detail.record.status, CaseStatus::Investigation);
    assert_eq!(detail.petitioner.contact, "+977 9812345678");
    assert_eq!(detail.documents.len(), 4);
    assert_eq!(detail.timeline[3].title, "Awaiting Additional Evidence");
}

#[tokio::test]
async fn test_generated_file_mirrors_record() {
    let store = test_store();
    let detail = store.case_detail(7).unwrap();
    let record = store.find_case(7).unwrap();

    assert_eq!(&detail.record, record);
    assert_eq!(detail.petitioner.name, "Rajendra Malla");
    assert_eq!(detail.petitioner.address, "Patan, Lalitpur");
    assert!(detail.documents.is_empty());
}

#[tokio::test]
async fn test_missing_case_reports_not_found() {
    let err = test_store().case_detail(0).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(err.friendly_message(), "Case 0 not found");
}

#[tokio::test]
async fn test_recent_cases_caps_at_store_size() {
    let store = test_store();
    assert_eq!(store.recent_cases(5).len(), 5);
    assert_eq!(store.recent_cases(5)[0].case_number, "2081-CR-001");
    assert_eq!(store.recent_cases(50).len(), 12);
}
