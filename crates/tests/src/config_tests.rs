use nyaya_types::{AppConfig, AppErrorKind};
use pretty_assertions::assert_eq;
use std::time::Duration;

use crate::common::april;

#[tokio::test]
async fn test_partial_file_keeps_other_defaults() {
    let config = AppConfig::from_toml_str(
        r#"
        [features]
        two_factor = false

        [calendar]
        today = "2025-04-22"
        "#,
    )
    .unwrap();

    assert!(!config.features.two_factor);
    assert_eq!(config.calendar.today, Some(april(22)));
    assert_eq!(config.listing.page_size, 10);
    assert_eq!(config.simulation.login_delay(), Duration::from_millis(1500));
}

#[tokio::test]
async fn test_zero_page_size_is_raised_to_one() {
    let config = AppConfig::from_toml_str("[listing]\npage_size = 0\n").unwrap();
    assert_eq!(config.listing.page_size, 1);
}

#[tokio::test]
async fn test_disabled_simulation_has_no_delay() {
    let config = AppConfig::from_toml_str("[simulation]\nenabled = false\n").unwrap();
    assert_eq!(config.simulation.save_delay(), Duration::ZERO);
    assert_eq!(config.simulation.search_delay(), Duration::ZERO);
}

#[tokio::test]
async fn test_bad_file_is_rejected_then_defaulted() {
    let source = "[listing]\npage_size = \"ten\"\n";
    let err = AppConfig::from_toml_str(source).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(AppConfig::from_toml_or_default(source), AppConfig::default());
}
