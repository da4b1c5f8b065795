use nyaya_types::{
    run_search, save_event, save_person, save_settings, submit_login, ActionStatus, AppErrorKind,
    EventDraft, InstantDelay, LoginForm, PersonDraft, SearchTab, SettingsSection,
};
use pretty_assertions::assert_eq;

use crate::common::{test_config, test_store, FaultyDelay};

const FRIENDLY: &str = "Something went wrong. Please try again.";

#[tokio::test]
async fn test_failed_timer_surfaces_as_failed_status() {
    let config = test_config();
    let mut status: ActionStatus<()> = ActionStatus::Idle;
    assert!(status.begin());

    let result = save_person(&FaultyDelay, &config, PersonDraft::default()).await;
    assert_eq!(result.as_ref().unwrap_err().kind, AppErrorKind::InternalError);

    status.finish(result);
    assert_eq!(status, ActionStatus::Failed(FRIENDLY.to_string()));
    assert_eq!(status.error(), Some(FRIENDLY));
    assert!(status.begin());
}

#[tokio::test]
async fn test_every_handler_propagates_timer_errors() {
    let config = test_config();
    let store = test_store();

    assert!(submit_login(&FaultyDelay, &config, &LoginForm::default()).await.is_err());
    assert!(save_event(&FaultyDelay, &config, EventDraft::default()).await.is_err());
    assert!(save_settings(&FaultyDelay, &config, SettingsSection::Account).await.is_err());
    assert!(
        run_search(&FaultyDelay, &config, store.search_index(), "theft", SearchTab::All)
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_blank_search_never_waits() {
    let store = test_store();
    let outcome = run_search(&FaultyDelay, &test_config(), store.search_index(), "", SearchTab::Cases)
        .await
        .unwrap();
    assert_eq!(outcome, None);
}

#[tokio::test]
async fn test_dismissing_a_pending_save_is_refused() {
    let config = test_config();
    let mut status: ActionStatus<()> = ActionStatus::Idle;
    assert!(status.begin());

    // Cancel while the save is in flight, then try to start another.
    assert!(!status.reset());
    assert!(!status.begin());
    assert!(status.is_pending());

    let result = save_person(&InstantDelay, &config, PersonDraft::default()).await;
    status.finish(result);
    assert_eq!(status.completed(), Some(&()));

    assert!(status.reset());
    assert_eq!(status, ActionStatus::Idle);
    assert!(status.begin());
}

#[tokio::test]
async fn test_failed_save_can_be_dismissed() {
    let mut status: ActionStatus<()> = ActionStatus::Idle;
    assert!(status.begin());
    status.finish(save_person(&FaultyDelay, &test_config(), PersonDraft::default()).await);

    assert!(status.reset());
    assert_eq!(status.error(), None);
}
