//! Simulated server actions.
//!
//! Nothing here touches the network or storage. Each handler waits on a
//! [`DelaySource`] for the configured time and then returns the state the
//! page should move to.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

use crate::calendar::EventDraft;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::listing::{ListCommand, ListState, Unsorted, ALL_FILTER};
use crate::login::{LoginForm, LoginOutcome, LoginStage};
use crate::person::PersonDraft;
use crate::petition::{PetitionDraft, PetitionReceipt};
use crate::search::{SearchField, SearchResult, SearchTab};
use crate::settings::SettingsSection;

/// Timer used by the handlers. Platform timers never fail.
pub trait DelaySource {
    fn wait(&self, duration: Duration) -> impl Future<Output = Result<(), AppError>>;
}

/// Resolves immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantDelay;

impl DelaySource for InstantDelay {
    async fn wait(&self, _duration: Duration) -> Result<(), AppError> {
        Ok(())
    }
}

/// Progress of one user-triggered action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum ActionStatus<T> {
    #[default]
    Idle,
    Pending,
    Completed(T),
    Failed(String),
}

impl<T> ActionStatus<T> {
    /// Move to `Pending`. Returns false, leaving the state alone, if an
    /// action is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = ActionStatus::Pending;
        true
    }

    /// Back to `Idle` for a fresh form. Refused while an action is in flight,
    /// so dismissing a dialog cannot start a second submission.
    pub fn reset(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = ActionStatus::Idle;
        true
    }

    pub fn finish(&mut self, result: Result<T, AppError>) {
        *self = match result {
            Ok(value) => ActionStatus::Completed(value),
            Err(err) => ActionStatus::Failed(err.friendly_message()),
        };
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ActionStatus::Pending)
    }

    pub fn completed(&self) -> Option<&T> {
        match self {
            ActionStatus::Completed(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ActionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

async fn simulate<D: DelaySource>(
    delay: &D,
    action: &'static str,
    duration: Duration,
) -> Result<(), AppError> {
    let delay_ms = duration.as_millis() as u64;
    tracing::debug!(action, delay_ms, "simulated action started");
    delay.wait(duration).await?;
    tracing::debug!(action, delay_ms, "simulated action finished");
    Ok(())
}

/// Sign-in. With two-factor enabled the first call only sends the code.
pub async fn submit_login<D: DelaySource>(
    delay: &D,
    config: &AppConfig,
    form: &LoginForm,
) -> Result<LoginOutcome, AppError> {
    simulate(delay, "submit_login", config.simulation.login_delay()).await?;

    if config.features.two_factor && form.stage == LoginStage::Credentials {
        tracing::info!(action = "submit_login", "verification code sent");
        return Ok(LoginOutcome::OtpSent);
    }

    let user = form.display_name();
    tracing::info!(action = "submit_login", user = %user, "signed in");
    Ok(LoginOutcome::SignedIn { user })
}

pub async fn save_person<D: DelaySource>(
    delay: &D,
    config: &AppConfig,
    draft: PersonDraft,
) -> Result<(), AppError> {
    simulate(delay, "save_person", config.simulation.save_delay()).await?;
    tracing::info!(
        action = "save_person",
        name = %draft.name,
        person_type = draft.person_type.map(|t| t.as_str()).unwrap_or("unset"),
        "person draft discarded"
    );
    Ok(())
}

pub async fn save_event<D: DelaySource>(
    delay: &D,
    config: &AppConfig,
    draft: EventDraft,
) -> Result<(), AppError> {
    simulate(delay, "save_event", config.simulation.save_delay()).await?;
    tracing::info!(
        action = "save_event",
        title = %draft.title,
        date = %draft.date,
        related_case = draft.related_case.as_deref().unwrap_or("none"),
        "event draft discarded"
    );
    Ok(())
}

/// Search the sample index. A blank query returns `None` without waiting.
pub async fn run_search<D: DelaySource>(
    delay: &D,
    config: &AppConfig,
    index: &[SearchResult],
    query: &str,
    tab: SearchTab,
) -> Result<Option<Vec<SearchResult>>, AppError> {
    if query.trim().is_empty() {
        return Ok(None);
    }
    simulate(delay, "run_search", config.simulation.search_delay()).await?;

    let mut state: ListState<SearchField, Unsorted> = ListState::new(index.len().max(1));
    state.dispatch(ListCommand::SetQuery(query.to_string()));
    state.dispatch(ListCommand::SetFilter(
        SearchField::Kind,
        tab.kind().map(|k| k.as_str()).unwrap_or(ALL_FILTER).to_string(),
    ));
    let results = state.filtered(index);

    tracing::debug!(action = "run_search", query, hits = results.len(), "search complete");
    Ok(Some(results))
}

pub async fn save_settings<D: DelaySource>(
    delay: &D,
    config: &AppConfig,
    section: SettingsSection,
) -> Result<SettingsSection, AppError> {
    simulate(delay, "save_settings", config.simulation.save_delay()).await?;
    tracing::info!(action = "save_settings", section = section.as_str(), "settings saved");
    Ok(section)
}

pub async fn submit_petition<D: DelaySource>(
    delay: &D,
    config: &AppConfig,
    draft: PetitionDraft,
) -> Result<PetitionReceipt, AppError> {
    simulate(delay, "submit_petition", config.simulation.save_delay()).await?;
    let receipt = PetitionReceipt::new(&draft);
    tracing::info!(
        action = "submit_petition",
        reference = %receipt.reference,
        case_type = %draft.case_type,
        "petition submitted"
    );
    Ok(receipt)
}

/// "Save Draft" on the wizard. Drafts are only logged.
pub fn save_petition_draft(draft: &PetitionDraft) {
    tracing::info!(
        action = "save_petition_draft",
        complainant = %draft.complainant.name_en,
        case_type = %draft.case_type,
        "petition draft discarded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_refuses_while_pending() {
        let mut status: ActionStatus<()> = ActionStatus::Idle;
        assert!(status.begin());
        assert!(status.is_pending());
        assert!(!status.begin());
        status.finish(Ok(()));
        assert_eq!(status.completed(), Some(&()));
        assert!(status.begin());
    }

    #[test]
    fn reset_waits_for_pending_action() {
        let mut status: ActionStatus<()> = ActionStatus::Idle;
        assert!(status.begin());
        assert!(!status.reset());
        assert!(status.is_pending());

        status.finish(Ok(()));
        assert!(status.reset());
        assert_eq!(status, ActionStatus::Idle);
    }

    #[test]
    fn failure_keeps_friendly_message() {
        let mut status: ActionStatus<u32> = ActionStatus::Pending;
        status.finish(Err(AppError::bad_request("query too long")));
        assert_eq!(status.error(), Some("query too long"));
        assert_eq!(status.completed(), None);
    }

    #[tokio::test]
    async fn instant_delay_resolves() {
        assert_eq!(InstantDelay.wait(Duration::from_secs(60)).await, Ok(()));
    }

    #[tokio::test]
    async fn login_without_two_factor_signs_in_directly() {
        let mut config = AppConfig::default();
        config.features.two_factor = false;
        let form = LoginForm {
            email: "ram@example.gov.np".into(),
            ..Default::default()
        };
        let outcome = submit_login(&InstantDelay, &config, &form).await.unwrap();
        assert_eq!(outcome, LoginOutcome::SignedIn { user: "ram".into() });
    }

    #[tokio::test]
    async fn settings_save_echoes_section() {
        let saved = save_settings(&InstantDelay, &AppConfig::default(), SettingsSection::Security)
            .await
            .unwrap();
        assert_eq!(saved, SettingsSection::Security);
    }
}
