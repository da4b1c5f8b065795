use std::time::Duration;

use chrono::NaiveDate;
use nyaya_types::{AppConfig, AppError, DelaySource, RecordStore};

/// Delay that always fails, standing in for a broken platform timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaultyDelay;

impl DelaySource for FaultyDelay {
    async fn wait(&self, _duration: Duration) -> Result<(), AppError> {
        Err(AppError::internal("timer dropped"))
    }
}

pub fn test_store() -> RecordStore {
    RecordStore::sample()
}

/// Default config with simulated delays switched off and "today" pinned to
/// the week of the sample hearings.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.simulation.enabled = false;
    config.calendar.today = Some(april(22));
    config
}

pub fn april(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, day).expect("valid April 2025 date")
}
