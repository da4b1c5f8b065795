use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::AppError;

/// Feature flags controlling optional portal behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Require the one-time-password step after the credentials step.
    #[serde(default = "default_true")]
    pub two_factor: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self { two_factor: true }
    }
}

/// Delays applied by the simulated action handlers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    /// When false every simulated action resolves immediately.
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_login_delay")]
    pub login_delay_ms: u64,
    #[serde(default = "default_search_delay")]
    pub search_delay_ms: u64,
    #[serde(default = "default_save_delay")]
    pub save_delay_ms: u64,
}

impl SimulationConfig {
    pub fn login_delay(&self) -> Duration {
        self.delay(self.login_delay_ms)
    }

    pub fn search_delay(&self) -> Duration {
        self.delay(self.search_delay_ms)
    }

    pub fn save_delay(&self) -> Duration {
        self.delay(self.save_delay_ms)
    }

    fn delay(&self, ms: u64) -> Duration {
        if self.enabled {
            Duration::from_millis(ms)
        } else {
            Duration::ZERO
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            login_delay_ms: default_login_delay(),
            search_delay_ms: default_search_delay(),
            save_delay_ms: default_save_delay(),
        }
    }
}

/// List page sizing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Calendar settings. `today` pins the date used as "today" when set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CalendarConfig {
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, AppError> {
        let mut config: AppConfig = toml::from_str(source)?;
        config.listing.page_size = config.listing.page_size.max(1);
        Ok(config)
    }

    /// Parse `source`, logging and falling back to defaults on error.
    pub fn from_toml_or_default(source: &str) -> Self {
        match Self::from_toml_str(source) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "config rejected, using defaults");
                Self::default()
            }
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_login_delay() -> u64 {
    1500
}

fn default_search_delay() -> u64 {
    800
}

fn default_save_delay() -> u64 {
    1000
}

fn default_page_size() -> usize {
    10
}
