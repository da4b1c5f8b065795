use serde::{Deserialize, Serialize};

/// Tabs of the settings page. Each tab saves independently.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SettingsSection {
    #[default]
    #[serde(rename = "account")]
    Account,
    #[serde(rename = "preferences")]
    Preferences,
    #[serde(rename = "notifications")]
    Notifications,
    #[serde(rename = "security")]
    Security,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 4] = [
        SettingsSection::Account,
        SettingsSection::Preferences,
        SettingsSection::Notifications,
        SettingsSection::Security,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Preferences => "preferences",
            Self::Notifications => "notifications",
            Self::Security => "security",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Preferences => "Preferences",
            Self::Notifications => "Notifications",
            Self::Security => "Security",
        }
    }

    pub fn button_label(&self, pending: bool) -> &'static str {
        match (self, pending) {
            (Self::Security, true) => "Updating...",
            (Self::Security, false) => "Update Password",
            (_, true) => "Saving...",
            (_, false) => "Save Changes",
        }
    }

    /// Banner shown once the save completes.
    pub fn saved_message(&self) -> &'static str {
        match self {
            Self::Security => "Password updated",
            _ => "Settings saved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: String,
}

impl Default for AccountProfile {
    fn default() -> Self {
        Self {
            first_name: "Alex".to_string(),
            last_name: "Johnson".to_string(),
            email: "alex@example.com".to_string(),
            job_title: "Attorney".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
    pub compact_view: bool,
    pub auto_save_drafts: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            compact_view: true,
            auto_save_drafts: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub email: bool,
    pub case_updates: bool,
    pub calendar_reminders: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            case_updates: true,
            calendar_reminders: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

/// Everything editable on the settings page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SettingsState {
    pub section: SettingsSection,
    pub account: AccountProfile,
    pub preferences: Preferences,
    pub notifications: NotificationPrefs,
    pub password: PasswordChange,
}

impl SettingsState {
    /// Called after a save completes. Password fields never outlive a save.
    pub fn after_save(&mut self, section: SettingsSection) {
        if section == SettingsSection::Security {
            self.password = PasswordChange::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_profile() {
        let state = SettingsState::default();
        assert_eq!(state.account.first_name, "Alex");
        assert_eq!(state.account.job_title, "Attorney");
        assert!(!state.preferences.dark_mode);
        assert!(state.preferences.compact_view);
        assert!(state.notifications.calendar_reminders);
    }

    #[test]
    fn security_has_its_own_labels() {
        assert_eq!(SettingsSection::Security.button_label(true), "Updating...");
        assert_eq!(SettingsSection::Security.button_label(false), "Update Password");
        assert_eq!(SettingsSection::Account.button_label(true), "Saving...");
        assert_eq!(SettingsSection::Security.saved_message(), "Password updated");
        assert_eq!(SettingsSection::Preferences.saved_message(), "Settings saved");
    }

    #[test]
    fn password_cleared_after_security_save() {
        let mut state = SettingsState::default();
        state.password.new = "hunter22".into();
        state.after_save(SettingsSection::Account);
        assert_eq!(state.password.new, "hunter22");
        state.after_save(SettingsSection::Security);
        assert_eq!(state.password, PasswordChange::default());
    }
}
