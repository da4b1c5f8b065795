use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LoginStage {
    #[default]
    Credentials,
    /// Credentials accepted, waiting for the one-time code.
    OtpSent,
}

/// Result of one login submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoginOutcome {
    OtpSent,
    SignedIn { user: String },
}

/// State of the sign-in form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub otp: String,
    pub remember_me: bool,
    pub stage: LoginStage,
}

impl LoginForm {
    pub fn button_label(&self, pending: bool) -> &'static str {
        if pending {
            "Signing in..."
        } else if self.stage == LoginStage::OtpSent {
            "Verify & Continue"
        } else {
            "Sign In"
        }
    }

    /// Email and password are read-only while pending and after the code is sent.
    pub fn inputs_locked(&self, pending: bool) -> bool {
        pending || self.stage == LoginStage::OtpSent
    }

    pub fn shows_otp(&self) -> bool {
        self.stage == LoginStage::OtpSent
    }

    /// Apply a completed submission.
    pub fn apply(&mut self, outcome: &LoginOutcome) {
        match outcome {
            LoginOutcome::OtpSent => self.stage = LoginStage::OtpSent,
            LoginOutcome::SignedIn { .. } => *self = LoginForm::default(),
        }
    }

    /// Display name for the session: the part of the email before `@`.
    pub fn display_name(&self) -> String {
        let local = self.email.trim().split('@').next().unwrap_or_default();
        if local.is_empty() {
            "Officer".to_string()
        } else {
            local.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_stage() {
        let mut form = LoginForm::default();
        assert_eq!(form.button_label(false), "Sign In");
        assert_eq!(form.button_label(true), "Signing in...");
        assert!(!form.inputs_locked(false));
        assert!(form.inputs_locked(true));

        form.apply(&LoginOutcome::OtpSent);
        assert_eq!(form.button_label(false), "Verify & Continue");
        assert!(form.inputs_locked(false));
        assert!(form.shows_otp());
    }

    #[test]
    fn sign_in_resets_form() {
        let mut form = LoginForm {
            email: "officer@example.gov.np".into(),
            stage: LoginStage::OtpSent,
            ..Default::default()
        };
        form.apply(&LoginOutcome::SignedIn {
            user: "officer".into(),
        });
        assert_eq!(form, LoginForm::default());
    }

    #[test]
    fn display_name_uses_local_part() {
        let form = LoginForm {
            email: " officer@example.gov.np ".into(),
            ..Default::default()
        };
        assert_eq!(form.display_name(), "officer");
        assert_eq!(LoginForm::default().display_name(), "Officer");
    }
}
