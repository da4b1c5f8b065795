use dioxus::prelude::*;

/// Signed-in officer, shared by the login page and the layout header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Session {
    pub user: Signal<Option<String>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn sign_in(&mut self, user: String) {
        tracing::info!(user = %user, "session started");
        self.user.set(Some(user));
    }

    pub fn sign_out(&mut self) {
        tracing::info!("session ended");
        self.user.set(None);
    }

    /// Name for the header, "Officer" when nobody has signed in.
    pub fn display_name(&self) -> String {
        self.user
            .read()
            .clone()
            .unwrap_or_else(|| "Officer".to_string())
    }
}

pub fn use_session() -> Session {
    use_context::<Session>()
}
