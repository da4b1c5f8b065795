use dioxus::prelude::*;

const THEME_COOKIE: &str = "theme";

/// Colour scheme of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value written to `data-theme` on `<html>` and to the theme cookie.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "nyaya-light",
            ThemeMode::Dark => "nyaya-dark",
        }
    }

    /// Parse a stored key. Anything unknown is light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "nyaya-dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    /// Mode stored in a `document.cookie` string. Light when absent.
    pub fn from_cookie(cookie: &str) -> Self {
        cookie
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == THEME_COOKIE)
            .map(|(_, value)| Self::from_key(value.trim()))
            .unwrap_or_default()
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Theme controller provided as context. The settings page's dark mode
/// switch writes `is_dark` and calls [`ThemeState::apply`].
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            is_dark: Signal::new(mode.is_dark()),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(*self.is_dark.read())
    }

    pub fn set_dark(&mut self, dark: bool) {
        self.is_dark.set(dark);
        self.apply();
    }

    pub fn apply(&self) {
        set_theme(self.mode());
    }
}

/// Reads the theme cookie on first render and pushes it into the
/// [`ThemeState`] context, so the switches match what the page shows.
#[component]
pub fn ThemeSeed() -> Element {
    let mut state = use_context::<ThemeState>();

    use_future(move || async move {
        let mode = match document::eval("return document.cookie;").join::<String>().await {
            Ok(cookie) => ThemeMode::from_cookie(&cookie),
            Err(err) => {
                tracing::debug!(error = ?err, "theme cookie unreadable");
                ThemeMode::default()
            }
        };
        state.is_dark.set(mode.is_dark());
        state.apply();
    });

    rsx! {}
}

/// Write the theme to `<html data-theme>` and remember it in a cookie.
pub fn set_theme(mode: ThemeMode) {
    let theme = mode.as_str();
    tracing::debug!(theme, "theme applied");
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = '{THEME_COOKIE}={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}
