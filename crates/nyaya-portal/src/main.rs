use dioxus::prelude::*;
use nyaya_types::{AppConfig, RecordStore};
use nyaya_ui::theme::{ThemeMode, ThemeState};

mod components;
mod delay;
mod format_helpers;
mod routes;
mod session;

use delay::PlatformDelay;
use routes::Route;
use session::Session;

const THEME: Asset = asset!("/assets/theme.css");
const CONFIG_SOURCE: &str = include_str!("../config.toml");

fn main() {
    dioxus::launch(App);
}

/// "Today" for the calendar: pinned by config, otherwise the local date.
pub fn today(config: &AppConfig) -> chrono::NaiveDate {
    config
        .calendar
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive())
}

#[component]
fn App() -> Element {
    use_context_provider(|| AppConfig::from_toml_or_default(CONFIG_SOURCE));
    use_context_provider(RecordStore::sample);
    use_context_provider(|| PlatformDelay);
    use_context_provider(Session::new);
    use_context_provider(|| ThemeState::new(ThemeMode::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        nyaya_ui::theme::ThemeSeed {}
        Router::<Route> {}
    }
}
