use dioxus::prelude::*;
use nyaya_ui::{Card, CardContent};

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(path = %path, "unmatched route");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            Card { class: "not-found-card",
                CardContent {
                    div { class: "not-found-code", "404" }
                    h1 { class: "not-found-title", "Page Not Found" }
                    p { class: "not-found-message",
                        "Nothing is registered at "
                        code { "{path}" }
                        "."
                    }
                    Link { to: Route::Dashboard {},
                        class: "not-found-link",
                        "Back to Dashboard"
                    }
                }
            }
        }
    }
}
