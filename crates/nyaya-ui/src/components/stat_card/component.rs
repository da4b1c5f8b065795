use dioxus::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};

/// Headline number with a change badge and a caption under it.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    change: String,
    increase: bool,
    #[props(default)] caption: String,
) -> Element {
    let variant = if increase {
        BadgeVariant::Success
    } else {
        BadgeVariant::Destructive
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            div { class: "stat-card-top",
                span { class: "stat-card-title", "{title}" }
                Badge { variant, "{change}" }
            }
            span { class: "stat-card-value", "{value}" }
            if !caption.is_empty() {
                span { class: "stat-card-caption", "{caption}" }
            }
        }
    }
}

/// Responsive row of stat cards.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
