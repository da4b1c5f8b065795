use dioxus::prelude::*;

use crate::components::badge::BadgeVariant;

#[component]
pub fn Timeline(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        ol { class: "timeline", {children} }
    }
}

/// One entry: coloured dot, title, timestamp, then free-form body.
#[component]
pub fn TimelineItem(
    title: String,
    timestamp: String,
    #[props(default)] variant: BadgeVariant,
    children: Element,
) -> Element {
    rsx! {
        li { class: "timeline-item",
            span { class: "timeline-dot", "data-style": variant.class() }
            div { class: "timeline-body",
                div { class: "timeline-heading",
                    span { class: "timeline-title", "{title}" }
                    span { class: "timeline-timestamp", "{timestamp}" }
                }
                div { class: "timeline-note", {children} }
            }
        }
    }
}
