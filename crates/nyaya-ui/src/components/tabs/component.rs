use dioxus::prelude::*;
use dioxus_primitives::tabs as prim;

/// Tab set that opens on `default_value`. Pages whose starting tab comes
/// from the URL key this on that value so a new query remounts it.
#[component]
pub fn Tabs(mut props: prim::TabsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "tabs", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tabs { ..props }
    }
}

#[component]
pub fn TabList(mut props: prim::TabListProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "tab-list", None, false));

    rsx! {
        prim::TabList { ..props }
    }
}

#[component]
pub fn TabTrigger(mut props: prim::TabTriggerProps) -> Element {
    if props.class.is_none() {
        props.class = Some("tab-trigger".to_string());
    }

    rsx! {
        prim::TabTrigger { ..props }
    }
}

#[component]
pub fn TabContent(mut props: prim::TabContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("tab-content".to_string());
    }

    rsx! {
        prim::TabContent { ..props }
    }
}

/// Trigger row for tabs given as `(value, label)` pairs, indexed in order.
#[component]
pub fn TabStrip(tabs: Vec<(&'static str, &'static str)>) -> Element {
    rsx! {
        TabList {
            for (index, (value, label)) in tabs.into_iter().enumerate() {
                TabTrigger { key: "{value}", value: value.to_string(), index, "{label}" }
            }
        }
    }
}
