use dioxus::prelude::*;

/// Segmented control whose selection lives in the page.
///
/// Unlike [`Tabs`](crate::Tabs) this holds no state of its own: each
/// [`FilterTab`] is told whether it is active and reports clicks, so the
/// page can feed the choice into its list state or the URL.
#[component]
pub fn FilterTabs(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "filter-tabs", None, false),
        Attribute::new("role", "tablist", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn FilterTab(
    active: bool,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "filter-tab",
            r#type: "button",
            role: "tab",
            disabled,
            "aria-selected": if active { "true" } else { "false" },
            "data-state": if active { "active" } else { "inactive" },
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
