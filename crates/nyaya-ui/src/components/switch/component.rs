use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// On/off toggle for preference rows.
#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}

/// Title, description and a switch laid out as one settings row.
#[component]
pub fn SwitchRow(
    title: String,
    #[props(default)] description: String,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "switch-row",
            div { class: "switch-row-text",
                span { class: "switch-row-title", "{title}" }
                if !description.is_empty() {
                    span { class: "switch-row-description", "{description}" }
                }
            }
            Switch {
                checked: Some(checked),
                on_checked_change: move |value: bool| on_change.call(value),
                SwitchThumb {}
            }
        }
    }
}
