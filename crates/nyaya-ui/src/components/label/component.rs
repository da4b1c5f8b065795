use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Form label bound to a control through `html_for`. Required fields get a
/// trailing marker.
#[component]
pub fn Label(
    html_for: String,
    #[props(default)] required: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { class: "label", html_for,
            {children}
            if required {
                span { class: "label-required", aria_hidden: "true", "*" }
            }
        }
    }
}
