use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// Divider line. With a `label` it renders a horizontal rule split around
/// a short caption, as on the login card footer.
#[component]
pub fn Separator(
    #[props(default = true)] horizontal: bool,
    #[props(default)] label: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        match label {
            Some(label) => rsx! {
                div { class: "separator-labelled", role: "separator",
                    prim::Separator { class: "separator", horizontal: true }
                    span { class: "separator-label", "{label}" }
                    prim::Separator { class: "separator", horizontal: true }
                }
            },
            None => rsx! {
                prim::Separator { class: "separator", horizontal }
            },
        }
    }
}
