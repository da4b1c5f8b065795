use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// Horizontal fill bar for a percentage, such as how far a wizard has got.
#[component]
pub fn Progress(percent: f64) -> Element {
    let value = clamp_percent(percent);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { class: "progress", value: Some(value),
            prim::ProgressIndicator { class: "progress-indicator" }
        }
    }
}
