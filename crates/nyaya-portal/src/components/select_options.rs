use dioxus::prelude::*;
use nyaya_types::SelectOptions;

/// Disabled placeholder option followed by `(value, label)` pairs.
#[component]
pub fn SelectOptionList(options: SelectOptions, placeholder: &'static str) -> Element {
    rsx! {
        option { value: "", disabled: true, "{placeholder}" }
        for (value, label) in options.iter() {
            option { key: "{value}", value: *value, "{label}" }
        }
    }
}
