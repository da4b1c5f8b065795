use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdChevronRight};
use dioxus_free_icons::Icon;

use crate::components::button::{Button, ButtonVariant};

/// Numbered page controls. Renders nothing when there is at most one page.
///
/// `page` is 1-based and expected to be already clamped by the caller.
#[component]
pub fn Pagination(page: usize, total_pages: usize, on_change: EventHandler<usize>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Outline,
                disabled: page <= 1,
                onclick: move |_| on_change.call(page.saturating_sub(1).max(1)),
                Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 16, height: 16 }
                "Previous"
            }
            div { class: "pagination-pages",
                for number in 1..=total_pages {
                    Button {
                        key: "{number}",
                        variant: if number == page { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                        aria_current: if number == page { "page" } else { "false" },
                        onclick: move |_| on_change.call(number),
                        "{number}"
                    }
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: page >= total_pages,
                onclick: move |_| on_change.call((page + 1).min(total_pages)),
                "Next"
                Icon::<LdChevronRight> { icon: LdChevronRight, width: 16, height: 16 }
            }
        }
    }
}
