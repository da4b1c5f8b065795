use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

/// Edge the panel is docked to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetSide {
    #[default]
    Right,
    Left,
    Bottom,
}

impl SheetSide {
    fn class(&self) -> &'static str {
        match self {
            SheetSide::Right => "right",
            SheetSide::Left => "left",
            SheetSide::Bottom => "bottom",
        }
    }
}

/// Sliding side panel used for profiles and add forms.
///
/// Controlled: the page owns `open` and closes the sheet from `on_close`,
/// which fires on backdrop clicks and on [`SheetClose`].
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] side: SheetSide,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-panel",
                role: "dialog",
                "data-side": side.class(),
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

macro_rules! sheet_section {
    ($name:ident, $tag:ident, $class:literal) => {
        #[component]
        pub fn $name(
            #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
            children: Element,
        ) -> Element {
            let base = vec![Attribute::new("class", $class, None, false)];
            let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

            rsx! {
                $tag {
                    ..merged,
                    {children}
                }
            }
        }
    };
}

sheet_section!(SheetContent, div, "sheet-content");
sheet_section!(SheetHeader, div, "sheet-header");
sheet_section!(SheetFooter, div, "sheet-footer");
sheet_section!(SheetTitle, h2, "sheet-title");
sheet_section!(SheetDescription, p, "sheet-description");

/// The "×" button in a sheet header.
#[component]
pub fn SheetClose(on_close: EventHandler<()>, #[props(default)] disabled: bool) -> Element {
    rsx! {
        button {
            class: "sheet-close",
            r#type: "button",
            "aria-label": "Close",
            disabled,
            onclick: move |_| on_close.call(()),
            Icon::<LdX> { icon: LdX, width: 18, height: 18 }
        }
    }
}
