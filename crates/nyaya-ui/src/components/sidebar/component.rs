use dioxus::prelude::*;

/// Open/closed flag shared by the sidebar, its trigger and the menu buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// The navigation column. On narrow screens it overlays the page with a
/// backdrop that closes it.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if is_open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

macro_rules! sidebar_section {
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

sidebar_section!(SidebarHeader, div, "sidebar-header");
sidebar_section!(SidebarContent, nav, "sidebar-content");
sidebar_section!(SidebarFooter, div, "sidebar-footer");
sidebar_section!(SidebarGroup, div, "sidebar-group");
sidebar_section!(SidebarGroupLabel, div, "sidebar-group-label");
sidebar_section!(SidebarMenu, ul, "sidebar-menu");
sidebar_section!(SidebarMenuItem, li, "sidebar-menu-item");
sidebar_section!(SidebarInset, main, "sidebar-inset");

/// Navigation entry with a title and a muted subtitle under it.
///
/// Wrap it in a router `Link`; clicking also closes the overlay on mobile.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default)] subtitle: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            onclick: move |_| state.set(SidebarState { open: false }),
            ..merged,
            span { class: "sidebar-menu-button-title", {children} }
            if !subtitle.is_empty() {
                span { class: "sidebar-menu-button-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let base = vec![Attribute::new("class", "sidebar-trigger", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| {
                let open = state().open;
                state.set(SidebarState { open: !open });
            },
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "sidebar-separator" }
    }
}
