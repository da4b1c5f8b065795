pub mod calendar;
pub mod case_detail;
pub mod dashboard;
pub mod login;
pub mod new_petition;
pub mod not_found;
pub mod people;
pub mod petitions;
pub mod reports;
pub mod search;
pub mod settings;

use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdChartColumn, LdFileText, LdLayoutDashboard, LdLogOut, LdScale, LdSearch,
    LdSettings, LdUsers,
};
use dioxus_free_icons::Icon;
use nyaya_ui::theme::ThemeState;
use nyaya_ui::{
    Avatar, AvatarFallback, Button, ButtonVariant, Separator, Sidebar, SidebarContent,
    SidebarFooter, SidebarGroup, SidebarGroupLabel, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarTrigger, Switch,
    SwitchThumb,
};

use calendar::Calendar;
use case_detail::CaseDetail;
use dashboard::Dashboard;
use login::Login;
use new_petition::NewPetition;
use not_found::NotFound;
use people::People;
use petitions::Petitions;
use reports::Reports;
use search::Search;
use settings::Settings;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[redirect("/index", || Route::Login {})]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/new-petition")]
    NewPetition {},
    #[route("/petitions")]
    Petitions {},
    #[route("/case/:id?:tab")]
    CaseDetail { id: u32, tab: Option<String> },
    #[route("/calendar")]
    Calendar {},
    #[route("/people?:id")]
    People { id: Option<String> },
    #[route("/reports")]
    Reports {},
    #[route("/search?:q")]
    Search { q: Option<String> },
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Main app layout with sidebar and top header.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut session = use_session();
    let mut theme_state = use_context::<ThemeState>();
    let mut header_query = use_signal(String::new);

    let user_name = session.display_name();
    let initials: String = user_name
        .split(|c: char| c.is_whitespace() || c == '.' || c == '_')
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();

    let handle_header_search = move |evt: FormEvent| {
        evt.prevent_default();
        let q = header_query.read().trim().to_string();
        if q.is_empty() {
            return;
        }
        header_query.set(String::new());
        navigator().push(Route::Search { q: Some(q) });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div {
                        class: "sidebar-brand",
                        Icon::<LdScale> { icon: LdScale, width: 22, height: 22 }
                        span {
                            class: "sidebar-brand-name",
                            span { class: "sidebar-brand-accent", "Nyaya" }
                            " Portal"
                        }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup {
                        SidebarGroupLabel { "Navigation" }
                        SidebarMenu {
                            SidebarMenuItem {
                                Link { to: Route::Dashboard {},
                                    SidebarMenuButton { active: matches!(route, Route::Dashboard {}), subtitle: "Overview",
                                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                        "Dashboard"
                                    }
                                }
                            }
                            SidebarMenuItem {
                                Link { to: Route::Petitions {},
                                    SidebarMenuButton {
                                        active: matches!(route, Route::Petitions {} | Route::NewPetition {} | Route::CaseDetail { .. }),
                                        subtitle: "Case Management",
                                        Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                                        "Petitions"
                                    }
                                }
                            }
                            SidebarMenuItem {
                                Link { to: Route::People { id: None },
                                    SidebarMenuButton { active: matches!(route, Route::People { .. }), subtitle: "Complainants & Defendants",
                                        Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                        "People"
                                    }
                                }
                            }
                            SidebarMenuItem {
                                Link { to: Route::Search { q: None },
                                    SidebarMenuButton { active: matches!(route, Route::Search { .. }), subtitle: "Find Cases",
                                        Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                                        "Search"
                                    }
                                }
                            }
                            SidebarMenuItem {
                                Link { to: Route::Calendar {},
                                    SidebarMenuButton { active: matches!(route, Route::Calendar {}), subtitle: "Schedule & Hearings",
                                        Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                                        "Calendar"
                                    }
                                }
                            }
                            SidebarMenuItem {
                                Link { to: Route::Reports {},
                                    SidebarMenuButton { active: matches!(route, Route::Reports {}), subtitle: "Analytics & Statistics",
                                        Icon::<LdChartColumn> { icon: LdChartColumn, width: 18, height: 18 }
                                        "Reports"
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    SidebarMenu {
                        SidebarMenuItem {
                            Link { to: Route::Settings {},
                                SidebarMenuButton { active: matches!(route, Route::Settings {}), subtitle: "System Configuration",
                                    Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                                    "Settings"
                                }
                            }
                        }
                    }
                    div {
                        class: "sidebar-footer-row",
                        span {
                            class: "sidebar-footer-label",
                            "Dark Mode"
                        }
                        Switch {
                            checked: Some((theme_state.is_dark)()),
                            on_checked_change: move |checked: bool| theme_state.set_dark(checked),
                            SwitchThumb {}
                        }
                    }
                }
            }

            SidebarInset {
                header {
                    class: "app-header",

                    SidebarTrigger {
                        span { class: "app-header-trigger-icon", "\u{2630}" }
                    }

                    Separator { horizontal: false }

                    h1 {
                        class: "app-header-title",
                        Link { to: Route::Dashboard {},
                            class: "nepali-text app-header-title-np",
                            "ठाडो उजुरी व्यवस्थापन प्रणाली"
                        }
                        span { class: "app-header-title-en", " | Petition Management System" }
                    }

                    div { class: "app-header-spacer" }

                    form {
                        class: "app-header-search",
                        onsubmit: handle_header_search,
                        Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                        input {
                            r#type: "search",
                            placeholder: "Search cases...",
                            "aria-label": "Search cases",
                            value: "{header_query}",
                            oninput: move |e: FormEvent| header_query.set(e.value()),
                        }
                    }

                    if session.is_authenticated() {
                        div { class: "app-header-user",
                            Avatar {
                                AvatarFallback { "{initials}" }
                            }
                            span { class: "app-header-user-name", "{user_name}" }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| {
                                    session.sign_out();
                                    navigator().push(Route::Login {});
                                },
                                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                                "Sign Out"
                            }
                        }
                    } else {
                        Link { to: Route::Login {}, class: "app-header-signin", "Sign In" }
                    }
                }

                div { class: "page-content", Outlet::<Route> {} }
            }
        }
    }
}
