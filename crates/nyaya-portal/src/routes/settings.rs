use dioxus::prelude::*;
use nyaya_types::{save_settings, ActionStatus, AppConfig, SettingsSection, SettingsState};
use nyaya_ui::theme::ThemeState;
use nyaya_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    FormGrid, Input, PageHeader, PageSubtitle, PageTitle, SwitchRow, TabContent, TabStrip,
    Tabs,
};

use crate::delay::PlatformDelay;

#[component]
pub fn Settings() -> Element {
    let mut theme = use_context::<ThemeState>();
    let mut settings = use_signal(|| {
        let mut state = SettingsState::default();
        state.preferences.dark_mode = theme.mode().is_dark();
        state
    });
    let status = use_signal(ActionStatus::<SettingsSection>::default);

    let current = settings.read().clone();
    let dark = theme.mode().is_dark();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        div { class: "container settings-page", "data-compact": current.preferences.compact_view,
            PageHeader {
                div {
                    PageTitle { "Settings" }
                    PageSubtitle { "Manage your account and application preferences." }
                }
            }

            Tabs { default_value: SettingsSection::default().as_str().to_string(), horizontal: true,
                TabStrip {
                    tabs: SettingsSection::ALL.iter().map(|s| (s.as_str(), s.label())).collect::<Vec<_>>(),
                }

                TabContent { value: SettingsSection::Account.as_str().to_string(), index: 0usize,
                    Card {
                        CardHeader {
                            CardTitle { "Profile Information" }
                            CardDescription { "Update your profile details here." }
                        }
                        CardContent {
                            FormGrid {
                                Input {
                                    label: "First Name",
                                    value: current.account.first_name.clone(),
                                    on_input: move |e: FormEvent| settings.write().account.first_name = e.value(),
                                }
                                Input {
                                    label: "Last Name",
                                    value: current.account.last_name.clone(),
                                    on_input: move |e: FormEvent| settings.write().account.last_name = e.value(),
                                }
                            }
                            Input {
                                label: "Email Address",
                                input_type: "email",
                                value: current.account.email.clone(),
                                on_input: move |e: FormEvent| settings.write().account.email = e.value(),
                            }
                            Input {
                                label: "Job Title",
                                value: current.account.job_title.clone(),
                                on_input: move |e: FormEvent| settings.write().account.job_title = e.value(),
                            }
                        }
                        SaveFooter { section: SettingsSection::Account, settings, status }
                    }
                }

                TabContent { value: SettingsSection::Preferences.as_str().to_string(), index: 1usize,
                    Card {
                        CardHeader {
                            CardTitle { "Application Preferences" }
                            CardDescription { "Customize how the application works for you." }
                        }
                        CardContent {
                            SwitchRow {
                                title: "Dark Mode",
                                description: "Toggle between light and dark theme",
                                checked: dark,
                                on_change: move |value: bool| {
                                    settings.write().preferences.dark_mode = value;
                                    theme.set_dark(value);
                                },
                            }
                            SwitchRow {
                                title: "Compact View",
                                description: "Show more content with less spacing",
                                checked: current.preferences.compact_view,
                                on_change: move |value: bool| settings.write().preferences.compact_view = value,
                            }
                            SwitchRow {
                                title: "Auto-save Drafts",
                                description: "Automatically save petition drafts",
                                checked: current.preferences.auto_save_drafts,
                                on_change: move |value: bool| settings.write().preferences.auto_save_drafts = value,
                            }
                        }
                        SaveFooter { section: SettingsSection::Preferences, settings, status }
                    }
                }

                TabContent { value: SettingsSection::Notifications.as_str().to_string(), index: 2usize,
                    Card {
                        CardHeader {
                            CardTitle { "Notification Settings" }
                            CardDescription { "Configure how you receive notifications." }
                        }
                        CardContent {
                            SwitchRow {
                                title: "Email Notifications",
                                description: "Receive updates via email",
                                checked: current.notifications.email,
                                on_change: move |value: bool| settings.write().notifications.email = value,
                            }
                            SwitchRow {
                                title: "Case Updates",
                                description: "Get notified about changes to your cases",
                                checked: current.notifications.case_updates,
                                on_change: move |value: bool| settings.write().notifications.case_updates = value,
                            }
                            SwitchRow {
                                title: "Calendar Reminders",
                                description: "Receive reminders for upcoming events",
                                checked: current.notifications.calendar_reminders,
                                on_change: move |value: bool| settings.write().notifications.calendar_reminders = value,
                            }
                        }
                        SaveFooter { section: SettingsSection::Notifications, settings, status }
                    }
                }

                TabContent { value: SettingsSection::Security.as_str().to_string(), index: 3usize,
                    Card {
                        CardHeader {
                            CardTitle { "Security Settings" }
                            CardDescription { "Manage your account security." }
                        }
                        CardContent {
                            Input {
                                label: "Current Password",
                                input_type: "password",
                                value: current.password.current.clone(),
                                on_input: move |e: FormEvent| settings.write().password.current = e.value(),
                            }
                            Input {
                                label: "New Password",
                                input_type: "password",
                                value: current.password.new.clone(),
                                on_input: move |e: FormEvent| settings.write().password.new = e.value(),
                            }
                            Input {
                                label: "Confirm New Password",
                                input_type: "password",
                                value: current.password.confirm.clone(),
                                on_input: move |e: FormEvent| settings.write().password.confirm = e.value(),
                            }
                        }
                        SaveFooter { section: SettingsSection::Security, settings, status }
                    }
                }
            }
        }
    }
}

/// Save button for one tab plus the confirmation once that tab saved.
#[component]
fn SaveFooter(
    section: SettingsSection,
    mut settings: Signal<SettingsState>,
    mut status: Signal<ActionStatus<SettingsSection>>,
) -> Element {
    let config = use_context::<AppConfig>();
    let delay = use_context::<PlatformDelay>();

    let busy = status.read().is_pending();
    let saving_here = busy && settings.read().section == section;
    let saved_here = status.read().completed() == Some(&section);
    let error = status.read().error().map(str::to_string);

    rsx! {
        CardFooter { class: "settings-footer",
            Button {
                variant: ButtonVariant::Primary,
                disabled: busy,
                onclick: move |_| {
                    if !status.write().begin() {
                        return;
                    }
                    settings.write().section = section;
                    let config = config.clone();
                    spawn(async move {
                        let result = save_settings(&delay, &config, section).await;
                        if let Ok(saved) = &result {
                            settings.write().after_save(*saved);
                        }
                        status.write().finish(result);
                    });
                },
                "{section.button_label(saving_here)}"
            }
            if saved_here {
                span { class: "form-success", "{section.saved_message()}" }
            }
            if let Some(message) = error {
                span { class: "form-error", "{message}" }
            }
        }
    }
}
