use crate::delay::PlatformDelay;
use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShieldCheck;
use dioxus_free_icons::Icon;
use nyaya_types::{submit_login, ActionStatus, AppConfig, LoginForm, LoginOutcome};
use nyaya_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Checkbox,
    CheckboxIndicator, CheckboxState, Input, Label, Separator,
};

/// Sign-in page: credentials first, then the one-time code when two-factor
/// is enabled.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let config = use_context::<AppConfig>();
    let delay = use_context::<PlatformDelay>();
    let mut form = use_signal(LoginForm::default);
    let mut status = use_signal(ActionStatus::<LoginOutcome>::default);

    if session.is_authenticated() {
        navigator().push(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if !status.write().begin() {
            return;
        }
        let config = config.clone();
        spawn(async move {
            let snapshot = form.read().clone();
            let result = submit_login(&delay, &config, &snapshot).await;
            if let Ok(outcome) = &result {
                form.write().apply(outcome);
                if let LoginOutcome::SignedIn { user } = outcome {
                    session.sign_in(user.clone());
                    navigator().push(Route::Dashboard {});
                }
            }
            status.write().finish(result);
        });
    };

    let pending = status.read().is_pending();
    let locked = form.read().inputs_locked(pending);
    let shows_otp = form.read().shows_otp();
    let button_label = form.read().button_label(pending);
    let error = status.read().error().map(str::to_string);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-banner",
                div { class: "auth-banner-inner",
                    p { class: "auth-banner-np nepali-text", "नेपाल सरकार" }
                    h1 { class: "auth-banner-title", "Nepal Government" }
                    p { class: "auth-banner-np nepali-text", "ठाडो उजुरी व्यवस्थापन प्रणाली" }
                    p { class: "auth-banner-subtitle", "Petition Management System" }

                    div { class: "auth-banner-notice",
                        h3 { "Secure Access Portal" }
                        p {
                            "This system is only accessible to authorized personnel. "
                            "All activities are logged and monitored."
                        }
                    }
                }
            }

            div { class: "auth-panel",
                Card {
                    class: "auth-card",

                    CardHeader {
                        div { class: "auth-icon",
                            Icon::<LdShieldCheck> { icon: LdShieldCheck, width: 32, height: 32 }
                        }
                        CardTitle { "Sign in to Nyaya Portal" }
                        CardDescription { "Enter your credentials below to continue" }
                    }

                    CardContent {
                        if let Some(err) = error {
                            div { class: "form-error", "{err}" }
                        }

                        form {
                            class: "auth-form",
                            onsubmit: handle_login,

                            div { class: "auth-field",
                                Label { html_for: "email", required: true, "Email / Username" }
                                Input {
                                    input_type: "text",
                                    id: "email",
                                    placeholder: "officer@example.gov.np",
                                    value: form.read().email.clone(),
                                    disabled: locked,
                                    on_input: move |e: FormEvent| form.write().email = e.value(),
                                }
                            }

                            div { class: "auth-field",
                                div { class: "auth-field-row",
                                    Label { html_for: "password", required: true, "Password" }
                                    span { class: "auth-forgot muted", "Forgot password?" }
                                }
                                Input {
                                    input_type: "password",
                                    id: "password",
                                    value: form.read().password.clone(),
                                    disabled: locked,
                                    on_input: move |e: FormEvent| form.write().password = e.value(),
                                }
                            }

                            if shows_otp {
                                div { class: "auth-field",
                                    Label { html_for: "otp", "Two-Factor Authentication Code" }
                                    Input {
                                        input_type: "text",
                                        id: "otp",
                                        placeholder: "Enter 6-digit code",
                                        max_length: 6u32,
                                        value: form.read().otp.clone(),
                                        disabled: pending,
                                        on_input: move |e: FormEvent| form.write().otp = e.value(),
                                    }
                                    p { class: "auth-hint muted",
                                        "A verification code has been sent to your registered mobile number"
                                    }
                                }
                            }

                            div { class: "auth-remember",
                                Checkbox {
                                    id: "remember",
                                    default_checked: CheckboxState::Unchecked,
                                    on_checked_change: move |state: CheckboxState| {
                                        form.write().remember_me = matches!(state, CheckboxState::Checked);
                                    },
                                    CheckboxIndicator {}
                                }
                                Label { html_for: "remember", "Remember me" }
                            }

                            button {
                                r#type: "submit",
                                class: if shows_otp { "auth-submit button auth-submit-verify" } else { "auth-submit button" },
                                disabled: pending,
                                "{button_label}"
                            }
                        }
                    }

                    CardFooter {
                        Separator { label: "System Access".to_string() }
                        p { class: "auth-footer-note muted",
                            "This is a secure government portal. Unauthorized access is prohibited."
                        }
                    }
                }
            }
        }
    }
}
