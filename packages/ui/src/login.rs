//! Login view: credential form, password toggle, toasts and post-login redirect.

use std::time::Duration;

use api::HttpTransport;
use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};
use middleware::{AppPath, Error, Field, FieldError, LoginFlow, LoginSchema, Outcome, Transport};

use crate::icons::{FaCodeBranch, FaEye, FaEyeSlash, FaIdBadge, FaPaperPlane};
use crate::platform::{make_storage, sleep};
use crate::{use_config, use_middleware, Icon};

const LOGIN_CSS: Asset = asset!("/assets/styling/login.css");

/// Login page component.
///
/// Navigation is delegated to `on_navigate` so the platform crate can map an
/// [`AppPath`] onto its own route enum.
#[component]
pub fn Login(on_navigate: EventHandler<AppPath>) -> Element {
    let mut middleware = use_middleware();
    let config = use_config();
    let toast = use_toast();
    let mut flow = use_signal(LoginFlow::new);
    let mut submit_errors = use_signal(Vec::<FieldError>::new);
    let mut form_error = use_signal(|| Option::<String>::None);

    // Reaching this view with a session means the shell let us through by mistake.
    let redirected = use_hook(|| {
        let target = flow
            .write()
            .mount(&middleware.peek().context, &make_storage());
        if let Some(path) = target {
            on_navigate.call(path);
        }
        target.is_some()
    });

    let schema = use_memo(move || LoginSchema::from_metadata(middleware.read().context.metadata()));

    if redirected {
        return rsx! {};
    }

    let debounce_ms = config.ui.debounce_ms;
    let mut on_edit = move |field: Field, value: String| {
        let generation = flow.write().edit(field, value);
        spawn(async move {
            sleep(debounce_ms).await;
            flow.write().commit(generation);
        });
    };

    let toast_ms = config.ui.toast_ms;
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        form_error.set(None);

        let request = flow
            .write()
            .begin_submit(&middleware.read().context, &config);
        let request = match request {
            Ok(request) => request,
            Err(Error::Busy) => return,
            Err(Error::Validation(errors)) => {
                submit_errors.set(errors);
                return;
            }
            Err(e) => {
                form_error.set(Some(e.to_string()));
                return;
            }
        };
        submit_errors.set(Vec::new());

        spawn(async move {
            let result = HttpTransport::new()
                .post_form(&request.url, &request.account.form())
                .await;
            let outcome = flow.write().settle(result, &mut middleware.write().context);
            match outcome {
                Outcome::Navigate(path) => on_navigate.call(path),
                Outcome::Toast(message) => {
                    toast.error(
                        message.to_string(),
                        ToastOptions::new().duration(Duration::from_millis(u64::from(toast_ms))),
                    );
                }
            }
        });
    };

    let handle_reset = move |_| {
        flow.write().reset();
        submit_errors.set(Vec::new());
        form_error.set(None);
    };

    let state = flow.read();
    let typed = state.draft().latest().clone();
    let settled = state.draft().settled().clone();
    let pass_visible = state.password_visible();
    let pending = state.is_pending();
    drop(state);

    let toggle_title = if pass_visible { "Hide password" } else { "Show password" };
    let password_type = if pass_visible { "text" } else { "password" };

    // Live feedback follows the debounced draft; submit errors win until the next edit.
    let field_message = move |field: Field| -> Option<String> {
        if let Some(err) = submit_errors.read().iter().find(|e| e.field == field) {
            return Some(err.message());
        }
        let value = settled.get(field);
        if value.is_empty() {
            return None;
        }
        schema
            .read()
            .as_ref()
            .and_then(|s| s.check_field(field, value))
            .map(|e| e.message())
    };
    let name_message = field_message(Field::Name);
    let password_message = field_message(Field::Password);

    rsx! {
        document::Stylesheet { href: LOGIN_CSS }

        div {
            id: "login-root",

            h1 {
                class: "login-title",
                Icon { icon: FaCodeBranch, width: 24, height: 24 }
                "Intranet"
            }

            div {
                id: "login-container",

                form {
                    onsubmit: handle_login,

                    if let Some(err) = form_error() {
                        div { class: "login-error", "{err}" }
                    }

                    div {
                        class: "input-group",
                        button {
                            class: "input-group-button",
                            r#type: "reset",
                            title: "Clear",
                            onclick: handle_reset,
                            Icon { icon: FaIdBadge, width: 14, height: 14 }
                        }
                        input {
                            id: "name",
                            name: "name",
                            placeholder: "Username",
                            value: "{typed.name}",
                            oninput: move |evt: FormEvent| {
                                submit_errors.write().retain(|e| e.field != Field::Name);
                                on_edit(Field::Name, evt.value());
                            },
                        }
                    }
                    if let Some(message) = name_message {
                        p { class: "field-error", "{message}" }
                    }

                    div {
                        class: "input-group",
                        button {
                            class: "input-group-button",
                            r#type: "button",
                            title: toggle_title,
                            onclick: move |_| flow.write().toggle_password(),
                            if pass_visible {
                                Icon { icon: FaEye, width: 14, height: 14 }
                            } else {
                                Icon { icon: FaEyeSlash, width: 14, height: 14 }
                            }
                        }
                        input {
                            id: "password",
                            name: "password",
                            r#type: password_type,
                            placeholder: "Password",
                            value: "{typed.password}",
                            oninput: move |evt: FormEvent| {
                                submit_errors.write().retain(|e| e.field != Field::Password);
                                on_edit(Field::Password, evt.value());
                            },
                        }
                    }
                    if let Some(message) = password_message {
                        p { class: "field-error", "{message}" }
                    }

                    button {
                        class: "login-submit",
                        r#type: "submit",
                        disabled: pending,
                        if pending {
                            span { class: "spinner" }
                            "Signing in..."
                        } else {
                            "Login"
                            Icon { icon: FaPaperPlane, width: 14, height: 14 }
                        }
                    }
                }
            }
        }
    }
}
