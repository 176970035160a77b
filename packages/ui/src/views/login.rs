//! Login view.
//!
//! Credentials are checked by the account service; this view only turns the
//! identity it is given into a session.

use dioxus::prelude::*;
use store::{SessionError, UserInfo};

use crate::routes::path_of;
use crate::session::use_session;

#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut avatar = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // If already logged in, go to the learning center
    if session.read().is_authenticated() {
        nav.replace(path_of("learning-center"));
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let name = username().trim().to_string();
        if name.is_empty() {
            error.set(Some("Please enter your username".to_string()));
            return;
        }

        let mut user = UserInfo::new(uuid::Uuid::new_v4().to_string(), name);
        let address = email().trim().to_string();
        if !address.is_empty() {
            user = user.with_email(address);
        }
        let avatar_url = avatar().trim().to_string();
        if !avatar_url.is_empty() {
            user = user.with_avatar(avatar_url);
        }

        match session.write().login(user) {
            Ok(()) => {
                nav.replace(path_of("learning-center"));
            }
            Err(SessionError::InvalidUser(reason)) => {
                error.set(Some(reason.to_string()));
            }
            Err(e) => {
                // Logged in for this page load only
                tracing::warn!("Session will not survive a reload: {}", e);
                nav.replace(path_of("learning-center"));
            }
        }
    };

    rsx! {
        div {
            class: "login-container",
            h1 { class: "login-title", "Sign in" }

            form {
                class: "login-form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    div { class: "login-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email (optional)",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "url",
                    placeholder: "Avatar URL (optional)",
                    value: "{avatar}",
                    oninput: move |evt| avatar.set(evt.value()),
                }
                button { r#type: "submit", class: "login-btn", "Sign in" }
            }

            p {
                class: "login-footer",
                "No account yet? "
                Link { to: path_of("register"), "Register" }
            }
        }
    }
}
