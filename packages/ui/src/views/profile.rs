use dioxus::prelude::*;

use super::Placeholder;
use crate::routes::path_of;
use crate::session::{use_session, LogoutButton};

/// Shows the logged-in user, or a prompt to sign in.
#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let Some(user) = session.read().current_user().cloned() else {
        return rsx! {
            Placeholder {
                title: "Profile",
                message: "Sign in to see your profile.",
            }
            Link { to: path_of("login"), "Sign in" }
        };
    };

    rsx! {
        section {
            class: "profile",
            if let Some(avatar) = user.avatar.clone() {
                img { class: "profile-avatar", src: "{avatar}", alt: "Avatar" }
            }
            h2 { class: "profile-name", "{user.username}" }
            if let Some(email) = user.email.clone() {
                p { class: "profile-email", "{email}" }
            }
            p { class: "profile-id", "ID: {user.id}" }
            LogoutButton { class: "profile-logout" }
        }
    }
}
