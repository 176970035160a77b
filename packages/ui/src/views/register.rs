use dioxus::prelude::*;

use super::Placeholder;
use crate::routes::path_of;

#[component]
pub fn Register() -> Element {
    rsx! {
        Placeholder {
            title: "Create an account",
            message: "Registration is handled by the account service.",
        }
        p {
            class: "login-footer",
            "Already registered? "
            Link { to: path_of("login"), "Sign in" }
        }
    }
}
