use dioxus::prelude::*;

use super::Placeholder;
use crate::session::use_session;

/// Landing view; `/` redirects here.
#[component]
pub fn LearningCenter() -> Element {
    let session = use_session();
    let greeting = match session.read().current_user() {
        Some(user) => format!("Welcome back, {}", user.username),
        None => "Welcome".to_string(),
    };

    rsx! {
        Placeholder {
            title: greeting,
            message: "Courses and learning paths will appear here.",
        }
    }
}
