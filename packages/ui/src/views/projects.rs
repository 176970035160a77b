use dioxus::prelude::*;

use super::Placeholder;

#[component]
pub fn Projects() -> Element {
    rsx! {
        Placeholder {
            title: "Projects",
            message: "Projects you join or create will be listed here.",
        }
    }
}
