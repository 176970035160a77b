use dioxus::prelude::*;

use super::Placeholder;

#[component]
pub fn Tools() -> Element {
    rsx! {
        Placeholder {
            title: "Tools",
            message: "No tools are available yet.",
        }
    }
}
