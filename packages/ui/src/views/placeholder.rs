use dioxus::prelude::*;

/// Empty state for a section whose content is not loaded yet.
#[component]
pub fn Placeholder(title: String, message: String) -> Element {
    rsx! {
        section {
            class: "placeholder",
            h2 { class: "placeholder-title", "{title}" }
            p { class: "placeholder-message", "{message}" }
        }
    }
}
