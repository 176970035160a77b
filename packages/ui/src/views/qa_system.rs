use dioxus::prelude::*;

use super::Placeholder;

#[component]
pub fn QASystem() -> Element {
    rsx! {
        Placeholder {
            title: "Q&A",
            message: "Ask a question or browse answers from the community.",
        }
    }
}
