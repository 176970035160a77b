//! Route components. Each one renders its view through the shared route
//! table, which instantiates deferred views on first navigation.

use dioxus::prelude::*;
use ui::{render, ViewId};

mod app_layout;
pub use app_layout::AppLayout;

#[component]
pub fn Login() -> Element {
    render(ViewId::Login)
}

#[component]
pub fn Register() -> Element {
    render(ViewId::Register)
}

#[component]
pub fn LearningCenter() -> Element {
    render(ViewId::LearningCenter)
}

#[component]
pub fn QASystem() -> Element {
    render(ViewId::QASystem)
}

#[component]
pub fn Tools() -> Element {
    render(ViewId::Tools)
}

#[component]
pub fn Projects() -> Element {
    render(ViewId::Projects)
}

#[component]
pub fn Profile() -> Element {
    render(ViewId::Profile)
}
