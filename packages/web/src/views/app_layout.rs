use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

/// Navbar above the active route.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "content",
            Outlet::<Route> {}
        }
    }
}
