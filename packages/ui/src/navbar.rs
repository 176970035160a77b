use dioxus::prelude::*;

use crate::routes::{app_routes, path_of, ViewId};
use crate::session::{use_session, LogoutButton};

const NAVBAR_CSS: Asset = asset!("/assets/navbar.css");

/// Views reachable from the top navigation, in display order.
const NAV_ITEMS: [(ViewId, &str); 5] = [
    (ViewId::LearningCenter, "Learning Center"),
    (ViewId::QASystem, "Q&A"),
    (ViewId::Tools, "Tools"),
    (ViewId::Projects, "Projects"),
    (ViewId::Profile, "Profile"),
];

#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let routes = app_routes();
    let username = session.read().current_user().map(|u| u.username.clone());

    let links = NAV_ITEMS.iter().filter_map(|(id, label)| {
        let path = routes
            .routes()
            .find(|e| e.view_id() == Some(*id))
            .map(|e| e.path)?;
        Some((path, *label))
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        nav {
            class: "navbar",
            div {
                class: "navbar-links",
                for (path, label) in links {
                    Link { key: "{path}", to: path, "{label}" }
                }
            }
            div {
                class: "navbar-user",
                if let Some(name) = username {
                    span { class: "navbar-username", "{name}" }
                    LogoutButton { class: "navbar-logout" }
                } else {
                    Link { to: path_of("login"), "Sign in" }
                }
            }
        }
    }
}
