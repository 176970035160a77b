//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{AppConfig, SessionStore};

use crate::platform::{make_store, PlatformStore};
use crate::routes::path_of;

/// The application's session store.
pub type Session = SessionStore<PlatformStore>;

/// Get the session store.
/// Reading the signal subscribes the component to login and logout.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that owns the session store.
/// Wrap your app with this component; the persisted session is restored
/// once, when the provider is first mounted.
#[component]
pub fn SessionProvider(config: AppConfig, children: Element) -> Element {
    use_context_provider(|| {
        let mut session = SessionStore::with_config(make_store(&config.storage), &config.session);
        session.init_user();
        if let Some(user) = session.current_user() {
            tracing::info!(user_id = %user.id, "restored session");
        }
        Signal::new(session)
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let onclick = move |_| {
        if let Err(e) = session.write().logout() {
            tracing::error!("Failed to clear persisted session: {}", e);
        }
        nav.push(path_of("login"));
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
