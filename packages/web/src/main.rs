use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use store::AppConfig;
use views::{AppLayout, LearningCenter, Login, Profile, Projects, QASystem, Register, Tools};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[redirect("/", || Route::LearningCenter {})]
        #[route("/learning-center")]
        LearningCenter {},
        #[route("/qa-system")]
        QASystem {},
        #[route("/tools")]
        Tools {},
        #[route("/projects")]
        Projects {},
        #[route("/profile")]
        Profile {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../afang.toml");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// Parse the bundled `afang.toml`, falling back to defaults.
fn load_config() -> AppConfig {
    AppConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", AppConfig::filename(), e);
        AppConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}
