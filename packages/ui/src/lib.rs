//! This crate contains all shared UI for the workspace.

pub mod routes;
pub use routes::{app_routes, render, RouteTable, ViewId};

pub mod views;

mod platform;
pub use platform::{make_store, PlatformStore};

mod session;
pub use session::{use_session, LogoutButton, Session, SessionProvider};

mod navbar;
pub use navbar::Navbar;
