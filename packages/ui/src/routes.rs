//! # Route table: paths to views, with deferred loading
//!
//! [`RouteTable`] is the static mapping from URL paths to view bindings and
//! redirects. The framework router in each platform binary declares the same
//! paths; its route components render through [`render`], so a view bound with
//! [`LoadPolicy::Deferred`] is only instantiated the first time its path is
//! visited.
//!
//! ## Bindings
//!
//! | Path | Name | View | Load policy |
//! |------|------|------|-------------|
//! | `/` | | | redirect to `/learning-center` |
//! | `/login` | `login` | [`ViewId::Login`] | deferred |
//! | `/register` | `register` | [`ViewId::Register`] | deferred |
//! | `/learning-center` | `learning-center` | [`ViewId::LearningCenter`] | eager |
//! | `/qa-system` | `qa-system` | [`ViewId::QASystem`] | deferred |
//! | `/tools` | `tools` | [`ViewId::Tools`] | deferred |
//! | `/projects` | `projects` | [`ViewId::Projects`] | deferred |
//! | `/profile` | `profile` | [`ViewId::Profile`] | deferred |
//!
//! ## Loading
//!
//! Every view binding holds a [`Lazy`] factory backed by a [`OnceLock`]: it runs
//! at most once and the result is memoized. Eager bindings are forced when the
//! table is built; deferred ones on first [`RouteTable::resolve`] or
//! [`RouteTable::view`].

use std::collections::HashSet;
use std::sync::{LazyLock, OnceLock};

use dioxus::prelude::*;
use thiserror::Error;

use crate::views;

/// A view as the router mounts it.
pub type View = fn() -> Element;

/// Identifies one of the application's views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Login,
    Register,
    LearningCenter,
    QASystem,
    Tools,
    Projects,
    Profile,
}

/// When a view's factory runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// While the table is built, i.e. at application bootstrap.
    Eager,
    /// On first navigation to the path.
    Deferred,
}

/// A factory invoked at most once, memoizing its result.
pub struct Lazy<V> {
    init: fn() -> V,
    cell: OnceLock<V>,
}

impl<V> Lazy<V> {
    pub const fn new(init: fn() -> V) -> Self {
        Self {
            init,
            cell: OnceLock::new(),
        }
    }

    pub fn get(&self) -> &V {
        self.cell.get_or_init(self.init)
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

/// What a path is bound to.
pub enum Target<V> {
    Redirect(&'static str),
    View {
        id: ViewId,
        policy: LoadPolicy,
        loader: Lazy<V>,
    },
}

/// A single declared route.
pub struct RouteEntry<V> {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: Target<V>,
}

impl<V> RouteEntry<V> {
    /// An unconditional redirect from `path` to `to`.
    pub fn redirect(path: &'static str, to: &'static str) -> Self {
        Self {
            path,
            name: None,
            target: Target::Redirect(to),
        }
    }

    /// A view loaded while the table is built.
    pub fn eager(path: &'static str, name: &'static str, id: ViewId, loader: fn() -> V) -> Self {
        Self::view(path, name, id, LoadPolicy::Eager, loader)
    }

    /// A view loaded on first navigation.
    pub fn deferred(path: &'static str, name: &'static str, id: ViewId, loader: fn() -> V) -> Self {
        Self::view(path, name, id, LoadPolicy::Deferred, loader)
    }

    fn view(
        path: &'static str,
        name: &'static str,
        id: ViewId,
        policy: LoadPolicy,
        loader: fn() -> V,
    ) -> Self {
        Self {
            path,
            name: Some(name),
            target: Target::View {
                id,
                policy,
                loader: Lazy::new(loader),
            },
        }
    }

    pub fn view_id(&self) -> Option<ViewId> {
        match &self.target {
            Target::View { id, .. } => Some(*id),
            Target::Redirect(_) => None,
        }
    }
}

/// Why a set of routes was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("path {0:?} is declared more than once")]
    DuplicatePath(&'static str),

    #[error("route name {0:?} is declared more than once")]
    DuplicateName(&'static str),

    #[error("redirect from {from:?} targets undeclared path {to:?}")]
    UnknownRedirectTarget {
        from: &'static str,
        to: &'static str,
    },

    #[error("redirect from {0:?} loops back on itself")]
    RedirectCycle(&'static str),
}

/// Outcome of [`RouteTable::resolve`].
#[derive(Debug, PartialEq)]
pub enum Resolution<'a, V> {
    View {
        id: ViewId,
        /// Path of the binding that was finally reached.
        path: &'static str,
        view: &'a V,
        /// Number of redirects followed on the way.
        redirects: usize,
    },
    Unmatched,
}

/// Validated, immutable set of routes.
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V> RouteTable<V> {
    /// Validate `entries` and force every eager binding.
    pub fn new(entries: Vec<RouteEntry<V>>) -> Result<Self, RouteError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for entry in &entries {
            if !paths.insert(entry.path) {
                return Err(RouteError::DuplicatePath(entry.path));
            }
            if let Some(name) = entry.name {
                if !names.insert(name) {
                    return Err(RouteError::DuplicateName(name));
                }
            }
        }

        let table = Self { entries };
        for entry in &table.entries {
            if let Target::Redirect(to) = entry.target {
                if table.find(to).is_none() {
                    return Err(RouteError::UnknownRedirectTarget {
                        from: entry.path,
                        to,
                    });
                }
                table.check_redirect_chain(entry.path)?;
            }
        }

        for entry in &table.entries {
            if let Target::View {
                policy: LoadPolicy::Eager,
                loader,
                ..
            } = &entry.target
            {
                loader.get();
            }
        }
        Ok(table)
    }

    /// Declared routes, in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteEntry<V>> {
        self.entries.iter()
    }

    /// Resolve `path` to a view, following redirects.
    ///
    /// Query strings and fragments are ignored, as is a trailing slash on any
    /// path other than `/`.
    pub fn resolve(&self, path: &str) -> Resolution<'_, V> {
        let mut current = normalize(path);
        let mut redirects = 0;
        loop {
            let Some(entry) = self.find(current) else {
                return Resolution::Unmatched;
            };
            match &entry.target {
                Target::Redirect(to) => {
                    redirects += 1;
                    current = *to;
                }
                Target::View { id, .. } => {
                    return Resolution::View {
                        id: *id,
                        path: entry.path,
                        view: self.load(entry),
                        redirects,
                    };
                }
            }
        }
    }

    /// The view bound to `id`, loading it if needed.
    pub fn view(&self, id: ViewId) -> Option<&V> {
        let entry = self.entries.iter().find(|e| e.view_id() == Some(id))?;
        Some(self.load(entry))
    }

    /// Whether the view bound to `id` has been instantiated.
    pub fn is_loaded(&self, id: ViewId) -> bool {
        self.entries.iter().any(|e| match &e.target {
            Target::View {
                id: view_id,
                loader,
                ..
            } => *view_id == id && loader.is_initialized(),
            Target::Redirect(_) => false,
        })
    }

    /// Path of the route declared with `name`.
    pub fn path_for(&self, name: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.name == Some(name))
            .map(|e| e.path)
    }

    fn find(&self, path: &str) -> Option<&RouteEntry<V>> {
        self.entries.iter().find(|e| e.path == path)
    }

    fn load<'a>(&'a self, entry: &'a RouteEntry<V>) -> &'a V {
        match &entry.target {
            Target::View { id, loader, .. } => {
                if !loader.is_initialized() {
                    tracing::debug!(path = entry.path, ?id, "loading view");
                }
                loader.get()
            }
            Target::Redirect(_) => unreachable!("load is only called on view bindings"),
        }
    }

    fn check_redirect_chain(&self, start: &'static str) -> Result<(), RouteError> {
        let mut seen = HashSet::new();
        let mut current = start;
        while let Some(Target::Redirect(to)) = self.find(current).map(|e| &e.target) {
            if !seen.insert(current) {
                return Err(RouteError::RedirectCycle(start));
            }
            current = *to;
        }
        Ok(())
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[rustfmt::skip]
static APP_ROUTES: LazyLock<RouteTable<View>> = LazyLock::new(|| {
    RouteTable::new(vec![
        RouteEntry::redirect("/", "/learning-center"),
        RouteEntry::deferred("/login", "login", ViewId::Login, || views::Login as View),
        RouteEntry::deferred("/register", "register", ViewId::Register, || views::Register as View),
        RouteEntry::eager(
            "/learning-center",
            "learning-center",
            ViewId::LearningCenter,
            || views::LearningCenter as View,
        ),
        RouteEntry::deferred("/qa-system", "qa-system", ViewId::QASystem, || views::QASystem as View),
        RouteEntry::deferred("/tools", "tools", ViewId::Tools, || views::Tools as View),
        RouteEntry::deferred("/projects", "projects", ViewId::Projects, || views::Projects as View),
        RouteEntry::deferred("/profile", "profile", ViewId::Profile, || views::Profile as View),
    ])
    .expect("application route table is invalid")
});

/// The application's route table.
pub fn app_routes() -> &'static RouteTable<View> {
    &APP_ROUTES
}

/// Path of the application route declared with `name`.
///
/// Falls back to `/` for an undeclared name.
pub fn path_of(name: &str) -> &'static str {
    app_routes().path_for(name).unwrap_or_else(|| {
        tracing::error!(name, "no route is declared with this name");
        "/"
    })
}

/// Render the view bound to `id`.
///
/// Route components call this and nothing else, so the hooks of the rendered
/// view always run in the same order within the calling scope.
pub fn render(id: ViewId) -> Element {
    match app_routes().view(id) {
        Some(view) => view(),
        None => {
            tracing::error!(?id, "no route is bound to view");
            rsx! {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn table(
        entries: Vec<RouteEntry<&'static str>>,
    ) -> Result<RouteTable<&'static str>, RouteError> {
        RouteTable::new(entries)
    }

    #[test]
    fn test_app_routes_root_redirects_to_learning_center() {
        match app_routes().resolve("/") {
            Resolution::View { id, path, redirects, .. } => {
                assert_eq!(id, ViewId::LearningCenter);
                assert_eq!(path, "/learning-center");
                assert_eq!(redirects, 1);
            }
            Resolution::Unmatched => panic!("/ should resolve"),
        }
    }

    #[test]
    fn test_app_routes_deferred_views() {
        let routes = app_routes();
        for (path, expected) in [
            ("/login", ViewId::Login),
            ("/register", ViewId::Register),
            ("/qa-system", ViewId::QASystem),
            ("/tools", ViewId::Tools),
            ("/projects", ViewId::Projects),
            ("/profile", ViewId::Profile),
        ] {
            match routes.resolve(path) {
                Resolution::View { id, redirects, .. } => {
                    assert_eq!(id, expected);
                    assert_eq!(redirects, 0);
                }
                Resolution::Unmatched => panic!("{path} should resolve"),
            }
            assert!(routes.is_loaded(expected));
        }
    }

    #[test]
    fn test_app_routes_policies() {
        let routes = app_routes();
        assert!(routes.is_loaded(ViewId::LearningCenter));

        let policies: Vec<_> = routes
            .routes()
            .filter_map(|e| match &e.target {
                Target::View { id, policy, .. } => Some((*id, *policy)),
                Target::Redirect(_) => None,
            })
            .collect();
        assert_eq!(policies.len(), 7);
        for (id, policy) in policies {
            let expected = if id == ViewId::LearningCenter {
                LoadPolicy::Eager
            } else {
                LoadPolicy::Deferred
            };
            assert_eq!(policy, expected, "{id:?}");
        }
    }

    #[test]
    fn test_app_routes_paths_are_unique() {
        let paths: Vec<_> = app_routes().routes().map(|e| e.path).collect();
        let unique: HashSet<_> = paths.iter().collect();
        assert_eq!(paths.len(), 8);
        assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn test_app_routes_names() {
        let routes = app_routes();
        assert_eq!(routes.path_for("login"), Some("/login"));
        assert_eq!(routes.path_for("qa-system"), Some("/qa-system"));
        assert_eq!(routes.path_for("missing"), None);
    }

    #[test]
    fn test_path_of_names_used_by_views() {
        for name in ["login", "register", "learning-center", "profile"] {
            let path = path_of(name);
            assert_eq!(app_routes().path_for(name), Some(path));
            assert!(matches!(app_routes().resolve(path), Resolution::View { .. }));
        }
        assert_eq!(path_of("missing"), "/");
    }

    #[test]
    fn test_unmatched_and_normalized_paths() {
        let routes = app_routes();
        assert_eq!(routes.resolve("/nope"), Resolution::Unmatched);
        assert!(matches!(
            routes.resolve("/tools/?tab=all"),
            Resolution::View { id: ViewId::Tools, .. }
        ));
        assert!(matches!(
            routes.resolve("/#top"),
            Resolution::View { id: ViewId::LearningCenter, redirects: 1, .. }
        ));
    }

    #[test]
    fn test_deferred_factory_runs_once() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn load() -> &'static str {
            CALLS.fetch_add(1, Ordering::SeqCst);
            "qa"
        }

        let routes =
            table(vec![RouteEntry::deferred("/qa", "qa", ViewId::QASystem, load)]).unwrap();
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
        assert!(!routes.is_loaded(ViewId::QASystem));

        for _ in 0..3 {
            assert!(matches!(routes.resolve("/qa"), Resolution::View { view: &"qa", .. }));
        }
        assert_eq!(routes.view(ViewId::QASystem), Some(&"qa"));
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_eager_factory_runs_at_build() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn load() -> &'static str {
            CALLS.fetch_add(1, Ordering::SeqCst);
            "home"
        }

        let routes = table(vec![RouteEntry::eager(
            "/home",
            "home",
            ViewId::LearningCenter,
            load,
        )])
        .unwrap();
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
        assert!(routes.is_loaded(ViewId::LearningCenter));
        routes.resolve("/home");
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rejects_duplicate_path() {
        let err = table(vec![
            RouteEntry::deferred("/a", "a", ViewId::Tools, || "a"),
            RouteEntry::deferred("/a", "b", ViewId::Projects, || "b"),
        ])
        .err();
        assert_eq!(err, Some(RouteError::DuplicatePath("/a")));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        let err = table(vec![
            RouteEntry::deferred("/a", "same", ViewId::Tools, || "a"),
            RouteEntry::deferred("/b", "same", ViewId::Projects, || "b"),
        ])
        .err();
        assert_eq!(err, Some(RouteError::DuplicateName("same")));
    }

    #[test]
    fn test_rejects_dangling_redirect() {
        let err = table(vec![RouteEntry::redirect("/", "/gone")]).err();
        assert_eq!(
            err,
            Some(RouteError::UnknownRedirectTarget { from: "/", to: "/gone" })
        );
    }

    #[test]
    fn test_rejects_redirect_cycle() {
        let err = table(vec![
            RouteEntry::redirect("/a", "/b"),
            RouteEntry::redirect("/b", "/a"),
        ])
        .err();
        assert_eq!(err, Some(RouteError::RedirectCycle("/a")));
    }

    #[test]
    fn test_follows_redirect_chain() {
        let routes = table(vec![
            RouteEntry::redirect("/", "/old"),
            RouteEntry::redirect("/old", "/new"),
            RouteEntry::deferred("/new", "new", ViewId::Projects, || "new"),
        ])
        .unwrap();
        assert!(matches!(
            routes.resolve("/"),
            Resolution::View { id: ViewId::Projects, redirects: 2, .. }
        ));
    }
}
