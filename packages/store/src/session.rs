//! # Session store: who is logged in, mirrored to a key-value store
//!
//! [`SessionStore`] owns the application's [`SessionState`] and keeps it in
//! sync with a single key of a [`KeyValueStore`], so a session survives a page
//! reload.
//!
//! ## [`KeyValueStore`] trait
//!
//! A synchronous string-to-string interface with three methods: `get_item`,
//! `set_item` and `remove_item`. Implementations live in sibling modules
//! ([`crate::memory`], [`crate::file_store`], and `local_storage` on the web).
//!
//! ## Operations
//!
//! | Method | State | Store |
//! |--------|-------|-------|
//! | [`login`](SessionStore::login) | `LoggedIn(user)` | writes the user as JSON |
//! | [`logout`](SessionStore::logout) | `LoggedOut` | removes the key |
//! | [`init_user`](SessionStore::init_user) | `LoggedIn(user)` if valid user stored | read only |
//!
//! ## Error handling
//!
//! `login` and `logout` always apply the in-memory transition first, then
//! return any storage or encoding fault to the caller. `init_user` never
//! fails: a stored value that is not a valid user, or a store that cannot be
//! read, is reported once to the [`Diagnostics`] channel and the state is left
//! as it was.

use crate::config::SessionConfig;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::{SessionError, StorageError};
use crate::models::{SessionState, UserInfo};

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Owner of the current [`SessionState`] and of its persisted key.
#[derive(Debug)]
pub struct SessionStore<S, D = TracingDiagnostics> {
    storage: S,
    key: String,
    state: SessionState,
    diagnostics: D,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create a logged-out store using the default key.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, &SessionConfig::default())
    }

    /// Create a logged-out store using the configured key.
    pub fn with_config(storage: S, config: &SessionConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
            state: SessionState::LoggedOut,
            diagnostics: TracingDiagnostics,
        }
    }
}

impl<S: KeyValueStore, D: Diagnostics> SessionStore<S, D> {
    /// Replace the diagnostic channel.
    pub fn with_diagnostics<D2: Diagnostics>(self, diagnostics: D2) -> SessionStore<S, D2> {
        SessionStore {
            storage: self.storage,
            key: self.key,
            state: self.state,
            diagnostics,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&UserInfo> {
        self.state.current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Log `user` in and persist it.
    ///
    /// An invalid user is rejected without touching state or storage. For a
    /// valid user the session is `LoggedIn` when this returns, even if
    /// persisting failed.
    pub fn login(&mut self, user: UserInfo) -> Result<(), SessionError> {
        user.validate()?;
        let encoded = user.to_json();
        tracing::debug!(user_id = %user.id, "logging in");
        self.state = SessionState::LoggedIn(user);

        let persisted = encoded
            .map_err(SessionError::from)
            .and_then(|json| {
                self.storage
                    .set_item(&self.key, &json)
                    .map_err(SessionError::from)
            });
        if let Err(e) = &persisted {
            tracing::warn!(key = %self.key, "session not persisted: {e}");
        }
        persisted
    }

    /// Log out and forget the persisted user. Calling this while logged out
    /// is a no-op apart from the key removal.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        if let SessionState::LoggedIn(user) = &self.state {
            tracing::debug!(user_id = %user.id, "logging out");
        }
        self.state = SessionState::LoggedOut;

        self.storage.remove_item(&self.key).map_err(|e| {
            tracing::warn!(key = %self.key, "persisted session not removed: {e}");
            SessionError::from(e)
        })
    }

    /// Restore the session from storage, if a valid one is stored.
    pub fn init_user(&mut self) {
        let saved = match self.storage.get_item(&self.key) {
            Ok(Some(saved)) => saved,
            Ok(None) => return,
            Err(e) => {
                self.diagnostics
                    .report("session_read_failed", &format!("Failed to read user info: {e}"));
                return;
            }
        };

        let restored = UserInfo::from_json(&saved)
            .map_err(SessionError::from)
            .and_then(|user| user.validate().map(|()| user));
        match restored {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "session restored");
                self.state = SessionState::LoggedIn(user);
            }
            Err(e) => {
                self.diagnostics
                    .report("session_parse_failed", &format!("Failed to parse user info: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;
    use crate::memory::MemoryStore;

    /// A store whose every operation fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("broken".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("broken".to_string()))
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("broken".to_string()))
        }
    }

    fn alice() -> UserInfo {
        UserInfo::new("u-1", "alice")
            .with_avatar("https://cdn.example.com/a.png")
            .with_email("alice@example.com")
    }

    fn recording(
        store: MemoryStore,
    ) -> (SessionStore<MemoryStore, RecordingDiagnostics>, RecordingDiagnostics) {
        let diagnostics = RecordingDiagnostics::new();
        let session = SessionStore::new(store).with_diagnostics(diagnostics.clone());
        (session, diagnostics)
    }

    #[test]
    fn test_starts_logged_out() {
        let session = SessionStore::new(MemoryStore::new());
        assert_eq!(session.state(), &SessionState::LoggedOut);
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
        assert_eq!(session.storage_key(), "userInfo");
    }

    #[test]
    fn test_login_sets_state_and_persists() {
        let store = MemoryStore::new();
        let mut session = SessionStore::new(store.clone());

        session.login(alice()).unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.current_user(), Some(&alice()));
        let saved = store.get_item("userInfo").unwrap().unwrap();
        assert_eq!(UserInfo::from_json(&saved).unwrap(), alice());
    }

    #[test]
    fn test_login_replaces_current_user() {
        let store = MemoryStore::new();
        let mut session = SessionStore::new(store.clone());
        session.login(alice()).unwrap();

        let bob = UserInfo::new("u-2", "bob");
        session.login(bob.clone()).unwrap();

        assert_eq!(session.current_user(), Some(&bob));
        let saved = store.get_item("userInfo").unwrap().unwrap();
        assert_eq!(UserInfo::from_json(&saved).unwrap(), bob);
    }

    #[test]
    fn test_login_rejects_invalid_user() {
        let store = MemoryStore::new();
        let mut session = SessionStore::new(store.clone());

        let err = session.login(UserInfo::new("", "nobody")).unwrap_err();
        assert!(matches!(err, SessionError::InvalidUser(_)));
        let err = session.login(UserInfo::new("u-3", "")).unwrap_err();
        assert!(matches!(err, SessionError::InvalidUser(_)));

        assert_eq!(session.state(), &SessionState::LoggedOut);
        assert!(store.is_empty());
    }

    #[test]
    fn test_login_surfaces_storage_failure_but_stays_logged_in() {
        let mut session = SessionStore::new(BrokenStore);

        let err = session.login(alice()).unwrap_err();

        assert!(matches!(err, SessionError::Storage(StorageError::Unavailable(_))));
        assert!(session.is_authenticated());
        assert_eq!(session.current_user(), Some(&alice()));
    }

    #[test]
    fn test_logout_clears_state_and_key() {
        let store = MemoryStore::new();
        let mut session = SessionStore::new(store.clone());
        session.login(alice()).unwrap();

        session.logout().unwrap();

        assert_eq!(session.state(), &SessionState::LoggedOut);
        assert_eq!(store.get_item("userInfo").unwrap(), None);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let store = MemoryStore::new();
        let mut session = SessionStore::new(store.clone());

        session.logout().unwrap();
        session.logout().unwrap();

        assert_eq!(session.state(), &SessionState::LoggedOut);
        assert!(store.is_empty());
    }

    #[test]
    fn test_logout_surfaces_storage_failure_but_clears_state() {
        let mut session = SessionStore::new(BrokenStore);
        let _ = session.login(alice());

        assert!(session.logout().is_err());
        assert_eq!(session.state(), &SessionState::LoggedOut);
    }

    #[test]
    fn test_init_user_without_saved_session() {
        let (mut session, diagnostics) = recording(MemoryStore::new());

        session.init_user();

        assert_eq!(session.state(), &SessionState::LoggedOut);
        assert!(diagnostics.reports().is_empty());
    }

    #[test]
    fn test_init_user_restores_saved_session() {
        let store = MemoryStore::new();
        SessionStore::new(store.clone()).login(alice()).unwrap();

        // Simulate a page reload: a fresh store over the same storage
        let (mut session, diagnostics) = recording(store.clone());
        session.init_user();

        assert!(session.is_authenticated());
        assert_eq!(session.current_user(), Some(&alice()));
        assert!(diagnostics.reports().is_empty());
        // Restoring never rewrites the stored value
        assert_eq!(store.get_item("userInfo").unwrap().unwrap(), alice().to_json().unwrap());
    }

    #[test]
    fn test_init_user_reports_malformed_session_once() {
        let store = MemoryStore::new();
        store.set_item("userInfo", "{not json").unwrap();
        let (mut session, diagnostics) = recording(store.clone());

        session.init_user();

        assert_eq!(session.state(), &SessionState::LoggedOut);
        let reports = diagnostics.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].event, "session_parse_failed");
        // The corrupt value is left in place
        assert_eq!(store.get_item("userInfo").unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_init_user_treats_empty_fields_as_malformed() {
        let store = MemoryStore::new();
        store.set_item("userInfo", r#"{"id":"","username":"ghost"}"#).unwrap();
        let (mut session, diagnostics) = recording(store);

        session.init_user();

        assert!(!session.is_authenticated());
        assert_eq!(diagnostics.reports().len(), 1);
    }

    #[test]
    fn test_init_user_failure_keeps_prior_state() {
        let store = MemoryStore::new();
        let (mut session, diagnostics) = recording(store.clone());
        session.login(alice()).unwrap();
        store.set_item("userInfo", "[]").unwrap();

        session.init_user();

        assert_eq!(session.current_user(), Some(&alice()));
        assert_eq!(diagnostics.reports().len(), 1);
    }

    #[test]
    fn test_init_user_reports_unreadable_store() {
        let diagnostics = RecordingDiagnostics::new();
        let mut session = SessionStore::new(BrokenStore).with_diagnostics(diagnostics.clone());

        session.init_user();

        assert!(!session.is_authenticated());
        let reports = diagnostics.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].event, "session_read_failed");
    }

    #[test]
    fn test_configured_storage_key() {
        let store = MemoryStore::new();
        let config = SessionConfig {
            storage_key: "afang.session".to_string(),
        };
        let mut session = SessionStore::with_config(store.clone(), &config);

        session.login(alice()).unwrap();

        assert_eq!(session.storage_key(), "afang.session");
        assert!(store.get_item("afang.session").unwrap().is_some());
        assert_eq!(store.get_item("userInfo").unwrap(), None);
    }
}
