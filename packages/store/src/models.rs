//! # Session models
//!
//! [`UserInfo`] is the record an authentication flow hands to
//! [`crate::SessionStore::login`]. It is persisted as a JSON object with the
//! keys `id`, `username`, `avatar` and `email`; optional fields are left out
//! when absent so the stored payload stays minimal.
//!
//! [`SessionState`] is the in-memory view of who is logged in. Being an enum,
//! it cannot express "authenticated without a user" or the reverse.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// The authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserInfo {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            avatar: None,
            email: None,
        }
    }

    /// Builder method to set the avatar URI.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Builder method to set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Check that `id` and `username` are non-empty.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.id.is_empty() {
            return Err(SessionError::InvalidUser("id must not be empty"));
        }
        if self.username.is_empty() {
            return Err(SessionError::InvalidUser("username must not be empty"));
        }
        Ok(())
    }

    /// Serialize to the stored JSON form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from the stored JSON form.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Who is currently logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(UserInfo),
}

impl SessionState {
    pub fn current_user(&self) -> Option<&UserInfo> {
        match self {
            SessionState::LoggedIn(user) => Some(user),
            SessionState::LoggedOut => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::LoggedIn(_))
    }
}
