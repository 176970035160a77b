//! Error types for the storage and session layers.

use thiserror::Error;

/// A fault raised by a [`crate::KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store cannot be reached (e.g. `localStorage` disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be represented by this backend.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// A fault raised by [`crate::SessionStore`] operations that surface errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid user: {0}")]
    InvalidUser(&'static str),

    #[error("failed to encode user info: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
