//! # Client configuration: `afang.toml`
//!
//! ```toml
//! [session]
//! storage_key = "userInfo"   # key holding the serialized user
//!
//! [storage]
//! app_dir = "afang"          # subdirectory of the platform data dir (native only)
//! ```
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `afang.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Session persistence configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key under which the logged-in user is persisted.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "userInfo".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

/// Native storage location configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory name under the platform data directory.
    #[serde(default = "default_app_dir")]
    pub app_dir: String,
}

fn default_app_dir() -> String {
    "afang".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            app_dir: default_app_dir(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "afang.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
