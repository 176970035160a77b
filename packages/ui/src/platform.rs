//! Platform key-value store constructor.
//!
//! Returns the [`store::KeyValueStore`] sessions persist to:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Native**: a directory under the platform data dir via [`store::FileStore`]

use store::StorageConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Create the platform-appropriate store.
///
/// On native builds the store lives at `<data_dir>/<app_dir>/`, falling back
/// to the working directory when the platform has no data dir.
pub fn make_store(config: &StorageConfig) -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let _ = config;
        store::LocalStorage::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = config;
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(&config.app_dir);
        store::FileStore::new(base)
    }
}
