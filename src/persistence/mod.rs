//! Key/value persistence with fall-back-to-default semantics
//!
//! Features:
//! - JSON values under string keys
//! - Pluggable backends (memory, files on native, LocalStorage on web)
//! - Read failures and corrupt data fall back to a caller-supplied default
//! - Write failures are logged and dropped, never surfaced to the caller

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

/// Everything that can go wrong between the app and its storage
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("malformed value under {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize value for {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage quota exceeded writing {key} ({needed} bytes, {available} available)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Minimal string key/value storage, shaped after the browser Storage API
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }
}

/// JSON adapter over a [`KeyValueStore`]
#[derive(Debug, Clone, Default)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read and decode `key`. `Ok(None)` when nothing is stored.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(json) = self.store.get_item(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|source| StoreError::Malformed {
                key: key.to_string(),
                source,
            })
    }

    /// Encode and write `value` under `key`
    pub fn try_save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set_item(key, &json)
    }

    /// Load `key`, falling back to `default` when absent or unreadable
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => {
                log::info!("Loaded {} from storage", key);
                value
            }
            Ok(None) => {
                log::info!("No saved {}, using defaults", key);
                default
            }
            Err(e) => {
                log::error!("Could not load {} from storage: {}", key, e);
                default
            }
        }
    }

    /// Save `value` under `key`; failures are logged and dropped
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        match self.try_save(key, value) {
            Ok(()) => log::debug!("Saved {}", key),
            Err(e) => log::error!("Could not save {} to storage: {}", key, e),
        }
    }

    /// Remove `key`; failures are logged and dropped
    pub fn remove(&mut self, key: &str) {
        if let Err(e) = self.store.remove_item(key) {
            log::error!("Could not remove {} from storage: {}", key, e);
        }
    }

    /// Remove every key the app owns
    pub fn clear(&mut self) {
        for key in crate::consts::ALL_KEYS {
            self.remove(key);
        }
        log::info!("Saved data cleared");
    }
}
