//! Key-value storage with a JSON serialization contract.
//!
//! The page-facing store (local or session storage in a browser embedding)
//! only deals in strings; typed access serializes through JSON, so any value
//! stored by [`KeyValueStoreExt::set`] can be read back by
//! [`KeyValueStoreExt::get`] with the same type.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors from typed storage access.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to serialize value: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to deserialize stored value: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// A string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Store a raw string value under `key`, replacing any existing value.
    fn set_raw(&self, key: &str, value: String);
    /// Read the raw string value stored under `key`.
    fn get_raw(&self, key: &str) -> Option<String>;
    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// Typed access over any [`KeyValueStore`]; values are stored as JSON.
pub trait KeyValueStoreExt: KeyValueStore {
    /// Serialize `value` as JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized.
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(StorageError::Serialize)?;
        self.set_raw(key, raw);
        Ok(())
    }

    /// Read and deserialize the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored value exists but is not valid JSON for
    /// the requested type.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        self.get_raw(key)
            .map(|raw| serde_json::from_str(&raw).map_err(StorageError::Deserialize))
            .transpose()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// In-memory store used as the default backing and in tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn set_raw(&self, key: &str, value: String) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value);
        }
    }

    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}
