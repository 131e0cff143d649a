// ============================================================================
// STORAGE PORT - Durable key/value persistence behind a swappable backend
// ============================================================================
// The session store serializes on every mutation, so the backend is a port:
// `LocalStorage` in the browser, `MemoryStorage` in native tests.
// ============================================================================

use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("serialization error: {0}")]
    Serde(String),
}

/// Durable string key/value store.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Serialize `value` as JSON under `key`.
pub fn save_json<T: Serialize>(
    storage: &dyn StorageBackend,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serde(e.to_string()))?;
    storage.set(key, &json)
}

/// Load and deserialize `key`; absent or corrupt blobs read as `None`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn StorageBackend, key: &str) -> Option<T> {
    let json = storage.get(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Browser localStorage backend.
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Rc<Self> {
        Rc::new(Self)
    }

    fn raw(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.raw()?
            .get_item(key)
            .map_err(|_| StorageError::Backend("error reading localStorage".to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.raw()?
            .set_item(key, value)
            .map_err(|_| StorageError::Backend("error writing localStorage".to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.raw()?
            .remove_item(key)
            .map_err(|_| StorageError::Backend("error removing from localStorage".to_string()))
    }
}

/// In-memory backend for tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
