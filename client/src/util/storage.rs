//! Key-value persistence for the browser session record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store reads and writes three independent entries (`token`,
//! `user`, `token_timestamp`) through the `KeyValueStore` trait. In the
//! browser this is `localStorage`; tests and the SSR pass use `MemoryStore`.
//!
//! TRADE-OFFS
//! ==========
//! `BrowserStore` holds no `web_sys::Storage` handle and re-resolves
//! `localStorage` on each call. That keeps it `Send + Sync` so it can live
//! inside reactive context values, at the cost of a window lookup per access.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Opaque bearer token returned by the login endpoint.
pub const TOKEN_KEY: &str = "token";
/// JSON-serialized `User` record.
pub const USER_KEY: &str = "user";
/// Decimal string of the login time in epoch milliseconds.
pub const TOKEN_TIMESTAMP_KEY: &str = "token_timestamp";

/// Every key that belongs to the persisted session record.
pub const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, USER_KEY, TOKEN_TIMESTAMP_KEY];

/// Errors produced by storage access.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No persistent storage is reachable (SSR, private mode, disabled by policy).
    #[error("browser storage unavailable")]
    Unavailable,

    /// The backing store refused a write (quota, security error).
    #[error("storage write failed for key {key}")]
    Write { key: String },
}

/// Minimal string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Missing keys are ignored.
    fn remove(&self, key: &str);
}

/// Shared handle to a key-value store.
pub type StoreHandle = Arc<dyn KeyValueStore>;

/// Whether a storage change on `key` can affect the session record. `None`
/// is what a `localStorage.clear()` in another tab reports.
#[must_use]
pub fn touches_session(key: Option<&str>) -> bool {
    key.is_none_or(|key| SESSION_KEYS.contains(&key))
}

/// Remove every session key from `store`.
pub fn clear_session_keys(store: &dyn KeyValueStore) {
    for key in SESSION_KEYS {
        store.remove(key);
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-process store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// `window.localStorage` accessor. Requires a browser environment.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStore {
    _private: (),
}

impl BrowserStore {
    /// Probe `localStorage` and return an accessor if it is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] outside the browser or when the
    /// browser denies storage access.
    pub fn open() -> Result<Self, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage().map(|_| Self { _private: () }).ok_or(StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::Write { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}
