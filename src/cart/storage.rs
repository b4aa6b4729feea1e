//! Injected persistence backends for the cart.
//!
//! The cart store does not know where its bytes live; it talks to a
//! [`StorageBackend`] that maps one string key to one opaque value. Two
//! backends ship with the crate:
//!
//! - [`MemoryStorage`]: process-local, for tests and ephemeral sessions
//! - [`FileStorage`]: one file per key under a directory, for durable carts
//!
//! The trait is synchronous on purpose: the medium it abstracts is a plain
//! key/value store, and keeping it sync keeps every cart mutation sync —
//! only network calls suspend.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying medium failed to read or write.
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded for storage.
    #[error("storage encoding failure: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backend is in an unusable state.
    #[error("storage backend unavailable: {0}")]
    Backend(String),
}

/// A key/value persistence backend.
///
/// Implementations only need to round-trip raw bytes under a key; the cart
/// store owns serialization. `get` of a never-written key returns
/// `Ok(None)`.
pub trait StorageBackend: Send + Sync {
    /// Reads the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the medium cannot be written.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;
}

/// In-memory storage backend.
///
/// # Example
///
/// ```rust
/// use storefront_sdk::{MemoryStorage, StorageBackend};
///
/// let storage = MemoryStorage::new();
/// assert!(storage.get("cart").unwrap().is_none());
///
/// storage.set("cart", b"[]").unwrap();
/// assert_eq!(storage.get("cart").unwrap().unwrap(), b"[]");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|_| StorageError::Backend("poisoned storage lock".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError::Backend("poisoned storage lock".to_string()))?;
        values.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// File-backed storage: each key becomes `{root}/{key}.json`.
///
/// The root directory is created lazily on first write. Keys are fixed
/// identifiers chosen by the application, not user input.
///
/// # Example
///
/// ```rust,no_run
/// use storefront_sdk::{FileStorage, StorageBackend};
///
/// let storage = FileStorage::new("/var/lib/my-app");
/// storage.set("storefront_cart", b"[]").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates a backend rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
