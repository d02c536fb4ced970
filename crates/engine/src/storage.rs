//! Key-value persistence for the cart.
//!
//! The cart is persisted as a JSON array of line objects under a single
//! fixed key, mirroring browser local storage. Persistence is best-effort:
//! a missing or malformed value simply yields an empty cart on load.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cart::Cart;

/// The fixed key the serialized cart lives under.
pub const CART_STORAGE_KEY: &str = "cart";

/// Errors at the storage seam.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key is not usable as a storage name.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// The value could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A string key-value store, the local-storage analog.
///
/// Implementations own the persisted copy of the cart; the engine is their
/// only writer.
pub trait KeyValueStore {
    /// Read the value for a key. Absent keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the value for a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Deleting an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store. State is lost on drop, which resets the cart to empty.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.remove(key);
        Ok(())
    }
}

/// File-backed store: each key maps to `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys become file names; reject anything that could escape the dir.
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Load the persisted cart, defaulting to empty.
///
/// A missing key yields an empty cart silently; an unreadable store or a
/// malformed value also yields an empty cart, with a warning.
pub fn load_cart(store: &impl KeyValueStore) -> Cart {
    let value = match store.get(CART_STORAGE_KEY) {
        Ok(Some(value)) => value,
        Ok(None) => return Cart::new(),
        Err(e) => {
            tracing::warn!("Failed to read persisted cart: {e}");
            return Cart::new();
        }
    };

    serde_json::from_str(&value).unwrap_or_else(|e| {
        tracing::warn!("Malformed persisted cart, starting empty: {e}");
        Cart::new()
    })
}

/// Persist the cart under [`CART_STORAGE_KEY`].
///
/// # Errors
///
/// Returns an error if serialization or the store write fails.
pub fn save_cart(store: &mut impl KeyValueStore, cart: &Cart) -> Result<(), StorageError> {
    let value = serde_json::to_string(cart)?;
    store.set(CART_STORAGE_KEY, &value)
}

/// Delete the persisted cart.
///
/// # Errors
///
/// Returns an error if the store delete fails.
pub fn clear_cart(store: &mut impl KeyValueStore) -> Result<(), StorageError> {
    store.remove(CART_STORAGE_KEY)
}
