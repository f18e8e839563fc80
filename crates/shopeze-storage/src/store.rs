//! Typed store over a raw backend.

use crate::backend::{MemoryBackend, StorageBackend};
use crate::error::StorageError;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Typed key-value store with automatic JSON serialization.
///
/// Cheap to clone; clones share the backend.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
}

impl Store {
    /// Wrap a backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// An in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Read and deserialize a value.
    ///
    /// Missing keys and malformed data both yield `None`; persisted
    /// corruption is treated as an empty record, never an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "discarding malformed storage record");
                None
            }
        }
    }

    /// Serialize and write a value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_raw(key, &raw)?;
        debug!(key, bytes = raw.len(), "storage write");
        Ok(())
    }

    /// Remove a key.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)?;
        debug!(key, "storage remove");
        Ok(())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
