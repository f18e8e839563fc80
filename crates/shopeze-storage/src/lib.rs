//! Typed key-value storage for Shopeze.
//!
//! Flat string keys, JSON string values, write-through semantics. Two
//! backends are provided: an in-memory map for tests and in-process
//! use, and a file-per-key directory for the CLI. A second store over
//! its own directory plays the session-scoped role.
//!
//! Reads that fail or hold malformed data degrade to `None`; callers
//! treat that as an empty record and carry on.
//!
//! # Example
//!
//! ```rust
//! use shopeze_storage::{keys, Store};
//!
//! let store = Store::in_memory();
//! store.set(keys::CART_KEY, &vec![1, 2, 3]).unwrap();
//! let cart: Option<Vec<i32>> = store.get(keys::CART_KEY);
//! assert_eq!(cart, Some(vec![1, 2, 3]));
//! ```

mod backend;
mod error;
pub mod keys;
mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StorageError;
pub use store::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{keys, FileBackend, MemoryBackend, StorageBackend, StorageError, Store};
}
