//! Demo Deck Storage - Persistent key-value store adapter.
//!
//! Each logical collection (tasks, cart) lives under one string key as a JSON
//! blob. The adapter never fails loudly: reads fall back to a caller-supplied
//! default and writes are best-effort, with every recovered fault logged.
//!
//! # Architecture
//!
//! - [`StorageBackend`] - raw string storage (memory, files, or none at all)
//! - [`Store`] - origin-scoped handle shared by every open view
//! - [`StoreView`] - one execution context; writes notify the *other* views
//! - [`PersistentSlot`] - typed handle to a single key
//!
//! # Example
//!
//! ```rust
//! use demo_deck_storage::Store;
//!
//! let store = Store::memory();
//! let view = store.open_view();
//!
//! view.write("greeting", &vec!["hello".to_string()]);
//! let back: Vec<String> = view.read("greeting", Vec::new());
//! assert_eq!(back, vec!["hello".to_string()]);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod backend;
mod error;
mod file;
mod slot;
mod store;

pub use backend::{MemoryBackend, StorageBackend, UnavailableBackend};
pub use error::StorageError;
pub use file::FileBackend;
pub use slot::{PersistentSlot, RemoteUpdates};
pub use store::{ContextId, Store, StoreView, Subscription};
