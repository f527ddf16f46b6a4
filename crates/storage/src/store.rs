//! Origin-scoped store, per-context views and change subscriptions.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::backend::{MemoryBackend, StorageBackend, UnavailableBackend};
use crate::error::StorageError;
use crate::file::FileBackend;

/// Identifies one execution context (a tab, a window, a process view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

impl std::fmt::Display for ContextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ctx-{}", self.0)
    }
}

type Callback = Arc<dyn Fn(&str) + Send + Sync>;

struct Subscriber {
    id: u64,
    key: String,
    context: ContextId,
    callback: Callback,
}

struct StoreInner {
    backend: Box<dyn StorageBackend>,
    subscribers: Mutex<Vec<Subscriber>>,
    next_context: AtomicU64,
    next_subscriber: AtomicU64,
}

// =============================================================================
// Store
// =============================================================================

/// Origin-scoped storage shared by every open view.
///
/// Cheaply cloneable via `Arc`. Open one [`StoreView`] per execution context.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("available", &self.is_available())
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Wrap a backend.
    #[must_use]
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                backend: Box::new(backend),
                subscribers: Mutex::new(Vec::new()),
                next_context: AtomicU64::new(1),
                next_subscriber: AtomicU64::new(1),
            }),
        }
    }

    /// In-memory store.
    #[must_use]
    pub fn memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Store without a storage facility.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(UnavailableBackend)
    }

    /// File-backed store rooted at `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn file(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        Ok(Self::new(FileBackend::open(dir)?))
    }

    /// Whether the underlying host has durable storage.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.inner.backend.is_available()
    }

    /// Open a new execution context on this store.
    #[must_use]
    pub fn open_view(&self) -> StoreView {
        let id = self.inner.next_context.fetch_add(1, Ordering::Relaxed);
        StoreView {
            store: self.clone(),
            context: ContextId(id),
        }
    }

    /// Callbacks to run after `writer` changed `key`.
    fn listeners(&self, key: &str, writer: ContextId) -> Vec<Callback> {
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|s| s.key == key && s.context != writer)
            .map(|s| Arc::clone(&s.callback))
            .collect()
    }
}

// =============================================================================
// StoreView
// =============================================================================

/// One execution context's handle onto a [`Store`].
#[derive(Clone)]
pub struct StoreView {
    store: Store,
    context: ContextId,
}

impl std::fmt::Debug for StoreView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreView")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl StoreView {
    /// This view's context id.
    #[must_use]
    pub const fn context(&self) -> ContextId {
        self.context
    }

    /// The store this view belongs to.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Read and deserialize the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored text does not
    /// deserialize as `T`. A missing key is `Ok(None)`.
    pub fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(text) = self.store.inner.backend.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StorageError::Deserialize {
                key: key.to_string(),
                source,
            })
    }

    /// Read the value under `key`, or `fallback` if it is missing or unreadable.
    ///
    /// Never fails; unreadable values are logged.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_read(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(e) => {
                warn!(key, context = %self.context, error = %e, "Error reading stored value, using fallback");
                fallback
            }
        }
    }

    /// Serialize and store `value` under `key`, then notify other views.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails. The
    /// previously stored value is left unchanged in that case.
    pub fn try_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        if !self.store.is_available() {
            return Ok(());
        }

        let text = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.inner.backend.set(key, &text)?;

        let listeners = self.store.listeners(key, self.context);
        if !listeners.is_empty() {
            debug!(key, context = %self.context, listeners = listeners.len(), "Broadcasting storage change");
        }
        for callback in listeners {
            callback(&text);
        }
        Ok(())
    }

    /// Best-effort write; failures are logged and otherwise ignored.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.try_write(key, value) {
            warn!(key, context = %self.context, error = %e, "Error writing stored value");
        }
    }

    /// Delete the value under `key`. Removal is not broadcast.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.store.inner.backend.remove(key) {
            warn!(key, context = %self.context, error = %e, "Error removing stored value");
        }
    }

    /// Invoke `on_change` whenever another view writes `key`.
    ///
    /// The returned guard unsubscribes when dropped. Values that do not
    /// deserialize as `T` are logged and skipped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<T, F>(&self, key: &str, on_change: F) -> Subscription
    where
        T: DeserializeOwned + 'static,
        F: Fn(T) + Send + Sync + 'static,
    {
        if !self.store.is_available() {
            return Subscription::inert();
        }

        let owned_key = key.to_string();
        let callback: Callback = Arc::new(move |text: &str| {
            match serde_json::from_str::<T>(text) {
                Ok(value) => on_change(value),
                Err(e) => {
                    warn!(key = %owned_key, error = %e, "Ignoring undecodable storage change");
                }
            }
        });

        let id = self.store.inner.next_subscriber.fetch_add(1, Ordering::Relaxed);
        self.store
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Subscriber {
                id,
                key: key.to_string(),
                context: self.context,
                callback,
            });

        Subscription {
            store: Arc::downgrade(&self.store.inner),
            id: Some(id),
        }
    }
}

// =============================================================================
// Subscription
// =============================================================================

/// Guard for a change subscription. Unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription {
    store: Weak<StoreInner>,
    id: Option<u64>,
}

impl Subscription {
    fn inert() -> Self {
        Self {
            store: Weak::new(),
            id: None,
        }
    }

    /// Whether this subscription is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.id.is_some() && self.store.strong_count() > 0
    }

    /// Stop receiving changes.
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(inner) = self.store.upgrade() {
            inner
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|s| s.id != id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}
