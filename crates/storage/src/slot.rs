//! Typed handle to a single storage key.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::{StoreView, Subscription};

/// One named slot of serializable state in a [`StoreView`].
///
/// ```rust
/// use demo_deck_storage::{PersistentSlot, Store};
///
/// let view = Store::memory().open_view();
/// let slot: PersistentSlot<Vec<u32>> = PersistentSlot::new(view, "counts");
///
/// assert_eq!(slot.load(vec![0]), vec![0]);
/// slot.save(&vec![1, 2]);
/// assert_eq!(slot.load(Vec::new()), vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct PersistentSlot<T> {
    view: StoreView,
    key: String,
    _value: PhantomData<fn() -> T>,
}

impl<T> PersistentSlot<T>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    /// Bind `key` in `view`.
    #[must_use]
    pub fn new(view: StoreView, key: impl Into<String>) -> Self {
        Self {
            view,
            key: key.into(),
            _value: PhantomData,
        }
    }

    /// The storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The view this slot writes through.
    #[must_use]
    pub const fn view(&self) -> &StoreView {
        &self.view
    }

    /// Stored value, or `fallback` if missing or unreadable.
    pub fn load(&self, fallback: T) -> T {
        self.view.read(&self.key, fallback)
    }

    /// Stored value, or `None` if nothing (readable) is stored yet.
    pub fn stored(&self) -> Option<T> {
        self.view.read::<Option<T>>(&self.key, None)
    }

    /// Best-effort store of `value`.
    pub fn save(&self, value: &T) {
        self.view.write(&self.key, value);
    }

    /// Invoke `on_change` when another view writes this slot.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, on_change: F) -> Subscription
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        self.view.subscribe(&self.key, on_change)
    }

    /// Collect changes from other views, keeping only the latest.
    #[must_use]
    pub fn watch(&self) -> RemoteUpdates<T> {
        let latest = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&latest);
        let subscription = self.subscribe(move |value: T| {
            *sink.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
        });
        RemoteUpdates {
            latest,
            _subscription: subscription,
        }
    }
}

/// Latest value written to a slot by another view (last writer wins).
#[derive(Debug)]
pub struct RemoteUpdates<T> {
    latest: Arc<Mutex<Option<T>>>,
    _subscription: Subscription,
}

impl<T> RemoteUpdates<T> {
    /// Take the pending value, if another view wrote since the last call.
    pub fn take(&self) -> Option<T> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
