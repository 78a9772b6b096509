//! Persistent snapshot store.
//!
//! One store owns one snapshot (the lists, or the settings) under one storage
//! key. Storage failures are logged and masked: loading falls back to the
//! default snapshot and a failed write leaves the in-memory snapshot in place.

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::store::backend::StorageBackend;
use crate::store::debounce::Debouncer;

/// A value that can live in a [`Store`].
pub trait Snapshot: Clone + Default + Serialize + DeserializeOwned + Send + 'static {}

impl<T> Snapshot for T where T: Clone + Default + Serialize + DeserializeOwned + Send + 'static {}

type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Shared handle to a persisted snapshot. Cloning is cheap.
pub struct Store<T: Snapshot> {
    inner: Arc<StoreInner<T>>,
}

struct StoreInner<T> {
    key: String,
    backend: Arc<dyn StorageBackend>,
    snapshot: Mutex<T>,
    listeners: Mutex<Vec<Listener<T>>>,
    // Serializes write + notify so saves land in the order they were made.
    write_lock: Mutex<()>,
}

impl<T: Snapshot> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Snapshot> Store<T> {
    /// Load the snapshot stored under `key`.
    ///
    /// Falls back to `T::default()` when nothing is stored or the stored text
    /// does not parse. Never fails.
    pub fn load(key: impl Into<String>, backend: Arc<dyn StorageBackend>) -> Self {
        let key = key.into();
        let snapshot = match backend.get_item(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    tracing::error!(key = %key, error = %e, "Failed to parse stored snapshot");
                    T::default()
                }
            },
            Ok(None) => {
                tracing::debug!(key = %key, "No stored snapshot, using defaults");
                T::default()
            }
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Failed to read stored snapshot");
                T::default()
            }
        };

        Self {
            inner: Arc::new(StoreInner {
                key,
                backend,
                snapshot: Mutex::new(snapshot),
                listeners: Mutex::new(Vec::new()),
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Copy of the current snapshot. Edit it and hand it back via
    /// [`Store::update`] or a [`DebouncedStore`].
    pub fn get(&self) -> T {
        self.inner.snapshot.lock().clone()
    }

    /// Replace the snapshot, persist it, then notify every subscriber.
    pub fn update(&self, new_snapshot: T) {
        let _guard = self.inner.write_lock.lock();
        *self.inner.snapshot.lock() = new_snapshot.clone();
        self.save_and_notify(&new_snapshot);
    }

    /// Replace the in-memory snapshot without persisting or notifying.
    pub fn stage(&self, new_snapshot: T) {
        *self.inner.snapshot.lock() = new_snapshot;
    }

    /// Persist the current in-memory snapshot and notify subscribers.
    pub fn commit(&self) {
        let _guard = self.inner.write_lock.lock();
        let snapshot = self.get();
        self.save_and_notify(&snapshot);
    }

    /// Register a listener called after every save.
    ///
    /// Listeners run on the thread that saved; they must not update this
    /// store from inside the callback.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.inner.listeners.lock().push(Box::new(listener));
    }

    /// Debounced front for this store with the given quiet window.
    pub fn debounced(&self, window: Duration) -> DebouncedStore<T> {
        DebouncedStore::new(self.clone(), window)
    }

    fn save_and_notify(&self, snapshot: &T) {
        match serde_json::to_string(snapshot) {
            Ok(raw) => {
                if let Err(e) = self.inner.backend.set_item(&self.inner.key, &raw) {
                    tracing::error!(key = %self.inner.key, error = %e, "Failed to save snapshot");
                } else {
                    tracing::debug!(key = %self.inner.key, bytes = raw.len(), "Snapshot saved");
                }
            }
            Err(e) => {
                tracing::error!(key = %self.inner.key, error = %e, "Failed to serialize snapshot");
            }
        }

        for listener in self.inner.listeners.lock().iter() {
            listener(snapshot);
        }
    }
}

/// Debounced updates over a [`Store`].
///
/// `update` stages the snapshot right away, so later reads see it, and
/// schedules one commit at the end of the quiet window. The commit writes
/// whatever is current at that point, so an immediate save made in between is
/// never overwritten by an older snapshot.
pub struct DebouncedStore<T: Snapshot> {
    store: Store<T>,
    debouncer: Debouncer<()>,
}

impl<T: Snapshot> DebouncedStore<T> {
    pub fn new(store: Store<T>, window: Duration) -> Self {
        let sink_store = store.clone();
        let debouncer = Debouncer::spawn(window, move |()| sink_store.commit());
        Self { store, debouncer }
    }

    pub fn update(&self, new_snapshot: T) {
        self.store.stage(new_snapshot);
        self.debouncer.call(());
    }

    /// Commit a pending update now.
    pub fn flush(&self) {
        self.debouncer.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Settings, ShoppingList, State, Theme};
    use crate::store::backend::MemoryStorage;

    const KEY: &str = "shopping-list-state";

    fn memory() -> Arc<MemoryStorage> {
        Arc::new(MemoryStorage::new())
    }

    #[test]
    fn load_missing_key_gives_default() {
        let store: Store<State> = Store::load(KEY, memory());
        assert_eq!(store.get(), State::default());
    }

    #[test]
    fn load_corrupt_value_gives_default() {
        let backend = Arc::new(MemoryStorage::new().with_item(KEY, "{not json"));
        let store: Store<State> = Store::load(KEY, backend);
        assert_eq!(store.get(), State::default());
    }

    #[test]
    fn update_persists_and_notifies() {
        let backend = memory();
        let store: Store<State> = Store::load(KEY, backend.clone());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_listener = Arc::clone(&seen);
        store.subscribe(move |state: &State| seen_listener.lock().push(state.clone()));

        let mut state = store.get();
        state.add_list(ShoppingList::new("Groceries"));
        store.update(state.clone());

        assert_eq!(store.get(), state);
        assert_eq!(*seen.lock(), vec![state.clone()]);
        let reloaded: Store<State> = Store::load(KEY, backend);
        assert_eq!(reloaded.get(), state);
    }

    #[test]
    fn failed_write_still_updates_memory_and_notifies() {
        let backend = memory();
        backend.set_reject_writes(true);
        let store: Store<Settings> = Store::load("shopping-list-settings", backend.clone());
        let notified = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&notified);
        store.subscribe(move |_| *counter.lock() += 1);

        store.update(Settings {
            theme: Theme::Winter,
        });

        assert_eq!(store.get().theme, Theme::Winter);
        assert_eq!(*notified.lock(), 1);
        assert!(backend.raw("shopping-list-settings").is_none());
    }

    #[test]
    fn stage_does_not_persist() {
        let backend = memory();
        let store: Store<State> = Store::load(KEY, backend.clone());
        let mut state = store.get();
        state.add_list(ShoppingList::default());
        store.stage(state.clone());

        assert_eq!(store.get(), state);
        assert_eq!(backend.write_count(KEY), 0);

        store.commit();
        assert_eq!(backend.write_count(KEY), 1);
    }

    #[test]
    fn debounced_flush_commits_current_snapshot() {
        let backend = memory();
        let store: Store<State> = Store::load(KEY, backend.clone());
        let debounced = store.debounced(Duration::from_secs(30));

        for name in ["a", "b", "c"] {
            let mut state = store.get();
            state.add_list(ShoppingList::new(name));
            debounced.update(state);
        }
        assert_eq!(backend.write_count(KEY), 0);

        debounced.flush();
        assert_eq!(backend.write_count(KEY), 1);
        let saved: State = serde_json::from_str(&backend.raw(KEY).unwrap()).unwrap();
        assert_eq!(saved.shopping_lists.len(), 3);
    }
}
