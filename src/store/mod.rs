//! Snapshot persistence: storage backends, the store and debounced saves.

pub mod backend;
pub mod debounce;
mod store;

pub use backend::{FileStorage, MemoryStorage, StorageBackend, StorageError};
pub use debounce::{Debouncer, PendingCall, DEFAULT_DEBOUNCE};
pub use store::{DebouncedStore, Snapshot, Store};

/// Storage key of the shopping lists snapshot.
pub const STATE_KEY: &str = "shopping-list-state";

/// Storage key of the settings snapshot.
pub const SETTINGS_KEY: &str = "shopping-list-settings";
