//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use shoplist::model::{ShoppingList, ShoppingListItem, State};
use shoplist::mutators::ListMutators;
use shoplist::store::{FileStorage, MemoryStorage, StorageBackend, Store, STATE_KEY};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Debounce window short enough for tests to wait it out.
pub const TEST_DEBOUNCE: Duration = Duration::from_millis(40);

/// Mutators over an in-memory backend, plus the backend for assertions.
pub fn memory_mutators() -> (ListMutators, Arc<MemoryStorage>) {
    let backend = Arc::new(MemoryStorage::new());
    let store = Store::load(STATE_KEY, backend.clone() as Arc<dyn StorageBackend>);
    (ListMutators::new(store, TEST_DEBOUNCE), backend)
}

/// File storage in a fresh temporary directory.
pub fn temp_storage() -> (TempDir, Arc<FileStorage>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Arc::new(FileStorage::new(dir.path()));
    (dir, storage)
}

pub fn item(name: &str, quantity: u32) -> ShoppingListItem {
    ShoppingListItem::new(name, quantity, false)
}

pub fn list(name: &str, items: &[&str]) -> ShoppingList {
    ShoppingList::with_items(name, items.iter().map(|n| item(n, 1)).collect())
}

pub fn item_names(state: &State) -> Vec<String> {
    state
        .active()
        .map(|l| l.items.iter().map(|i| i.name.clone()).collect())
        .unwrap_or_default()
}

/// Wait for a debounced save to land.
pub fn settle() {
    std::thread::sleep(TEST_DEBOUNCE * 5);
}
